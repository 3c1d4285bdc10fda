//! Render session: owns the current input and memoizes the derived geometry
//! against it, so repeated renders with unchanged input skip recomputation.

use crate::model::{JobPhase, RawBlueprintInput};
use crate::normalize;
use crate::render::{self, RenderOptions};
use crate::validate::{self, ValidationOutcome};
use crate::viewport::ViewportState;

pub struct RenderSession {
    input: RawBlueprintInput,
    phase: JobPhase,
    outcome: ValidationOutcome,
    options: RenderOptions,
}

impl RenderSession {
    pub fn new(options: RenderOptions) -> RenderSession {
        RenderSession {
            input: RawBlueprintInput::Absent,
            phase: JobPhase::Capturing,
            outcome: validate::validate(None),
            options,
        }
    }

    /// Replace the input. The pipeline only reruns when the new input differs
    /// from the stored one; returns whether a recomputation happened.
    pub fn set_input(&mut self, input: RawBlueprintInput) -> bool {
        if input == self.input {
            return false;
        }
        let geometry = normalize::normalize(&input);
        self.outcome = validate::validate(geometry.as_ref());
        self.input = input;
        true
    }

    pub fn set_phase(&mut self, phase: JobPhase) {
        self.phase = phase;
    }

    pub fn phase(&self) -> JobPhase {
        self.phase
    }

    pub fn outcome(&self) -> &ValidationOutcome {
        &self.outcome
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn render(&self, viewport: &ViewportState) -> String {
        render::render(&self.outcome, self.phase, viewport, &self.options)
    }
}
