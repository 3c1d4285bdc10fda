use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

/// Normalized blueprint outline: ordered vertices plus declared dimensions
/// and a pixels-to-physical-units scale. Derived once per input identity and
/// never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutlineGeometry {
    pub vertices: Vec<Vertex>,
    pub dimensions: Dimensions,
    pub scale: f32,
}

/// The three shapes the upstream vision service may hand us. `Canonical` is a
/// structured value that already matched the canonical geometry shape;
/// `Text` is either JSON-encoded geometry or vector markup.
#[derive(Clone, Debug, PartialEq)]
pub enum RawBlueprintInput {
    Absent,
    Canonical(OutlineGeometry),
    Text(String),
}

impl RawBlueprintInput {
    pub fn is_absent(&self) -> bool {
        match self {
            RawBlueprintInput::Absent => true,
            RawBlueprintInput::Text(s) => s.trim().is_empty(),
            RawBlueprintInput::Canonical(_) => false,
        }
    }
}

/// Upstream job lifecycle. Only `Processing` changes what this core renders:
/// it preempts validation with its own placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobPhase {
    Capturing,
    Processing,
    Complete,
    Failed,
}

impl JobPhase {
    pub fn parse(s: &str) -> Option<JobPhase> {
        match s {
            "capturing" => Some(JobPhase::Capturing),
            "processing" => Some(JobPhase::Processing),
            "complete" => Some(JobPhase::Complete),
            "failed" => Some(JobPhase::Failed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobPhase::Capturing => "capturing",
            JobPhase::Processing => "processing",
            JobPhase::Complete => "complete",
            JobPhase::Failed => "failed",
        }
    }
}
