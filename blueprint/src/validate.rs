//! Staged validation of canonical geometry. Stages run in order and
//! short-circuit on the first failure; every reason carries a fixed
//! title/message pair for the caller's placeholder UI.

use crate::model::{OutlineGeometry, Vertex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidReason {
    NoData,
    InsufficientEdges,
    InvalidDimensions,
    InvalidScale,
    ZeroDimensions,
    InvalidEdgeData,
}

impl InvalidReason {
    pub fn code(&self) -> &'static str {
        match self {
            InvalidReason::NoData => "no-data",
            InvalidReason::InsufficientEdges => "insufficient-edges",
            InvalidReason::InvalidDimensions => "invalid-dimensions",
            InvalidReason::InvalidScale => "invalid-scale",
            InvalidReason::ZeroDimensions => "zero-dimensions",
            InvalidReason::InvalidEdgeData => "invalid-edge-data",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            InvalidReason::NoData => "No blueprint data",
            InvalidReason::InsufficientEdges => "Not enough outline points",
            InvalidReason::InvalidDimensions => "Invalid dimensions",
            InvalidReason::InvalidScale => "Invalid scale",
            InvalidReason::ZeroDimensions => "Empty blueprint",
            InvalidReason::InvalidEdgeData => "Invalid edge data",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            InvalidReason::NoData => "This job has no blueprint outline to display yet.",
            InvalidReason::InsufficientEdges => {
                "At least two outline points are required to draw the blueprint."
            }
            InvalidReason::InvalidDimensions => {
                "The blueprint dimensions are not valid numbers."
            }
            InvalidReason::InvalidScale => "The blueprint scale must be a positive number.",
            InvalidReason::ZeroDimensions => "The blueprint has zero width or height.",
            InvalidReason::InvalidEdgeData => {
                "The outline contains corrupt coordinates and cannot be drawn."
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ValidationOutcome {
    Valid(OutlineGeometry),
    Invalid(InvalidReason),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }

    pub fn code(&self) -> &'static str {
        match self {
            ValidationOutcome::Valid(_) => "valid",
            ValidationOutcome::Invalid(reason) => reason.code(),
        }
    }
}

pub fn validate(geometry: Option<&OutlineGeometry>) -> ValidationOutcome {
    let Some(g) = geometry else {
        return ValidationOutcome::Invalid(InvalidReason::NoData);
    };
    if g.vertices.len() < 2 {
        return ValidationOutcome::Invalid(InvalidReason::InsufficientEdges);
    }
    if g.dimensions.width.is_nan() || g.dimensions.height.is_nan() {
        return ValidationOutcome::Invalid(InvalidReason::InvalidDimensions);
    }
    if g.scale.is_nan() || g.scale <= 0.0 {
        return ValidationOutcome::Invalid(InvalidReason::InvalidScale);
    }
    if g.dimensions.width <= 0.0 || g.dimensions.height <= 0.0 {
        return ValidationOutcome::Invalid(InvalidReason::ZeroDimensions);
    }
    ValidationOutcome::Valid(g.clone())
}

/// Later checkpoint run by the renderer even after structural validation
/// passed. Only NaN coordinates are rejected; infinite values pass through.
pub fn drawable_vertices(vertices: &[Vertex]) -> Vec<Vertex> {
    vertices
        .iter()
        .copied()
        .filter(|v| !v.x.is_nan() && !v.y.is_nan())
        .collect()
}
