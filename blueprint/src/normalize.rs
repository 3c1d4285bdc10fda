//! Reconciliation of the loosely-specified upstream input into canonical
//! geometry. Never fails loudly: anything unusable collapses to `None`.

use crate::model::{OutlineGeometry, RawBlueprintInput};
use crate::path;
use crate::sanitize;

/// Classify a structured JSON value into one of the accepted input shapes.
/// Objects that match the canonical geometry shape become `Canonical`;
/// objects carrying markup under a known field degrade to `Text`.
pub fn input_from_value(value: serde_json::Value) -> RawBlueprintInput {
    match value {
        serde_json::Value::Null => RawBlueprintInput::Absent,
        serde_json::Value::String(s) => RawBlueprintInput::Text(s),
        other => {
            if let Some(geometry) = canonical_from_value(&other) {
                return RawBlueprintInput::Canonical(geometry);
            }
            match sanitize::extract_markup(&other) {
                Some(markup) => RawBlueprintInput::Text(markup),
                None => RawBlueprintInput::Absent,
            }
        }
    }
}

/// Normalize one input into canonical geometry, or `None`.
///
/// Decision order: absent/empty first; a canonical value passes through
/// unchanged; a string is tried as JSON-encoded geometry and then as vector
/// markup. Decode and parse failures are swallowed, not propagated.
pub fn normalize(input: &RawBlueprintInput) -> Option<OutlineGeometry> {
    if input.is_absent() {
        return None;
    }
    match input {
        RawBlueprintInput::Absent => None,
        RawBlueprintInput::Canonical(geometry) => {
            (!geometry.vertices.is_empty()).then(|| geometry.clone())
        }
        RawBlueprintInput::Text(text) => {
            if let Ok(geometry) = serde_json::from_str::<OutlineGeometry>(text) {
                if !geometry.vertices.is_empty() {
                    return Some(geometry);
                }
            }
            geometry_from_markup(text)
        }
    }
}

fn canonical_from_value(value: &serde_json::Value) -> Option<OutlineGeometry> {
    let geometry: OutlineGeometry = serde_json::from_value(value.clone()).ok()?;
    (!geometry.vertices.is_empty()).then_some(geometry)
}

fn geometry_from_markup(text: &str) -> Option<OutlineGeometry> {
    let result = sanitize::sanitize_markup(text);
    let clean = result.clean_markup?;
    path::parse_outline(&clean)
}
