// Centralized ingestion limits to harden against untrusted input (JSON/markup)

// Markup caps
pub const MAX_MARKUP_BYTES: usize = 2 * 1024 * 1024;
pub const MAX_PATH_COMMANDS: usize = 50_000;
pub const MAX_VERTICES: usize = 100_000;

// Numeric bounds for parsed path operands
pub const COORD_MIN: f32 = -10_000_000.0;
pub const COORD_MAX: f32 = 10_000_000.0;

// Ceiling on declared width/height/viewBox extents (units per axis). Markup
// declaring a larger canvas is rejected before sanitization.
pub const MAX_EXTENT: f32 = 10_000.0;

#[inline]
pub fn in_coord_bounds(x: f32) -> bool {
    x.is_finite() && x >= COORD_MIN && x <= COORD_MAX
}
