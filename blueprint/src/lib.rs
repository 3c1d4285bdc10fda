pub mod model;
pub mod normalize;
pub mod path;
pub mod render;
pub mod sanitize;
pub mod session;
pub mod validate;
pub mod viewport;
pub mod geometry {
    pub mod limits;
}

pub use model::{Dimensions, JobPhase, OutlineGeometry, RawBlueprintInput, Vertex};
pub use normalize::{input_from_value, normalize};
pub use render::{render, view_box, RenderOptions, ViewBox};
pub use sanitize::{sanitize_markup, sanitize_markup_with, SanitizationResult, SanitizeOptions};
pub use session::RenderSession;
pub use validate::{drawable_vertices, validate, InvalidReason, ValidationOutcome};
pub use viewport::ViewportState;
