//! SVG emission for the blueprint diagram and its placeholder states.
//!
//! Rendering is a pure function of `(validation outcome, job phase, viewport,
//! options)`; the interactive state never feeds back into geometry.

use crate::model::{JobPhase, OutlineGeometry, Vertex};
use crate::validate::{drawable_vertices, InvalidReason, ValidationOutcome};
use crate::viewport::ViewportState;
use std::fmt::Write as _;

/// Physical length of the calibration reference captured alongside the
/// blueprint (ISO/IEC 7810 ID-1 card width). Rendered as an annotated bar
/// only, never recomputed.
pub const CALIBRATION_LENGTH: f32 = 85.6;
pub const CALIBRATION_LABEL: &str = "85.6 mm reference";

const OUTLINE_STROKE: &str = "#1d4ed8";
const OUTLINE_FILL: &str = "rgba(59,130,246,0.08)";
const GRID_STROKE: &str = "#94a3b8";
const ANNOTATION_STROKE: &str = "#0f172a";
const PLACEHOLDER_INK: &str = "#475569";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    /// Fallback canvas width used for placeholder viewboxes.
    pub fallback_width: f32,
    /// Fallback canvas height used for placeholder viewboxes.
    pub fallback_height: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            fallback_width: 400.0,
            fallback_height: 300.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewBox {
    pub fn attr(&self) -> String {
        format!("{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }
}

/// Render viewbox: the scaled geometry plus 10% of its smaller side as
/// padding on every edge.
pub fn view_box(geometry: &OutlineGeometry) -> ViewBox {
    let scaled_w = geometry.dimensions.width * geometry.scale;
    let scaled_h = geometry.dimensions.height * geometry.scale;
    let padding = 0.1 * scaled_w.min(scaled_h);
    ViewBox {
        min_x: 0.0,
        min_y: 0.0,
        width: scaled_w + 2.0 * padding,
        height: scaled_h + 2.0 * padding,
    }
}

pub fn fallback_view_box(options: &RenderOptions) -> ViewBox {
    ViewBox {
        min_x: 0.0,
        min_y: 0.0,
        width: options.fallback_width,
        height: options.fallback_height,
    }
}

/// Render the diagram or the placeholder for the current state. A
/// `Processing` phase preempts validation entirely; a valid outcome still
/// passes the drawable-vertex checkpoint before anything is drawn.
pub fn render(
    outcome: &ValidationOutcome,
    phase: JobPhase,
    viewport: &ViewportState,
    options: &RenderOptions,
) -> String {
    if phase == JobPhase::Processing {
        return placeholder(
            options,
            "Processing blueprint",
            "The captured video is still being analyzed.",
        );
    }
    match outcome {
        ValidationOutcome::Invalid(reason) => reason_placeholder(options, *reason),
        ValidationOutcome::Valid(geometry) => {
            let drawable = drawable_vertices(&geometry.vertices);
            if drawable.len() < 2 {
                return reason_placeholder(options, InvalidReason::InvalidEdgeData);
            }
            draw(geometry, &drawable, viewport)
        }
    }
}

pub fn reason_placeholder(options: &RenderOptions, reason: InvalidReason) -> String {
    placeholder(options, reason.title(), reason.message())
}

fn placeholder(options: &RenderOptions, title: &str, message: &str) -> String {
    let vb = fallback_view_box(options);
    let cx = vb.width / 2.0;
    let mut out = String::with_capacity(640);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}" role="img">"#,
        vb.attr()
    );
    let _ = write!(
        out,
        r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" fill="none" stroke="{ink}" stroke-dasharray="6 4" stroke-width="1" opacity="0.4"/>"#,
        x = vb.width * 0.05,
        y = vb.height * 0.05,
        w = vb.width * 0.9,
        h = vb.height * 0.9,
        ink = PLACEHOLDER_INK,
    );
    let _ = write!(
        out,
        r#"<text x="{cx}" y="{ty}" text-anchor="middle" fill="{ink}" font-size="{tfs}" font-weight="600">{title}</text>"#,
        cx = cx,
        ty = vb.height * 0.45,
        ink = PLACEHOLDER_INK,
        tfs = vb.height * 0.06,
        title = title,
    );
    let _ = write!(
        out,
        r#"<text x="{cx}" y="{my}" text-anchor="middle" fill="{ink}" font-size="{mfs}">{message}</text>"#,
        cx = cx,
        my = vb.height * 0.58,
        ink = PLACEHOLDER_INK,
        mfs = vb.height * 0.042,
        message = message,
    );
    out.push_str("</svg>");
    out
}

fn fmt_label(v: f32) -> String {
    if (v - v.round()).abs() < 1e-4 {
        format!("{}", v.round())
    } else {
        format!("{:.1}", v)
    }
}

fn draw(geometry: &OutlineGeometry, drawable: &[Vertex], viewport: &ViewportState) -> String {
    let vb = view_box(geometry);
    let scale = geometry.scale;
    let scaled_w = geometry.dimensions.width * scale;
    let scaled_h = geometry.dimensions.height * scale;
    let pad = 0.1 * scaled_w.min(scaled_h);
    let at = |v: &Vertex| (pad + v.x * scale, pad + v.y * scale);

    let mut out = String::with_capacity(4096);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}" role="img">"#,
        vb.attr()
    );

    // defs: reference grid sized to the scaled geometry, arrowhead glyphs
    let grid_step = (scaled_w.min(scaled_h) / 10.0).max(f32::EPSILON);
    let _ = write!(
        out,
        r#"<defs><pattern id="bp-grid" width="{step}" height="{step}" patternUnits="userSpaceOnUse"><path d="M {step} 0 L 0 0 0 {step}" fill="none" stroke="{grid}" stroke-width="{gsw}" opacity="0.35"/></pattern>"#,
        step = grid_step,
        grid = GRID_STROKE,
        gsw = grid_step * 0.02,
    );
    let _ = write!(
        out,
        r#"<marker id="bp-arrow-end" markerWidth="8" markerHeight="8" refX="6" refY="3" orient="auto"><path d="M 0 0 L 6 3 L 0 6 z" fill="{ink}"/></marker><marker id="bp-arrow-start" markerWidth="8" markerHeight="8" refX="0" refY="3" orient="auto"><path d="M 6 0 L 0 3 L 6 6 z" fill="{ink}"/></marker></defs>"#,
        ink = ANNOTATION_STROKE,
    );

    // Content group carries the viewport transform: translate before scale,
    // pivoting on the visual center. Animated only while not dragging so the
    // drag itself stays lag-free.
    let mut style = format!(
        "transform: translate({}px, {}px) scale({}); transform-origin: center center;",
        viewport.pan_x, viewport.pan_y, viewport.zoom
    );
    if !viewport.dragging {
        style.push_str(" transition: transform 0.2s ease-out;");
    }
    let _ = write!(out, r#"<g style="{}">"#, style);

    let _ = write!(
        out,
        r#"<rect x="{pad}" y="{pad}" width="{w}" height="{h}" fill="url(#bp-grid)"/>"#,
        pad = pad,
        w = scaled_w,
        h = scaled_h,
    );

    // Outline: move-to first vertex, line-to the rest, close.
    let mut d = String::with_capacity(drawable.len() * 16);
    for (idx, v) in drawable.iter().enumerate() {
        let (x, y) = at(v);
        if idx == 0 {
            let _ = write!(d, "M {} {}", x, y);
        } else {
            let _ = write!(d, " L {} {}", x, y);
        }
    }
    d.push_str(" Z");
    let _ = write!(
        out,
        r#"<path d="{d}" fill="{fill}" stroke="{stroke}" stroke-width="{sw}" stroke-linejoin="round"/>"#,
        d = d,
        fill = OUTLINE_FILL,
        stroke = OUTLINE_STROKE,
        sw = (scaled_w.min(scaled_h) * 0.01).max(0.5),
    );

    // Vertex markers
    let marker_r = (scaled_w.min(scaled_h) * 0.015).max(0.5);
    for v in drawable {
        let (x, y) = at(v);
        let _ = write!(
            out,
            r#"<circle cx="{x}" cy="{y}" r="{r}" fill="{stroke}"/>"#,
            x = x,
            y = y,
            r = marker_r,
            stroke = OUTLINE_STROKE,
        );
    }

    // Dimension leaders: first-to-second edge labeled with the width,
    // first-to-third with the height when a third vertex exists.
    let font_size = (scaled_w.min(scaled_h) * 0.05).max(1.0);
    let leader_offset = pad * 0.35;
    dimension_leader(
        &mut out,
        at(&drawable[0]),
        at(&drawable[1]),
        leader_offset,
        font_size,
        &fmt_label(geometry.dimensions.width),
    );
    if let Some(third) = drawable.get(2) {
        dimension_leader(
            &mut out,
            at(&drawable[0]),
            at(third),
            leader_offset,
            font_size,
            &fmt_label(geometry.dimensions.height),
        );
    }

    // Calibration reference bar at the bottom-left corner of the canvas.
    let bar_len = (CALIBRATION_LENGTH * scale).min(scaled_w);
    let bar_y = pad + scaled_h + pad * 0.45;
    let tick = font_size * 0.4;
    let _ = write!(
        out,
        r#"<line x1="{x1}" y1="{y}" x2="{x2}" y2="{y}" stroke="{ink}" stroke-width="{sw}"/><line x1="{x1}" y1="{yt}" x2="{x1}" y2="{yb}" stroke="{ink}" stroke-width="{sw}"/><line x1="{x2}" y1="{yt}" x2="{x2}" y2="{yb}" stroke="{ink}" stroke-width="{sw}"/>"#,
        x1 = pad,
        x2 = pad + bar_len,
        y = bar_y,
        yt = bar_y - tick,
        yb = bar_y + tick,
        ink = ANNOTATION_STROKE,
        sw = (font_size * 0.06).max(0.2),
    );
    let _ = write!(
        out,
        r#"<text x="{x}" y="{y}" fill="{ink}" font-size="{fs}">{label}</text>"#,
        x = pad + bar_len + font_size * 0.5,
        y = bar_y + font_size * 0.35,
        ink = ANNOTATION_STROKE,
        fs = font_size * 0.8,
        label = CALIBRATION_LABEL,
    );

    out.push_str("</g></svg>");
    out
}

fn dimension_leader(
    out: &mut String,
    a: (f32, f32),
    b: (f32, f32),
    offset: f32,
    font_size: f32,
    label: &str,
) {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let len = (dx * dx + dy * dy).sqrt();
    if len <= f32::EPSILON || !len.is_finite() {
        return;
    }
    // Unit normal pushes the leader off the edge it measures.
    let nx = dy / len;
    let ny = -dx / len;
    let (ax, ay) = (a.0 + nx * offset, a.1 + ny * offset);
    let (bx, by) = (b.0 + nx * offset, b.1 + ny * offset);
    let _ = write!(
        out,
        r#"<line x1="{ax}" y1="{ay}" x2="{bx}" y2="{by}" stroke="{ink}" stroke-width="{sw}" marker-start="url(#bp-arrow-start)" marker-end="url(#bp-arrow-end)"/>"#,
        ax = ax,
        ay = ay,
        bx = bx,
        by = by,
        ink = ANNOTATION_STROKE,
        sw = (font_size * 0.06).max(0.2),
    );
    let _ = write!(
        out,
        r#"<text x="{x}" y="{y}" text-anchor="middle" fill="{ink}" font-size="{fs}">{label}</text>"#,
        x = (ax + bx) / 2.0 + nx * font_size * 0.8,
        y = (ay + by) / 2.0 + ny * font_size * 0.8,
        ink = ANNOTATION_STROKE,
        fs = font_size,
        label = label,
    );
}
