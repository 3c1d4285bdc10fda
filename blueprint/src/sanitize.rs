//! Sanitization of untrusted vector markup.
//!
//! Two independent layers: an allow-list structural rewrite (only enumerated
//! drawing elements and attributes survive) followed by a denylist regex pass.
//! Fail-secure: any internal failure yields no markup at all, never unclean
//! passthrough.

use crate::geometry::limits;
use base64::Engine as _;
use lol_html::{element, rewrite_str, RewriteStrSettings};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;

/// Outcome of one sanitization pass. `clean_markup` is `None` when the input
/// carried no markup, was rejected by the size guard, or the sanitizer failed
/// internally.
#[derive(Clone, Debug, PartialEq)]
pub struct SanitizationResult {
    pub clean_markup: Option<String>,
    pub flagged_dangerous: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SanitizeOptions {
    /// Ceiling on declared width/height/viewBox extents, units per axis.
    pub max_extent: f32,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        SanitizeOptions {
            max_extent: limits::MAX_EXTENT,
        }
    }
}

#[derive(Debug, Error)]
enum SanitizeError {
    #[error("markup exceeds the {0}-byte ingestion cap")]
    Oversized(usize),
    #[error("markup rewrite failed: {0}")]
    Rewrite(#[from] lol_html::errors::RewritingError),
}

// Drawing-structure elements. Tag names compare lowercased; camel-cased SVG
// names (linearGradient, clipPath, ...) therefore appear folded here.
const ALLOWED_ELEMENTS: &[&str] = &[
    "svg",
    "g",
    "path",
    "rect",
    "circle",
    "ellipse",
    "line",
    "polyline",
    "polygon",
    "text",
    "tspan",
    "defs",
    "symbol",
    "use",
    "marker",
    "pattern",
    "lineargradient",
    "radialgradient",
    "stop",
    "clippath",
    "mask",
    "filter",
    "fegaussianblur",
    "feoffset",
    "feblend",
    "fecolormatrix",
    "femerge",
    "femergenode",
    "feflood",
    "fecomposite",
    "title",
    "desc",
    "metadata",
];

const ALLOWED_ATTRIBUTES: &[&str] = &[
    // geometry
    "d",
    "x",
    "y",
    "x1",
    "y1",
    "x2",
    "y2",
    "cx",
    "cy",
    "r",
    "rx",
    "ry",
    "dx",
    "dy",
    "points",
    "width",
    "height",
    "viewbox",
    "transform",
    "pathlength",
    // styling
    "fill",
    "stroke",
    "stroke-width",
    "stroke-dasharray",
    "stroke-dashoffset",
    "stroke-linecap",
    "stroke-linejoin",
    "stroke-miterlimit",
    "stroke-opacity",
    "fill-opacity",
    "fill-rule",
    "clip-rule",
    "opacity",
    "color",
    "display",
    "visibility",
    "vector-effect",
    // typography
    "font-family",
    "font-size",
    "font-weight",
    "font-style",
    "text-anchor",
    "dominant-baseline",
    "letter-spacing",
    "word-spacing",
    // structural
    "id",
    "class",
    "xmlns",
    "xmlns:xlink",
    "version",
    "preserveaspectratio",
    "lang",
    // references
    "href",
    "xlink:href",
    "clip-path",
    "mask",
    "filter",
    "marker-start",
    "marker-mid",
    "marker-end",
    // gradients and patterns
    "gradientunits",
    "gradienttransform",
    "spreadmethod",
    "offset",
    "stop-color",
    "stop-opacity",
    "patternunits",
    "patterncontentunits",
    "patterntransform",
    // filter primitives
    "stddeviation",
    "in",
    "in2",
    "result",
    "mode",
    "values",
    "type",
    "operator",
    "flood-color",
    "flood-opacity",
    // animation timing
    "begin",
    "dur",
    "end",
    "repeatcount",
];

const MARKUP_FIELDS: &[&str] = &["svg", "markup", "content", "data"];

const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

fn allowed_elements() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| ALLOWED_ELEMENTS.iter().copied().collect())
}

fn allowed_attributes() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| ALLOWED_ATTRIBUTES.iter().copied().collect())
}

fn danger_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)<\s*(?:script|iframe|object|embed|form)\b|javascript\s*:|\bon\w+\s*=")
            .expect("valid regex")
    })
}

fn script_block_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("valid regex"))
}

fn forbidden_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)</?\s*(?:script|iframe|object|embed|form)\b[^>]*>").expect("valid regex")
    })
}

fn event_attr_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)\bon\w+\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]*)"#).expect("valid regex")
    })
}

fn javascript_scheme_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)javascript\s*:").expect("valid regex"))
}

// Schemes that cannot execute script: https/http/mailto/tel, fragment and
// relative references. Everything else (javascript:, data:, vbscript:, ...)
// fails the match.
fn safe_uri_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:(?:https?|mailto|tel):|[^a-z]|[a-z+.\-]+(?:[^a-z+.\-:]|$))")
            .expect("valid regex")
    })
}

fn uri_whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[\u{0000}-\u{0020}\u{00A0}\u{1680}\u{2000}-\u{2029}\u{205F}\u{3000}]")
            .expect("valid regex")
    })
}

fn colon_entity_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)&(?:colon|#0*58|#x0*3a);?").expect("valid regex"))
}

fn svg_open_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<svg\b[^>]*>").expect("valid regex"))
}

fn width_attr_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)\swidth\s*=\s*["']\s*([0-9eE+\-.]+)"#).expect("valid regex")
    })
}

fn height_attr_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)\sheight\s*=\s*["']\s*([0-9eE+\-.]+)"#).expect("valid regex")
    })
}

fn viewbox_attr_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)\sviewbox\s*=\s*["']([0-9eE+\-.,\s]+)["']"#).expect("valid regex")
    })
}

/// Pull markup out of a structured value: a raw string, or an object carrying
/// the markup under one of the known field names. Base64 data-URIs are decoded
/// either way.
pub fn extract_markup(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => markup_from_str(s),
        serde_json::Value::Object(map) => MARKUP_FIELDS
            .iter()
            .find_map(|k| map.get(*k).and_then(|v| v.as_str()).and_then(markup_from_str)),
        _ => None,
    }
}

pub(crate) fn markup_from_str(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Some(payload) = s.strip_prefix(SVG_DATA_URI_PREFIX) {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload.trim().as_bytes())
            .ok()?;
        let decoded = String::from_utf8(bytes).ok()?;
        let t = decoded.trim();
        return (t.contains('<')).then(|| t.to_string());
    }
    s.contains('<').then(|| s.to_string())
}

/// True when the markup declares a canvas larger than `max_extent` on either
/// axis, via width/height attributes or the viewBox. Independent of content
/// safety; oversized markup is rejected before any parsing.
pub fn exceeds_size_guard(markup: &str, max_extent: f32) -> bool {
    let Some(open) = svg_open_tag_regex().find(markup) else {
        return false;
    };
    let tag = open.as_str();
    let mut extents: Vec<f32> = Vec::new();
    for re in [width_attr_regex(), height_attr_regex()] {
        if let Some(c) = re.captures(tag) {
            if let Ok(v) = c[1].parse::<f32>() {
                extents.push(v);
            }
        }
    }
    if let Some(c) = viewbox_attr_regex().captures(tag) {
        let nums: Vec<f32> = c[1]
            .split(|ch: char| ch.is_whitespace() || ch == ',')
            .filter(|t| !t.is_empty())
            .filter_map(|t| t.parse::<f32>().ok())
            .collect();
        if nums.len() == 4 {
            extents.push(nums[2]);
            extents.push(nums[3]);
        }
    }
    extents.iter().any(|&v| v > max_extent)
}

fn is_safe_uri(value: &str) -> bool {
    let decoded = colon_entity_regex().replace_all(value, ":");
    let stripped = uri_whitespace_regex().replace_all(&decoded, "");
    stripped.is_empty() || safe_uri_regex().is_match(&stripped)
}

// Layer 1: allow-list structural rewrite. Unknown elements are dropped with
// their content; `on*` attributes and unsafe URI values never survive.
fn allowlist_rewrite(markup: &str) -> Result<String, SanitizeError> {
    if markup.len() > limits::MAX_MARKUP_BYTES {
        return Err(SanitizeError::Oversized(limits::MAX_MARKUP_BYTES));
    }
    let handlers = vec![element!("*", |el| {
        let lc_tag = el.tag_name().to_ascii_lowercase();
        if !allowed_elements().contains(lc_tag.as_str()) {
            el.remove();
            return Ok(());
        }
        let attrs: Vec<(String, String)> = el
            .attributes()
            .iter()
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect();
        for (name, value) in attrs {
            let lc_name = name.to_ascii_lowercase();
            if lc_name.starts_with("on") {
                el.remove_attribute(&name);
                continue;
            }
            if !allowed_attributes().contains(lc_name.as_str()) {
                el.remove_attribute(&name);
                continue;
            }
            if matches!(lc_name.as_str(), "href" | "xlink:href") && !is_safe_uri(&value) {
                el.remove_attribute(&name);
            }
        }
        Ok(())
    })];
    Ok(rewrite_str(
        markup,
        RewriteStrSettings {
            element_content_handlers: handlers,
            ..RewriteStrSettings::new()
        },
    )?)
}

// Layer 2: denylist pass over whatever layer 1 produced. Redundant on clean
// output and required anyway; each layer must hold on its own.
fn denylist_pass(markup: &str) -> String {
    let mut out = script_block_regex().replace_all(markup, "").to_string();
    out = forbidden_tag_regex().replace_all(&out, "").to_string();
    out = event_attr_regex().replace_all(&out, "").to_string();
    out = javascript_scheme_regex().replace_all(&out, "").to_string();
    out
}

pub fn sanitize_markup(markup: &str) -> SanitizationResult {
    sanitize_markup_with(markup, &SanitizeOptions::default())
}

pub fn sanitize_markup_with(markup: &str, opts: &SanitizeOptions) -> SanitizationResult {
    let Some(extracted) = markup_from_str(markup) else {
        return SanitizationResult {
            clean_markup: None,
            flagged_dangerous: false,
        };
    };
    let flagged_dangerous = danger_regex().is_match(&extracted);
    if flagged_dangerous {
        tracing::warn!(
            target: "blueprint::security",
            event = "dangerous_content",
            "executable content detected in blueprint markup"
        );
    }
    if exceeds_size_guard(&extracted, opts.max_extent) {
        tracing::warn!(
            target: "blueprint::security",
            event = "size_guard_rejected",
            max_extent = opts.max_extent,
            "markup declares extents over the ceiling"
        );
        return SanitizationResult {
            clean_markup: None,
            flagged_dangerous,
        };
    }
    match allowlist_rewrite(&extracted) {
        Ok(filtered) => SanitizationResult {
            clean_markup: Some(denylist_pass(&filtered)),
            flagged_dangerous,
        },
        Err(err) => {
            tracing::error!(
                target: "blueprint::security",
                event = "sanitize_failed",
                error = %err,
                "sanitizer failed; dropping markup"
            );
            SanitizationResult {
                clean_markup: None,
                flagged_dangerous: true,
            }
        }
    }
}
