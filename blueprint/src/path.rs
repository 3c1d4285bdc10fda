//! Path-command interpreter: recovers an ordered vertex list and bounding box
//! from sanitized vector markup.

use crate::geometry::limits;
use crate::model::{Dimensions, OutlineGeometry, Vertex};
use regex::Regex;
use std::sync::OnceLock;

fn path_data_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"\bd\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid regex"))
}

/// Parse the first path geometry attribute in `markup`. Returns `None` when no
/// path data is present or fewer than two vertices can be recovered.
pub fn parse_outline(markup: &str) -> Option<OutlineGeometry> {
    if markup.len() > limits::MAX_MARKUP_BYTES {
        return None;
    }
    let caps = path_data_regex().captures(markup)?;
    let d = caps.get(1).or_else(|| caps.get(2))?.as_str();
    vertices_from_path(d)
}

fn skip_ws(bytes: &[u8], i: &mut usize) {
    while *i < bytes.len() {
        let c = bytes[*i];
        if c == b' ' || c == b'\n' || c == b'\r' || c == b'\t' || c == b',' {
            *i += 1;
        } else {
            break;
        }
    }
}

fn parse_num(bytes: &[u8], i: &mut usize) -> Option<f32> {
    skip_ws(bytes, i);
    let start = *i;
    let mut had = false;
    while *i < bytes.len() {
        let c = bytes[*i];
        if c.is_ascii_digit() || c == b'.' || c == b'-' || c == b'+' || c == b'e' || c == b'E' {
            had = true;
            *i += 1;
        } else {
            break;
        }
    }
    if !had {
        return None;
    }
    let s = std::str::from_utf8(&bytes[start..*i]).ok()?;
    let v = s.parse::<f32>().ok()?;
    if limits::in_coord_bounds(v) {
        Some(v)
    } else {
        None
    }
}

fn at_command(bytes: &[u8], i: usize) -> bool {
    i < bytes.len() && bytes[i].is_ascii_alphabetic()
}

#[derive(Debug)]
struct Trace {
    cur: (f32, f32),
    vertices: Vec<Vertex>,
    min: (f32, f32),
    max: (f32, f32),
}

impl Trace {
    fn new() -> Trace {
        Trace {
            cur: (0.0, 0.0),
            vertices: Vec::new(),
            min: (f32::MAX, f32::MAX),
            max: (f32::MIN, f32::MIN),
        }
    }

    fn emit(&mut self) {
        let (x, y) = self.cur;
        self.vertices.push(Vertex { x, y });
        self.min.0 = self.min.0.min(x);
        self.min.1 = self.min.1.min(y);
        self.max.0 = self.max.0.max(x);
        self.max.1 = self.max.1.max(y);
    }

    fn full(&self) -> bool {
        self.vertices.len() >= limits::MAX_VERTICES
    }
}

/// Walk the command stream with a running cursor, emitting a vertex per
/// recognized coordinate. Command letters are case-folded to uppercase, so
/// relative forms are interpreted as absolute. Only Move/Line/Horizontal/
/// Vertical are recognized; curve commands and their operands are dropped.
fn vertices_from_path(d: &str) -> Option<OutlineGeometry> {
    let bytes = d.as_bytes();
    let mut i = 0usize;
    let mut t = Trace::new();
    let mut cmd_count = 0usize;

    while i < bytes.len() {
        skip_ws(bytes, &mut i);
        if !at_command(bytes, i) {
            break;
        }
        let cmd = bytes[i].to_ascii_uppercase();
        i += 1;
        cmd_count += 1;
        if cmd_count > limits::MAX_PATH_COMMANDS || t.full() {
            break;
        }
        match cmd {
            b'M' | b'L' => loop {
                let x = match parse_num(bytes, &mut i) {
                    Some(v) => v,
                    None => break,
                };
                let y = match parse_num(bytes, &mut i) {
                    Some(v) => v,
                    None => break,
                };
                t.cur = (x, y);
                t.emit();
                skip_ws(bytes, &mut i);
                if at_command(bytes, i) || t.full() {
                    break;
                }
            },
            b'H' => loop {
                let x = match parse_num(bytes, &mut i) {
                    Some(v) => v,
                    None => break,
                };
                t.cur.0 = x;
                t.emit();
                skip_ws(bytes, &mut i);
                if at_command(bytes, i) || t.full() {
                    break;
                }
            },
            b'V' => loop {
                let y = match parse_num(bytes, &mut i) {
                    Some(v) => v,
                    None => break,
                };
                t.cur.1 = y;
                t.emit();
                skip_ws(bytes, &mut i);
                if at_command(bytes, i) || t.full() {
                    break;
                }
            },
            _ => {
                // Unsupported command: swallow its operands up to the next letter.
                while parse_num(bytes, &mut i).is_some() {}
            }
        }
    }

    if t.vertices.len() < 2 {
        return None;
    }
    Some(OutlineGeometry {
        dimensions: Dimensions {
            width: t.max.0 - t.min.0,
            height: t.max.1 - t.min.1,
        },
        vertices: t.vertices,
        scale: 1.0,
    })
}
