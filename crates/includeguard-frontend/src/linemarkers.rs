//! Include graph recovery from preprocessor output.
//!
//! GNU-style preprocessors (gcc, clang) annotate `-E` output with linemarkers:
//!
//! ```text
//! # 1 "/src/pub/a.h" 1
//! # 3 "/src/pub/a.h"
//! # 2 "<stdin>" 2
//! ```
//!
//! Flag `1` enters a file, flag `2` returns to the includer. Between markers, every output line
//! advances the current file's line counter, so the counter of the includer at the moment a
//! file is entered is the line of its `#include` directive.

use includeguard_types::{IncludeEdge, Location};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Linemarker {
    pub line: u32,
    pub file: String,
    pub flags: Vec<u8>,
}

impl Linemarker {
    pub fn enters_file(&self) -> bool {
        self.flags.contains(&1)
    }

    pub fn returns_to_file(&self) -> bool {
        self.flags.contains(&2)
    }
}

struct Frame {
    file: String,
    next_line: u32,
}

/// `<built-in>`, `<command line>` and friends.
fn is_pseudo_file(file: &str) -> bool {
    file.starts_with('<') && file.ends_with('>')
}

/// Every file entered while preprocessing, in order, with the directive that entered it.
///
/// Only files entered from the unit itself or from a real file are reported, so implicit
/// pre-includes such as gcc's `stdc-predef.h` never show up. Columns are left at `0`; the caller fills them in from source text if it can.
pub fn parse_includes(preprocessed: &str, unit_name: &str) -> Vec<IncludeEdge> {
    let mut edges: Vec<IncludeEdge> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    for raw in preprocessed.lines() {
        let Some(marker) = parse_linemarker(raw) else {
            if let Some(top) = stack.last_mut() {
                top.next_line = top.next_line.saturating_add(1);
            }
            continue;
        };

        if marker.enters_file() {
            let (includer, line) = stack
                .last()
                .map(|f| (f.file.clone(), f.next_line))
                .unwrap_or_else(|| (unit_name.to_string(), 1));
            // Pre-includes entered from `<command-line>` are not part of the unit's graph.
            let real_includer = includer == unit_name || !is_pseudo_file(&includer);
            if real_includer && !is_pseudo_file(&marker.file) {
                edges.push(IncludeEdge {
                    included: marker.file.clone(),
                    location: Location::new(includer.clone(), line, 0),
                    includer,
                });
            }
            stack.push(Frame {
                file: marker.file,
                next_line: marker.line,
            });
            continue;
        }

        if marker.returns_to_file() && stack.len() > 1 {
            stack.pop();
        }
        match stack.last_mut() {
            Some(top) => {
                top.file = marker.file;
                top.next_line = marker.line;
            }
            None => stack.push(Frame {
                file: marker.file,
                next_line: marker.line,
            }),
        }
    }

    edges
}

/// Parse `# LINE "FILE" FLAGS...` (or `#line LINE "FILE"`).
pub fn parse_linemarker(line: &str) -> Option<Linemarker> {
    let rest = line.strip_prefix('#')?;
    let rest = rest.strip_prefix("line").unwrap_or(rest);
    let rest = rest.trim_start();

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let line_no: u32 = rest[..digits_end].parse().ok()?;

    let rest = rest[digits_end..].trim_start();
    let (file, after) = parse_quoted(rest)?;

    let flags = after
        .split_whitespace()
        .map(|f| f.parse::<u8>().ok())
        .collect::<Option<Vec<u8>>>()?;

    Some(Linemarker {
        line: line_no,
        file,
        flags,
    })
}

/// Read a C string literal at the start of `s`; returns the unescaped text and the remainder.
fn parse_quoted(s: &str) -> Option<(String, &str)> {
    let body = s.strip_prefix('"')?;
    let mut bytes: Vec<u8> = Vec::new();
    let mut iter = body.char_indices().peekable();

    while let Some((idx, c)) = iter.next() {
        match c {
            '"' => {
                let text = String::from_utf8_lossy(&bytes).into_owned();
                return Some((text, &body[idx + 1..]));
            }
            '\\' => {
                let (_, escaped) = iter.next()?;
                if let Some(first) = escaped.to_digit(8) {
                    let mut value = first;
                    for _ in 0..2 {
                        match iter.peek().and_then(|(_, d)| d.to_digit(8)) {
                            Some(d) => {
                                value = value * 8 + d;
                                iter.next();
                            }
                            None => break,
                        }
                    }
                    bytes.push((value & 0xff) as u8);
                } else {
                    let mut buf = [0u8; 4];
                    bytes.extend_from_slice(escaped.encode_utf8(&mut buf).as_bytes());
                }
            }
            other => {
                let mut buf = [0u8; 4];
                bytes.extend_from_slice(other.encode_utf8(&mut buf).as_bytes());
            }
        }
    }

    None
}
