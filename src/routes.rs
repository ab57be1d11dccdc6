//! Route Paths
//!
//! Builders for the detail route and decoding of its `:name` segment.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::Presentation;

/// Characters that cannot appear raw inside one path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub const ROOT: &str = "/";
pub const DETAIL_PREFIX: &str = "/pokemon";

/// `/pokemon/<name>`
pub fn detail_path(name: &str) -> String {
    format!("{}/{}", DETAIL_PREFIX, utf8_percent_encode(name, SEGMENT))
}

/// Undo segment encoding; falls back to the raw text on invalid UTF-8.
pub fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Where closing the detail view navigates to.
pub fn close_target(presentation: Presentation) -> &'static str {
    match presentation {
        Presentation::Dialog => ROOT,
        Presentation::Page => DETAIL_PREFIX,
    }
}
