// "CODE: Title" -> code + title

use serde::Serialize;

/// code shown when a course string carries no delimiter
pub const SENTINEL_CODE: &str = "---";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedCourse<'a> {
    pub code: &'a str,
    pub title: &'a str,
}

/// split on the first ':' only; nothing is trimmed
pub fn parse_course(raw: &str) -> ParsedCourse<'_> {
    match raw.split_once(':') {
        Some((code, title)) => ParsedCourse { code, title },
        None => ParsedCourse {
            code: SENTINEL_CODE,
            title: raw,
        },
    }
}
