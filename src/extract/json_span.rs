//! Locating the JSON object inside a free-text model reply.
//!
//! The span runs from the first `{` to the last `}` in the text. A reply with
//! several objects, or stray braces around the intended one, produces a span
//! covering all of them; parsing that span then fails downstream.

use once_cell::sync::OnceCell;
use regex::Regex;

fn object_pattern() -> &'static Regex {
    static RE_OBJECT: OnceCell<Regex> = OnceCell::new();
    RE_OBJECT.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("valid object regex"))
}

/// First brace-delimited span in `text`, or `None` when there is none.
pub fn find_json_object(text: &str) -> Option<&str> {
    object_pattern().find(text).map(|m| m.as_str())
}
