//! Request payload checks. Every checker walks the whole payload and
//! reports all violations together; callers turn a non-empty list into a
//! 422. Inputs arrive already stripped of markup.

use crate::model::{KIND_MESSAGE, KIND_PRIVATE};

pub fn registration(name: Option<&str>) -> Vec<String> {
    let mut errors = Vec::new();
    require_text(&mut errors, "name", name);
    errors
}

pub fn new_message(to: Option<&str>, text: Option<&str>, kind: Option<&str>) -> Vec<String> {
    let mut errors = Vec::new();
    require_text(&mut errors, "to", to);
    require_text(&mut errors, "text", text);
    match kind {
        None => errors.push("\"type\" is required".to_string()),
        Some(kind) => check_kind(&mut errors, kind),
    }
    errors
}

/// Same shape as [`new_message`], but every field is optional.
pub fn message_patch(to: Option<&str>, text: Option<&str>, kind: Option<&str>) -> Vec<String> {
    let mut errors = Vec::new();
    if to.is_some() {
        require_text(&mut errors, "to", to);
    }
    if text.is_some() {
        require_text(&mut errors, "text", text);
    }
    if let Some(kind) = kind {
        check_kind(&mut errors, kind);
    }
    errors
}

/// The query string hands us text; anything that is not an integer of at
/// least 1 is a violation, not a framework error.
pub fn limit(raw: Option<&str>) -> Result<Option<i64>, Vec<String>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.parse::<i64>() {
        Ok(n) if n >= 1 => Ok(Some(n)),
        _ => Err(vec![
            "\"limit\" must be a number greater than or equal to 1".to_string(),
        ]),
    }
}

fn require_text(errors: &mut Vec<String>, field: &str, value: Option<&str>) {
    match value {
        None => errors.push(format!("\"{field}\" is required")),
        Some(value) if value.is_empty() => {
            errors.push(format!("\"{field}\" is not allowed to be empty"));
        }
        Some(_) => {}
    }
}

fn check_kind(errors: &mut Vec<String>, kind: &str) {
    if kind != KIND_MESSAGE && kind != KIND_PRIVATE {
        errors.push("\"type\" must be one of [message, private_message]".to_string());
    }
}
