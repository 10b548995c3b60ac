//! Code-fence stripping for model replies.
//!
//! A reply is fenced when its first line is "```" (optionally followed by a language tag
//! such as `json`, with or without a space before it) and its last line is exactly "```". Anything else is returned trimmed.

use super::ResponseError;

const FENCE: &str = "```";

/// Returns the JSON payload text inside `raw`.
///
/// Postconditions: the result is non-empty, has no surrounding whitespace, and
/// `extract_payload(extract_payload(x)?) == extract_payload(x)`.
pub fn extract_payload(raw: &str) -> Result<&str, ResponseError> {
    let mut payload = raw.trim();

    // Nested fences are peeled until none remain so the operation is idempotent.
    while let Some(inner) = strip_fence(payload) {
        payload = inner;
    }

    if payload.is_empty() {
        return Err(ResponseError::EmptyResponse);
    }
    Ok(payload)
}

/// Strips one fence layer from already-trimmed text, or `None` if it is not fenced.
fn strip_fence(text: &str) -> Option<&str> {
    let (opening, rest) = text.split_once('\n')?;
    let tag = opening.trim_end().strip_prefix(FENCE)?;
    if !is_language_tag(tag.trim_start()) {
        return None;
    }

    let (body, closing) = match rest.rsplit_once('\n') {
        Some((body, closing)) => (body, closing),
        None => ("", rest),
    };
    if closing.trim() != FENCE {
        return None;
    }

    Some(body.trim())
}

fn is_language_tag(tag: &str) -> bool {
    tag.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.'))
}
