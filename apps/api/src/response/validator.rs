use serde_json::Value;

use super::ResponseError;

/// Top-level keys every landing page payload must carry, checked in this order.
pub const LANDING_PAGE_FIELDS: [&str; 7] = [
    "navigation",
    "hero",
    "features",
    "testimonials",
    "pricing",
    "contact",
    "footer",
];

/// Parses extracted payload text. Only syntactic validity is checked.
pub fn parse_json(payload: &str) -> Result<Value, ResponseError> {
    serde_json::from_str(payload).map_err(|source| ResponseError::MalformedJson {
        payload: payload.to_string(),
        source,
    })
}

/// Fails with the first key of `fields` that `value` does not contain.
/// A non-object value is missing every field.
pub fn require_fields(value: &Value, fields: &[&str]) -> Result<(), ResponseError> {
    let object = value.as_object();
    match fields
        .iter()
        .find(|field| !object.is_some_and(|o| o.contains_key(**field)))
    {
        Some(missing) => Err(ResponseError::MissingField((*missing).to_string())),
        None => Ok(()),
    }
}

/// Parses a landing page payload and checks all of [`LANDING_PAGE_FIELDS`].
pub fn parse_landing_page(payload: &str) -> Result<Value, ResponseError> {
    let value = parse_json(payload)?;
    require_fields(&value, &LANDING_PAGE_FIELDS)?;
    Ok(value)
}
