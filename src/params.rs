use compact_str::{CompactString, ToCompactString};
use serde::{ser::Error as _, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Flat string parameters of a single API call, ready to be sent as
/// `application/x-www-form-urlencoded` form data.
pub type Params = HashMap<CompactString, CompactString>;

pub trait ToParams {
    fn to_params(&self) -> Result<Params, serde_json::Error>;
}

/// Any serializable request struct flattens into form values: scalars become
/// their plain text, booleans the literals `true`/`false`, and list or object
/// values JSON text. `None` fields are skipped by the request structs
/// themselves, so an empty list set on purpose still encodes as `[]`.
impl<T: Serialize> ToParams for T {
    fn to_params(&self) -> Result<Params, serde_json::Error> {
        let map = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            _ => {
                return Err(serde_json::Error::custom(
                    "request must serialize to an object",
                ))
            }
        };

        let mut params = Params::with_capacity(map.len());
        for (field, value) in map {
            let value = match value {
                Value::Null => continue,
                Value::Bool(b) => {
                    if b {
                        CompactString::from("true")
                    } else {
                        CompactString::from("false")
                    }
                }
                Value::Number(n) => n.to_compact_string(),
                Value::String(s) => s.into(),
                value @ (Value::Array(_) | Value::Object(_)) => {
                    serde_json::to_string(&value)?.into()
                }
            };
            params.insert(field.into(), value);
        }
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::ToParams;
    use assert2::check;
    use serde::Serialize;
    use serde_with::skip_serializing_none;

    #[skip_serializing_none]
    #[derive(Serialize)]
    struct Sample {
        chat_id: i64,
        text: &'static str,
        silent: Option<bool>,
        tags: Option<Vec<&'static str>>,
    }

    #[test]
    fn scalars_encode_as_plain_text() {
        let params = Sample {
            chat_id: 12345,
            text: "hello",
            silent: Some(true),
            tags: None,
        }
        .to_params()
        .unwrap();

        check!(params.len() == 3);
        check!(params["chat_id"] == "12345");
        check!(params["text"] == "hello");
        check!(params["silent"] == "true");
        check!(!params.contains_key("tags"));
    }

    #[test]
    fn lists_encode_as_json_text() {
        let params = Sample {
            chat_id: 1,
            text: "",
            silent: Some(false),
            tags: Some(vec!["message", "poll"]),
        }
        .to_params()
        .unwrap();

        check!(params["silent"] == "false");
        check!(params["tags"] == r#"["message","poll"]"#);
    }

    #[test]
    fn empty_list_encodes_as_empty_brackets() {
        let params = Sample {
            chat_id: 1,
            text: "",
            silent: None,
            tags: Some(vec![]),
        }
        .to_params()
        .unwrap();

        check!(params["tags"] == "[]");
    }
}
