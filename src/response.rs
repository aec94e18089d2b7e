use crate::proto::ResponseParameters;
use compact_str::CompactString;
use serde::{
    de::{DeserializeOwned, Error as _},
    Deserialize, Deserializer, Serialize,
};
use std::fmt;

/// The envelope every Bot API call answers with. On success `ok` is `true`
/// and the payload sits in `result`; on failure `ok` is `false` and the
/// remaining fields describe the error.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CommonResponse<R> {
    Ok(R),
    Err(ErrorResponse),
}

impl<R> CommonResponse<R> {
    pub fn into_result(self) -> Result<R, ErrorResponse> {
        match self {
            CommonResponse::Ok(result) => Ok(result),
            CommonResponse::Err(err) => Err(err),
        }
    }
}

impl<'de, R: DeserializeOwned> Deserialize<'de> for CommonResponse<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut map = serde_json::Map::deserialize(deserializer)?;
        let ok = map
            .remove("ok")
            .ok_or_else(|| D::Error::missing_field("ok"))?
            .as_bool()
            .ok_or_else(|| D::Error::custom("`ok` is not a boolean"))?;
        let rest = serde_json::Value::Object(map);

        if ok {
            let result = rest
                .get("result")
                .cloned()
                .ok_or_else(|| D::Error::missing_field("result"))?;
            R::deserialize(result)
                .map(CommonResponse::Ok)
                .map_err(D::Error::custom)
        } else {
            ErrorResponse::deserialize(rest)
                .map(CommonResponse::Err)
                .map_err(D::Error::custom)
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub description: CompactString,
    pub error_code: i64,
    pub parameters: Option<ResponseParameters>,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "response error: {}, code: {}",
            self.description, self.error_code
        )
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::Message;
    use assert2::{check, let_assert};
    use serde_json::json;

    #[test]
    fn ok_envelope_yields_payload() {
        let raw = json!({
            "ok": true,
            "result": {
                "message_id": 7,
                "date": 1644000000u64,
                "chat": { "id": 12345, "type": "private" },
                "text": "hi"
            }
        });

        let response: CommonResponse<Message> =
            serde_json::from_value(raw).unwrap();
        let_assert!(Ok(message) = response.into_result());
        check!(message.message_id == 7);
        check!(message.text.as_deref() == Some("hi"));
    }

    #[test]
    fn ok_envelope_with_bool_payload() {
        let response: CommonResponse<bool> =
            serde_json::from_value(json!({ "ok": true, "result": true }))
                .unwrap();
        check!(response == CommonResponse::Ok(true));
    }

    #[test]
    fn error_envelope_yields_description_and_code() {
        let raw = json!({
            "ok": false,
            "error_code": 429,
            "description": "Too Many Requests: retry after 14",
            "parameters": { "retry_after": 14 }
        });

        let response: CommonResponse<Message> =
            serde_json::from_value(raw).unwrap();
        let_assert!(Err(err) = response.into_result());
        check!(err.error_code == 429);
        check!(err.description == "Too Many Requests: retry after 14");
        let_assert!(Some(parameters) = err.parameters);
        check!(parameters.retry_after == Some(14));
    }

    #[test]
    fn envelope_without_ok_is_rejected() {
        let result: Result<CommonResponse<bool>, _> =
            serde_json::from_value(json!({ "result": true }));
        check!(result.is_err());
    }
}
