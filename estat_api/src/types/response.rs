use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Error;

use super::ResultInfo;

/// Body of a successful call.
#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    /// Parsed body of a JSON or JSONP response.
    Json(Value),
    /// XML or CSV body, decoded as UTF-8 and otherwise untouched.
    Text(String),
}

impl Response {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Response::Json(value) => Some(value),
            Response::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Response::Json(_) => None,
            Response::Text(text) => Some(text),
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            Response::Json(value) => Some(value),
            Response::Text(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Response::Json(_) => None,
            Response::Text(text) => Some(text),
        }
    }

    /// The `RESULT` envelope of a JSON body.
    pub fn result_info(&self) -> Option<ResultInfo> {
        self.as_json().and_then(ResultInfo::find)
    }

    /// Deserializes a JSON body into a caller-defined type.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, Error> {
        match self {
            Response::Json(value) => T::deserialize(value)
                .map_err(|e| Error::ParseFailed(format!("Failed to deserialize response: {}", e))),
            Response::Text(_) => Err(Error::TypeMismatch(
                "response body is text, not JSON".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::Response;
    use crate::Error;

    #[derive(Deserialize)]
    struct Envelope {
        #[serde(rename = "GET_META_INFO")]
        meta: Inner,
    }

    #[derive(Deserialize)]
    struct Inner {
        #[serde(rename = "PARAMETER")]
        parameter: Parameter,
    }

    #[derive(Deserialize)]
    struct Parameter {
        #[serde(rename = "STATS_DATA_ID")]
        stats_data_id: String,
    }

    #[test]
    fn deserialize_json_body() {
        let response = Response::Json(json!({
            "GET_META_INFO": {"PARAMETER": {"LANG": "J", "STATS_DATA_ID": "0003411678"}}
        }));
        let envelope: Envelope = response.deserialize().unwrap();
        assert_eq!(envelope.meta.parameter.stats_data_id, "0003411678");
    }

    #[test]
    fn text_body_cannot_be_deserialized() {
        let response = Response::Text("\"VALUE\"".to_string());
        assert!(response.as_json().is_none());
        assert_eq!(response.as_text(), Some("\"VALUE\""));
        assert!(matches!(
            response.deserialize::<serde_json::Value>(),
            Err(Error::TypeMismatch(_))
        ));
    }
}
