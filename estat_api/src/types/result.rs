//! The `RESULT` envelope every e-Stat JSON response carries under its
//! top-level key (`GET_STATS_LIST`, `GET_META_INFO`, ...).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Error;

/// Outcome reported by the API inside a successful HTTP response.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultInfo {
    #[serde(rename = "STATUS")]
    pub status: i64,

    #[serde(rename = "ERROR_MSG", default)]
    pub error_msg: String,

    /// Processing timestamp, e.g. `2024-03-01T10:00:00.000+09:00`.
    #[serde(rename = "DATE", default)]
    pub date: Option<String>,
}

/// Classification of [`ResultInfo::status`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultStatus {
    /// 0
    Success,
    /// 1: the request was valid but matched no data.
    NoData,
    /// 2: completed, but some of the requested data could not be returned.
    Partial,
    /// 100 and above.
    Error,
    /// Any other code (3 to 99, negative). Not documented by the API, so it is
    /// passed through like a normal completion.
    Unknown,
}

impl ResultInfo {
    pub fn kind(&self) -> ResultStatus {
        match self.status {
            0 => ResultStatus::Success,
            1 => ResultStatus::NoData,
            2 => ResultStatus::Partial,
            s if s >= 100 => ResultStatus::Error,
            _ => ResultStatus::Unknown,
        }
    }

    /// Finds the `RESULT` object of a response body, if it has one.
    pub fn find(body: &Value) -> Option<ResultInfo> {
        body.as_object()?
            .values()
            .find_map(|inner| inner.get("RESULT"))
            .and_then(|result| serde_json::from_value(result.clone()).ok())
    }

    /// Turns an error status into [`Error::Api`].
    pub fn into_result(self) -> Result<ResultInfo, Error> {
        match self.kind() {
            ResultStatus::Error => Err(Error::Api {
                status: self.status,
                message: self.error_msg,
            }),
            _ => Ok(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ResultInfo, ResultStatus};
    use crate::Error;

    #[test]
    fn finds_result_under_top_level_key() {
        let body = json!({
            "GET_STATS_LIST": {
                "RESULT": {"STATUS": 0, "ERROR_MSG": "正常に終了しました。", "DATE": "2024-03-01T10:00:00.000+09:00"},
                "PARAMETER": {"LANG": "J"}
            }
        });
        let info = ResultInfo::find(&body).unwrap();
        assert_eq!(info.kind(), ResultStatus::Success);
        assert_eq!(info.error_msg, "正常に終了しました。");
    }

    #[test]
    fn missing_envelope() {
        assert!(ResultInfo::find(&json!({})).is_none());
        assert!(ResultInfo::find(&json!([1, 2])).is_none());
        assert!(ResultInfo::find(&json!({"GET_STATS_LIST": {"DATALIST_INF": {}}})).is_none());
    }

    #[test]
    fn error_status_becomes_api_error() {
        let info = ResultInfo::find(&json!({
            "GET_META_INFO": {"RESULT": {"STATUS": 100, "ERROR_MSG": "認証に失敗しました。"}}
        }))
        .unwrap();
        match info.into_result() {
            Err(Error::Api { status, message }) => {
                assert_eq!(status, 100);
                assert_eq!(message, "認証に失敗しました。");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn no_data_is_not_an_error() {
        let info = ResultInfo::find(&json!({
            "GET_STATS_DATA": {"RESULT": {"STATUS": 1, "ERROR_MSG": "正常に終了しましたが、該当データはありませんでした。"}}
        }))
        .unwrap();
        assert_eq!(info.kind(), ResultStatus::NoData);
        assert!(info.into_result().is_ok());
    }

    #[test]
    fn only_codes_from_100_are_errors() {
        let info = |status: i64| ResultInfo {
            status,
            error_msg: String::new(),
            date: None,
        };
        assert_eq!(info(99).kind(), ResultStatus::Unknown);
        assert_eq!(info(3).kind(), ResultStatus::Unknown);
        assert_eq!(info(-1).kind(), ResultStatus::Unknown);
        assert!(info(50).into_result().is_ok());
        assert_eq!(info(100).kind(), ResultStatus::Error);
        assert_eq!(info(999).kind(), ResultStatus::Error);
    }
}
