//! Endpoint construction: response formats, HTTP methods and operation paths.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Response format requested from the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DataFormat {
    /// JSON, parsed into a [`serde_json::Value`]. This is the default.
    #[default]
    Json,
    /// JSONP, unwrapped and parsed like JSON.
    Jsonp,
    /// XML, returned as text.
    Xml,
    /// CSV via the `getSimple...` endpoints, returned as text.
    Csv,
}
impl DataFormat {
    /// Whether the body is parsed as JSON rather than returned as text.
    pub fn is_json(&self) -> bool {
        matches!(self, DataFormat::Json | DataFormat::Jsonp)
    }
}
impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DataFormat::Json => "json",
                DataFormat::Jsonp => "jsonp",
                DataFormat::Xml => "xml",
                DataFormat::Csv => "csv",
            }
        )
    }
}
/// Unrecognized names fall back to XML, the API's own default.
impl FromStr for DataFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "json" => DataFormat::Json,
            "jsonp" => DataFormat::Jsonp,
            "csv" => DataFormat::Csv,
            _ => DataFormat::Xml,
        })
    }
}

/// HTTP method used for a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}
impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                HttpMethod::Get => "GET",
                HttpMethod::Post => "POST",
            }
        )
    }
}
impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            _ => Err(Error::InvalidArgument(format!(
                "unsupported HTTP method: {}",
                s
            ))),
        }
    }
}

/// The seven operations of the e-Stat API v3.0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    StatsList,
    MetaInfo,
    StatsData,
    PostDataset,
    RefDataset,
    DataCatalog,
    StatsDatas,
}
impl Operation {
    /// Path name of the operation, as used in the URL.
    pub fn path(&self) -> &'static str {
        match self {
            Operation::StatsList => "getStatsList",
            Operation::MetaInfo => "getMetaInfo",
            Operation::StatsData => "getStatsData",
            Operation::PostDataset => "postDataset",
            Operation::RefDataset => "refDataset",
            Operation::DataCatalog => "getDataCatalog",
            Operation::StatsDatas => "getStatsDatas",
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            Operation::PostDataset | Operation::StatsDatas => HttpMethod::Post,
            _ => HttpMethod::Get,
        }
    }

    /// Whether the remote API offers a CSV variant of this operation.
    pub fn supports_csv(&self) -> bool {
        !matches!(self, Operation::RefDataset | Operation::DataCatalog)
    }
}
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Rewrites an operation path to its CSV ("simple") sibling.
///
/// The first rule whose marker the path contains decides the rewrite, which
/// replaces the whole stem (`getMetaInfo` becomes `getSimpleMetaInfo`). A path
/// without the stem of its rule, or matching no rule, is returned unchanged.
pub fn simple_path(path: &str) -> String {
    if path.contains("List") {
        path.replace("StatsList", "SimpleStatsList")
    } else if path.contains("Info") {
        path.replace("MetaInfo", "SimpleMetaInfo")
    } else if path.contains("Data") && !path.contains("Datas") {
        path.replace("StatsData", "SimpleStatsData")
    } else if path.contains("Datas") {
        path.replace("StatsDatas", "SimpleStatsDatas")
    } else {
        path.to_string()
    }
}

/// Builds the full endpoint URL for `path` in the given format.
pub fn build_endpoint(base_url: &str, path: &str, format: DataFormat) -> String {
    let base_url = base_url.trim_end_matches('/');
    match format {
        DataFormat::Json | DataFormat::Jsonp => format!("{}/{}/{}", base_url, format, path),
        DataFormat::Csv => format!("{}/{}", base_url, simple_path(path)),
        DataFormat::Xml => format!("{}/{}", base_url, path),
    }
}
