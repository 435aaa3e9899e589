//! HTTP client for the e-Stat REST API.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use url::Url;

use crate::{
    config::{ClientConfig, Credentials},
    endpoint::{build_endpoint, DataFormat, HttpMethod, Operation},
    query::{
        BulkStatsDataQuery, DataCatalogQuery, DatasetReferenceQuery, DatasetRegistrationQuery,
        MetaInfoQuery, Query, StatsDataQuery, StatsListQuery,
    },
    types::{Response, ResultInfo, ResultStatus},
    Error,
};

/// Request timeout for every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Client for the e-Stat REST API.
///
/// Holds the credentials, the base URL and one `reqwest::Client` with a
/// 30-second timeout. Nothing is mutated after construction, so a client can be
/// shared between tasks. Failed calls are not retried.
#[derive(Clone, Debug)]
pub struct Client {
    client: reqwest::Client,
    credentials: Credentials,
    /// Defaults to `https://api.e-stat.go.jp/rest/3.0/app`.
    base_url: String,
}

impl Client {
    /// Creates a client for the production API (v3.0 over HTTPS).
    ///
    /// Fails with [`Error::InvalidArgument`] when `app_id` is empty.
    pub fn new(app_id: &str) -> Result<Self, Error> {
        Self::with_config(Credentials::new(app_id)?, &ClientConfig::default())
    }

    /// Creates a client with explicit credentials and URL settings.
    pub fn with_config(credentials: Credentials, config: &ClientConfig) -> Result<Self, Error> {
        Self::with_base_url(&config.base_url(), credentials)
    }

    /// Creates a client from `ESTAT_APP_ID`, `ESTAT_LANG`, `ESTAT_API_VERSION`
    /// and `ESTAT_USE_HTTPS` (a `.env` file is honored).
    pub fn from_env() -> Result<Self, Error> {
        let credentials = Credentials::from_env()?;
        Self::with_config(credentials, &ClientConfig::from_env())
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, credentials: Credentials) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        Ok(Self {
            client,
            credentials,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn get_url(&self, path: &str, format: DataFormat) -> Result<Url, Error> {
        let endpoint = build_endpoint(&self.base_url, path, format);
        Url::parse(&endpoint).map_err(|e| {
            tracing::error!("Invalid URL constructed: {} ({})", endpoint, e);
            Error::InvalidArgument(format!("invalid endpoint URL {}: {}", endpoint, e))
        })
    }

    /// Puts `appId` (and `lang`, when configured) in front of the caller's
    /// parameters. A caller-supplied `appId` is dropped.
    fn merge_params(&self, params: &[(String, String)]) -> Vec<(String, String)> {
        let mut merged = vec![("appId".to_string(), self.credentials.app_id().to_string())];
        if let Some(lang) = self.credentials.lang() {
            if !params.iter().any(|(k, _)| k == "lang") {
                merged.push(("lang".to_string(), lang.to_string()));
            }
        }
        merged.extend(params.iter().filter(|(k, _)| k != "appId").cloned());
        merged
    }

    /// Sends one request and normalizes the body.
    ///
    /// GET sends `params` as the query string, POST as a form body. JSON and
    /// JSONP bodies are parsed and checked for an error `RESULT`; other formats
    /// come back as text.
    pub async fn call(
        &self,
        method: HttpMethod,
        path: &str,
        format: DataFormat,
        params: &[(String, String)],
    ) -> Result<Response, Error> {
        let url = self.get_url(path, format)?;
        let params = self.merge_params(params);
        tracing::debug!(
            "{} {} params={:?}",
            method,
            url,
            params.iter().skip(1).map(|(k, _)| k.as_str()).collect::<Vec<_>>()
        );

        let request = match method {
            HttpMethod::Get => self.client.get(url).query(&params),
            HttpMethod::Post => {
                let mut request = self.client.post(url);
                if path == Operation::PostDataset.path() {
                    request = request.header(CONTENT_TYPE, FORM_CONTENT_TYPE);
                }
                request.form(&params)
            }
        };

        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to send {} request: {}", path, e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read {} response body: {}", path, e);
            Error::Transport(e)
        })?;
        let body = String::from_utf8_lossy(&body);

        if status.is_client_error() || status.is_server_error() {
            let snippet = truncate_body(&body);
            tracing::error!("{} failed with status {}: {}", path, status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        if !format.is_json() {
            return Ok(Response::Text(body.into_owned()));
        }

        let parsed = serde_json::from_str::<Value>(strip_jsonp(&body)).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse {} response: {} | body: {}", path, e, snippet);
            Error::ParseFailed(e.to_string())
        })?;

        if let Some(info) = ResultInfo::find(&parsed) {
            match info.kind() {
                ResultStatus::Success => {}
                ResultStatus::NoData | ResultStatus::Partial | ResultStatus::Unknown => {
                    tracing::warn!("{} returned status {}: {}", path, info.status, info.error_msg);
                }
                ResultStatus::Error => {
                    tracing::error!("{} returned status {}: {}", path, info.status, info.error_msg);
                    info.into_result()?;
                }
            }
        }

        Ok(Response::Json(parsed))
    }

    async fn call_operation(
        &self,
        operation: Operation,
        format: DataFormat,
        query: &impl Query,
    ) -> Result<Response, Error> {
        if format == DataFormat::Csv && !operation.supports_csv() {
            return Err(Error::InvalidArgument(format!(
                "{} does not support the CSV format",
                operation
            )));
        }
        self.call(
            operation.method(),
            operation.path(),
            format,
            &query.to_query_pairs(),
        )
        .await
    }

    /// Searches statistics tables (`getStatsList`).
    pub async fn get_stats_list(
        &self,
        query: &StatsListQuery,
        format: DataFormat,
    ) -> Result<Response, Error> {
        self.call_operation(Operation::StatsList, format, query)
            .await
    }

    /// Fetches the definition of a statistics table (`getMetaInfo`).
    pub async fn get_meta_info(
        &self,
        query: &MetaInfoQuery,
        format: DataFormat,
    ) -> Result<Response, Error> {
        self.call_operation(Operation::MetaInfo, format, query)
            .await
    }

    /// Fetches the values of one table or dataset (`getStatsData`).
    ///
    /// Fails with [`Error::InvalidArgument`] before sending anything when the
    /// query names neither a table nor a dataset.
    pub async fn get_stats_data(
        &self,
        query: &StatsDataQuery,
        format: DataFormat,
    ) -> Result<Response, Error> {
        query.validate()?;
        self.call_operation(Operation::StatsData, format, query)
            .await
    }

    /// Registers, updates or deletes a dataset (`postDataset`).
    ///
    /// The response is always requested as JSON.
    pub async fn post_dataset(&self, query: &DatasetRegistrationQuery) -> Result<Response, Error> {
        self.call_operation(Operation::PostDataset, DataFormat::Json, query)
            .await
    }

    /// Lists registered datasets, or describes one (`refDataset`).
    ///
    /// CSV is not offered by the API and is rejected locally.
    pub async fn ref_dataset(
        &self,
        query: &DatasetReferenceQuery,
        format: DataFormat,
    ) -> Result<Response, Error> {
        self.call_operation(Operation::RefDataset, format, query)
            .await
    }

    /// Searches published files and database entries (`getDataCatalog`).
    ///
    /// CSV is not offered by the API and is rejected locally.
    pub async fn get_data_catalog(
        &self,
        query: &DataCatalogQuery,
        format: DataFormat,
    ) -> Result<Response, Error> {
        self.call_operation(Operation::DataCatalog, format, query)
            .await
    }

    /// Fetches several tables or datasets in one call (`getStatsDatas`).
    ///
    /// `statsDatasSpec` is sent as a JSON string in the form body.
    pub async fn get_stats_datas(
        &self,
        query: &BulkStatsDataQuery,
        format: DataFormat,
    ) -> Result<Response, Error> {
        // to_query_pairs drops a spec that fails to encode.
        query.encoded_spec()?;
        self.call_operation(Operation::StatsDatas, format, query)
            .await
    }
}

/// Returns the JSON payload of a JSONP body (`callback({...});`).
fn strip_jsonp(body: &str) -> &str {
    let trimmed = body.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return trimmed;
    }
    match (trimmed.find('('), trimmed.rfind(')')) {
        (Some(start), Some(end)) if start < end => &trimmed[start + 1..end],
        _ => trimmed,
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
