//! Credentials and base-URL configuration.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Host serving the e-Stat REST API.
const API_HOST: &str = "api.e-stat.go.jp";

/// Language of the returned data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Lang {
    /// Japanese. This is the API default.
    #[default]
    Japanese,
    /// English.
    English,
}
impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Lang::Japanese => "J",
                Lang::English => "E",
            }
        )
    }
}
impl FromStr for Lang {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "J" | "j" => Ok(Lang::Japanese),
            "E" | "e" => Ok(Lang::English),
            other => Err(Error::InvalidArgument(format!(
                "unknown language code: {:?} (expected J or E)",
                other
            ))),
        }
    }
}

/// Application credentials sent with every request.
#[derive(Clone)]
pub struct Credentials {
    app_id: String,
    lang: Option<Lang>,
}

impl Credentials {
    /// Creates credentials for the given application ID.
    ///
    /// Fails with [`Error::InvalidArgument`] when the ID is empty or blank.
    pub fn new(app_id: impl Into<String>) -> Result<Self, Error> {
        let app_id = app_id.into();
        if app_id.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "application ID (appId) is required".to_string(),
            ));
        }
        Ok(Self { app_id, lang: None })
    }

    /// Requests data in the given language on every call.
    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = Some(lang);
        self
    }

    /// Reads `ESTAT_APP_ID` and the optional `ESTAT_LANG`, loading a `.env`
    /// file first when one exists.
    pub fn from_env() -> Result<Self, Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let app_id = lookup("ESTAT_APP_ID").ok_or_else(|| {
            Error::InvalidArgument("ESTAT_APP_ID is not set".to_string())
        })?;
        let credentials = Self::new(app_id)?;
        match lookup("ESTAT_LANG") {
            Some(lang) if !lang.trim().is_empty() => Ok(credentials.with_lang(lang.parse()?)),
            _ => Ok(credentials),
        }
    }

    /// The application ID.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// The configured language, if any.
    pub fn lang(&self) -> Option<Lang> {
        self.lang
    }
}

// Keep the application ID out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &"***")
            .field("lang", &self.lang)
            .finish()
    }
}

/// Settings used to build the base URL.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// API version segment of the URL. Defaults to `3.0`.
    pub version: String,
    /// Use `https` (default) or plain `http`.
    pub use_https: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: "3.0".to_string(),
            use_https: true,
        }
    }
}

impl ClientConfig {
    /// Reads `ESTAT_API_VERSION` and `ESTAT_USE_HTTPS`, falling back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let version = lookup("ESTAT_API_VERSION")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.version);
        let use_https = lookup("ESTAT_USE_HTTPS")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(defaults.use_https);
        Self { version, use_https }
    }

    /// `{scheme}://api.e-stat.go.jp/rest/{version}/app`
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        format!("{}://{}/rest/{}/app", scheme, API_HOST, self.version)
    }
}
