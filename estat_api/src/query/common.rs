//! Shared query infrastructure: the [`Query`] trait, [`Paging`] fields and
//! the small enumerated parameter values used across operations.

use std::fmt;

use url::Url;

/// Trait implemented by all query builders.
pub trait Query {
    /// Serializes the set fields to `(wire name, value)` pairs, in a stable order.
    /// Unset fields are omitted.
    fn to_query_pairs(&self) -> Vec<(String, String)>;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        for (key, value) in self.to_query_pairs() {
            url.query_pairs_mut().append_pair(&key, &value);
        }
        url
    }
}

/// Builder methods for operations that return a window of rows.
pub trait Paginated {
    /// Returns a mutable reference to the paging fields.
    fn get_paging(&mut self) -> &mut Paging;

    /// Sets the 1-based position of the first row to return.
    fn with_start_position(mut self, start_position: u64) -> Self
    where
        Self: Sized,
    {
        self.get_paging().start_position = Some(start_position);
        self
    }

    /// Sets the maximum number of rows to return.
    fn with_limit(mut self, limit: u64) -> Self
    where
        Self: Sized,
    {
        self.get_paging().limit = Some(limit);
        self
    }
}

/// Builder method for operations that can answer in JSONP.
///
/// e-Stat wraps a JSONP response in the function named by `callback`; the
/// parameter is ignored by the other formats.
pub trait JsonpCallback {
    /// Returns a mutable reference to the callback name.
    fn get_callback(&mut self) -> &mut Option<String>;

    /// Sets the JSONP callback function name.
    fn with_callback(mut self, callback: &str) -> Self
    where
        Self: Sized,
    {
        *self.get_callback() = Some(callback.to_string());
        self
    }
}

/// `startPosition` and `limit`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Paging {
    /// 1-based position of the first row. `None` uses the API default.
    pub start_position: Option<u64>,
    /// Maximum rows to return. `None` uses the API default (100,000).
    pub limit: Option<u64>,
}

impl Paging {
    pub(crate) fn push_pairs(&self, pairs: &mut Vec<(String, String)>) {
        push(pairs, "startPosition", &self.start_position);
        push(pairs, "limit", &self.limit);
    }
}

/// Appends `key=value` when the value is set.
pub(crate) fn push<T: ToString>(pairs: &mut Vec<(String, String)>, key: &str, value: &Option<T>) {
    if let Some(value) = value {
        pairs.push((key.to_string(), value.to_string()));
    }
}

/// Appends `key=a,b,c` when the list is not empty.
pub(crate) fn push_list(pairs: &mut Vec<(String, String)>, key: &str, values: &[String]) {
    if !values.is_empty() {
        pairs.push((key.to_string(), values.join(",")));
    }
}

/// `Y`/`N` flag used by the `...GetFlg` parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    Yes,
    No,
}
impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value {
            Flag::Yes
        } else {
            Flag::No
        }
    }
}
impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Flag::Yes => "Y",
                Flag::No => "N",
            }
        )
    }
}

/// Section header output for CSV responses (`sectionHeaderFlg`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionHeader {
    /// Emit the section headers. API default.
    Include,
    /// Emit the data rows only.
    Omit,
}
impl fmt::Display for SectionHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SectionHeader::Include => "1",
                SectionHeader::Omit => "2",
            }
        )
    }
}

/// Level of the area that compiled the statistics (`collectArea`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectArea {
    National,
    Prefecture,
    Municipality,
}
impl fmt::Display for CollectArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CollectArea::National => "1",
                CollectArea::Prefecture => "2",
                CollectArea::Municipality => "3",
            }
        )
    }
}

/// How special characters in values (e.g. `***`, `-`) are replaced (`replaceSpChars`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecialCharReplacement {
    /// Leave them as published. API default.
    Keep,
    /// Replace with `0`.
    Zero,
    /// Replace with an empty value.
    Null,
    /// Replace with `NA`.
    Na,
}
impl fmt::Display for SpecialCharReplacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SpecialCharReplacement::Keep => "0",
                SpecialCharReplacement::Zero => "1",
                SpecialCharReplacement::Null => "2",
                SpecialCharReplacement::Na => "3",
            }
        )
    }
}
