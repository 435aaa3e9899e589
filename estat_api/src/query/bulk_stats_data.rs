use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Map, Value};

use crate::Error;

use super::common::{push, Flag, JsonpCallback, Query, SectionHeader, SpecialCharReplacement};

/// One entry of `statsDatasSpec`: the filters of a single table or dataset,
/// keyed by their API names (`statsDataId`, `dataSetId`, `cdArea`, `cdCat01`...).
pub type StatsDatasItem = Map<String, Value>;

/// Parameters of `getStatsDatas`: several `getStatsData` requests in one call.
#[derive(Clone, Debug, Default)]
pub struct BulkStatsDataQuery {
    pub stats_datas_spec: Vec<StatsDatasItem>,
    pub meta_get_flg: Option<Flag>,
    pub cnt_get_flg: Option<Flag>,
    pub explanation_get_flg: Option<Flag>,
    pub annotation_get_flg: Option<Flag>,
    pub replace_sp_chars: Option<SpecialCharReplacement>,
    /// CSV only.
    pub section_header_flg: Option<SectionHeader>,
    /// JSONP only.
    pub callback: Option<String>,
}

impl Query for BulkStatsDataQuery {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        // A list of string-keyed maps always encodes.
        if let Ok(spec) = self.encoded_spec() {
            pairs.push(("statsDatasSpec".to_string(), spec));
        }
        push(&mut pairs, "metaGetFlg", &self.meta_get_flg);
        push(&mut pairs, "cntGetFlg", &self.cnt_get_flg);
        push(&mut pairs, "explanationGetFlg", &self.explanation_get_flg);
        push(&mut pairs, "annotationGetFlg", &self.annotation_get_flg);
        push(&mut pairs, "replaceSpChars", &self.replace_sp_chars);
        push(&mut pairs, "sectionHeaderFlg", &self.section_header_flg);
        push(&mut pairs, "callback", &self.callback);
        pairs
    }
}

impl JsonpCallback for BulkStatsDataQuery {
    fn get_callback(&mut self) -> &mut Option<String> {
        &mut self.callback
    }
}

impl BulkStatsDataQuery {
    pub fn new(stats_datas_spec: Vec<StatsDatasItem>) -> Self {
        Self {
            stats_datas_spec,
            ..Default::default()
        }
    }

    /// Builds a query from an untyped spec, which must be an array of objects.
    pub fn from_value(spec: Value) -> Result<Self, Error> {
        let items = match spec {
            Value::Array(items) => items,
            other => {
                return Err(Error::TypeMismatch(format!(
                    "statsDatasSpec must be a list of objects, got {}",
                    value_kind(&other)
                )))
            }
        };
        let spec = items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| match item {
                Value::Object(map) => Ok(map),
                other => Err(Error::TypeMismatch(format!(
                    "statsDatasSpec[{}] must be an object, got {}",
                    idx,
                    value_kind(&other)
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(spec))
    }

    /// Appends an entry for a statistics table.
    pub fn with_table(mut self, stats_data_id: &str) -> Self {
        let mut item = Map::new();
        item.insert("statsDataId".to_string(), Value::from(stats_data_id));
        self.stats_datas_spec.push(item);
        self
    }

    /// Appends an entry for a registered dataset.
    pub fn with_dataset(mut self, data_set_id: &str) -> Self {
        let mut item = Map::new();
        item.insert("dataSetId".to_string(), Value::from(data_set_id));
        self.stats_datas_spec.push(item);
        self
    }

    pub fn with_item(mut self, item: StatsDatasItem) -> Self {
        self.stats_datas_spec.push(item);
        self
    }

    pub fn with_meta(mut self, enabled: bool) -> Self {
        self.meta_get_flg = Some(enabled.into());
        self
    }

    pub fn with_count_only(mut self, enabled: bool) -> Self {
        self.cnt_get_flg = Some(enabled.into());
        self
    }

    pub fn with_explanation(mut self, enabled: bool) -> Self {
        self.explanation_get_flg = Some(enabled.into());
        self
    }

    pub fn with_annotation(mut self, enabled: bool) -> Self {
        self.annotation_get_flg = Some(enabled.into());
        self
    }

    pub fn with_replace_sp_chars(mut self, replacement: SpecialCharReplacement) -> Self {
        self.replace_sp_chars = Some(replacement);
        self
    }

    pub fn with_section_header(mut self, section_header: SectionHeader) -> Self {
        self.section_header_flg = Some(section_header);
        self
    }

    /// The spec as a JSON string, with `, ` and `: ` separators.
    /// Non-ASCII characters are kept as-is.
    pub fn encoded_spec(&self) -> Result<String, Error> {
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
        self.stats_datas_spec
            .serialize(&mut serializer)
            .map_err(Error::Serialize)?;
        String::from_utf8(buf)
            .map_err(|e| Error::InvalidArgument(format!("statsDatasSpec is not UTF-8: {}", e)))
    }
}

impl TryFrom<Value> for BulkStatsDataQuery {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

/// Single-line JSON with a space after each separator: `[{"a": 1}, {"b": 2}]`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
