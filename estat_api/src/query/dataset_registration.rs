use std::fmt;

use super::common::{push, Query};
use super::narrowing::{CategoryFilter, DimensionFilter, NarrowingConditions};

/// Parameters of `postDataset`: register, update or delete a dataset, i.e. a
/// saved set of filters on a statistics table.
///
/// Nothing is validated locally; the API reports missing fields itself.
#[derive(Clone, Debug, Default)]
pub struct DatasetRegistrationQuery {
    pub process_mode: Option<ProcessMode>,
    /// Dataset to create or update. The API assigns one when omitted.
    pub data_set_id: Option<String>,
    pub stats_data_id: Option<String>,
    pub data_set_name: Option<String>,
    pub open_specified: Option<Visibility>,
    pub narrowing: NarrowingConditions,
}

impl Query for DatasetRegistrationQuery {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "processMode", &self.process_mode);
        push(&mut pairs, "dataSetId", &self.data_set_id);
        push(&mut pairs, "statsDataId", &self.stats_data_id);
        push(&mut pairs, "dataSetName", &self.data_set_name);
        // Spelled this way by the API.
        push(&mut pairs, "openSpecifed", &self.open_specified);
        self.narrowing.push_pairs(&mut pairs);
        pairs
    }
}

impl DatasetRegistrationQuery {
    /// Registers (or overwrites) a dataset over `stats_data_id`.
    pub fn register(stats_data_id: &str) -> Self {
        Self {
            process_mode: Some(ProcessMode::Register),
            stats_data_id: Some(stats_data_id.to_string()),
            ..Default::default()
        }
    }

    /// Deletes the dataset `data_set_id`.
    pub fn delete(data_set_id: &str) -> Self {
        Self {
            process_mode: Some(ProcessMode::Delete),
            data_set_id: Some(data_set_id.to_string()),
            ..Default::default()
        }
    }

    pub fn with_process_mode(mut self, process_mode: ProcessMode) -> Self {
        self.process_mode = Some(process_mode);
        self
    }

    pub fn with_data_set_id(mut self, data_set_id: &str) -> Self {
        self.data_set_id = Some(data_set_id.to_string());
        self
    }

    pub fn with_stats_data_id(mut self, stats_data_id: &str) -> Self {
        self.stats_data_id = Some(stats_data_id.to_string());
        self
    }

    pub fn with_name(mut self, data_set_name: &str) -> Self {
        self.data_set_name = Some(data_set_name.to_string());
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.open_specified = Some(visibility);
        self
    }

    pub fn with_tab(mut self, tab: DimensionFilter) -> Self {
        self.narrowing.tab = tab;
        self
    }

    pub fn with_time(mut self, time: DimensionFilter) -> Self {
        self.narrowing.time = time;
        self
    }

    pub fn with_area(mut self, area: DimensionFilter) -> Self {
        self.narrowing.area = area;
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.narrowing.set_category(category);
        self
    }
}

/// `processMode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessMode {
    /// Register or update. API default.
    Register,
    Delete,
}
impl fmt::Display for ProcessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ProcessMode::Register => "E",
                ProcessMode::Delete => "D",
            }
        )
    }
}

/// Whether other users may reference the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// API default.
    Private,
    Public,
}
impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Visibility::Private => "0",
                Visibility::Public => "1",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{DatasetRegistrationQuery, Visibility};
    use crate::query::{DimensionFilter, Query};

    #[test]
    fn register_pairs() {
        let pairs = DatasetRegistrationQuery::register("0003411678")
            .with_name("東京都の人口")
            .with_visibility(Visibility::Public)
            .with_area(DimensionFilter::default().with_code("13000"))
            .to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("processMode".to_string(), "E".to_string()),
                ("statsDataId".to_string(), "0003411678".to_string()),
                ("dataSetName".to_string(), "東京都の人口".to_string()),
                ("openSpecifed".to_string(), "1".to_string()),
                ("cdArea".to_string(), "13000".to_string()),
            ]
        );
    }

    #[test]
    fn delete_pairs() {
        let pairs = DatasetRegistrationQuery::delete("DS001").to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("processMode".to_string(), "D".to_string()),
                ("dataSetId".to_string(), "DS001".to_string()),
            ]
        );
    }
}
