use super::common::{push, CollectArea, JsonpCallback, Query};

/// Parameters of `refDataset`. Without a dataset ID the API lists every dataset
/// registered under the application ID.
#[derive(Clone, Debug, Default)]
pub struct DatasetReferenceQuery {
    pub data_set_id: Option<String>,
    pub collect_area: Option<CollectArea>,
    /// JSONP only.
    pub callback: Option<String>,
}

impl Query for DatasetReferenceQuery {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "dataSetId", &self.data_set_id);
        push(&mut pairs, "collectArea", &self.collect_area);
        push(&mut pairs, "callback", &self.callback);
        pairs
    }
}

impl JsonpCallback for DatasetReferenceQuery {
    fn get_callback(&mut self) -> &mut Option<String> {
        &mut self.callback
    }
}

impl DatasetReferenceQuery {
    pub fn with_data_set_id(mut self, data_set_id: &str) -> Self {
        self.data_set_id = Some(data_set_id.to_string());
        self
    }

    pub fn with_collect_area(mut self, collect_area: CollectArea) -> Self {
        self.collect_area = Some(collect_area);
        self
    }
}
