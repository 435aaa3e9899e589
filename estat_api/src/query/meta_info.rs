use super::common::{push, Flag, JsonpCallback, Query};

/// Parameters of `getMetaInfo`: the table definition (dimensions and their codes).
#[derive(Clone, Debug)]
pub struct MetaInfoQuery {
    /// Statistics table ID (the `@id` returned by `getStatsList`).
    pub stats_data_id: String,
    pub explanation_get_flg: Option<Flag>,
    /// JSONP only.
    pub callback: Option<String>,
}

impl Query for MetaInfoQuery {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("statsDataId".to_string(), self.stats_data_id.clone())];
        push(&mut pairs, "explanationGetFlg", &self.explanation_get_flg);
        push(&mut pairs, "callback", &self.callback);
        pairs
    }
}

impl JsonpCallback for MetaInfoQuery {
    fn get_callback(&mut self) -> &mut Option<String> {
        &mut self.callback
    }
}

impl MetaInfoQuery {
    pub fn new(stats_data_id: &str) -> Self {
        Self {
            stats_data_id: stats_data_id.to_string(),
            explanation_get_flg: None,
            callback: None,
        }
    }

    pub fn with_explanation(mut self, enabled: bool) -> Self {
        self.explanation_get_flg = Some(enabled.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::MetaInfoQuery;
    use crate::query::Query;

    #[test]
    fn stats_data_id_is_always_sent() {
        let pairs = MetaInfoQuery::new("0003411678").to_query_pairs();
        assert_eq!(
            pairs,
            vec![("statsDataId".to_string(), "0003411678".to_string())]
        );
    }

    #[test]
    fn explanation_flag() {
        let pairs = MetaInfoQuery::new("0001")
            .with_explanation(true)
            .to_query_pairs();
        assert_eq!(pairs[1], ("explanationGetFlg".to_string(), "Y".to_string()));
    }
}
