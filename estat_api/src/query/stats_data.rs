use crate::Error;

use super::common::{
    push, Flag, JsonpCallback, Paginated, Paging, Query, SectionHeader, SpecialCharReplacement,
};
use super::narrowing::{CategoryFilter, DimensionFilter, NarrowingConditions};

/// Parameters of `getStatsData`. One of `stats_data_id` or `data_set_id` must be
/// set; the client checks this before sending.
#[derive(Clone, Debug, Default)]
pub struct StatsDataQuery {
    pub paging: Paging,
    pub stats_data_id: Option<String>,
    pub data_set_id: Option<String>,
    pub narrowing: NarrowingConditions,
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

impl Query for StatsDataQuery {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "statsDataId", &self.stats_data_id);
        push(&mut pairs, "dataSetId", &self.data_set_id);
        self.narrowing.push_pairs(&mut pairs);
        self.paging.push_pairs(&mut pairs);
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

impl JsonpCallback for StatsDataQuery {
    fn get_callback(&mut self) -> &mut Option<String> {
        &mut self.callback
    }
}

impl Paginated for StatsDataQuery {
    fn get_paging(&mut self) -> &mut Paging {
        &mut self.paging
    }
}

impl StatsDataQuery {
    /// Query for a published statistics table.
    pub fn for_table(stats_data_id: &str) -> Self {
        Self::default().with_stats_data_id(stats_data_id)
    }

    /// Query for a registered dataset.
    pub fn for_dataset(data_set_id: &str) -> Self {
        Self::default().with_data_set_id(data_set_id)
    }

    pub fn with_stats_data_id(mut self, stats_data_id: &str) -> Self {
        self.stats_data_id = Some(stats_data_id.to_string());
        self
    }

    pub fn with_data_set_id(mut self, data_set_id: &str) -> Self {
        self.data_set_id = Some(data_set_id.to_string());
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

    pub fn with_meta(mut self, enabled: bool) -> Self {
        self.meta_get_flg = Some(enabled.into());
        self
    }

    /// `Y` returns only the row count, without the values.
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

    /// Fails unless a table ID or a dataset ID is set.
    pub fn validate(&self) -> Result<(), Error> {
        let has = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        if !has(&self.stats_data_id) && !has(&self.data_set_id) {
            return Err(Error::InvalidArgument(
                "either statsDataId or dataSetId is required".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::StatsDataQuery;
    use crate::query::{CategoryFilter, DimensionFilter, Paginated, Query, SpecialCharReplacement};
    use crate::Error;

    #[test]
    fn validate_requires_an_identifier() {
        assert!(matches!(
            StatsDataQuery::default().validate(),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            StatsDataQuery::default().with_stats_data_id("").validate(),
            Err(Error::InvalidArgument(_))
        ));
        assert!(StatsDataQuery::for_table("0003411678").validate().is_ok());
        assert!(StatsDataQuery::for_dataset("DS001").validate().is_ok());
    }

    #[test]
    fn test_stats_data_query() {
        let query = StatsDataQuery::for_table("0003411678")
            .with_area(DimensionFilter::default().with_code("13000"))
            .with_category(CategoryFilter::new(1).unwrap().with_code("010"))
            .with_category(CategoryFilter::new(2).unwrap().with_codes(&["020", "030"]))
            .with_limit(10)
            .with_meta(false)
            .with_replace_sp_chars(SpecialCharReplacement::Na);

        let encoded = query
            .to_query_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        insta::assert_snapshot!(encoded, @"statsDataId=0003411678&cdArea=13000&cdCat01=010&cdCat02=020,030&limit=10&metaGetFlg=N&replaceSpChars=3");
    }
}
