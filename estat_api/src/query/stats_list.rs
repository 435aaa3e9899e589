use std::fmt;

use chrono::NaiveDate;

use super::common::{push, CollectArea, Flag, JsonpCallback, Paginated, Paging, Query};

/// Parameters of `getStatsList` (statistics table search).
#[derive(Clone, Debug, Default)]
pub struct StatsListQuery {
    pub paging: Paging,
    /// `YYYY`, `YYYYMM` or a `YYYYMM-YYYYMM` range.
    pub survey_years: Option<String>,
    /// `YYYY`, `YYYYMM` or a `YYYYMM-YYYYMM` range.
    pub open_years: Option<String>,
    /// Statistics field code (2 digits for the major field, 4 for the minor).
    pub stats_field: Option<String>,
    /// Government statistics code (5 digits for the agency, 8 for the survey).
    pub stats_code: Option<String>,
    pub search_word: Option<String>,
    pub search_kind: Option<SearchKind>,
    pub collect_area: Option<CollectArea>,
    pub explanation_get_flg: Option<Flag>,
    /// `Y` returns the list of survey names instead of tables.
    pub stats_name_list: Option<Flag>,
    /// `YYYY`, `YYYYMM`, `YYYYMMDD` or a range of those.
    pub updated_date: Option<String>,
    /// JSONP only.
    pub callback: Option<String>,
}

impl Query for StatsListQuery {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "surveyYears", &self.survey_years);
        push(&mut pairs, "openYears", &self.open_years);
        push(&mut pairs, "statsField", &self.stats_field);
        push(&mut pairs, "statsCode", &self.stats_code);
        push(&mut pairs, "searchWord", &self.search_word);
        push(&mut pairs, "searchKind", &self.search_kind);
        push(&mut pairs, "collectArea", &self.collect_area);
        push(&mut pairs, "explanationGetFlg", &self.explanation_get_flg);
        push(&mut pairs, "statsNameList", &self.stats_name_list);
        self.paging.push_pairs(&mut pairs);
        push(&mut pairs, "updatedDate", &self.updated_date);
        push(&mut pairs, "callback", &self.callback);
        pairs
    }
}

impl JsonpCallback for StatsListQuery {
    fn get_callback(&mut self) -> &mut Option<String> {
        &mut self.callback
    }
}

impl Paginated for StatsListQuery {
    fn get_paging(&mut self) -> &mut Paging {
        &mut self.paging
    }
}

impl StatsListQuery {
    pub fn with_survey_years(mut self, survey_years: &str) -> Self {
        self.survey_years = Some(survey_years.to_string());
        self
    }

    pub fn with_open_years(mut self, open_years: &str) -> Self {
        self.open_years = Some(open_years.to_string());
        self
    }

    pub fn with_stats_field(mut self, stats_field: &str) -> Self {
        self.stats_field = Some(stats_field.to_string());
        self
    }

    pub fn with_stats_code(mut self, stats_code: &str) -> Self {
        self.stats_code = Some(stats_code.to_string());
        self
    }

    /// Keywords; the API supports `AND`, `OR` and `NOT` between words.
    pub fn with_search_word(mut self, search_word: &str) -> Self {
        self.search_word = Some(search_word.to_string());
        self
    }

    pub fn with_search_kind(mut self, search_kind: SearchKind) -> Self {
        self.search_kind = Some(search_kind);
        self
    }

    pub fn with_collect_area(mut self, collect_area: CollectArea) -> Self {
        self.collect_area = Some(collect_area);
        self
    }

    pub fn with_explanation(mut self, enabled: bool) -> Self {
        self.explanation_get_flg = Some(enabled.into());
        self
    }

    pub fn with_stats_name_list(mut self, enabled: bool) -> Self {
        self.stats_name_list = Some(enabled.into());
        self
    }

    pub fn with_updated_date(mut self, updated_date: &str) -> Self {
        self.updated_date = Some(updated_date.to_string());
        self
    }

    /// Tables updated on or after `date` (`YYYYMMDD-`).
    pub fn with_updated_since(mut self, date: NaiveDate) -> Self {
        self.updated_date = Some(format!("{}-", date.format("%Y%m%d")));
        self
    }
}

/// Kind of statistics searched (`searchKind`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchKind {
    /// Ordinary statistics. API default.
    Statistics,
    /// Small-area and regional mesh statistics.
    SmallArea,
}
impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SearchKind::Statistics => "1",
                SearchKind::SmallArea => "2",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use url::Url;

    use crate::query::{CollectArea, Paginated, Query, SearchKind, StatsListQuery};

    #[test]
    fn test_stats_list_query() {
        let url = Url::parse("https://example.com").unwrap();

        insta::assert_snapshot!(StatsListQuery::default()
            .with_search_word("人口")
            .with_search_kind(SearchKind::Statistics)
            .with_collect_area(CollectArea::Prefecture)
            .with_start_position(101)
            .with_limit(50)
            .add_to_url(&url)
            .to_string(), @"https://example.com/?searchWord=%E4%BA%BA%E5%8F%A3&searchKind=1&collectArea=2&startPosition=101&limit=50");
    }

    #[test]
    fn default_query_is_empty() {
        assert!(StatsListQuery::default().to_query_pairs().is_empty());
    }

    #[test]
    fn updated_since_formats_open_range() {
        let query = StatsListQuery::default()
            .with_updated_since(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(query.updated_date.as_deref(), Some("20240301-"));
    }
}
