use std::fmt;

use super::common::{push, push_list, CollectArea, Flag, JsonpCallback, Paginated, Paging, Query};

/// Parameters of `getDataCatalog`: search for published files (Excel, CSV,
/// PDF) and database entries.
#[derive(Clone, Debug, Default)]
pub struct DataCatalogQuery {
    pub paging: Paging,
    pub survey_years: Option<String>,
    pub open_years: Option<String>,
    pub stats_field: Option<String>,
    pub stats_code: Option<String>,
    pub search_word: Option<String>,
    pub collect_area: Option<CollectArea>,
    pub explanation_get_flg: Option<Flag>,
    /// Sent comma separated.
    pub data_types: Vec<CatalogDataType>,
    pub catalog_id: Option<String>,
    pub resource_id: Option<String>,
    pub updated_date: Option<String>,
    /// JSONP only.
    pub callback: Option<String>,
}

impl Query for DataCatalogQuery {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "surveyYears", &self.survey_years);
        push(&mut pairs, "openYears", &self.open_years);
        push(&mut pairs, "statsField", &self.stats_field);
        push(&mut pairs, "statsCode", &self.stats_code);
        push(&mut pairs, "searchWord", &self.search_word);
        push(&mut pairs, "collectArea", &self.collect_area);
        push(&mut pairs, "explanationGetFlg", &self.explanation_get_flg);
        let data_types: Vec<String> = self.data_types.iter().map(|t| t.to_string()).collect();
        push_list(&mut pairs, "dataType", &data_types);
        push(&mut pairs, "catalogId", &self.catalog_id);
        push(&mut pairs, "resourceId", &self.resource_id);
        self.paging.push_pairs(&mut pairs);
        push(&mut pairs, "updatedDate", &self.updated_date);
        push(&mut pairs, "callback", &self.callback);
        pairs
    }
}

impl JsonpCallback for DataCatalogQuery {
    fn get_callback(&mut self) -> &mut Option<String> {
        &mut self.callback
    }
}

impl Paginated for DataCatalogQuery {
    fn get_paging(&mut self) -> &mut Paging {
        &mut self.paging
    }
}

impl DataCatalogQuery {
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

    pub fn with_search_word(mut self, search_word: &str) -> Self {
        self.search_word = Some(search_word.to_string());
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

    pub fn with_data_type(mut self, data_type: CatalogDataType) -> Self {
        self.data_types.push(data_type);
        self
    }
    pub fn with_data_types(mut self, data_types: &[CatalogDataType]) -> Self {
        self.data_types.extend_from_slice(data_types);
        self
    }

    pub fn with_catalog_id(mut self, catalog_id: &str) -> Self {
        self.catalog_id = Some(catalog_id.to_string());
        self
    }

    pub fn with_resource_id(mut self, resource_id: &str) -> Self {
        self.resource_id = Some(resource_id.to_string());
        self
    }

    pub fn with_updated_date(mut self, updated_date: &str) -> Self {
        self.updated_date = Some(updated_date.to_string());
        self
    }
}

/// Kind of catalog resource (`dataType`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogDataType {
    Xls,
    Csv,
    Pdf,
    Xml,
    /// Excel files with a report layout.
    XlsReport,
    /// Statistics database entries.
    Db,
}
impl fmt::Display for CatalogDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CatalogDataType::Xls => "XLS",
                CatalogDataType::Csv => "CSV",
                CatalogDataType::Pdf => "PDF",
                CatalogDataType::Xml => "XML",
                CatalogDataType::XlsReport => "XLS_REP",
                CatalogDataType::Db => "DB",
            }
        )
    }
}
