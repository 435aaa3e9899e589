use estat_api::{
    BulkStatsDataQuery, CatalogDataType, CategoryFilter, CollectArea, DataCatalogQuery,
    DatasetReferenceQuery, DatasetRegistrationQuery, DimensionFilter, JsonpCallback,
    MetaInfoQuery, Paginated, ProcessMode, Query, SearchKind, SectionHeader, StatsDataQuery,
    StatsListQuery, Visibility,
};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://api.e-stat.go.jp/rest/3.0/app/json/getStatsData").unwrap()
}

fn keys(query: &impl Query) -> Vec<String> {
    query.to_query_pairs().into_iter().map(|(k, _)| k).collect()
}

#[test]
fn stats_list_query_defaults() {
    let url = StatsListQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), None);
}

#[test]
fn stats_list_query_with_filters() {
    let url = StatsListQuery::default()
        .with_stats_code("00200521")
        .with_survey_years("201001-202012")
        .with_search_kind(SearchKind::SmallArea)
        .with_collect_area(CollectArea::Municipality)
        .with_explanation(true)
        .with_stats_name_list(true)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("statsCode=00200521"));
    assert!(query.contains("surveyYears=201001-202012"));
    assert!(query.contains("searchKind=2"));
    assert!(query.contains("collectArea=3"));
    assert!(query.contains("explanationGetFlg=Y"));
    assert!(query.contains("statsNameList=Y"));
}

#[test]
fn stats_list_query_paging() {
    let url = StatsListQuery::default()
        .with_start_position(11)
        .with_limit(10)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("startPosition=11"));
    assert!(query.contains("limit=10"));
}

#[test]
fn meta_info_query_keys() {
    assert_eq!(
        keys(&MetaInfoQuery::new("0003411678").with_explanation(false)),
        vec!["statsDataId", "explanationGetFlg"]
    );
}

#[test]
fn stats_data_query_categories_use_static_names() {
    let query = StatsDataQuery::for_table("0003411678")
        .with_category(CategoryFilter::new(3).unwrap().with_level("1"))
        .with_category(CategoryFilter::new(12).unwrap().with_range("100", "200"));
    assert_eq!(
        keys(&query),
        vec![
            "statsDataId",
            "lvCat03",
            "cdCat12From",
            "cdCat12To",
        ]
    );
}

#[test]
fn stats_data_query_dimensions() {
    let url = StatsDataQuery::for_dataset("DS001")
        .with_tab(DimensionFilter::default().with_code("020"))
        .with_time(DimensionFilter::default().with_codes(&["2020000000", "2015000000"]))
        .with_area(DimensionFilter::default().with_level("2"))
        .with_section_header(SectionHeader::Omit)
        .with_count_only(true)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("dataSetId=DS001"));
    assert!(query.contains("cdTab=020"));
    assert!(query.contains("cdTime=2020000000%2C2015000000"));
    assert!(query.contains("lvArea=2"));
    assert!(query.contains("sectionHeaderFlg=2"));
    assert!(query.contains("cntGetFlg=Y"));
    assert!(!query.contains("statsDataId"));
}

#[test]
fn dataset_registration_query() {
    let query = DatasetRegistrationQuery::default()
        .with_process_mode(ProcessMode::Register)
        .with_data_set_id("DS001")
        .with_stats_data_id("0003411678")
        .with_visibility(Visibility::Private)
        .with_category(CategoryFilter::new(1).unwrap().with_code("001"));
    assert_eq!(
        keys(&query),
        vec![
            "processMode",
            "dataSetId",
            "statsDataId",
            "openSpecifed",
            "cdCat01",
        ]
    );
}

#[test]
fn dataset_reference_query() {
    let url = DatasetReferenceQuery::default()
        .with_collect_area(CollectArea::National)
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("collectArea=1"));
}

#[test]
fn data_catalog_query() {
    let url = DataCatalogQuery::default()
        .with_catalog_id("000001")
        .with_resource_id("000002")
        .with_data_type(CatalogDataType::Pdf)
        .with_updated_date("20240101-")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("catalogId=000001"));
    assert!(query.contains("resourceId=000002"));
    assert!(query.contains("dataType=PDF"));
    assert!(query.contains("updatedDate=20240101-"));
}

#[test]
fn bulk_query_spec_is_first() {
    let query = BulkStatsDataQuery::default()
        .with_table("0001")
        .with_explanation(true)
        .with_annotation(false);
    assert_eq!(
        keys(&query),
        vec!["statsDatasSpec", "explanationGetFlg", "annotationGetFlg"]
    );
}

#[test]
fn callback_is_sent_last_by_every_format_aware_query() {
    fn last(query: &impl Query) -> Option<(String, String)> {
        query.to_query_pairs().pop()
    }
    let expected = Some(("callback".to_string(), "cb".to_string()));

    assert_eq!(last(&StatsListQuery::default().with_callback("cb")), expected);
    assert_eq!(last(&MetaInfoQuery::new("0001").with_callback("cb")), expected);
    assert_eq!(
        last(&StatsDataQuery::for_table("0001").with_callback("cb")),
        expected
    );
    assert_eq!(
        last(&DatasetReferenceQuery::default().with_callback("cb")),
        expected
    );
    assert_eq!(last(&DataCatalogQuery::default().with_callback("cb")), expected);
    assert_eq!(
        last(&BulkStatsDataQuery::default().with_table("0001").with_callback("cb")),
        expected
    );
    assert!(!keys(&StatsListQuery::default()).contains(&"callback".to_string()));
}
