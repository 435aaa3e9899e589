mod common;
pub use self::common::{
    CollectArea, Flag, JsonpCallback, Paginated, Paging, Query, SectionHeader, SpecialCharReplacement,
};
mod narrowing;
pub use self::narrowing::{CategoryFilter, DimensionFilter, NarrowingConditions, MAX_CATEGORY};

mod stats_list;
pub use self::stats_list::{SearchKind, StatsListQuery};

mod meta_info;
pub use self::meta_info::MetaInfoQuery;

mod stats_data;
pub use self::stats_data::StatsDataQuery;

mod dataset_registration;
pub use self::dataset_registration::{DatasetRegistrationQuery, ProcessMode, Visibility};

mod dataset_reference;
pub use self::dataset_reference::DatasetReferenceQuery;

mod data_catalog;
pub use self::data_catalog::{CatalogDataType, DataCatalogQuery};

mod bulk_stats_data;
pub use self::bulk_stats_data::{BulkStatsDataQuery, StatsDatasItem};
