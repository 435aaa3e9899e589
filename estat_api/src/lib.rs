//! Client for the e-Stat API, the Japanese government statistics portal
//! (<https://www.e-stat.go.jp/api/>), version 3.0.
//!
//! ```no_run
//! use estat_api::{Client, DataFormat, StatsListQuery};
//!
//! # async fn run() -> Result<(), estat_api::Error> {
//! let client = Client::new("YOUR_APP_ID")?;
//! let tables = client
//!     .get_stats_list(&StatsListQuery::default().with_search_word("労働力調査"), DataFormat::Json)
//!     .await?;
//! println!("{:?}", tables.result_info());
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod endpoint;
mod errors;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::config::{ClientConfig, Credentials, Lang};
pub use self::endpoint::{build_endpoint, simple_path, DataFormat, HttpMethod, Operation};
pub use self::errors::Error;
pub use self::query::{
    BulkStatsDataQuery, CatalogDataType, CategoryFilter, CollectArea, DataCatalogQuery,
    DatasetReferenceQuery, DatasetRegistrationQuery, DimensionFilter, Flag, JsonpCallback,
    MetaInfoQuery, NarrowingConditions, Paginated, Paging, ProcessMode, Query, SearchKind,
    SectionHeader, SpecialCharReplacement, StatsDataQuery, StatsDatasItem, StatsListQuery,
    Visibility, MAX_CATEGORY,
};
pub use self::types::Response;
