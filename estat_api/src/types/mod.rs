mod response;
pub use self::response::Response;

mod result;
pub use self::result::{ResultInfo, ResultStatus};
