pub mod http;
pub mod sink;
pub mod types;

pub use http::HttpResultSink;
pub use sink::{ResultSink, SubmitError};
pub use types::{ResultPayload, ResultResponse};
