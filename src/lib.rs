pub mod client;
pub mod errors;
pub mod executor;
pub mod matcher;
pub mod params;
pub mod response;

pub use client::GetScrapingClient;
pub use errors::{ClientError, ClientResult};
pub use executor::{PreparedRequest, RetryExecutor, Transport};
pub use matcher::{CssSelectorMatcher, SelectorMatcher};
pub use params::{
    BrowserAction, GetScrapingParams, HttpMethod, InterceptRequestParams, JsRenderingOptions,
    RetryConfig,
};
pub use response::ScrapeResponse;
