mod rendering;
mod request;
mod retry;


pub use rendering::{BrowserAction, InterceptRequestParams, JsRenderingOptions};
pub use request::{GetScrapingParams, HttpMethod, SCRAPE_PATH, SCRAPE_WITH_JS_PATH};
pub use retry::RetryConfig;
