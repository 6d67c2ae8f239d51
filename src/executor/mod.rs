mod executor;
mod transport;
pub mod mock_transport;

#[cfg(test)]
mod tests;

pub use executor::{AttemptOutcome, RetryExecutor, DEFAULT_RETRY_DELAY};
pub use transport::{PreparedRequest, ReqwestTransport, Transport};
