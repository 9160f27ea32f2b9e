//! HTTP client for the IssueFlow REST backend.

#[cfg(feature = "test-util")]
pub mod mock;

mod client;

pub use client::{ApiError, IssueFlowClient};
pub use flow_types::{ActivitySource, ActivitySourceError};

#[cfg(feature = "test-util")]
pub use mock::MockActivitySource;
