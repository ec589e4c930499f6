//! `lexsift-client` — extraction service HTTP client.
//!
//! Blocking reqwest client (no Tokio runtime required). Covers the project
//! lifecycle: list source files → create project → trigger extraction →
//! fetch results → delete. The service delivers complete snapshots or
//! fails outright; there is no streaming and no retry here. A failed call
//! surfaces as a `ClientError` and the user retries the action.

pub mod client;
pub mod types;

pub use client::{ClientError, ExtractClient, DEFAULT_API_BASE};
pub use types::{DocumentInfo, Project};
