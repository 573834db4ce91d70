//! Asset Query
//!
//! Loading/error/success state of the polled asset list, and (with the
//! `client` feature) the tokio task that keeps it fresh.

mod state;

#[cfg(feature = "client")]
mod poller;

pub use state::{QueryState, QueryStatus};

#[cfg(feature = "client")]
pub use poller::{AssetPoller, PollerHandle, DEFAULT_POLL_INTERVAL};
