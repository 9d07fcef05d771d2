//! feedtrace: server-side reconstruction of what a tracked user actually saw
//! while browsing a social feed, correlated against later re-visits.
//!
//! Two independent pipelines share the [`Store`] gateway:
//! - [`refresh_map`] rebuilds a user's recent display windows, the ordered
//!   impressions inside each, and the deduplicated content metadata;
//! - [`post_reality`] joins refresh events against a post's presence records
//!   and emits a pseudonymous observation stream.

pub mod analysis;
pub mod error;
pub mod pseudonym;
pub mod store;

pub use analysis::{
    post_reality, refresh_map, AnalysisConfig, Observation, PostRealityParams, RefreshMap,
    RefreshMapParams, Window,
};
pub use error::{Error, ErrorEnvelope, Result};
pub use store::{Store, StoreConfig};
