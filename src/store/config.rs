/// Names of the store collections, passed in at store construction.
///
/// Queries never consult ambient schema state; everything the store needs to
/// address a table travels in this struct.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Feed-view samples: one row per time a user's feed view began.
    pub timelines: String,

    /// On-screen content references, ordered within a feed view.
    pub impressions: String,

    /// Content metadata plus the bulk body column (never read back whole).
    pub contents: String,

    /// Evidence that a specific refresh actually displayed a given post.
    pub presences: String,

    /// Raw re-visit events.
    pub refreshes: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            timelines: "timelines".to_string(),
            impressions: "impressions".to_string(),
            contents: "contents".to_string(),
            presences: "presences".to_string(),
            refreshes: "refreshes".to_string(),
        }
    }
}
