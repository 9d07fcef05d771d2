/// Tunable thresholds for the correlation pipelines.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Synthetic lifetime of the most recent window: with no successor sample
    /// the user is assumed to have kept that screen open this long.
    pub terminal_window_grace_secs: u64,

    /// Buffer past the last recorded display during which a refresh still
    /// counts toward the visibility interval.
    pub visibility_grace_secs: u64,

    /// Upper bound on simultaneous store queries per fan-out.
    pub fan_out: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            terminal_window_grace_secs: 600,
            visibility_grace_secs: 120,
            fan_out: 4,
        }
    }
}
