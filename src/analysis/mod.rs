pub mod config;
pub mod params;
pub mod presence;
pub mod refresh_map;
pub mod windows;

pub use config::AnalysisConfig;
pub use params::{PostRealityParams, RefreshMapParams};
pub use presence::{post_reality, Observation};
pub use refresh_map::{refresh_map, RefreshMap};
pub use windows::Window;
