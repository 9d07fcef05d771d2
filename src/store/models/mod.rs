pub mod content;
pub mod impression;
pub mod presence;
pub mod refresh;
pub mod timeline;

pub use content::ContentUnit;
pub use impression::Impression;
pub use presence::{PostRelation, PresenceRecord};
pub use refresh::RefreshEvent;
pub use timeline::TimelineSample;
