pub mod autoplay;
pub mod script;
pub mod session;
pub mod summary;

pub use autoplay::{AutoplayMode, Autopilot};
pub use script::ScriptMode;
pub use session::Session;
pub use summary::SessionSummary;
