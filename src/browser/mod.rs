//! Browser lifecycle: launch options and the session that owns Chrome

pub mod config;
pub mod session;

pub use config::LaunchOptions;
pub use session::BrowserSession;
