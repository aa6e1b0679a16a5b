mod cookies;
mod document;
mod launch;
mod session;

pub use cookies::PageCookieStore;
pub use document::{PageDocument, RemoteElement};
pub use launch::{BrowserSession, LaunchConfig, PageUtilities};
pub use session::PageSession;
