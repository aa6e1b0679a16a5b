//! Live-page host for the page utilities, driven over CDP with chromiumoxide.

pub mod page;
pub mod shared;

pub use page::{
    BrowserSession, LaunchConfig, PageCookieStore, PageDocument, PageSession, PageUtilities,
    RemoteElement,
};
pub use shared::TimeoutConfig;
