//! Page scripting helpers: cookies, element construction and visibility
//! toggling over a host-supplied cookie store and document.

pub mod config;
pub mod cookie;
pub mod element;
pub mod error;
pub mod facade;
pub mod host;

pub use config::{UtilityConfig, HIDDEN_CLASS};
pub use cookie::{CookieEncoder, PercentEncoder, RawEncoder, COOKIE_FLAGS};
pub use element::{ClassList, Classes, ElementOptions};
pub use error::{ErrorCategory, UtilError};
pub use facade::Utilities;
pub use host::{CookieStore, Document};
