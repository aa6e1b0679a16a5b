//! In-process host for the page utilities: a `document.cookie` emulation and
//! a detached-element document.

pub mod cookie_store;
pub mod document;

pub use cookie_store::{MemoryCookieStore, StoredCookie};
pub use document::{MemoryDocument, MemoryElement};

use pagekit_core::{UtilityConfig, Utilities};

pub type MemoryUtilities = Utilities<MemoryCookieStore, MemoryDocument>;

pub fn utilities() -> MemoryUtilities {
    Utilities::new(MemoryCookieStore::new(), MemoryDocument::new())
}

pub fn utilities_with_config(config: UtilityConfig) -> MemoryUtilities {
    Utilities::with_config(MemoryCookieStore::new(), MemoryDocument::new(), config)
}
