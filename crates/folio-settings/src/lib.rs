#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Reader typography settings shared by the Folio front end.
//!
//! Layout: `option.rs` (catalog entries), `state.rs` (`SettingsState` + `FieldKey`),
//! `draft.rs` (copy-on-write draft store), `catalog.rs` (built-in and JSON catalogs),
//! `error.rs` (catalog loading errors).

pub mod catalog;
mod defaults;
pub mod draft;
pub mod error;
pub mod option;
pub mod state;

pub use catalog::OptionCatalog;
pub use draft::SettingsDraft;
pub use error::{CatalogError, CatalogResult};
pub use option::{OptionValue, find_by_value};
pub use state::{FieldKey, SettingsState};
