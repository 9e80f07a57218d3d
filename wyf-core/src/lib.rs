//! Core logic for the friend contact widget.
//!
//! Everything in here is synchronous and side-effect free apart from the
//! store's own mutations: parsing, reconciliation, validation, and staleness
//! classification all take their inputs as plain values and hand results
//! back to the presentation layer. File and terminal I/O live in `wyf-cli`.

pub mod export;
pub mod prompt;
pub mod reconcile;
pub mod registry;
pub mod staleness;
pub mod store;
pub mod validate;

pub use export::{export_document, export_filename, is_importable};
pub use prompt::Prompter;
pub use reconcile::{infer_channel, reconcile_import, ImportOutcome};
pub use registry::{FriendWidget, WidgetRegistry};
pub use staleness::{days_since, StalenessBucket};
pub use store::FriendStore;
pub use validate::{validate_contact, validate_submission};
