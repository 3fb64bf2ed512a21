//! # variant-cli — Culture Variant Command-Line Interface
//!
//! Reads a variants document (a JSON or YAML list of
//! `{culture, name, last_modified}` records), shows it, or applies name
//! edits through the same change-detecting path a content item uses and
//! reports what became dirty.
//!
//! ## Subcommands
//!
//! - `show`: list the variants in a document
//! - `edit`: add or update variants and report dirty state
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate to `variant-core`; no variant semantics live here.

pub mod document;
pub mod edit;
pub mod show;
