//! # variant-core — Culture Variants of Content Items
//!
//! A content item that is published in several cultures carries one small
//! record per culture: the localized display name and the moment that
//! variant was last modified. This crate defines that record,
//! [`CultureVariantInfo`], and the culture-keyed collection the owning
//! content item keeps them in, [`CultureVariants`].
//!
//! ## Key Design Principles
//!
//! 1. **Validated culture identifiers.** A [`Culture`] can only be built from
//!    a non-blank string. Once a variant exists its culture never changes.
//!
//! 2. **Explicit field-level dirty tracking.** Every setter compares the new
//!    value against the stored one and flags the field only when it actually
//!    changed. Flags live in a [`DirtyFlags`] set keyed by a field enum.
//!    There is no reflection and no external diffing.
//!
//! 3. **Identity is coarser than state.** Two variants are equal when their
//!    culture and name match. The timestamp and dirty flags are excluded.
//!
//! 4. **Clones are clean.** Cloning a variant or a collection yields a fresh
//!    baseline with no dirty flags set.
//!
//! ## Crate Policy
//!
//! - No dependencies on other workspace crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Dirty state is transient: it is never serialized.
//! - No internal synchronization. The owning aggregate serializes access.

pub mod collection;
pub mod culture;
pub mod culture_info;
pub mod dirty;
pub mod error;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use collection::CultureVariants;
pub use culture::Culture;
pub use culture_info::{CultureVariantInfo, VariantField};
pub use dirty::{DirtyFlags, DirtyTracking, TrackedField};
pub use error::VariantError;
pub use temporal::Timestamp;
