//! # Culture Variant Info
//!
//! [`CultureVariantInfo`] is the name and last-modified date of one culture
//! variant of a content item. The culture is fixed for the lifetime of the
//! value; the name and date are change-tracked.
//!
//! ## Identity
//!
//! Equality and hashing cover `(culture, name)` only. Two variants with the
//! same culture and name are equal whatever their timestamps or dirty state,
//! so a variant can be looked up by what a reader sees.
//!
//! ## Cloning
//!
//! `Clone` goes through [`CultureVariantInfo::with_values`], which bypasses
//! change detection: the copy is a clean baseline.

use serde::{Deserialize, Serialize};

use crate::culture::Culture;
use crate::dirty::{DirtyFlags, DirtyTracking, TrackedField};
use crate::error::VariantError;
use crate::temporal::Timestamp;

/// The change-tracked fields of a [`CultureVariantInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariantField {
    /// The localized display name.
    Name,
    /// The last-modified timestamp.
    LastModified,
}

impl TrackedField for VariantField {
    const ALL: &'static [Self] = &[Self::Name, Self::LastModified];

    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::LastModified => "lastModified",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "lastModified" | "date" => Some(Self::LastModified),
            _ => None,
        }
    }
}

/// The name and date of a content variant for one culture.
#[derive(Debug)]
pub struct CultureVariantInfo {
    culture: Culture,
    name: String,
    last_modified: Timestamp,
    dirty: DirtyFlags<VariantField>,
}

impl CultureVariantInfo {
    /// Create a variant for `culture` with an empty name and an unset date.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::InvalidArgument`] if `culture` is empty or
    /// whitespace-only.
    pub fn new(culture: impl Into<String>) -> Result<Self, VariantError> {
        Ok(Self::from_culture(Culture::new(culture)?))
    }

    /// Create a variant for an already validated culture.
    pub fn from_culture(culture: Culture) -> Self {
        Self::with_values(culture, String::new(), Timestamp::UNSET)
    }

    /// Create a variant with all fields set and no dirty flags.
    pub fn with_values(culture: Culture, name: impl Into<String>, last_modified: Timestamp) -> Self {
        Self {
            culture,
            name: name.into(),
            last_modified,
            dirty: DirtyFlags::new(),
        }
    }

    /// The culture this variant belongs to.
    pub fn culture(&self) -> &Culture {
        &self.culture
    }

    /// The localized display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the name. Flags `name` dirty only if the value differs.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.dirty
            .set_if_changed(VariantField::Name, &mut self.name, name.into());
    }

    /// The last-modified timestamp.
    pub fn last_modified(&self) -> Timestamp {
        self.last_modified
    }

    /// Set the last-modified timestamp. Flags `lastModified` dirty only if
    /// the value differs.
    pub fn set_last_modified(&mut self, last_modified: Timestamp) {
        self.dirty.set_if_changed(
            VariantField::LastModified,
            &mut self.last_modified,
            last_modified,
        );
    }

    /// Whether a specific field is dirty.
    pub fn is_field_dirty(&self, field: VariantField) -> bool {
        self.dirty.is_field_dirty(field)
    }

    /// The dirty fields, in declaration order.
    pub fn dirty_fields(&self) -> Vec<VariantField> {
        self.dirty.dirty_fields().collect()
    }

    /// Stop flagging changes, e.g. while hydrating from storage.
    pub fn disable_change_tracking(&mut self) {
        self.dirty.disable_tracking();
    }

    /// Resume flagging changes.
    pub fn enable_change_tracking(&mut self) {
        self.dirty.enable_tracking();
    }

    /// `(culture, name)`.
    pub fn parts(&self) -> (&Culture, &str) {
        (&self.culture, &self.name)
    }

    /// `(culture, name, last_modified)`.
    pub fn parts_with_last_modified(&self) -> (&Culture, &str, Timestamp) {
        (&self.culture, &self.name, self.last_modified)
    }

    /// Consume the variant into `(culture, name, last_modified)`.
    pub fn into_parts(self) -> (Culture, String, Timestamp) {
        (self.culture, self.name, self.last_modified)
    }
}

impl DirtyTracking for CultureVariantInfo {
    fn is_dirty(&self) -> bool {
        self.dirty.is_dirty()
    }

    fn is_property_dirty(&self, property: &str) -> bool {
        VariantField::from_name(property).is_some_and(|f| self.dirty.is_field_dirty(f))
    }

    fn dirty_properties(&self) -> Vec<&'static str> {
        self.dirty.dirty_fields().map(TrackedField::name).collect()
    }

    fn reset_dirty_properties(&mut self, remember: bool) {
        self.dirty.reset(remember);
    }

    fn was_dirty(&self) -> bool {
        self.dirty.was_dirty()
    }

    fn was_property_dirty(&self, property: &str) -> bool {
        VariantField::from_name(property).is_some_and(|f| self.dirty.was_field_dirty(f))
    }
}

impl Clone for CultureVariantInfo {
    fn clone(&self) -> Self {
        Self::with_values(self.culture.clone(), self.name.clone(), self.last_modified)
    }
}

impl PartialEq for CultureVariantInfo {
    fn eq(&self, other: &Self) -> bool {
        self.culture == other.culture && self.name == other.name
    }
}

impl Eq for CultureVariantInfo {}

impl std::hash::Hash for CultureVariantInfo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.culture.hash(state);
        self.name.hash(state);
    }
}

impl std::fmt::Display for CultureVariantInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.culture, self.name)
    }
}

// ─── Serde ───────────────────────────────────────────────────────────

#[derive(Serialize)]
struct VariantRecordRef<'a> {
    culture: &'a Culture,
    name: &'a str,
    last_modified: Timestamp,
}

#[derive(Deserialize)]
struct VariantRecord {
    culture: Culture,
    #[serde(default)]
    name: String,
    #[serde(default)]
    last_modified: Timestamp,
}

impl Serialize for CultureVariantInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        VariantRecordRef {
            culture: &self.culture,
            name: &self.name,
            last_modified: self.last_modified,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CultureVariantInfo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let record = VariantRecord::deserialize(deserializer)?;
        Ok(Self::with_values(record.culture, record.name, record.last_modified))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
