//! # Culture Variant Collection
//!
//! The content item keeps one [`CultureVariantInfo`] per culture in a
//! [`CultureVariants`] collection. Lookups are case-insensitive on the
//! culture tag; the tag itself is stored as first given.
//!
//! The collection is itself change-tracked. Adding, replacing or removing a
//! variant flags the `cultures` property; editing a contained variant makes
//! the collection dirty through that variant.

use std::collections::btree_map::{self, BTreeMap, Entry};

use serde::{Deserialize, Serialize};

use crate::culture::Culture;
use crate::culture_info::CultureVariantInfo;
use crate::dirty::{DirtyFlags, DirtyTracking, TrackedField};
use crate::error::VariantError;
use crate::temporal::Timestamp;

/// Change-tracked properties of a [`CultureVariants`] collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CollectionField {
    /// The set of cultures present.
    Cultures,
}

impl TrackedField for CollectionField {
    const ALL: &'static [Self] = &[Self::Cultures];

    fn name(self) -> &'static str {
        match self {
            Self::Cultures => "cultures",
        }
    }
}

/// Culture variants of one content item, keyed case-insensitively by culture.
#[derive(Debug, Default)]
pub struct CultureVariants {
    items: BTreeMap<String, CultureVariantInfo>,
    dirty: DirtyFlags<CollectionField>,
}

impl CultureVariants {
    /// An empty, clean collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a clean collection from variants.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::DuplicateCulture`] if two variants share a
    /// culture (compared case-insensitively).
    pub fn try_from_variants(
        variants: impl IntoIterator<Item = CultureVariantInfo>,
    ) -> Result<Self, VariantError> {
        let mut items: BTreeMap<String, CultureVariantInfo> = BTreeMap::new();
        for mut variant in variants {
            match items.entry(variant.culture().lookup_key()) {
                Entry::Occupied(_) => {
                    return Err(VariantError::DuplicateCulture(variant.culture().to_string()));
                }
                Entry::Vacant(e) => {
                    variant.reset_dirty();
                    e.insert(variant);
                }
            }
        }
        Ok(Self {
            items,
            dirty: DirtyFlags::new(),
        })
    }

    /// Number of variants.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no variants.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a variant exists for `culture` (case-insensitive).
    pub fn contains(&self, culture: &str) -> bool {
        self.items.contains_key(&culture.to_ascii_lowercase())
    }

    /// The variant for `culture` (case-insensitive).
    pub fn get(&self, culture: &str) -> Option<&CultureVariantInfo> {
        self.items.get(&culture.to_ascii_lowercase())
    }

    /// Mutable access to the variant for `culture` (case-insensitive).
    ///
    /// Edits made through the returned reference are tracked by the variant.
    pub fn get_mut(&mut self, culture: &str) -> Option<&mut CultureVariantInfo> {
        self.items.get_mut(&culture.to_ascii_lowercase())
    }

    /// Variants ordered by lower-cased culture.
    pub fn iter(&self) -> impl Iterator<Item = &CultureVariantInfo> {
        self.items.values()
    }

    /// Cultures present, ordered by lower-cased culture.
    pub fn cultures(&self) -> impl Iterator<Item = &Culture> {
        self.items.values().map(CultureVariantInfo::culture)
    }

    /// Set the name and date of the variant for `culture`, creating it if
    /// needed.
    ///
    /// An existing variant is updated through its change-detecting setters,
    /// so re-applying the same values leaves everything clean. A new variant
    /// flags the collection's `cultures` property.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::InvalidArgument`] if `culture` is blank.
    pub fn add_or_update(
        &mut self,
        culture: impl Into<String>,
        name: impl Into<String>,
        last_modified: Timestamp,
    ) -> Result<(), VariantError> {
        let culture = Culture::new(culture)?;
        match self.items.entry(culture.lookup_key()) {
            Entry::Occupied(mut e) => {
                let item = e.get_mut();
                item.set_name(name);
                item.set_last_modified(last_modified);
                tracing::debug!(
                    culture = %item.culture(),
                    dirty = item.is_dirty(),
                    "updated culture variant"
                );
            }
            Entry::Vacant(e) => {
                let mut item = CultureVariantInfo::from_culture(culture);
                item.set_name(name);
                item.set_last_modified(last_modified);
                tracing::debug!(culture = %item.culture(), "added culture variant");
                e.insert(item);
                self.dirty.mark(CollectionField::Cultures);
            }
        }
        Ok(())
    }

    /// Insert a variant, replacing any existing one for the same culture.
    pub fn insert(&mut self, variant: CultureVariantInfo) -> Option<CultureVariantInfo> {
        tracing::debug!(culture = %variant.culture(), "inserted culture variant");
        self.dirty.mark(CollectionField::Cultures);
        self.items.insert(variant.culture().lookup_key(), variant)
    }

    /// Remove the variant for `culture` (case-insensitive).
    pub fn remove(&mut self, culture: &str) -> Option<CultureVariantInfo> {
        let removed = self.items.remove(&culture.to_ascii_lowercase())?;
        tracing::debug!(culture = %removed.culture(), "removed culture variant");
        self.dirty.mark(CollectionField::Cultures);
        Some(removed)
    }

    /// Remove every variant.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        tracing::debug!(count = self.items.len(), "cleared culture variants");
        self.items.clear();
        self.dirty.mark(CollectionField::Cultures);
    }

    /// Cultures whose variant is dirty.
    pub fn dirty_cultures(&self) -> Vec<&Culture> {
        self.items
            .values()
            .filter(|v| v.is_dirty())
            .map(CultureVariantInfo::culture)
            .collect()
    }
}

impl DirtyTracking for CultureVariants {
    fn is_dirty(&self) -> bool {
        self.dirty.is_dirty() || self.items.values().any(DirtyTracking::is_dirty)
    }

    fn is_property_dirty(&self, property: &str) -> bool {
        CollectionField::from_name(property).is_some_and(|f| self.dirty.is_field_dirty(f))
    }

    fn dirty_properties(&self) -> Vec<&'static str> {
        self.dirty.dirty_fields().map(TrackedField::name).collect()
    }

    fn reset_dirty_properties(&mut self, remember: bool) {
        self.dirty.reset(remember);
        for item in self.items.values_mut() {
            item.reset_dirty_properties(remember);
        }
    }

    fn was_dirty(&self) -> bool {
        self.dirty.was_dirty() || self.items.values().any(DirtyTracking::was_dirty)
    }

    fn was_property_dirty(&self, property: &str) -> bool {
        CollectionField::from_name(property).is_some_and(|f| self.dirty.was_field_dirty(f))
    }
}

/// Deep and clean: every variant is cloned clean and no flags carry over.
impl Clone for CultureVariants {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            dirty: DirtyFlags::new(),
        }
    }
}

impl PartialEq for CultureVariants {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for CultureVariants {}

/// Later variants replace earlier ones for the same culture. The result is
/// clean.
impl FromIterator<CultureVariantInfo> for CultureVariants {
    fn from_iter<I: IntoIterator<Item = CultureVariantInfo>>(iter: I) -> Self {
        let items = iter
            .into_iter()
            .map(|mut v| {
                v.reset_dirty();
                (v.culture().lookup_key(), v)
            })
            .collect();
        Self {
            items,
            dirty: DirtyFlags::new(),
        }
    }
}

impl IntoIterator for CultureVariants {
    type Item = CultureVariantInfo;
    type IntoIter = btree_map::IntoValues<String, CultureVariantInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_values()
    }
}

impl<'a> IntoIterator for &'a CultureVariants {
    type Item = &'a CultureVariantInfo;
    type IntoIter = btree_map::Values<'a, String, CultureVariantInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}

impl Serialize for CultureVariants {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.items.values())
    }
}

impl<'de> Deserialize<'de> for CultureVariants {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let variants = Vec::<CultureVariantInfo>::deserialize(deserializer)?;
        Self::try_from_variants(variants).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn sample() -> CultureVariants {
        let mut c = CultureVariants::new();
        c.add_or_update("en-US", "Home", ts("2026-01-15T12:00:00Z")).unwrap();
        c.add_or_update("da-DK", "Forside", ts("2026-01-16T09:30:00Z")).unwrap();
        c.reset_dirty();
        c
    }

    #[test]
    fn test_new_is_empty_and_clean() {
        let c = CultureVariants::new();
        assert!(c.is_empty());
        assert_eq!(c.len(), 0);
        assert!(!c.is_dirty());
    }

    // ---- add_or_update ----

    #[test]
    fn test_add_marks_collection_and_variant_dirty() {
        let mut c = CultureVariants::new();
        c.add_or_update("en-US", "Home", ts("2026-01-15T12:00:00Z")).unwrap();
        assert!(c.is_dirty());
        assert!(c.is_property_dirty("cultures"));
        let v = c.get("en-US").unwrap();
        assert_eq!(v.name(), "Home");
        assert!(v.is_property_dirty("name"));
        assert!(v.is_property_dirty("lastModified"));
    }

    #[test]
    fn test_add_rejects_blank_culture() {
        let mut c = CultureVariants::new();
        let err = c.add_or_update("  ", "Home", Timestamp::now()).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(c.is_empty());
        assert!(!c.is_dirty());
    }

    #[test]
    fn test_update_with_same_values_stays_clean() {
        let mut c = sample();
        c.add_or_update("en-US", "Home", ts("2026-01-15T12:00:00Z")).unwrap();
        assert!(!c.is_dirty());
    }

    #[test]
    fn test_update_is_case_insensitive_and_keeps_original_tag() {
        let mut c = sample();
        c.add_or_update("EN-us", "Start", ts("2026-01-15T12:00:00Z")).unwrap();
        assert_eq!(c.len(), 2);
        assert!(c.is_dirty());
        assert!(!c.is_property_dirty("cultures"));

        let v = c.get("en-us").unwrap();
        assert_eq!(v.culture().as_str(), "en-US");
        assert_eq!(v.name(), "Start");
        assert!(v.is_property_dirty("name"));
        assert!(!v.is_property_dirty("lastModified"));

        let dirty: Vec<&str> = c.dirty_cultures().into_iter().map(Culture::as_str).collect();
        assert_eq!(dirty, vec!["en-US"]);
    }

    // ---- insert / remove / clear ----

    #[test]
    fn test_insert_replaces() {
        let mut c = sample();
        let replaced = c.insert(CultureVariantInfo::with_values(
            Culture::new("da-dk").unwrap(),
            "Hjem",
            Timestamp::UNSET,
        ));
        assert_eq!(replaced.unwrap().name(), "Forside");
        assert_eq!(c.get("DA-DK").unwrap().name(), "Hjem");
        assert!(c.is_property_dirty("cultures"));
    }

    #[test]
    fn test_remove() {
        let mut c = sample();
        assert!(c.remove("nl-NL").is_none());
        assert!(!c.is_dirty());

        let removed = c.remove("DA-dk").unwrap();
        assert_eq!(removed.name(), "Forside");
        assert!(!c.contains("da-DK"));
        assert!(c.is_property_dirty("cultures"));
    }

    #[test]
    fn test_clear() {
        let mut c = CultureVariants::new();
        c.clear();
        assert!(!c.is_dirty());

        let mut c = sample();
        c.clear();
        assert!(c.is_empty());
        assert!(c.is_dirty());
    }

    #[test]
    fn test_get_mut_edits_are_tracked() {
        let mut c = sample();
        c.get_mut("en-US").unwrap().set_name("Welcome");
        assert!(c.is_dirty());
        assert!(c.dirty_properties().is_empty());
    }

    // ---- iteration ----

    #[test]
    fn test_iteration_ordered_by_lookup_key() {
        let c = sample();
        let cultures: Vec<&str> = c.cultures().map(Culture::as_str).collect();
        assert_eq!(cultures, vec!["da-DK", "en-US"]);
        let names: Vec<&str> = (&c).into_iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!["Forside", "Home"]);
    }

    // ---- reset / clone / equality ----

    #[test]
    fn test_reset_remembering_covers_variants() {
        let mut c = CultureVariants::new();
        c.add_or_update("en-US", "Home", Timestamp::now()).unwrap();
        c.reset_dirty_properties(true);
        assert!(!c.is_dirty());
        assert!(c.was_dirty());
        assert!(c.was_property_dirty("cultures"));
        assert!(c.get("en-US").unwrap().was_property_dirty("name"));
    }

    #[test]
    fn test_clone_is_deep_and_clean() {
        let mut c = sample();
        c.add_or_update("fr-FR", "Accueil", Timestamp::now()).unwrap();
        let copy = c.clone();
        assert_eq!(copy, c);
        assert!(!copy.is_dirty());
        assert!(c.is_dirty());
    }

    #[test]
    fn test_from_iter_last_wins() {
        let c: CultureVariants = [
            CultureVariantInfo::with_values(Culture::new("en-US").unwrap(), "A", Timestamp::UNSET),
            CultureVariantInfo::with_values(Culture::new("EN-US").unwrap(), "B", Timestamp::UNSET),
        ]
        .into_iter()
        .collect();
        assert_eq!(c.len(), 1);
        assert_eq!(c.get("en-us").unwrap().name(), "B");
        assert!(!c.is_dirty());
    }

    #[test]
    fn test_try_from_variants_rejects_duplicates() {
        let err = CultureVariants::try_from_variants([
            CultureVariantInfo::new("en-US").unwrap(),
            CultureVariantInfo::new("en-us").unwrap(),
        ])
        .unwrap_err();
        assert_eq!(err, VariantError::DuplicateCulture("en-us".to_string()));
    }

    // ---- serde ----

    #[test]
    fn test_serde_roundtrip_is_clean() {
        let mut c = sample();
        c.get_mut("en-US").unwrap().set_name("Welcome");
        let json = serde_json::to_string(&c).unwrap();
        let parsed: CultureVariants = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, c);
        assert!(!parsed.is_dirty());
    }

    #[test]
    fn test_deserialize_rejects_duplicates() {
        let json = r#"[{"culture":"en-US","name":"a"},{"culture":"EN-US","name":"b"}]"#;
        let result: Result<CultureVariants, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
