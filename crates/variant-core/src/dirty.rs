//! # Field-Level Dirty Tracking
//!
//! Every change-tracked object in the content model follows the same
//! convention: construct, mutate through setters that detect changes,
//! query which fields changed, reset back to a clean checkpoint.
//!
//! ## Pieces
//!
//! - [`TrackedField`]: an enum naming the tracked fields of one type.
//! - [`DirtyFlags`]: the explicit set of changed fields, plus the set that
//!   was dirty before the last remembering reset.
//! - [`DirtyTracking`]: the query/reset surface exposed to callers, keyed by
//!   property name so that heterogeneous objects can be inspected uniformly.
//!
//! Dirty state is process-local. It is never serialized and never copied by
//! `Clone`.

use std::collections::BTreeSet;
use std::fmt::Debug;

/// The set of tracked fields of one change-tracked type.
pub trait TrackedField: Copy + Ord + Debug + 'static {
    /// Every field, in declaration order.
    const ALL: &'static [Self];

    /// The property name reported to callers.
    fn name(self) -> &'static str;

    /// Resolve a property name to a field.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }
}

/// Change-tracking state for the fields `F` of one object.
#[derive(Debug, PartialEq, Eq)]
pub struct DirtyFlags<F: TrackedField> {
    current: BTreeSet<F>,
    previous: BTreeSet<F>,
    tracking: bool,
}

impl<F: TrackedField> DirtyFlags<F> {
    /// A clean set with tracking enabled.
    pub fn new() -> Self {
        Self {
            current: BTreeSet::new(),
            previous: BTreeSet::new(),
            tracking: true,
        }
    }

    /// Store `value` into `slot` if it differs from the current value.
    ///
    /// Marks `field` dirty when the value changed and tracking is enabled.
    /// Returns whether the stored value changed.
    pub fn set_if_changed<T: PartialEq>(&mut self, field: F, slot: &mut T, value: T) -> bool {
        if *slot == value {
            return false;
        }
        *slot = value;
        if self.tracking {
            self.current.insert(field);
        }
        true
    }

    /// Flag a field as dirty unconditionally.
    pub fn mark(&mut self, field: F) {
        self.current.insert(field);
    }

    /// Clear a single flag.
    pub fn clear(&mut self, field: F) {
        self.current.remove(&field);
    }

    /// Whether any field is dirty.
    pub fn is_dirty(&self) -> bool {
        !self.current.is_empty()
    }

    /// Whether `field` is dirty.
    pub fn is_field_dirty(&self, field: F) -> bool {
        self.current.contains(&field)
    }

    /// The dirty fields, in field order.
    pub fn dirty_fields(&self) -> impl Iterator<Item = F> + '_ {
        self.current.iter().copied()
    }

    /// Clear all flags.
    ///
    /// With `remember`, the cleared flags become the "was dirty" set queried
    /// through [`was_dirty`](Self::was_dirty). Without it, that set is
    /// cleared as well.
    pub fn reset(&mut self, remember: bool) {
        let cleared = std::mem::take(&mut self.current);
        self.previous = if remember { cleared } else { BTreeSet::new() };
    }

    /// Whether any field was dirty before the last remembering reset.
    pub fn was_dirty(&self) -> bool {
        !self.previous.is_empty()
    }

    /// Whether `field` was dirty before the last remembering reset.
    pub fn was_field_dirty(&self, field: F) -> bool {
        self.previous.contains(&field)
    }

    /// Drop the remembered flags.
    pub fn forget_previous(&mut self) {
        self.previous.clear();
    }

    /// Stop flagging changes. Setters still store values.
    pub fn disable_tracking(&mut self) {
        self.tracking = false;
    }

    /// Resume flagging changes.
    pub fn enable_tracking(&mut self) {
        self.tracking = true;
    }

    /// Whether setters currently flag changes.
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }
}

impl<F: TrackedField> Default for DirtyFlags<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// A clone starts from a clean baseline.
impl<F: TrackedField> Clone for DirtyFlags<F> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

/// The query and reset surface of a change-tracked object.
///
/// Property names are the ones reported by the type's [`TrackedField`]s.
/// Unknown names are never dirty.
pub trait DirtyTracking {
    /// Whether anything changed since construction or the last reset.
    fn is_dirty(&self) -> bool;

    /// Whether the named property changed.
    fn is_property_dirty(&self, property: &str) -> bool;

    /// Names of the changed properties.
    fn dirty_properties(&self) -> Vec<&'static str>;

    /// Clear all dirty flags, optionally remembering them.
    fn reset_dirty_properties(&mut self, remember: bool);

    /// Whether anything was dirty before the last remembering reset.
    fn was_dirty(&self) -> bool;

    /// Whether the named property was dirty before the last remembering reset.
    fn was_property_dirty(&self, property: &str) -> bool;

    /// Clear all dirty flags without altering any field value.
    fn reset_dirty(&mut self) {
        self.reset_dirty_properties(false);
    }
}
