//! # Temporal Types: UTC Timestamps
//!
//! Defines [`Timestamp`], the UTC instant recorded as a variant's
//! last-modified date. A variant that has never been touched carries
//! [`Timestamp::UNSET`], the Unix epoch.
//!
//! Sub-second precision is preserved: the dirty-tracking setters compare
//! timestamps for equality, so truncation would hide real changes.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::VariantError;

/// A UTC timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The "unset" timestamp: `1970-01-01T00:00:00Z`.
    pub const UNSET: Timestamp = Timestamp(DateTime::<Utc>::UNIX_EPOCH);

    /// The current UTC time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Wrap a `chrono::DateTime<Utc>`.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Create a timestamp from Unix epoch seconds.
    pub fn from_epoch_secs(secs: i64) -> Result<Self, VariantError> {
        let dt = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| VariantError::InvalidTimestamp(format!("Unix seconds out of range: {secs}")))?;
        Ok(Self(dt))
    }

    /// Parse an RFC 3339 string.
    ///
    /// **Only the `Z` suffix is accepted.** Explicit offsets, including
    /// `+00:00`, are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::InvalidTimestamp`] if the string is not valid
    /// RFC 3339 or does not end in `Z`.
    pub fn parse(s: &str) -> Result<Self, VariantError> {
        if !s.ends_with('Z') {
            return Err(VariantError::InvalidTimestamp(format!(
                "expected Z suffix (UTC only), got: {s:?}"
            )));
        }
        Self::parse_lenient(s)
    }

    /// Parse an RFC 3339 string with any offset, converting it to UTC.
    pub fn parse_lenient(s: &str) -> Result<Self, VariantError> {
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| VariantError::InvalidTimestamp(format!("{s:?}: {e}")))?;
        Ok(Self(dt.with_timezone(&Utc)))
    }

    /// Whether this is [`Timestamp::UNSET`].
    pub fn is_unset(&self) -> bool {
        *self == Self::UNSET
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Unix epoch seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Render as RFC 3339 with a `Z` suffix, omitting sub-seconds when zero.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::UNSET
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}
