//! # Culture Identifier
//!
//! A [`Culture`] is the locale tag (e.g. `en-US`, `da-DK`) that keys one
//! localized variant of a content item. It is validated at construction and
//! at deserialization: an empty or whitespace-only tag is never a culture.
//!
//! The tag is stored exactly as given. Equality is ordinal (case-sensitive);
//! case-insensitive lookup goes through [`Culture::lookup_key`].

use serde::{Deserialize, Serialize};

use crate::error::VariantError;

/// A validated, non-blank culture identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Culture(String);

impl Culture {
    /// Create a culture from a string.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::InvalidArgument`] if the value is empty or
    /// consists only of whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, VariantError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(VariantError::InvalidArgument {
                argument: "culture",
                reason: "must not be empty or whitespace".to_string(),
            });
        }
        Ok(Self(s))
    }

    /// The culture tag as given at construction.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the culture, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Case-insensitive lookup key (ASCII-lowercased).
    pub fn lookup_key(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl<'de> Deserialize<'de> for Culture {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for Culture {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Culture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Culture {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Culture {
    type Error = VariantError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Culture {
    type Error = VariantError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
