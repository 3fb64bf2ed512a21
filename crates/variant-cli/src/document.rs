//! Loading and saving variants documents.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use variant_core::CultureVariants;

/// On-disk format of a variants document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentFormat {
    /// JSON array of variant records.
    Json,
    /// YAML sequence of variant records.
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from an explicit choice or the file extension.
    ///
    /// `.yaml` and `.yml` select YAML; anything else is JSON.
    pub fn resolve(explicit: Option<Self>, path: &Path) -> Self {
        if let Some(format) = explicit {
            return format;
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }

    /// Parse a document.
    pub fn parse(self, text: &str) -> Result<CultureVariants> {
        let variants: CultureVariants = match self {
            Self::Json => serde_json::from_str(text).context("invalid JSON variants document")?,
            Self::Yaml => serde_yaml::from_str(text).context("invalid YAML variants document")?,
        };
        Ok(variants)
    }

    /// Render a document.
    pub fn render(self, variants: &CultureVariants) -> Result<String> {
        let text = match self {
            Self::Json => {
                let mut s = serde_json::to_string_pretty(variants)?;
                s.push('\n');
                s
            }
            Self::Yaml => serde_yaml::to_string(variants)?,
        };
        Ok(text)
    }
}

/// Read and parse a variants document.
pub fn load(path: &Path, format: DocumentFormat) -> Result<CultureVariants> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let variants = format
        .parse(&text)
        .with_context(|| format!("failed to load {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = variants.len(), "loaded variants document");
    Ok(variants)
}

/// Render and write a variants document.
pub fn save(path: &Path, format: DocumentFormat, variants: &CultureVariants) -> Result<()> {
    let text = format.render(variants)?;
    std::fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), count = variants.len(), "wrote variants document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use variant_core::{DirtyTracking, Timestamp};

    #[test]
    fn test_resolve_by_extension() {
        assert_eq!(DocumentFormat::resolve(None, Path::new("v.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::resolve(None, Path::new("v.YML")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::resolve(None, Path::new("v.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::resolve(None, Path::new("variants")), DocumentFormat::Json);
        assert_eq!(
            DocumentFormat::resolve(Some(DocumentFormat::Json), Path::new("v.yaml")),
            DocumentFormat::Json
        );
    }

    #[test]
    fn test_yaml_document_loads_clean() {
        let yaml = "- culture: en-US\n  name: Home\n  last_modified: 2026-01-15T12:00:00Z\n";
        let variants = DocumentFormat::Yaml.parse(yaml).unwrap();
        assert_eq!(variants.len(), 1);
        assert_eq!(
            variants.get("en-us").unwrap().last_modified(),
            Timestamp::parse("2026-01-15T12:00:00Z").unwrap()
        );
        assert!(!variants.is_dirty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("variants.json");

        let mut variants = CultureVariants::new();
        variants
            .add_or_update("en-US", "Home", Timestamp::parse("2026-01-15T12:00:00Z").unwrap())
            .unwrap();
        save(&path, DocumentFormat::Json, &variants).unwrap();

        let loaded = load(&path, DocumentFormat::Json).unwrap();
        assert_eq!(loaded, variants);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("absent.json"), DocumentFormat::Json).is_err());
    }

    #[test]
    fn test_blank_culture_rejected() {
        assert!(DocumentFormat::Json.parse(r#"[{"culture":""}]"#).is_err());
    }
}
