//! # Edit Subcommand
//!
//! `variant edit <FILE> --set CULTURE=NAME ...` applies name edits to a
//! variants document through [`CultureVariants::add_or_update`] and reports,
//! per culture, whether the variant was added, changed, or left untouched.
//!
//! The document is printed to stdout unless `--write` is given, in which
//! case it is written back in place. The report always goes to stderr.

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use variant_core::{CultureVariants, DirtyTracking, Timestamp};

use crate::document::{self, DocumentFormat};

/// Arguments for the `variant edit` subcommand.
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Variants document (JSON or YAML).
    pub file: PathBuf,

    /// Name to set for a culture. Repeatable.
    #[arg(long = "set", value_name = "CULTURE=NAME", value_parser = parse_assignment, required = true)]
    pub assignments: Vec<(String, String)>,

    /// Last-modified timestamp (RFC 3339) for every edit. Defaults to now.
    #[arg(long)]
    pub at: Option<String>,

    /// Write the result back to FILE instead of printing it.
    #[arg(long)]
    pub write: bool,

    /// Document format. Defaults to the file extension.
    #[arg(long, value_enum)]
    pub format: Option<DocumentFormat>,
}

/// Split `CULTURE=NAME` at the first `=`.
///
/// The culture itself is validated later, by the collection.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(culture, name)| (culture.to_string(), name.to_string()))
        .ok_or_else(|| format!("expected CULTURE=NAME, got {raw:?}"))
}

/// What an edit did to one culture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// A new variant was created.
    Added,
    /// An existing variant changed these properties.
    Changed(Vec<&'static str>),
    /// The variant already had these values.
    Unchanged,
}

/// Per-culture outcomes, in the order cultures were first edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditReport {
    /// `(culture, outcome)` pairs.
    pub entries: Vec<(String, EditOutcome)>,
}

impl EditReport {
    /// Whether any edit changed the document.
    pub fn has_changes(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, outcome)| *outcome != EditOutcome::Unchanged)
    }
}

impl fmt::Display for EditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (culture, outcome) in &self.entries {
            match outcome {
                EditOutcome::Added => writeln!(f, "added      {culture}")?,
                EditOutcome::Changed(props) => {
                    writeln!(f, "changed    {culture} ({})", props.join(", "))?
                }
                EditOutcome::Unchanged => writeln!(f, "unchanged  {culture}")?,
            }
        }
        Ok(())
    }
}

/// Apply `assignments` to `variants` and report the outcome per culture.
///
/// `variants` is expected to be clean on entry (freshly loaded); the report
/// is derived from the dirty state the edits leave behind.
pub fn apply_edits(
    variants: &mut CultureVariants,
    assignments: &[(String, String)],
    at: Timestamp,
) -> Result<EditReport> {
    let mut added: Vec<String> = Vec::new();
    let mut order: Vec<String> = Vec::new();

    for (culture, name) in assignments {
        let existed = variants.contains(culture);
        variants
            .add_or_update(culture.as_str(), name.as_str(), at)
            .with_context(|| format!("cannot set name for culture {culture:?}"))?;
        let key = culture.to_ascii_lowercase();
        if !existed {
            added.push(key.clone());
        }
        if !order.contains(&key) {
            order.push(key);
        }
    }

    let mut report = EditReport::default();
    for key in order {
        let Some(variant) = variants.get(&key) else {
            continue;
        };
        let outcome = if added.contains(&key) {
            EditOutcome::Added
        } else if variant.is_dirty() {
            EditOutcome::Changed(variant.dirty_properties())
        } else {
            EditOutcome::Unchanged
        };
        report.entries.push((variant.culture().to_string(), outcome));
    }
    Ok(report)
}

/// Execute the edit subcommand.
pub fn run_edit(args: &EditArgs) -> Result<u8> {
    let format = DocumentFormat::resolve(args.format, &args.file);
    let at = match &args.at {
        Some(raw) => Timestamp::parse_lenient(raw).context("invalid --at timestamp")?,
        None => Timestamp::now(),
    };

    let mut variants = document::load(&args.file, format)?;
    let report = apply_edits(&mut variants, &args.assignments, at)?;
    eprint!("{report}");

    if args.write {
        if report.has_changes() {
            document::save(&args.file, format, &variants)?;
        } else {
            tracing::info!(path = %args.file.display(), "no changes; document left as is");
        }
    } else {
        print!("{}", format.render(&variants)?);
    }
    Ok(0)
}
