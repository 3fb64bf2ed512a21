//! # Show Subcommand
//!
//! `variant show <FILE>` lists the variants of a document, one per line.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use variant_core::{CultureVariants, DirtyTracking};

use crate::document::{self, DocumentFormat};

/// Arguments for the `variant show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Variants document (JSON or YAML).
    pub file: PathBuf,

    /// Document format. Defaults to the file extension.
    #[arg(long, value_enum)]
    pub format: Option<DocumentFormat>,
}

/// Execute the show subcommand.
pub fn run_show(args: &ShowArgs) -> Result<u8> {
    let format = DocumentFormat::resolve(args.format, &args.file);
    let variants = document::load(&args.file, format)?;
    print!("{}", render_table(&variants));
    Ok(0)
}

/// One line per variant: culture, name, last-modified. Dirty variants are
/// marked with `*`.
pub fn render_table(variants: &CultureVariants) -> String {
    let width = variants
        .cultures()
        .map(|c| c.as_str().chars().count())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for v in variants {
        let marker = if v.is_dirty() { "*" } else { " " };
        let (culture, name, last_modified) = v.parts_with_last_modified();
        let last_modified = if last_modified.is_unset() {
            "-".to_string()
        } else {
            last_modified.to_string()
        };
        out.push_str(&format!(
            "{marker} {:<width$}  {last_modified:<24}  {name}\n",
            culture.as_str()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use variant_core::Timestamp;

    #[test]
    fn test_render_table() {
        let mut variants = CultureVariants::new();
        variants
            .add_or_update("en-US", "Home", Timestamp::parse("2026-01-15T12:00:00Z").unwrap())
            .unwrap();
        variants.add_or_update("da", "Forside", Timestamp::UNSET).unwrap();
        variants.reset_dirty();
        variants.get_mut("en-US").unwrap().set_name("Welcome");

        let table = render_table(&variants);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].trim_end(), "  da     -                         Forside");
        assert_eq!(lines[1].trim_end(), "* en-US  2026-01-15T12:00:00Z      Welcome");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_table(&CultureVariants::new()), "");
    }
}
