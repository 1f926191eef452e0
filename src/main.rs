// SPDX-License-Identifier: PMPL-1.0-or-later

//! po-skeleton: print gettext skeleton entries for the Compilot AI settings screen
//!
//! With no arguments, every entry is written to stdout as a `msgid`/`msgstr`
//! record followed by a blank line. Redirect the output into a `.po` file.

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::*;
use po_skeleton::i18n::{self, Category};
use po_skeleton::report;
use po_skeleton::types::{EmitOptions, OutputFormat};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "po-skeleton")]
#[command(version)]
#[command(about = "Print gettext skeleton entries for the Compilot AI settings screen")]
#[command(long_about = None)]
struct Cli {
    /// Write entries to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "po")]
    format: FormatArg,

    /// Only emit these categories (comma-separated)
    #[arg(short, long, value_delimiter = ',', value_parser = parse_category)]
    category: Vec<Category>,

    /// Precede each category with a `#.` comment (PO only)
    #[arg(long)]
    comments: bool,

    /// Prepend a PO header entry (PO only)
    #[arg(long)]
    header: bool,

    /// List categories with entry counts and exit
    #[arg(long)]
    list_categories: bool,

    /// Status notes on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Po,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Po => OutputFormat::Po,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn parse_category(slug: &str) -> Result<Category, String> {
    Category::from_slug(slug).ok_or_else(|| {
        let known: Vec<String> = Category::all().iter().map(|c| c.to_string()).collect();
        format!("unknown category '{}' (expected one of: {})", slug, known.join(", "))
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    i18n::validate(i18n::entries()).context("entry table is inconsistent")?;

    if cli.list_categories {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for category in Category::all() {
            writeln!(
                out,
                "{}\t{}\t{}",
                category.slug(),
                i18n::by_category(*category).count(),
                category.title()
            )
            .context("writing category list")?;
        }
        return Ok(());
    }

    if matches!(cli.format, FormatArg::Json) && (cli.header || cli.comments) {
        bail!("--header and --comments apply to PO output only, not --format json");
    }

    let options = EmitOptions {
        format: cli.format.into(),
        categories: cli.category,
        comments: cli.comments,
        header: cli.header,
    };

    let written = match &cli.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            report::emit(&mut BufWriter::new(file), i18n::entries(), &options)?
        }
        None => {
            let stdout = io::stdout();
            report::emit(&mut BufWriter::new(stdout.lock()), i18n::entries(), &options)?
        }
    };

    if cli.verbose {
        let destination = cli
            .output
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdout".to_string());
        eprintln!(
            "{} {} entries to {}",
            "Wrote".green().bold(),
            written,
            destination
        );
    }

    Ok(())
}
