// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog emission

pub mod formatter;
pub mod json;

use crate::i18n::{Category, Entry};
use crate::types::{EmitOptions, OutputFormat};
use anyhow::{Context, Result};
use std::io::Write;

pub use formatter::{escape, PoFormatter};
pub use json::write_json;

/// Entries selected by `options`, in table order
pub fn select<'a>(entries: &'a [Entry], options: &EmitOptions) -> Vec<&'a Entry> {
    entries
        .iter()
        .filter(|entry| options.includes(entry.category))
        .collect()
}

/// Write one PO record. `previous` is the category of the record before it,
/// `None` at the start of output.
pub fn write_entry<W: Write>(
    out: &mut W,
    entry: &Entry,
    previous: Option<Category>,
    options: &EmitOptions,
) -> Result<()> {
    PoFormatter::new(options).write_entry(out, entry, previous)
}

/// Write the selected entries and flush. Returns the number of entries written.
pub fn emit<W: Write>(out: &mut W, entries: &[Entry], options: &EmitOptions) -> Result<usize> {
    let selected = select(entries, options);
    let written = match options.format {
        OutputFormat::Po => PoFormatter::new(options).write_entries(out, selected)?,
        OutputFormat::Json => write_json(out, selected)?,
    };
    out.flush().context("flushing output")?;
    Ok(written)
}

/// Render to a string
pub fn render(entries: &[Entry], options: &EmitOptions) -> Result<String> {
    let mut buf = Vec::new();
    emit(&mut buf, entries, options)?;
    String::from_utf8(buf).context("rendered output is not UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{entries, lookup};
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct UnflushablePipe(Vec<u8>);

    impl Write for UnflushablePipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn flush_failure_propagates() {
        let mut out = UnflushablePipe(Vec::new());
        let err = emit(&mut out, entries(), &EmitOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "flushing output");
        let io_err = err.downcast_ref::<io::Error>().expect("io error in chain");
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
        assert!(out.0.starts_with(b"msgid \"Settings saved successfully!\"\n"));
    }

    #[test]
    fn write_entry_plain_record() {
        let entry = lookup("Primary Color").expect("entry");
        let mut buf = Vec::new();
        write_entry(&mut buf, entry, None, &EmitOptions::default()).expect("write to Vec");
        assert_eq!(buf, b"msgid \"Primary Color\"\nmsgstr \"Primary Color\"\n\n");
    }

    #[test]
    fn write_entry_comments_once_per_run() {
        let options = EmitOptions {
            comments: true,
            ..EmitOptions::default()
        };
        let labels = lookup("Primary Color").expect("entry");
        let buttons = lookup("Save Settings").expect("entry");

        let mut buf = Vec::new();
        write_entry(&mut buf, labels, Some(Category::Headers), &options).expect("write to Vec");
        write_entry(&mut buf, labels, Some(Category::Labels), &options).expect("write to Vec");
        write_entry(&mut buf, buttons, Some(Category::Labels), &options).expect("write to Vec");

        let text = String::from_utf8(buf).expect("utf-8");
        assert_eq!(text.matches("#. Field labels\n").count(), 1);
        assert!(text.starts_with("#. Field labels\nmsgid \"Primary Color\"\n"));
        assert!(text.contains("\n\n#. Buttons\nmsgid \"Save Settings\"\n"));
    }

    #[test]
    fn default_output_starts_with_first_entry() {
        let text = render(entries(), &EmitOptions::default()).expect("render");
        let lines: Vec<&str> = text.lines().take(6).collect();
        assert_eq!(
            lines,
            vec![
                "msgid \"Settings saved successfully!\"",
                "msgstr \"Settings saved successfully!\"",
                "",
                "msgid \"AI Answer Generation (RAG)\"",
                "msgstr \"AI Answer Generation (RAG)\"",
                "",
            ]
        );
    }

    #[test]
    fn write_failure_propagates() {
        let err = emit(&mut ClosedPipe, entries(), &EmitOptions::default()).unwrap_err();
        assert!(err.to_string().contains("Settings saved successfully!"), "{:#}", err);
        let io_err = err.downcast_ref::<io::Error>().expect("io error in chain");
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn select_keeps_table_order() {
        let options = EmitOptions {
            categories: vec![Category::Languages, Category::Messages],
            ..EmitOptions::default()
        };
        let selected = select(entries(), &options);
        assert_eq!(selected.len(), 9);
        assert_eq!(selected[0].msgid, "Settings saved successfully!");
        assert_eq!(selected[1].msgid, "Auto-detect from user input");
    }

    #[test]
    fn comments_appear_once_per_category() {
        let options = EmitOptions {
            comments: true,
            ..EmitOptions::default()
        };
        let text = render(entries(), &options).expect("render");
        for category in Category::all() {
            let marker = format!("#. {}\n", category.title());
            assert_eq!(text.matches(&marker).count(), 1, "{}", marker);
        }
    }
}
