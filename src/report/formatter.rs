// SPDX-License-Identifier: PMPL-1.0-or-later

//! Portable-object record formatting

use crate::i18n::{Category, Entry};
use crate::types::EmitOptions;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::io::Write;

/// Escape text for a gettext string literal.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '"', '\n', '\t', '\r']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

pub struct PoFormatter<'o> {
    options: &'o EmitOptions,
}

impl<'o> PoFormatter<'o> {
    pub fn new(options: &'o EmitOptions) -> Self {
        Self { options }
    }

    pub fn write_header<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(
            b"msgid \"\"\n\
              msgstr \"\"\n\
              \"MIME-Version: 1.0\\n\"\n\
              \"Content-Type: text/plain; charset=UTF-8\\n\"\n\
              \"Content-Transfer-Encoding: 8bit\\n\"\n\
              \n",
        )
        .context("writing PO header")
    }

    /// Write one record. `previous` is the category of the record written
    /// just before, so the `#.` comment appears once per run.
    pub fn write_entry<W: Write>(
        &self,
        out: &mut W,
        entry: &Entry,
        previous: Option<Category>,
    ) -> Result<()> {
        let context = || format!("writing entry \"{}\"", entry.msgid);
        if self.options.comments && previous != Some(entry.category) {
            writeln!(out, "#. {}", entry.category.title()).with_context(context)?;
        }
        writeln!(out, "msgid \"{}\"", escape(entry.msgid)).with_context(context)?;
        writeln!(out, "msgstr \"{}\"", escape(entry.msgstr)).with_context(context)?;
        writeln!(out).with_context(context)?;
        Ok(())
    }

    /// Write the header (if enabled) and every entry in iteration order.
    pub fn write_entries<'a, W, I>(&self, out: &mut W, entries: I) -> Result<usize>
    where
        W: Write,
        I: IntoIterator<Item = &'a Entry>,
    {
        if self.options.header {
            self.write_header(out)?;
        }
        let mut previous = None;
        let mut written = 0;
        for entry in entries {
            self.write_entry(out, entry, previous)?;
            previous = Some(entry.category);
            written += 1;
        }
        Ok(written)
    }
}
