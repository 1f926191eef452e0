// SPDX-License-Identifier: PMPL-1.0-or-later

//! JSON export of catalog entries
//!
//! An array of `{ "msgid", "msgstr", "category" }` objects in table order,
//! for tooling that would rather not parse `.po` text.

use crate::i18n::Entry;
use anyhow::{Context, Result};
use std::io::Write;

pub fn write_json<'a, W, I>(out: &mut W, entries: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Entry>,
{
    let entries: Vec<&Entry> = entries.into_iter().collect();
    serde_json::to_writer_pretty(&mut *out, &entries).context("writing JSON entries")?;
    writeln!(out).context("writing JSON entries")?;
    Ok(entries.len())
}
