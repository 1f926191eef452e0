// SPDX-License-Identifier: PMPL-1.0-or-later

//! Table invariants checked before anything is emitted.

use super::catalog::Entry;
use anyhow::{bail, Result};
use std::collections::HashSet;

/// Checks that identifiers are non-empty and unique, and that every
/// `msgstr` is still the untranslated placeholder.
pub fn validate(entries: &[Entry]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if entry.msgid.is_empty() {
            bail!("entry {} has an empty msgid", index);
        }
        if !seen.insert(entry.msgid) {
            bail!("duplicate msgid \"{}\" at entry {}", entry.msgid, index);
        }
        if entry.msgstr != entry.msgid {
            bail!(
                "msgstr for \"{}\" is \"{}\", expected the placeholder",
                entry.msgid,
                entry.msgstr
            );
        }
    }
    Ok(())
}
