// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for po-skeleton

use crate::i18n::Category;

/// Output encoding for the emitted entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// gettext portable-object records
    #[default]
    Po,
    /// Pretty-printed JSON array
    Json,
}

/// Emission settings
///
/// The default reproduces the plain skeleton: every entry, PO records only,
/// no header and no comments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitOptions {
    pub format: OutputFormat,
    /// Restrict output to these categories; empty means all
    pub categories: Vec<Category>,
    /// Precede each category run with a `#.` extracted comment
    pub comments: bool,
    /// Prepend the PO header entry
    pub header: bool,
}

impl EmitOptions {
    pub fn includes(&self, category: Category) -> bool {
        self.categories.is_empty() || self.categories.contains(&category)
    }
}
