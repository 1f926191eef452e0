// SPDX-License-Identifier: PMPL-1.0-or-later

//! po-skeleton: gettext skeleton generator for the Compilot AI plugin.
//!
//! Emits `msgid`/`msgstr` records for every settings-screen string, in a
//! fixed order, ready to be merged into a `.po` catalog by hand. Each
//! `msgstr` is the English source text; translators replace it later.
//!
//! ```
//! use po_skeleton::{i18n, report, types::EmitOptions};
//!
//! let text = report::render(i18n::entries(), &EmitOptions::default()).unwrap();
//! assert!(text.starts_with("msgid \"Settings saved successfully!\"\n"));
//! ```

pub mod i18n;
pub mod report;
pub mod types;
