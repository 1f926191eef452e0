// SPDX-License-Identifier: PMPL-1.0-or-later

//! Source strings for the Compilot AI plugin settings screen.
//!
//! The table is embedded at compile time as static data: no file I/O and no
//! allocation for lookups. Every `msgstr` is a copy of its `msgid`; the
//! generated `.po` is a skeleton for translators, so translations are never
//! filled in here.
//!
//! ## Categories
//!
//! | Slug      | Title            | Entries |
//! |-----------|------------------|---------|
//! | messages  | Success messages | 1       |
//! | headers   | Section headers  | 5       |
//! | labels    | Field labels     | 18      |
//! | buttons   | Buttons          | 5       |
//! | time      | Time             | 1       |
//! | personas  | Personas         | 6       |
//! | languages | Languages        | 8       |

mod catalog;
mod validate;

pub use catalog::{by_category, entries, lookup, Category, Entry};
pub use validate::validate;
