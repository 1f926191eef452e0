// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation entry table for the Compilot AI settings screen.
//!
//! Embeds every user-facing settings string as a compile-time static table.
//! Lookup is O(n) over the table, which is fine for the ~40 strings we have:
//! the table is read once per run, not in a hot loop.
//!
//! ## Adding a new string
//!
//! 1. Add a `placeholder(Category::Xx, "...")` line to `ENTRIES`, inside the
//!    run of its category
//! 2. Keep `msgstr` identical to `msgid`; translators fill it in the `.po`

use serde::Serialize;

/// Grouping of settings-screen strings.
///
/// Categories only drive `#.` comments and `--category` filtering. Default
/// output ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Messages,
    Headers,
    Labels,
    Buttons,
    Time,
    Personas,
    Languages,
}

impl Category {
    /// Stable lowercase identifier used on the command line and in JSON.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Messages => "messages",
            Category::Headers => "headers",
            Category::Labels => "labels",
            Category::Buttons => "buttons",
            Category::Time => "time",
            Category::Personas => "personas",
            Category::Languages => "languages",
        }
    }

    /// Parse a slug. Case-sensitive.
    pub fn from_slug(slug: &str) -> Option<Category> {
        match slug {
            "messages" => Some(Category::Messages),
            "headers" => Some(Category::Headers),
            "labels" => Some(Category::Labels),
            "buttons" => Some(Category::Buttons),
            "time" => Some(Category::Time),
            "personas" => Some(Category::Personas),
            "languages" => Some(Category::Languages),
            _ => None,
        }
    }

    /// English title, used for `#.` extracted comments.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Messages => "Success messages",
            Category::Headers => "Section headers",
            Category::Labels => "Field labels",
            Category::Buttons => "Buttons",
            Category::Time => "Time",
            Category::Personas => "Personas",
            Category::Languages => "Languages",
        }
    }

    /// All categories, in table order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Messages,
            Category::Headers,
            Category::Labels,
            Category::Buttons,
            Category::Time,
            Category::Personas,
            Category::Languages,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// One msgid/msgstr pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub msgid: &'static str,
    pub msgstr: &'static str,
    pub category: Category,
}

impl Entry {
    pub const fn new(category: Category, msgid: &'static str, msgstr: &'static str) -> Self {
        Self {
            msgid,
            msgstr,
            category,
        }
    }

    /// Untranslated entry: `msgstr` is the English source text.
    pub const fn placeholder(category: Category, msgid: &'static str) -> Self {
        Self::new(category, msgid, msgid)
    }
}

/// All entries, in declaration order.
pub fn entries() -> &'static [Entry] {
    ENTRIES
}

/// Entries of one category, in declaration order.
pub fn by_category(category: Category) -> impl Iterator<Item = &'static Entry> {
    ENTRIES.iter().filter(move |entry| entry.category == category)
}

/// Find the entry for an English source string.
pub fn lookup(msgid: &str) -> Option<&'static Entry> {
    ENTRIES.iter().find(|entry| entry.msgid == msgid)
}

use Category::*;

const fn placeholder(category: Category, msgid: &'static str) -> Entry {
    Entry::placeholder(category, msgid)
}

const ENTRIES: &[Entry] = &[
    // Success messages
    placeholder(Messages, "Settings saved successfully!"),
    // Section headers
    placeholder(Headers, "AI Answer Generation (RAG)"),
    placeholder(Headers, "Chat Widget Settings"),
    placeholder(Headers, "Content Synchronization"),
    placeholder(Headers, "Chat Widget Look & Feel"),
    placeholder(Headers, "API Connection Test"),
    // Field labels
    placeholder(Labels, "API Server URL (Backend)"),
    placeholder(Labels, "API Server URL (Frontend)"),
    placeholder(Labels, "Minimum Confidence Threshold"),
    placeholder(Labels, "Enable AI Answers"),
    placeholder(Labels, "Allow General Knowledge"),
    placeholder(Labels, "AI Personality"),
    placeholder(Labels, "Default Response Language"),
    placeholder(Labels, "Enable Chat Widget"),
    placeholder(Labels, "Chat Widget Name"),
    placeholder(Labels, "Session Inactivity Timeout"),
    placeholder(Labels, "Initial Greeting Message"),
    placeholder(Labels, "Auto-Sync Content"),
    placeholder(Labels, "Manual Sync"),
    placeholder(Labels, "Primary Color"),
    placeholder(Labels, "Secondary Color (Gradient)"),
    placeholder(Labels, "Message Font Size (px)"),
    placeholder(Labels, "Header Font Size (px)"),
    placeholder(Labels, "Preview"),
    // Buttons
    placeholder(Buttons, "Sync All Published Content Now"),
    placeholder(Buttons, "Clear Sync Status"),
    placeholder(Buttons, "Save Settings"),
    placeholder(Buttons, "Test API Connection"),
    placeholder(Buttons, "Widget Preview"),
    // Time
    placeholder(Time, "minutes"),
    // Personas
    placeholder(Personas, "Customer Service (Friendly & Helpful)"),
    placeholder(Personas, "Professional Expert (Polished & Knowledgeable)"),
    placeholder(Personas, "Casual Friend (Warm & Relatable)"),
    placeholder(Personas, "Technical Specialist (Detailed & Thorough)"),
    placeholder(Personas, "Concise Assistant (Brief & Direct)"),
    placeholder(Personas, "Educational Tutor (Clear & Encouraging)"),
    // Languages
    placeholder(Languages, "Auto-detect from user input"),
    placeholder(Languages, "English"),
    placeholder(Languages, "Dutch (Nederlands)"),
    placeholder(Languages, "German (Deutsch)"),
    placeholder(Languages, "French (Français)"),
    placeholder(Languages, "Spanish (Español)"),
    placeholder(Languages, "Italian (Italiano)"),
    placeholder(Languages, "Portuguese (Português)"),
];
