use std::{
    collections::{BTreeMap, HashMap, HashSet},
    fmt,
};

use super::key::{Field, MessageKey};
use super::message::{MessageContext, MessageLocation};

/// State of a translation, from the `type` attribute of `<translation>`.
///
/// A missing attribute means the translation is finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TranslationStatus {
    #[default]
    Finished,
    Unfinished,
    Vanished,
    Obsolete,
}

impl TranslationStatus {
    /// Value of the `type` attribute, `None` for finished translations.
    pub fn type_attribute(&self) -> Option<&'static str> {
        match self {
            TranslationStatus::Finished => None,
            TranslationStatus::Unfinished => Some("unfinished"),
            TranslationStatus::Vanished => Some("vanished"),
            TranslationStatus::Obsolete => Some("obsolete"),
        }
    }

    pub fn from_type_attribute(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(TranslationStatus::Unfinished),
            "vanished" => Some(TranslationStatus::Vanished),
            "obsolete" => Some(TranslationStatus::Obsolete),
            _ => None,
        }
    }

    /// Vanished and obsolete entries are kept for translators but no longer used.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            TranslationStatus::Finished | TranslationStatus::Unfinished
        )
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_attribute().unwrap_or("finished"))
    }
}

/// One `<message>` of a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: MessageKey,
    /// Original-language text from `<source>`.
    pub source_text: String,
    /// Localized text from `<translation>`.
    pub translated_text: String,
    pub status: TranslationStatus,
    /// Disambiguation comment (`<comment>`).
    pub comment: Option<String>,
    /// Developer comment (`<extracomment>`).
    pub extra_comment: Option<String>,
    /// Translator comment (`<translatorcomment>`).
    pub translator_comment: Option<String>,
    /// The `line` attribute of `<location>`; policy catalogs always carry 0.
    pub reference_line: u32,
    /// Line of the `<message>` element in the document (1-indexed).
    pub line: usize,
}

impl CatalogEntry {
    pub fn new(
        key: MessageKey,
        source_text: impl Into<String>,
        translated_text: impl Into<String>,
    ) -> Self {
        Self {
            key,
            source_text: source_text.into(),
            translated_text: translated_text.into(),
            status: TranslationStatus::Finished,
            comment: None,
            extra_comment: None,
            translator_comment: None,
            reference_line: 0,
            line: 0,
        }
    }

    /// True when there is nothing usable to show for this entry.
    pub fn is_unfinished(&self) -> bool {
        self.status == TranslationStatus::Unfinished || self.translated_text.is_empty()
    }

    /// Build the report context for this entry in `file_path`.
    pub fn message_context(&self, file_path: &str) -> MessageContext {
        MessageContext::new(
            MessageLocation::with_line(file_path, self.line),
            self.key.to_string(),
            self.translated_text.clone(),
        )
    }
}

/// A `<context>` block: a name plus its messages in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogContext {
    pub name: String,
    pub entries: Vec<CatalogEntry>,
}

impl CatalogContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }
}

/// A parsed TS catalog: localized strings for one language.
///
/// Keys are unique across all contexts; the loader rejects duplicates.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Path the catalog was loaded from (empty for in-memory documents).
    pub file_path: String,
    /// `language` attribute of `<TS>` (e.g., "ja").
    pub language: Option<String>,
    /// `sourcelanguage` attribute of `<TS>`.
    pub source_language: Option<String>,
    /// `version` attribute of `<TS>` (e.g., "2.1").
    pub version: Option<String>,
    /// Only reachable through `push_context` so `index` stays in sync.
    contexts: Vec<CatalogContext>,
    /// Position of each key: (context index, entry index).
    index: HashMap<MessageKey, (usize, usize)>,
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.file_path == other.file_path
            && self.language == other.language
            && self.source_language == other.source_language
            && self.version == other.version
            && self.contexts == other.contexts
    }
}

impl Eq for Catalog {}

impl Catalog {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Default::default()
        }
    }

    /// Append a context, returning the first key that is already present.
    ///
    /// On a duplicate the catalog is left unchanged.
    pub fn push_context(&mut self, context: CatalogContext) -> Result<(), MessageKey> {
        if let Some(key) = self.first_duplicate(&context) {
            return Err(key);
        }

        let context_index = self.contexts.len();
        for (entry_index, entry) in context.entries.iter().enumerate() {
            self.index
                .insert(entry.key.clone(), (context_index, entry_index));
        }
        self.contexts.push(context);
        Ok(())
    }

    fn first_duplicate(&self, context: &CatalogContext) -> Option<MessageKey> {
        let mut seen = HashSet::new();
        context
            .entries
            .iter()
            .find(|entry| self.index.contains_key(&entry.key) || !seen.insert(&entry.key))
            .map(|entry| entry.key.clone())
    }

    pub fn contexts(&self) -> &[CatalogContext] {
        &self.contexts
    }

    /// Change the status of an existing entry. Returns `false` for an unknown key.
    pub fn set_status(&mut self, key: &MessageKey, status: TranslationStatus) -> bool {
        match self.index.get(key) {
            Some(&(context, entry)) => {
                self.contexts[context].entries[entry].status = status;
                true
            }
            None => false,
        }
    }

    /// All entries in document order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.contexts.iter().flat_map(|c| c.entries.iter())
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn get(&self, key: &MessageKey) -> Option<&CatalogEntry> {
        self.index
            .get(key)
            .map(|&(context, entry)| &self.contexts[context].entries[entry])
    }

    pub fn contains_key(&self, key: &MessageKey) -> bool {
        self.index.contains_key(key)
    }

    /// Resolve an `(action, field)` pair to its localized string.
    pub fn resolve(&self, action_id: &str, field: Field) -> Option<&str> {
        self.get(&MessageKey::new(action_id, field))
            .map(|entry| entry.translated_text.as_str())
    }

    /// Key to translated text, ordered by key.
    pub fn translations(&self) -> BTreeMap<String, String> {
        self.entries()
            .map(|e| (e.key.to_string(), e.translated_text.clone()))
            .collect()
    }

    /// Distinct action identifiers in order of first appearance.
    pub fn actions(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries()
            .map(|e| e.key.action_id.as_str())
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Distinct namespaces in order of first appearance.
    pub fn namespaces(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries()
            .map(|e| e.key.namespace())
            .filter(|ns| seen.insert(*ns))
            .collect()
    }

    /// Entries whose action lacks the other half of the message/description pair.
    ///
    /// Returns the present entry together with the missing field.
    pub fn incomplete_actions(&self) -> Vec<(&CatalogEntry, Field)> {
        self.entries()
            .filter_map(|entry| {
                let missing = entry.key.field.counterpart();
                let counterpart = MessageKey::new(entry.key.action_id.clone(), missing);
                (!self.contains_key(&counterpart)).then_some((entry, missing))
            })
            .collect()
    }
}
