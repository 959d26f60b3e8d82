//! Issue types for catalog checks.
//!
//! Each issue is self-contained with all information the reporter needs to
//! display it.

use enum_dispatch::enum_dispatch;

use crate::core::{Field, MessageContext, TranslationStatus};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    IncompletePair,
    Unfinished,
    Identical,
    LanguageMismatch,
    LocaleGap,
    MixedNamespace,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::IncompletePair => write!(f, "incomplete-pair"),
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::Identical => write!(f, "identical"),
            Rule::LanguageMismatch => write!(f, "language-mismatch"),
            Rule::LocaleGap => write!(f, "locale-gap"),
            Rule::MixedNamespace => write!(f, "mixed-namespace"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types - Catalog Entries (MessageContext)
// ============================================================

/// Action has a `!message` entry without `!description`, or the reverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompletePairIssue {
    /// The entry that is present.
    pub context: MessageContext,
    pub action_id: String,
    pub missing_field: Field,
}

impl IncompletePairIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::IncompletePair
    }
}

/// Translation is empty or still marked unfinished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub context: MessageContext,
    pub source_text: String,
    pub status: TranslationStatus,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Translation is identical to the source text (possibly not translated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdenticalIssue {
    pub context: MessageContext,
    /// Locale of the catalog, if known.
    pub locale: Option<String>,
}

impl IdenticalIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Identical
    }
}

/// Key exists in sibling catalogs of the same policy but not in some locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleGapIssue {
    /// First catalog (by path) that defines the key.
    pub context: MessageContext,
    /// Locales where this key is missing.
    pub missing_in: Vec<String>,
}

impl LocaleGapIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::LocaleGap
    }
}

/// Entry belongs to a different namespace than the rest of its catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixedNamespaceIssue {
    pub context: MessageContext,
    pub namespace: String,
    /// Namespace of the catalog's first entry.
    pub expected_namespace: String,
}

impl MixedNamespaceIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MixedNamespace
    }
}

// ============================================================
// Issue Types - Whole Files
// ============================================================

/// File-name locale disagrees with the `language` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMismatchIssue {
    pub file_path: String,
    pub file_locale: String,
    pub declared_language: String,
}

impl LanguageMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::LanguageMismatch
    }
}

/// Catalog could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A catalog issue found during checking.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    IncompletePair(IncompletePairIssue),
    Unfinished(UnfinishedIssue),
    Identical(IdenticalIssue),
    LocaleGap(LocaleGapIssue),
    MixedNamespace(MixedNamespaceIssue),
    LanguageMismatch(LanguageMismatchIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Catalog entry location (has key/value).
    Message(&'a MessageContext),
    /// File-level only (no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key, action id, error, etc.).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for IncompletePairIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.action_id.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "has {} but no {}",
            self.missing_field.counterpart(),
            self.missing_field
        ))
    }

    fn hint(&self) -> Option<String> {
        Some(format!(
            "add a <message> with filename=\"{}!{}\"",
            self.action_id, self.missing_field
        ))
    }
}

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.context.value.is_empty() {
            Some(format!("(\"{}\") has no translation", self.source_text))
        } else {
            Some(format!(
                "(\"{}\") is marked {}",
                self.context.value, self.status
            ))
        }
    }
}

impl Report for IdenticalIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        match &self.locale {
            Some(locale) => Some(format!(
                "(\"{}\") identical to source in {}",
                self.context.value, locale
            )),
            None => Some(format!("(\"{}\") identical to source", self.context.value)),
        }
    }
}

impl Report for LocaleGapIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") missing in: {}",
            self.context.value,
            self.missing_in.join(", ")
        ))
    }
}

impl Report for MixedNamespaceIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "namespace {} differs from {}",
            self.namespace, self.expected_namespace
        ))
    }
}

impl Report for LanguageMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        format!(
            "file name says {}, catalog declares {}",
            self.file_locale, self.declared_language
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Message(ctx) => &ctx.location.file_path,
            ReportLocation::File { path } => path,
        }
    }

    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.location.line,
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, rule, message
        self.sort_file_path()
            .cmp(other.sort_file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
