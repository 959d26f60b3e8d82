use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Lookup(LookupSummary),
    Dump(DumpSummary),
    Init(InitSummary),
}

/// One catalog that defines the looked-up key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupMatch {
    pub locale: String,
    pub file_path: String,
    pub text: String,
}

#[derive(Debug)]
pub struct LookupSummary {
    /// The resolved key (`<action-id>!<field>`).
    pub key: String,
    /// Locale filter given on the command line.
    pub locale: Option<String>,
    pub matches: Vec<LookupMatch>,
}

#[derive(Debug)]
pub struct DumpSummary {
    pub json: String,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running tscat commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of catalogs that failed to parse.
    pub parse_error_count: usize,
    /// Number of catalog files that were checked.
    pub files_checked: usize,
}
