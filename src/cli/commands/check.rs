use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{
        identical::check_identical_issues, incomplete_pair::check_incomplete_pair_issues,
        language_mismatch::check_language_mismatch_issues, locale_gap::check_locale_gap_issues,
        mixed_namespace::check_mixed_namespace_issues, unfinished::check_unfinished_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    IncompletePair,
    Unfinished,
    Identical,
    LanguageMismatch,
    LocaleGap,
    MixedNamespace,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::IncompletePair,
            CheckRule::Unfinished,
            CheckRule::Identical,
            CheckRule::LanguageMismatch,
            CheckRule::LocaleGap,
            CheckRule::MixedNamespace,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common, &args.paths)?;

    Ok(finish(
        CommandSummary::Check,
        run_checks(&ctx, &cmd.checks),
        ctx.files_checked(),
        true,
    ))
}

/// Run the selected rules (all when empty) and collect their issues.
///
/// Parse errors are always reported.
pub fn run_checks(ctx: &CheckContext, checks: &[CheckRule]) -> Vec<Issue> {
    let checks = if checks.is_empty() {
        CheckRule::all()
    } else {
        checks.to_vec()
    };

    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::IncompletePair => {
                let issues = check_incomplete_pair_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::IncompletePair));
            }
            CheckRule::Unfinished => {
                let issues = check_unfinished_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Unfinished));
            }
            CheckRule::Identical => {
                let issues = check_identical_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Identical));
            }
            CheckRule::LanguageMismatch => {
                let issues = check_language_mismatch_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::LanguageMismatch));
            }
            CheckRule::LocaleGap => {
                let issues = check_locale_gap_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::LocaleGap));
            }
            CheckRule::MixedNamespace => {
                let issues = check_mixed_namespace_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::MixedNamespace));
            }
        }
    }

    all_issues.extend(ctx.parse_errors().into_iter().map(Issue::ParseError));
    all_issues
}
