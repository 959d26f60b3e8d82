//! Message/description pairing rule.
//!
//! PolicyKit needs both strings for every action: the `message` for the
//! authentication prompt and the `description` as the action label.

use crate::{
    core::{CheckContext, scanner::LoadedCatalog},
    issues::IncompletePairIssue,
};

pub fn check_incomplete_pair_issues(ctx: &CheckContext) -> Vec<IncompletePairIssue> {
    ctx.catalogs.iter().flat_map(check_incomplete_pairs).collect()
}

/// Report every entry whose action lacks the other half of its pair.
pub fn check_incomplete_pairs(loaded: &LoadedCatalog) -> Vec<IncompletePairIssue> {
    loaded
        .catalog
        .incomplete_actions()
        .into_iter()
        .map(|(entry, missing_field)| IncompletePairIssue {
            context: entry.message_context(loaded.file_path()),
            action_id: entry.key.action_id.clone(),
            missing_field,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Field;
    use crate::rules::helpers::tests::loaded;

    #[test]
    fn test_complete_pairs() {
        let catalog = loaded(
            "policy/policy_ja.ts",
            &[
                ("org.example.run!message", "Run?", "実行?"),
                ("org.example.run!description", "Run", "実行"),
            ],
        );
        assert!(check_incomplete_pairs(&catalog).is_empty());
    }

    #[test]
    fn test_missing_description() {
        let catalog = loaded(
            "policy/policy_ja.ts",
            &[
                ("org.example.run!message", "Run?", "実行?"),
                ("org.example.run!description", "Run", "実行"),
                ("org.example.stop!message", "Stop?", "停止?"),
            ],
        );
        let issues = check_incomplete_pairs(&catalog);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].action_id, "org.example.stop");
        assert_eq!(issues[0].missing_field, Field::Description);
        assert_eq!(issues[0].context.line(), 3);
        assert_eq!(issues[0].context.file_path(), "policy/policy_ja.ts");
    }

    #[test]
    fn test_missing_message() {
        let catalog = loaded(
            "policy/policy_ja.ts",
            &[("org.example.stop!description", "Stop", "停止")],
        );
        let issues = check_incomplete_pairs(&catalog);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].missing_field, Field::Message);
    }
}
