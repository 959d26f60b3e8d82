use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{ACCOUNTS_JA, ACCOUNTS_JA_PATH, CliTest, run};

const RUN_ONLY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ja">
<context>
    <name>policy</name>
    <message>
        <location filename="org.example.run!message" line="0"/>
        <source>Authentication is required to run</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_accounts_catalog_is_clean() -> Result<()> {
    let test = CliTest::with_accounts()?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 catalog - no issues found

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_explicit_file_path() -> Result<()> {
    let test = CliTest::with_file("policy/policy_ja.ts", ACCOUNTS_JA)?;

    assert_cmd_snapshot!(test.check_command().arg("policy/policy_ja.ts"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 catalog - no issues found

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_incomplete_and_unfinished() -> Result<()> {
    let test = CliTest::with_file("misc/ts/example.policy/policy_ja.ts", RUN_ONLY)?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "org.example.run"  incomplete-pair
      --> ./misc/ts/example.policy/policy_ja.ts:6:1
     = note: has message but no description
     = hint: add a <message> with filename="org.example.run!description"

    warning: "org.example.run!message"  unfinished
      --> ./misc/ts/example.policy/policy_ja.ts:6:1
     = note: ("Authentication is required to run") has no translation

    ✘ 2 problems (1 error, 1 warning)

    ----- stderr -----
    "#);
    Ok(())
}

#[test]
fn test_selected_rule_only() -> Result<()> {
    let test = CliTest::with_file("misc/ts/example.policy/policy_ja.ts", RUN_ONLY)?;

    // Warnings alone do not fail the run.
    assert_cmd_snapshot!(test.check_command().args(["--rule", "unfinished"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    warning: "org.example.run!message"  unfinished
      --> ./misc/ts/example.policy/policy_ja.ts:6:1
     = note: ("Authentication is required to run") has no translation

    ✘ 1 problems (0 errors, 1 warning)

    ----- stderr -----
    "#);
    Ok(())
}

#[test]
fn test_duplicate_key_is_parse_error() -> Result<()> {
    let duplicated = ACCOUNTS_JA.replace(
        "com.deepin.daemon.accounts.change-own-user-data!description",
        "com.deepin.daemon.accounts.change-own-user-data!message",
    );
    let test = CliTest::with_file(ACCOUNTS_JA_PATH, &duplicated)?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("parse-error"));
    assert!(output.stdout.contains("duplicate key"));
    assert!(output.stderr.contains("1 catalog(s) could not be parsed"));
    Ok(())
}

#[test]
fn test_locale_gap_between_siblings() -> Result<()> {
    let test = CliTest::with_accounts()?;
    let partial = ACCOUNTS_JA
        .replace("language=\"ja\"", "language=\"de\"")
        .replace(
            "com.deepin.daemon.accounts.set-keyboard-layout!",
            "com.deepin.daemon.accounts.set-keyboard-layout-removed!",
        );
    test.write_file(
        "misc/ts/com.deepin.daemon.accounts.policy/policy_de.ts",
        &partial,
    )?;

    let output = run(test.check_command().args(["--rule", "locale-gap"]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("locale-gap"));
    assert!(output.stdout.contains("missing in: de"));
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("--help"))?;

    assert_eq!(output.code, Some(0));
    for command in ["check", "lookup", "dump", "init"] {
        assert!(output.stdout.contains(command), "missing {command}");
    }
    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::with_accounts()?;
    test.write_file("misc/ts/broken.policy/policy_ja.ts", "<TS><context>")?;
    test.write_file(".tscatrc.json", r#"{ "ignores": ["broken.policy/**"] }"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 catalog - no issues found

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_missing_catalogs_root() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to scan ./misc/ts: Catalogs directory './misc/ts' does not exist.
    Hint: Check your .tscatrc.json 'catalogsRoot' setting.
    ");
    Ok(())
}
