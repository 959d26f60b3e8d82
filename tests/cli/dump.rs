use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{ACCOUNTS_JA_PATH, CliTest, run};

#[test]
fn test_dump_translations() -> Result<()> {
    let test = CliTest::with_accounts()?;

    let output = run(test.dump_command().arg(ACCOUNTS_JA_PATH))?;
    assert_eq!(output.code, Some(0));

    let json: Value = serde_json::from_str(&output.stdout)?;
    let map = json.as_object().expect("dump prints an object");
    assert_eq!(map.len(), 14);
    assert_eq!(
        map["com.deepin.daemon.accounts.enable-auto-login!description"],
        "自動ログインを有効にする"
    );
    assert_eq!(
        map.keys().next().map(String::as_str),
        Some("com.deepin.daemon.accounts.change-own-user-data!message")
    );
    Ok(())
}

#[test]
fn test_dump_with_source() -> Result<()> {
    let test = CliTest::with_accounts()?;

    let output = run(test.dump_command().args([ACCOUNTS_JA_PATH, "--with-source"]))?;
    assert_eq!(output.code, Some(0));

    let json: Value = serde_json::from_str(&output.stdout)?;
    let entry = &json["com.deepin.daemon.accounts.set-keyboard-layout!message"];
    assert_eq!(
        entry["source"],
        "Authentication is required to set keyboard layout"
    );
    assert_eq!(entry["translation"], "キーボードレイアウトを設定するには認証が必要です");
    Ok(())
}

#[test]
fn test_dump_malformed_catalog() -> Result<()> {
    let test = CliTest::with_file(
        "policy_ja.ts",
        r#"<TS version="2.1" language="ja">
<context>
    <name>policy</name>
    <message>
        <location filename="org.example.run!message" line="0"/>
        <source>Run</source>
    </message>
</context>
</TS>
"#,
    )?;

    assert_cmd_snapshot!(test.dump_command().arg("policy_ja.ts"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to load policy_ja.ts: malformed document (line 4): <message> is missing required <translation>
    ");
    Ok(())
}

#[test]
fn test_dump_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.dump_command().arg("policy_ja.ts"))?;

    // The OS error text varies by platform.
    assert_eq!(output.code, Some(2));
    assert!(output.stdout.is_empty());
    assert!(
        output
            .stderr
            .starts_with("Error: Failed to load policy_ja.ts: failed to read catalog policy_ja.ts: ")
    );
    Ok(())
}
