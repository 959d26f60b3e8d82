use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{ACCOUNTS_JA, CliTest};

const CHANGE_OWN: &str = "com.deepin.daemon.accounts.change-own-user-data";

#[test]
fn test_lookup_full_key() -> Result<()> {
    let test = CliTest::with_accounts()?;

    assert_cmd_snapshot!(test.lookup_command().arg(format!("{CHANGE_OWN}!message")), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ja: 自分自身のユーザーデータを変更するには認証が必要です

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_lookup_action_with_field_and_locale() -> Result<()> {
    let test = CliTest::with_accounts()?;

    assert_cmd_snapshot!(
        test.lookup_command()
            .args([CHANGE_OWN, "--field", "description", "--locale", "ja"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    自分自身のユーザーデータを変更

    ----- stderr -----
    "
    );
    Ok(())
}

#[test]
fn test_lookup_every_locale() -> Result<()> {
    let test = CliTest::with_accounts()?;
    test.write_file(
        "misc/ts/com.deepin.daemon.accounts.policy/policy_zh_CN.ts",
        &ACCOUNTS_JA.replace("language=\"ja\"", "language=\"zh_CN\"").replace(
            "自分自身のユーザーデータを変更するには認証が必要です",
            "更改您自己的用户数据需要认证",
        ),
    )?;

    assert_cmd_snapshot!(test.lookup_command().arg(CHANGE_OWN), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ja: 自分自身のユーザーデータを変更するには認証が必要です
    zh_CN: 更改您自己的用户数据需要认证

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_lookup_unknown_action() -> Result<()> {
    let test = CliTest::with_accounts()?;

    assert_cmd_snapshot!(
        test.lookup_command()
            .arg("com.deepin.daemon.accounts.delete-user!message"),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: no translation of com.deepin.daemon.accounts.delete-user!message
    "
    );
    Ok(())
}

#[test]
fn test_lookup_unknown_locale() -> Result<()> {
    let test = CliTest::with_accounts()?;

    assert_cmd_snapshot!(test.lookup_command().args([CHANGE_OWN, "--locale", "de"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: no translation of com.deepin.daemon.accounts.change-own-user-data!message for locale de
    ");
    Ok(())
}

#[test]
fn test_lookup_invalid_key() -> Result<()> {
    let test = CliTest::with_accounts()?;

    assert_cmd_snapshot!(test.lookup_command().arg(format!("{CHANGE_OWN}!title")), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid key "com.deepin.daemon.accounts.change-own-user-data!title": unknown field 'title', expected 'message' or 'description'
    "#);
    Ok(())
}
