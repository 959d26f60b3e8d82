use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .tscatrc.json

    ----- stderr -----
    ");
    assert!(test.root().join(".tscatrc.json").exists());

    let config: Value = serde_json::from_str(&test.read_file(".tscatrc.json")?)?;
    assert_eq!(config["catalogsRoot"], "./misc/ts");
    assert_eq!(config["ignores"], Value::Array(Vec::new()));
    Ok(())
}

#[test]
fn test_init_existing_config() -> Result<()> {
    let test = CliTest::with_file(".tscatrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: .tscatrc.json already exists
    ");
    assert_eq!(test.read_file(".tscatrc.json")?, "{}");
    Ok(())
}
