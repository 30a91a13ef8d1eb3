//! End-to-end runs of parsed command lines through the dispatcher
use clap::Parser;
use strx::cli;
use strx::config::{Args, Config};

fn run(argv: &[&str]) -> anyhow::Result<String> {
    run_with_config(argv, &Config::default())
}

fn run_with_config(argv: &[&str], config: &Config) -> anyhow::Result<String> {
    let args = Args::try_parse_from(argv)?;
    let mut out = Vec::new();
    cli::run(&args.command, config, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_check_kinds() {
    assert_eq!(run(&["strx", "check", "email", "a@b.com"]).unwrap(), "true\n");
    assert_eq!(run(&["strx", "check", "URL", "example.com"]).unwrap(), "true\n");
    assert_eq!(run(&["strx", "check", "Integer", "12a"]).unwrap(), "false\n");
    assert!(Args::try_parse_from(["strx", "check", "phone", "555"]).is_err());
}

#[test]
fn test_conversions() {
    assert_eq!(run(&["strx", "to-int", "-42"]).unwrap(), "-42\n");
    assert_eq!(run(&["strx", "to-int", "forty"]).unwrap(), "0\n");
    assert_eq!(run(&["strx", "to-bool", "Y"]).unwrap(), "true\n");
    assert_eq!(run(&["strx", "swap-case", "AbC1"]).unwrap(), "aBc1\n");
    assert_eq!(run(&["strx", "words", "a b  c"]).unwrap(), "3\n");
}

#[test]
fn test_invalid_boolean_fails() {
    let err = run(&["strx", "to-bool", "maybe"]).unwrap_err();
    let source = err.downcast_ref::<strx::Error>().expect("library error");
    assert!(source.is_invalid_argument());
}

#[test]
fn test_length_requires_a_bound() {
    assert!(Args::try_parse_from(["strx", "length", "abc"]).is_err());
    assert_eq!(run(&["strx", "length", "abc", "--min", "3"]).unwrap(), "true\n");
}

#[test]
fn test_match_with_adhoc_and_named_pattern() {
    assert_eq!(
        run(&["strx", "match", "order-123", "--pattern", r"\d+$"]).unwrap(),
        "true\n"
    );

    let mut config = Config::default();
    config
        .patterns
        .insert("zip".to_string(), r"^\d{5}$".to_string());
    assert_eq!(
        run_with_config(&["strx", "match", "12345", "--name", "zip"], &config).unwrap(),
        "true\n"
    );
    assert_eq!(
        run_with_config(&["strx", "match", "1234", "--name", "zip"], &config).unwrap(),
        "false\n"
    );
}

#[test]
fn test_match_rejects_both_pattern_sources() {
    assert!(
        Args::try_parse_from(["strx", "match", "x", "--pattern", "x", "--name", "y"]).is_err()
    );
    assert!(Args::try_parse_from(["strx", "match", "x"]).is_err());
}

#[test]
fn test_between_bounds() {
    let start = "2024-05-01T00:00:00Z";
    let end = "2024-05-31T23:59:59Z";
    assert_eq!(run(&["strx", "between", start, start, end]).unwrap(), "true\n");
    assert_eq!(run(&["strx", "between", end, start, end]).unwrap(), "true\n");
    assert_eq!(
        run(&["strx", "between", "2024-06-01T00:00:00Z", start, end]).unwrap(),
        "false\n"
    );
}

#[test]
fn test_clone_subcommand() {
    assert_eq!(
        run(&["strx", "clone", r#"[1,"two",{"three":3}]"#]).unwrap(),
        "[1,\"two\",{\"three\":3}]\n"
    );
    assert!(run(&["strx", "clone", "{not json"]).is_err());
}
