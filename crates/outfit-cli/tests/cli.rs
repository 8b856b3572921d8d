//! Runs commands through the library entry point and checks their output.

use std::io::Write;

use clap::Parser;
use outfit_cli::cli::Cli;
use tempfile::NamedTempFile;

fn run(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("outfit").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    outfit_cli::run(&cli, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn json(args: &[&str]) -> serde_json::Value {
    serde_json::from_str(&run(args).unwrap()).unwrap()
}

#[test]
fn test_resolve_button_text() {
    let out = run(&["resolve", "button", "--set", "size=sm", "--class", "px-6"]).unwrap();
    assert!(out.ends_with('\n'));
    let tokens: Vec<&str> = out.split_whitespace().collect();
    assert!(tokens.contains(&"h-9"));
    assert!(tokens.contains(&"px-6"));
    assert!(!tokens.contains(&"px-3"));
    assert!(tokens.contains(&"bg-primary"));
}

#[test]
fn test_resolve_card_with_image_json() {
    let report = json(&["resolve", "card", "--input", "image", "--format", "json"]);
    insta::assert_json_snapshot!(report["options"], @r#"
    {
      "imagePosition": "top",
      "titleHeadingLevel": "h2"
    }
    "#);
    assert_eq!(report["kind"], "card");
    assert!(report["classes"].as_str().unwrap().contains("rounded-lg"));
}

#[test]
fn test_resolve_rejects_unknown_value() {
    let err = run(&["resolve", "button", "--set", "size=xl"]).unwrap_err();
    assert_eq!(err.to_string(), "cannot resolve 'button'");
    assert!(format!("{:#}", err).contains("expected one of: default, sm, lg, icon"));
}

#[test]
fn test_resolve_rejects_unknown_kind() {
    let err = run(&["resolve", "carousel"]).unwrap_err();
    assert!(format!("{:#}", err).contains("carousel"));
}

#[test]
fn test_merge_text_and_json() {
    assert_eq!(
        run(&["merge", "px-2 py-1 bg-red-500", "p-3 bg-blue-500"]).unwrap(),
        "p-3 bg-blue-500\n"
    );
    insta::assert_json_snapshot!(json(&["merge", "text-sm", "text-lg", "-f", "json"]), @r#"
    {
      "classes": "text-lg"
    }
    "#);
}

#[test]
fn test_kinds_lists_catalog() {
    let out = run(&["kinds"]).unwrap();
    assert!(out.starts_with("button\n"));
    assert!(out.contains("  size: default, sm, lg, icon (default: default)\n"));
    assert!(out.contains("  imagePosition: top, bottom, none (default: derived)\n"));

    let kinds = json(&["kinds", "--format", "json"]);
    let names: Vec<&str> = kinds
        .as_array()
        .unwrap()
        .iter()
        .map(|kind| kind["kind"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"numbered-list"));
    assert!(names.contains(&"skeleton"));
}

#[test]
fn test_stylesheet_replaces_catalog() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
chip:
  base: "rounded-full px-2"
  axes:
    tone:
      default: neutral
      values:
        neutral: "bg-muted"
        accent: "bg-accent"
"#
    )
    .unwrap();
    let path = file.path().to_str().unwrap();

    assert_eq!(
        run(&["--stylesheet", path, "resolve", "chip", "--set", "tone=accent"]).unwrap(),
        "rounded-full px-2 bg-accent\n"
    );
    insta::assert_json_snapshot!(json(&["kinds", "--stylesheet", path, "-f", "json"]), @r#"
    [
      {
        "kind": "chip",
        "axes": [
          {
            "name": "tone",
            "values": [
              "neutral",
              "accent"
            ],
            "default": "neutral"
          }
        ]
      }
    ]
    "#);
    assert!(run(&["--stylesheet", path, "resolve", "button"]).is_err());
}

#[test]
fn test_missing_stylesheet_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.yaml");
    let err = run(&["--stylesheet", missing.to_str().unwrap(), "kinds"]).unwrap_err();
    assert!(err.to_string().starts_with("failed to load stylesheet"));
}
