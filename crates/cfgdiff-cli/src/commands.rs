use std::fs;
use std::path::Path;

use anyhow::Context;
use cfgdiff_engine::{diff, diff_tags, ChangeKind, ConfigDiffs, SENSITIVE_PATHS};
use cfgdiff_model::Config;
use cfgdiff_types::{ConfigRecord, FieldDef};
use colored::Colorize;
use serde::Serialize;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let output = match cli.command {
        Command::Diff(args) => cmd_diff(&args, cli.format)?,
        Command::Schema(args) => cmd_schema(&args, cli.format)?,
        Command::SensitivePaths => cmd_sensitive_paths(cli.format)?,
    };
    println!("{output}");
    Ok(())
}

fn cmd_diff(args: &DiffArgs, format: OutputFormat) -> anyhow::Result<String> {
    let base = load_config(&args.base)?;
    let actual = load_config(&args.actual)?;

    let diffs = match (&args.tag, &args.value) {
        (Some(tag), Some(value)) => diff_tags(Some(&base), Some(&actual), tag, value)?,
        _ => diff(Some(&base), Some(&actual))?,
    };
    let diffs = if args.raw { diffs } else { diffs.sanitize() };
    tracing::debug!(changes = diffs.len(), raw = args.raw, "diff computed");

    match format {
        OutputFormat::Json => diffs.to_json().context("failed to encode diff"),
        OutputFormat::Text => Ok(render_diff(&diffs)),
    }
}

#[derive(Serialize)]
struct SchemaEntry<'a> {
    path: &'a str,
    tags: Vec<String>,
}

fn cmd_schema(args: &SchemaArgs, format: OutputFormat) -> anyhow::Result<String> {
    let schema = Config::schema();
    let paths = match (&args.tag, &args.value) {
        (Some(tag), Some(value)) => schema.scoped_paths(tag, value),
        _ => schema.paths(),
    };

    match format {
        OutputFormat::Json => {
            let entries: Vec<SchemaEntry<'_>> = paths
                .iter()
                .map(|(path, field)| SchemaEntry {
                    path,
                    tags: format_tags(field),
                })
                .collect();
            serde_json::to_string(&entries).context("failed to encode schema")
        }
        OutputFormat::Text => Ok(paths
            .iter()
            .map(|(path, field)| {
                let tags = format_tags(field);
                if tags.is_empty() {
                    path.clone()
                } else {
                    format!("{}  {}", path, tags.join(" ").dimmed())
                }
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn cmd_sensitive_paths(format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(SENSITIVE_PATHS).context("failed to encode paths"),
        OutputFormat::Text => Ok(SENSITIVE_PATHS.join("\n")),
    }
}

/// Parse a configuration file, choosing the format by extension.
fn load_config(path: &Path) -> anyhow::Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let parsed = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&text).map_err(anyhow::Error::from),
        Some("toml") => toml::from_str(&text).map_err(anyhow::Error::from),
        other => anyhow::bail!(
            "unsupported config format {:?} for {}; expected .toml or .json",
            other.unwrap_or(""),
            path.display()
        ),
    };
    parsed.with_context(|| format!("failed to parse {}", path.display()))
}

fn format_tags(field: &FieldDef) -> Vec<String> {
    field
        .tags
        .iter()
        .map(|t| format!("{}={}", t.key, t.value))
        .collect()
}

fn render_diff(diffs: &ConfigDiffs) -> String {
    if diffs.is_empty() {
        return "No changes.".to_string();
    }

    let mut lines: Vec<String> = diffs
        .iter()
        .map(|change| {
            let marker = match change.kind() {
                ChangeKind::Added => "+".green(),
                ChangeKind::Removed => "-".red(),
                ChangeKind::Modified => "~".yellow(),
            };
            format!(
                "{} {}: {} -> {}",
                marker,
                change.path.bold(),
                change.base_val.to_string().dimmed(),
                change.actual_val
            )
        })
        .collect();
    lines.push(format!(
        "{} changes ({} added, {} removed, {} modified)",
        diffs.len(),
        diffs.additions(),
        diffs.removals(),
        diffs.modifications()
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use cfgdiff_types::FAKE_SETTING;
    use tempfile::{Builder, NamedTempFile};

    use super::*;

    fn write_config(suffix: &str, body: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    fn diff_args(base: &NamedTempFile, actual: &NamedTempFile) -> DiffArgs {
        DiffArgs {
            base: base.path().to_path_buf(),
            actual: actual.path().to_path_buf(),
            tag: None,
            value: None,
            raw: false,
        }
    }

    const BASE: &str = r#"
        [SqlSettings]
        DriverName = "postgres"
        DataSource = "postgres://user:old@db/mm"
        QueryTimeout = 30

        [LogSettings]
        ConsoleLevel = "INFO"
    "#;

    const ACTUAL_JSON: &str = r#"{
        "SqlSettings": {
            "DriverName": "mysql",
            "DataSource": "postgres://user:new@db/mm",
            "QueryTimeout": 30
        },
        "LogSettings": { "ConsoleLevel": "DEBUG" }
    }"#;

    #[test]
    fn loads_toml_and_json() {
        let toml_file = write_config(".toml", BASE);
        let json_file = write_config(".json", ACTUAL_JSON);

        let base = load_config(toml_file.path()).unwrap();
        let actual = load_config(json_file.path()).unwrap();
        assert_eq!(base.sql_settings.query_timeout, Some(30));
        assert_eq!(actual.sql_settings.driver_name.as_deref(), Some("mysql"));
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = write_config(".yaml", "SqlSettings: {}");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("unsupported config format"));
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let file = write_config(".toml", "[SqlSettings\nbroken");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse"));
    }

    #[test]
    fn json_diff_is_sanitized_by_default() {
        let base = write_config(".toml", BASE);
        let actual = write_config(".json", ACTUAL_JSON);

        let out = cmd_diff(&diff_args(&base, &actual), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        let changes = parsed.as_array().unwrap();
        let paths: Vec<&str> = changes.iter().map(|c| c["path"].as_str().unwrap()).collect();
        assert_eq!(
            paths,
            vec!["SqlSettings.DriverName", "SqlSettings.DataSource", "LogSettings.ConsoleLevel"]
        );
        assert_eq!(changes[1]["base_val"], FAKE_SETTING);
        assert!(!out.contains("user:new"));
    }

    #[test]
    fn section_missing_from_base_is_sanitized() {
        let base = write_config(".toml", "[LogSettings]\nConsoleLevel = \"INFO\"\n");
        let actual = write_config(".json", ACTUAL_JSON);

        let out = cmd_diff(&diff_args(&base, &actual), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["path"], "SqlSettings");
        assert_eq!(parsed[0]["actual_val"]["DataSource"], FAKE_SETTING);
        assert_eq!(parsed[0]["actual_val"]["DriverName"], "mysql");
        assert!(!out.contains("user:new"));
    }

    #[test]
    fn raw_diff_keeps_secrets() {
        let base = write_config(".toml", BASE);
        let actual = write_config(".json", ACTUAL_JSON);
        let mut args = diff_args(&base, &actual);
        args.raw = true;

        let out = cmd_diff(&args, OutputFormat::Json).unwrap();
        assert!(out.contains("user:new"));
    }

    #[test]
    fn scoped_diff_only_shows_restart_settings() {
        let base = write_config(".toml", BASE);
        let actual = write_config(".json", ACTUAL_JSON);
        let mut args = diff_args(&base, &actual);
        args.tag = Some("restart".into());
        args.value = Some("true".into());

        let out = cmd_diff(&args, OutputFormat::Json).unwrap();
        assert!(out.contains("SqlSettings.DriverName"));
        assert!(!out.contains("LogSettings.ConsoleLevel"));
    }

    #[test]
    fn text_rendering() {
        colored::control::set_override(false);
        let base = write_config(".toml", BASE);
        let actual = write_config(".toml", BASE);

        let out = cmd_diff(&diff_args(&base, &actual), OutputFormat::Text).unwrap();
        assert_eq!(out, "No changes.");

        let actual = write_config(".json", ACTUAL_JSON);
        let out = cmd_diff(&diff_args(&base, &actual), OutputFormat::Text).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], r#"~ SqlSettings.DriverName: "postgres" -> "mysql""#);
        assert_eq!(lines.last().copied(), Some("3 changes (0 added, 0 removed, 3 modified)"));
    }

    #[test]
    fn schema_listing_with_scope() {
        let args = SchemaArgs {
            tag: Some("restart".into()),
            value: Some("true".into()),
        };
        let out = cmd_schema(&args, OutputFormat::Json).unwrap();
        let entries: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
        assert!(entries
            .iter()
            .any(|e| e["path"] == "SqlSettings.DriverName"));
        assert!(entries
            .iter()
            .all(|e| !e["path"].as_str().unwrap().starts_with("LdapSettings")));
    }

    #[test]
    fn sensitive_paths_listing() {
        let out = cmd_sensitive_paths(OutputFormat::Text).unwrap();
        assert_eq!(out.lines().count(), SENSITIVE_PATHS.len());
        assert!(out.contains("SqlSettings.DataSource"));
    }
}
