//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use safezone_test_util::normalize_nondeterministic;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::current_dir().expect("Cannot determine current directory"));

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .expect("xtask has no parent")
            .to_path_buf()
    } else {
        manifest_dir
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(safezone_types::SafezoneReport)
}

fn generate_scenario_schema() -> schemars::Schema {
    schema_for!(safezone_types::ScenarioV1)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(safezone_settings::SafezoneConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "safezone.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "safezone.scenario.v1.json",
            generate: generate_scenario_schema,
        },
        SchemaSpec {
            filename: "safezone.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate tests/fixtures against the generated schemas");
    eprintln!("  explain-coverage  Validate all check IDs and codes have explanations");
}

fn compile(generate: fn() -> schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(generate()).context("Failed to serialize schema")?;
    jsonschema::draft202012::new(&value)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))
}

/// Validate every fixture against the generated schemas.
///
/// For each `tests/fixtures/<name>/`:
/// 1. `scenario.json` validates against the scenario schema
/// 2. `safezone.toml` (if present) parses and validates against the config schema
/// 3. `expected.report.json` (if present) validates against the report schema and is
///    already normalized (placeholders instead of timestamps and version)
fn conform() -> anyhow::Result<()> {
    let scenario_schema = compile(generate_scenario_schema)?;
    let report_schema = compile(generate_report_schema)?;
    let config_schema = compile(generate_config_schema)?;
    println!("✓ schemas compile");

    let dir = fixtures_dir();
    let mut entries = fs::read_dir(&dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|e| e.file_name());

    let mut fixture_count = 0;
    let mut errors = Vec::new();

    for entry in entries {
        let fixture_dir = entry.path();
        if !fixture_dir.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();

        let scenario_path = fixture_dir.join("scenario.json");
        if !scenario_path.exists() {
            errors.push(format!("{}: missing scenario.json", name));
            continue;
        }
        let scenario = read_json(&scenario_path)?;
        for err in scenario_schema.iter_errors(&scenario) {
            errors.push(format!("{}/scenario.json: {}", name, err));
        }

        let config_path = fixture_dir.join("safezone.toml");
        if config_path.exists() {
            let text = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            match safezone_settings::parse_config_toml(&text) {
                Ok(cfg) => {
                    let value = serde_json::to_value(&cfg)?;
                    for err in config_schema.iter_errors(&value) {
                        errors.push(format!("{}/safezone.toml: {}", name, err));
                    }
                }
                Err(err) => errors.push(format!("{}/safezone.toml: {:#}", name, err)),
            }
        }

        let golden_path = fixture_dir.join("expected.report.json");
        if golden_path.exists() {
            let golden = read_json(&golden_path)?;
            for err in report_schema.iter_errors(&golden) {
                errors.push(format!("{}/expected.report.json: {}", name, err));
            }
            if normalize_nondeterministic(golden.clone()) != golden {
                errors.push(format!(
                    "{}/expected.report.json: not normalized (use __TIMESTAMP__ / __VERSION__)",
                    name
                ));
            }
        }

        fixture_count += 1;
        println!("  ✓ {}", name);
    }

    if fixture_count == 0 {
        bail!("No fixtures found in {}", dir.display());
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ All {} fixtures pass conformance checks!", fixture_count);
    Ok(())
}

/// Validate that all check IDs and codes have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let check_ids = safezone_types::explain::all_check_ids();
    let codes = safezone_types::explain::all_codes();

    let mut errors = Vec::new();

    for (kind, ids) in [("Check ID", check_ids), ("Code", codes)] {
        for id in ids {
            match safezone_types::explain::lookup_explanation(id) {
                Some(exp) => {
                    if exp.title.is_empty() {
                        errors.push(format!("{} '{}' has empty title", kind, id));
                    }
                    if exp.description.is_empty() {
                        errors.push(format!("{} '{}' has empty description", kind, id));
                    }
                    if exp.remediation.is_empty() {
                        errors.push(format!("{} '{}' has empty remediation", kind, id));
                    }
                }
                None => errors.push(format!("{} '{}' has no explanation", kind, id)),
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} check IDs have explanations", check_ids.len());
        println!("✓ {} codes have explanations", codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
