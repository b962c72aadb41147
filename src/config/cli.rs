use crate::config::SortingPolicy;
use crate::core::Sorter;
use crate::domain::Package;
use crate::utils::error::PackageError;
use anyhow::Context;
use clap::Parser;
use serde_json::json;
use std::path::PathBuf;

/// Exit code for a config file that cannot be read, parsed or validated.
pub const CONFIG_EXIT_CODE: u8 = 10;

#[derive(Debug, Clone, Parser)]
#[command(name = "package-sorter")]
#[command(about = "Classify a package into the STANDARD, SPECIAL or REJECTED stack")]
pub struct CliArgs {
    /// Width in centimeters
    #[arg(allow_hyphen_values = true)]
    pub width: String,

    /// Height in centimeters
    #[arg(allow_hyphen_values = true)]
    pub height: String,

    /// Length in centimeters
    #[arg(allow_hyphen_values = true)]
    pub length: String,

    /// Mass in kilograms
    #[arg(allow_hyphen_values = true)]
    pub mass: String,

    /// Path to a TOML file overriding the sorting policy
    #[arg(short, long, env = "PACKAGE_SORTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print a JSON object instead of the bare category
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// What the binary prints and how it exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOutcome {
    pub exit_code: u8,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

pub fn run(args: &CliArgs) -> CliOutcome {
    let sorter = match build_sorter(args) {
        Ok(sorter) => sorter,
        Err(e) => {
            tracing::debug!("Failed to load sorting policy: {:#}", e);
            return render_config_error(&e, args.json);
        }
    };

    match sorter.package(
        args.width.as_str(),
        args.height.as_str(),
        args.length.as_str(),
        args.mass.as_str(),
    ) {
        Ok(package) => {
            tracing::info!(category = %package.category(), "Package sorted");
            CliOutcome {
                exit_code: 0,
                stdout: Some(render_package(&package, args.json)),
                stderr: None,
            }
        }
        Err(e) => {
            tracing::debug!(kind = %e.kind, field = %e.field, "Package rejected by validation");
            render_error(&e, args.json)
        }
    }
}

fn build_sorter(args: &CliArgs) -> anyhow::Result<Sorter> {
    let policy = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading sorting policy from: {}", path.display());
            SortingPolicy::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path.display()))?
        }
        None => SortingPolicy::default(),
    };
    Ok(Sorter::new(policy)?)
}

pub fn render_package(package: &Package, json: bool) -> String {
    let category = package.category();
    if json {
        json!({
            "category": category,
            "volume": package.volume(),
            "max_dimension": package.max_dimension(),
            "bulky": package.is_bulky(),
            "heavy": package.is_heavy(),
        })
        .to_string()
    } else {
        category.to_string()
    }
}

pub fn render_error(error: &PackageError, json: bool) -> CliOutcome {
    let stderr = if json {
        json!({ "error": error }).to_string()
    } else {
        format!("❌ {}", error)
    };
    CliOutcome {
        exit_code: error.kind.exit_code(),
        stdout: None,
        stderr: Some(stderr),
    }
}

pub fn render_config_error(error: &anyhow::Error, json: bool) -> CliOutcome {
    let message = format!("{:#}", error);
    let stderr = if json {
        json!({ "error": { "kind": "Config", "message": message } }).to_string()
    } else {
        format!("❌ {}", message)
    };
    CliOutcome {
        exit_code: CONFIG_EXIT_CODE,
        stdout: None,
        stderr: Some(stderr),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;
    use std::io::Write;

    fn run_with(argv: &[&str]) -> CliOutcome {
        let mut full = vec!["package-sorter"];
        full.extend_from_slice(argv);
        run(&CliArgs::try_parse_from(full).unwrap())
    }

    fn stderr_json(outcome: &CliOutcome) -> serde_json::Value {
        serde_json::from_str(outcome.stderr.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn test_parses_positional_measurements() {
        let args = CliArgs::try_parse_from(["package-sorter", "100", " 50 ", "１００", "10", "--json"])
            .unwrap();
        assert_eq!(args.width, "100");
        assert_eq!(args.height, " 50 ");
        assert_eq!(args.length, "１００");
        assert_eq!(args.mass, "10");
        assert!(args.json);
        assert!(!args.verbose);
    }

    #[test]
    fn test_accepts_negative_values_as_measurements() {
        let args = CliArgs::try_parse_from(["package-sorter", "-1", "2", "3", "4"]).unwrap();
        assert_eq!(args.width, "-1");
    }

    #[test]
    fn test_requires_all_four_measurements() {
        assert!(CliArgs::try_parse_from(["package-sorter", "1", "2", "3"]).is_err());
    }

    #[test]
    fn test_run_prints_category() {
        let outcome = run_with(&["150", "50", "50", "10"]);
        assert_eq!(outcome.exit_code, 0);
        assert_eq!(outcome.stdout.as_deref(), Some("SPECIAL"));
        assert_eq!(outcome.stderr, None);
    }

    #[test]
    fn test_run_json_success_object() {
        let outcome = run_with(&["100", "100", "100", "25", "--json"]);
        assert_eq!(outcome.exit_code, 0);
        let value: serde_json::Value = serde_json::from_str(outcome.stdout.as_deref().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "category": "REJECTED",
                "volume": 1_000_000.0,
                "max_dimension": 100.0,
                "bulky": true,
                "heavy": true,
            })
        );
    }

    #[test]
    fn test_run_exit_code_per_error_kind() {
        let cases = [
            ("abc", ErrorKind::InvalidFormat, 2),
            ("inf", ErrorKind::NonFinite, 4),
            ("0", ErrorKind::OutOfBounds, 5),
            ("1e400", ErrorKind::Overflow, 6),
        ];
        for (width, kind, code) in cases {
            let outcome = run_with(&[width, "1", "1", "1", "--json"]);
            assert_eq!(outcome.exit_code, code, "{}", width);
            assert_eq!(outcome.stdout, None);
            let value = stderr_json(&outcome);
            assert_eq!(value["error"]["kind"], kind.as_str());
            assert_eq!(value["error"]["field"], "width");
        }

        let outcome = run_with(&["1", "1", "1", "abc"]);
        assert_eq!(outcome.exit_code, 2);
        assert_eq!(
            outcome.stderr.as_deref(),
            Some("❌ Invalid mass: abc. Must be a valid number")
        );
    }

    #[test]
    fn test_render_error_invalid_type() {
        // text arguments can never be the wrong shape, so render directly
        let err = PackageError::invalid_type("height", "null");
        let outcome = render_error(&err, true);
        assert_eq!(outcome.exit_code, 3);
        let value = stderr_json(&outcome);
        assert_eq!(value["error"]["kind"], "InvalidType");
        assert_eq!(value["error"]["message"], "Invalid height: <null>. Must be a valid number");
    }

    #[test]
    fn test_run_config_failures() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let outcome = run_with(&["1", "1", "1", "1", "--config", missing.to_str().unwrap()]);
        assert_eq!(outcome.exit_code, CONFIG_EXIT_CODE);
        assert!(outcome.stderr.as_deref().unwrap().contains("Failed to load config file"));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[policy]\nheavy_mass = -1.0").unwrap();
        let path = file.path().to_str().unwrap();
        let outcome = run_with(&["1", "1", "1", "1", "--json", "--config", path]);
        assert_eq!(outcome.exit_code, CONFIG_EXIT_CODE);
        let value = stderr_json(&outcome);
        assert_eq!(value["error"]["kind"], "Config");
        assert!(value["error"]["message"]
            .as_str()
            .unwrap()
            .contains("policy.heavy_mass"));
    }

    #[test]
    fn test_run_applies_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[policy]\nheavy_mass = 5").unwrap();
        let path = file.path().to_str().unwrap();
        let outcome = run_with(&["10", "10", "10", "5", "--config", path]);
        assert_eq!(outcome.stdout.as_deref(), Some("SPECIAL"));
    }
}
