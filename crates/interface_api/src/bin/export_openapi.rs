//! OpenAPI schema export
//!
//! Writes the service's OpenAPI document to a JSON file for client
//! generation, API gateways, or keeping the contract under version control.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin export-openapi
//! cargo run --bin export-openapi -- --output docs/openapi.json
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use interface_api::openapi::{export_to, ApiInfo};
use serde_json::Value;

#[derive(Parser)]
#[command(
    name = "export-openapi",
    about = "Export the premium calculator's OpenAPI document to a JSON file",
    version
)]
struct Cli {
    /// Destination file
    #[arg(short, long, default_value = "openapi.json")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    println!("Insurance Premium Calculator - OpenAPI Schema Export");
    println!("{}", "=".repeat(60));

    match export_to(&cli.output, &ApiInfo::default()) {
        Ok(document) => {
            println!("{}", success_report(&cli.output, &document));
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{}", failure_report(&err));
            ExitCode::FAILURE
        }
    }
}

fn success_report(output: &Path, document: &Value) -> String {
    format!(
        "✓ OpenAPI schema successfully exported to '{}'\n  - Title: {}\n  - Version: {}\n  - Endpoints: {}",
        output.display(),
        document["info"]["title"].as_str().unwrap_or_default(),
        document["info"]["version"].as_str().unwrap_or_default(),
        document["paths"].as_object().map_or(0, |paths| paths.len()),
    )
}

fn failure_report(err: &anyhow::Error) -> String {
    format!("✗ Error exporting OpenAPI schema: {:#}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use interface_api::openapi::openapi_document;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_defaults_to_openapi_json() {
        let cli = Cli::parse_from(["export-openapi"]);
        assert_eq!(cli.output, PathBuf::from("openapi.json"));

        let cli = Cli::parse_from(["export-openapi", "-o", "docs/api.json"]);
        assert_eq!(cli.output, PathBuf::from("docs/api.json"));
    }

    #[test]
    fn test_success_report_summarises_document() {
        let document = openapi_document(&ApiInfo::default());
        let report = success_report(Path::new("out.json"), &document);

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "✓ OpenAPI schema successfully exported to 'out.json'");
        assert_eq!(lines[1], "  - Title: Insurance Premium Calculator");
        assert_eq!(lines[2], format!("  - Version: {}", env!("CARGO_PKG_VERSION")));
        assert_eq!(lines[3], "  - Endpoints: 4");
    }

    #[test]
    fn test_failure_report_includes_cause() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_to(dir.path(), &ApiInfo::default()).unwrap_err();

        let report = failure_report(&err);
        assert!(report.starts_with("✗ Error exporting OpenAPI schema: failed to write"));
    }
}
