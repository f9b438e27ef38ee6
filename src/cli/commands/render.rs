//! Render command handler
//!
//! Builds the network from a dataset and writes it as HTML, Markdown or JSON.

use super::{load_dataset, log_failure};
use algae_network::config::Config;
use algae_network::core::build_network;
use algae_network::core::report::{reporter_for, ReportContext, ReportFormat};
use log::info;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the render command.
///
/// # Arguments
/// * `input` - Optional dataset path; the bundled findings when `None`
/// * `output` - Optional output path; defaults to a file in `out_dir`
/// * `format_str` - Output format (html, markdown, json)
/// * `config` - Effective configuration with CLI overrides applied
///
/// # Errors
/// Returns the message already printed to the user.
pub fn run(
    input: Option<&Path>,
    output: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<PathBuf, String> {
    render(input, output, format_str, config).inspect_err(|err| {
        eprintln!("{err}");
    })
}

fn render(
    input: Option<&Path>,
    output: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: html, markdown, or json"))?;

    let dataset = load_dataset(input)?;
    let network = build_network(dataset.records(), config.network.passes);
    info!(
        "Network built: {} nodes, {} edges from {} records",
        network.node_count(),
        network.edge_count(),
        dataset.len()
    );

    let output_path = output.map_or_else(
        || PathBuf::from(&config.paths.out_dir).join(format.default_file_name()),
        Path::to_path_buf,
    );

    let page = config.page_settings();
    let options = config.physics.to_vis_options();
    let ctx = ReportContext::new(&network, &page, &options);

    reporter_for(format)
        .generate(&ctx, &output_path)
        .map_err(|e| {
            log_failure(&format!("Failed to write {}: {e}", output_path.display()));
            format!("✗ Failed to generate {format} output: {e}")
        })?;

    println!("✓ Network written: {}", output_path.display());
    info!("Network exported to: {}", output_path.display());
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_writes_default_file_name() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::from_defaults();
        config.paths.out_dir = dir.path().to_string_lossy().to_string();

        let path = run(None, None, "json", &config).unwrap();
        assert_eq!(path, dir.path().join("network.json"));
        assert!(path.exists());
    }

    #[test]
    fn test_write_failure_is_an_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "plain file").unwrap();

        let output = blocker.join("index.html");
        let err = run(None, Some(&output), "html", &Config::from_defaults()).unwrap_err();
        assert!(err.starts_with("✗ Failed to generate html output"));
        assert!(!output.exists());
    }

    #[test]
    fn test_unknown_format_is_an_error() {
        let err = run(None, None, "pdf", &Config::from_defaults()).unwrap_err();
        assert!(err.contains("Unknown report format: pdf"));
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("absent.toml");
        let err = run(Some(&input), None, "html", &Config::from_defaults()).unwrap_err();
        assert!(err.starts_with("✗ Failed to load"));
    }
}
