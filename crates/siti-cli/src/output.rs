use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;
use siti_core::pipeline::SitiResults;

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

/// Render results in the requested format.
pub fn render(results: &SitiResults, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(results)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Csv => Ok(render_csv(results)),
    }
}

/// One row per frame: `si,ti,n` (1-based frame number, TI empty for the
/// first frame).
fn render_csv(results: &SitiResults) -> String {
    let mut out = String::from("si,ti,n\n");
    for (i, si) in results.si.iter().enumerate() {
        let ti = if i == 0 {
            String::new()
        } else {
            format!("{}", results.ti[i - 1])
        };
        out.push_str(&format!("{si},{ti},{}\n", i + 1));
    }
    out
}

/// Write to the output path, or stdout when none is given.
pub fn write(rendered: &str, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write results to {}", path.display())),
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}
