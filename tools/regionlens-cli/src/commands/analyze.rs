//! Classify regions of an image against the reference region.

use std::path::PathBuf;

use serde::Serialize;

use regionlens_analysis_core::{
    AnalysisReport, AnalysisSession, AnalysisStatus, AnalyzerConfig, Classification, ResultRow,
};
use regionlens_common::config::{AnalysisDefaults, AppConfig};
use regionlens_region_model::{RawRect, Region};

use crate::image_source::load_pixel_buffer;

#[derive(Serialize)]
struct JsonOutput<'a> {
    image: String,
    match_threshold: f64,
    regions: &'a [Region],
    report: &'a AnalysisReport,
    rows: &'a [ResultRow],
}

pub fn run(
    image: PathBuf,
    regions: Vec<RawRect>,
    threshold: Option<f64>,
    json: bool,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let defaults = AnalysisDefaults {
        match_threshold: threshold.unwrap_or(config.analysis.match_threshold),
    };
    defaults.validate()?;

    let buffer = load_pixel_buffer(&image)
        .map_err(|e| anyhow::anyhow!("Failed to load image: {e}"))?;

    let mut session = AnalysisSession::new(AnalyzerConfig::from(&defaults));
    session.load_buffer(buffer);

    for (index, raw) in regions.into_iter().enumerate() {
        match session.add_region(raw) {
            Ok((region, _)) => {
                tracing::debug!(region = %region.id, bounds = %region.bounds, "Region accepted");
            }
            Err(e) if e.is_recoverable() => {
                tracing::warn!(argument = index + 1, error = %e, "Skipping region");
                eprintln!("  Skipping region {}: {e}", index + 1);
            }
            Err(e) => return Err(e.into()),
        }
    }

    let report = session.report();
    let rows = report.rows(session.regions());

    if json {
        let output = JsonOutput {
            image: image.display().to_string(),
            match_threshold: defaults.match_threshold,
            regions: session.regions(),
            report: &report,
            rows: &rows,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Analyzing image: {}", image.display());
    println!("  Regions: {}", session.regions().len());
    println!("  Match threshold: {:.2}", defaults.match_threshold);
    println!();

    if report.status == AnalysisStatus::NoReference {
        println!("No reference region; nothing to compare.");
        return Ok(());
    }

    println!("Average pixel values:");
    for line in format_rows(&rows) {
        println!("  {line}");
    }
    for id in &report.skipped {
        println!("  Region {id} has no area in this image (skipped)");
    }

    println!(
        "\n{} of {} region(s) match the reference.",
        report.match_count(),
        rows.len().saturating_sub(1)
    );

    Ok(())
}

fn classification_label(classification: Classification) -> &'static str {
    match classification {
        Classification::Reference => "reference",
        Classification::Match => "match",
        Classification::Differ => "differ",
    }
}

fn format_rows(rows: &[ResultRow]) -> Vec<String> {
    rows.iter()
        .map(|row| match row.delta {
            None => format!("Reference region: {:.2}", row.display_average),
            Some(delta) => format!(
                "Region {} ({}): {:.2} (diff: {:.2}) {}",
                row.position,
                row.display_color,
                row.display_average,
                delta,
                classification_label(row.classification)
            ),
        })
        .collect()
}
