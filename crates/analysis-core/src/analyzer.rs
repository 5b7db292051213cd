//! Region averaging and reference classification.
//!
//! # Algorithm
//!
//! 1. **Re-clamp** every region to the current buffer; regions left with
//!    no area are skipped.
//! 2. **Reference**: find the region flagged as reference among the valid
//!    ones. Without it nothing is classified (`NoReference`).
//! 3. **Average**: mean of every channel value of every pixel in the
//!    half-open bounds, i.e. the sum divided by `width * height * channels`.
//! 4. **Classify**: `delta = |avg - avg_ref|`; `Match` if `delta` is
//!    strictly below the threshold, otherwise `Differ`.
//!
//! The reference result comes first, followed by the other valid regions
//! in store order.
//!
//! The pass is a pure function of buffer contents, region geometry, and
//! insertion order, so it can be re-run after every change.

use regionlens_common::config::{AnalysisDefaults, DEFAULT_MATCH_THRESHOLD};
use regionlens_region_model::geometry::Bounds;
use regionlens_region_model::region::Region;

use crate::buffer::PixelBuffer;
use crate::report::{AnalysisReport, AnalysisResult, AnalysisStatus, Classification};

/// Configuration for the region analyzer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Exclusive upper bound on `delta` for a `Match`.
    pub match_threshold: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

impl From<&AnalysisDefaults> for AnalyzerConfig {
    fn from(defaults: &AnalysisDefaults) -> Self {
        Self {
            match_threshold: defaults.match_threshold,
        }
    }
}

/// The region analyzer.
#[derive(Debug, Clone, Default)]
pub struct RegionAnalyzer {
    config: AnalyzerConfig,
}

impl RegionAnalyzer {
    /// Create a new analyzer with the given configuration.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Create an analyzer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(AnalyzerConfig::default())
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Classify an absolute difference to the reference average.
    pub fn classify(&self, delta: f64) -> Classification {
        if delta < self.config.match_threshold {
            Classification::Match
        } else {
            Classification::Differ
        }
    }

    /// Average and classify every valid region against the reference.
    pub fn analyze(&self, buffer: &PixelBuffer, regions: &[Region]) -> AnalysisReport {
        let dims = buffer.dims();
        let mut skipped = vec![];
        let mut valid: Vec<(&Region, Bounds)> = Vec::with_capacity(regions.len());

        for region in regions {
            let bounds = region.bounds.clamp_to(dims);
            if bounds.is_empty() {
                tracing::debug!(
                    region = %region.id,
                    bounds = %region.bounds,
                    width = dims.width,
                    height = dims.height,
                    "Region has no area in current buffer, skipping"
                );
                skipped.push(region.id);
            } else {
                valid.push((region, bounds));
            }
        }

        let Some((reference, reference_avg)) = valid
            .iter()
            .find(|(region, _)| region.is_reference)
            .and_then(|(region, bounds)| Some((*region, buffer.mean_intensity(*bounds)?)))
        else {
            tracing::debug!(
                regions = regions.len(),
                skipped = skipped.len(),
                "No valid reference region"
            );
            return AnalysisReport::no_reference(skipped);
        };

        let mut results = Vec::with_capacity(valid.len());
        results.push(AnalysisResult {
            region_id: reference.id,
            average: reference_avg,
            delta: None,
            classification: Classification::Reference,
        });
        results.extend(
            valid
                .iter()
                .filter(|(region, _)| !region.is_reference)
                .filter_map(|(region, bounds)| {
                    let average = buffer.mean_intensity(*bounds)?;
                    let delta = (average - reference_avg).abs();
                    Some(AnalysisResult {
                        region_id: region.id,
                        average,
                        delta: Some(delta),
                        classification: self.classify(delta),
                    })
                }),
        );

        tracing::debug!(
            reference_avg,
            classified = results.len(),
            skipped = skipped.len(),
            "Analysis complete"
        );

        AnalysisReport {
            status: AnalysisStatus::Complete,
            results,
            skipped,
        }
    }
}
