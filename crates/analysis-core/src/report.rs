//! Analysis output types and the rows handed to presentation.

use serde::{Deserialize, Serialize};

use regionlens_region_model::region::{DisplayColor, Region, RegionId};

/// Outcome of comparing a region with the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// The baseline itself; no comparison performed.
    Reference,
    /// Average within the threshold of the reference.
    Match,
    /// Average at or beyond the threshold.
    Differ,
}

/// Whether a classification could be produced at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Complete,
    /// No valid reference region; informational, not an error.
    NoReference,
}

/// Result for one valid region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub region_id: RegionId,
    /// Mean over all channels of all pixels in the region (0-255 scale).
    pub average: f64,
    /// Absolute difference to the reference average; `None` for the reference.
    pub delta: Option<f64>,
    pub classification: Classification,
}

/// Full output of one analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub status: AnalysisStatus,
    /// Valid regions in store order.
    pub results: Vec<AnalysisResult>,
    /// Regions whose bounds have no area inside the current buffer.
    pub skipped: Vec<RegionId>,
}

impl AnalysisReport {
    /// A report with nothing to classify.
    pub fn no_reference(skipped: Vec<RegionId>) -> Self {
        Self {
            status: AnalysisStatus::NoReference,
            results: vec![],
            skipped,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status == AnalysisStatus::Complete
    }

    pub fn get(&self, id: RegionId) -> Option<&AnalysisResult> {
        self.results.iter().find(|r| r.region_id == id)
    }

    pub fn reference(&self) -> Option<&AnalysisResult> {
        self.results
            .iter()
            .find(|r| r.classification == Classification::Reference)
    }

    /// Number of regions matching the reference.
    pub fn match_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.classification == Classification::Match)
            .count()
    }

    /// Join results with the region metadata needed for drawing.
    ///
    /// Results whose region is missing from `regions` are dropped.
    pub fn rows(&self, regions: &[Region]) -> Vec<ResultRow> {
        self.results
            .iter()
            .filter_map(|result| {
                let (index, region) = regions
                    .iter()
                    .enumerate()
                    .find(|(_, r)| r.id == result.region_id)?;
                Some(ResultRow {
                    region_id: result.region_id,
                    position: index + 1,
                    display_color: region.display_color,
                    average: result.average,
                    display_average: round_for_display(result.average),
                    delta: result.delta,
                    classification: result.classification,
                    is_reference: region.is_reference,
                })
            })
            .collect()
    }
}

/// One line of the results listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub region_id: RegionId,
    /// 1-based position in the store.
    pub position: usize,
    pub display_color: DisplayColor,
    pub average: f64,
    /// Average rounded to two decimals.
    pub display_average: f64,
    pub delta: Option<f64>,
    pub classification: Classification,
    pub is_reference: bool,
}

fn round_for_display(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use regionlens_region_model::geometry::Bounds;

    fn region(id: u64, is_reference: bool, color: DisplayColor) -> Region {
        Region {
            id: RegionId(id),
            bounds: Bounds::new(0, 0, 1, 1),
            is_reference,
            display_color: color,
        }
    }

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            status: AnalysisStatus::Complete,
            results: vec![
                AnalysisResult {
                    region_id: RegionId(0),
                    average: 100.0,
                    delta: None,
                    classification: Classification::Reference,
                },
                AnalysisResult {
                    region_id: RegionId(2),
                    average: 101.23456,
                    delta: Some(1.23456),
                    classification: Classification::Match,
                },
            ],
            skipped: vec![RegionId(1)],
        }
    }

    #[test]
    fn test_rows_join_region_metadata() {
        let regions = vec![
            region(0, true, DisplayColor::Red),
            region(1, false, DisplayColor::Blue),
            region(2, false, DisplayColor::Green),
        ];
        let rows = sample_report().rows(&regions);

        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_reference);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[1].display_color, DisplayColor::Green);
        assert_eq!(rows[1].position, 3);
        assert_eq!(rows[1].display_average, 101.23);
        assert_eq!(rows[1].delta, Some(1.23456));
    }

    #[test]
    fn test_rows_drop_unknown_regions() {
        let regions = vec![region(0, true, DisplayColor::Red)];
        let rows = sample_report().rows(&regions);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].region_id, RegionId(0));
    }

    #[test]
    fn test_report_lookup_helpers() {
        let report = sample_report();
        assert!(report.is_complete());
        assert_eq!(report.reference().map(|r| r.region_id), Some(RegionId(0)));
        assert_eq!(report.get(RegionId(2)).map(|r| r.average), Some(101.23456));
        assert!(report.get(RegionId(1)).is_none());
        assert_eq!(report.match_count(), 1);
    }

    #[test]
    fn test_report_serialization_labels() {
        let json = serde_json::to_string(&sample_report()).unwrap();
        assert!(json.contains("\"status\":\"complete\""));
        assert!(json.contains("\"classification\":\"reference\""));
        assert!(json.contains("\"classification\":\"match\""));

        let empty = serde_json::to_string(&AnalysisReport::no_reference(vec![])).unwrap();
        assert!(empty.contains("\"status\":\"no_reference\""));
    }
}
