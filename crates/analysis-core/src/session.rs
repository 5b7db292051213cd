//! Engine instance tying a region store to the current image.
//!
//! Every mutating call re-runs the analysis and returns the fresh report,
//! so callers always hold a result consistent with the latest state.

use regionlens_common::{RegionlensError, RegionlensResult};
use regionlens_region_model::geometry::RawRect;
use regionlens_region_model::region::{Region, RegionId};
use regionlens_region_model::store::RegionStore;

use crate::analyzer::{AnalyzerConfig, RegionAnalyzer};
use crate::buffer::PixelBuffer;
use crate::report::AnalysisReport;

/// Owns the regions, the loaded buffer, and the analyzer.
#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    store: RegionStore,
    buffer: Option<PixelBuffer>,
    analyzer: RegionAnalyzer,
}

impl AnalysisSession {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            store: RegionStore::new(),
            buffer: None,
            analyzer: RegionAnalyzer::new(config),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(AnalyzerConfig::default())
    }

    /// Replace the image, keeping regions. They are re-clamped on analysis.
    pub fn load_buffer(&mut self, buffer: PixelBuffer) -> AnalysisReport {
        tracing::info!(
            width = buffer.width(),
            height = buffer.height(),
            channels = buffer.channels(),
            regions = self.store.len(),
            "Image loaded"
        );
        self.buffer = Some(buffer);
        self.report()
    }

    /// Replace the image and drop all regions.
    pub fn load_buffer_and_clear(&mut self, buffer: PixelBuffer) -> AnalysisReport {
        self.store.clear();
        self.load_buffer(buffer)
    }

    /// Add a region drawn on the current image.
    pub fn add_region(&mut self, raw: RawRect) -> RegionlensResult<(Region, AnalysisReport)> {
        let dims = self
            .buffer
            .as_ref()
            .map(PixelBuffer::dims)
            .ok_or(RegionlensError::NoImage)?;
        let region = self.store.add(raw, dims)?;
        Ok((region, self.report()))
    }

    pub fn remove_region(&mut self, id: RegionId) -> AnalysisReport {
        self.store.remove(id);
        self.report()
    }

    pub fn clear(&mut self) -> AnalysisReport {
        self.store.clear();
        self.report()
    }

    /// Run the analysis against the current state.
    pub fn report(&self) -> AnalysisReport {
        match &self.buffer {
            Some(buffer) => self.analyzer.analyze(buffer, self.store.snapshot()),
            None => AnalysisReport::no_reference(vec![]),
        }
    }

    pub fn regions(&self) -> &[Region] {
        self.store.snapshot()
    }

    pub fn store(&self) -> &RegionStore {
        &self.store
    }

    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn analyzer(&self) -> &RegionAnalyzer {
        &self.analyzer
    }
}
