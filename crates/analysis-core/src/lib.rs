//! RegionLens Analysis Core — The Region Analysis Engine
//!
//! Turns a pixel buffer plus the current region set into a classification:
//! - **Buffer:** Validated, immutable 8-bit pixel grid (1, 3, or 4 channels)
//! - **Analyzer:** Per-region mean intensity and reference comparison
//! - **Report:** Ordered results and presentation rows
//! - **Session:** Owns store, buffer, and analyzer; re-analyzes on every change
//!
//! This crate is pure computation — no I/O, no image decoding.
//! All inputs are data; all outputs are data.

pub mod analyzer;
pub mod buffer;
pub mod report;
pub mod session;

pub use analyzer::{AnalyzerConfig, RegionAnalyzer};
pub use buffer::{BufferError, PixelBuffer};
pub use report::{AnalysisReport, AnalysisResult, AnalysisStatus, Classification, ResultRow};
pub use session::AnalysisSession;
