use proptest::prelude::*;

use regionlens_analysis_core::{
    AnalysisSession, AnalysisStatus, Classification, PixelBuffer, RegionAnalyzer,
};
use regionlens_region_model::{Bounds, ImageDims, RawRect, RegionStore};

/// 10x10 grey image of `base`, with `bounds` painted `value`.
fn grey_with_patch(base: u8, bounds: Bounds, value: u8) -> PixelBuffer {
    let data = (0..10u32)
        .flat_map(|y| (0..10u32).map(move |x| (x, y)))
        .map(|(x, y)| if bounds.contains(x, y) { value } else { base })
        .collect();
    PixelBuffer::new(10, 10, 1, data).unwrap()
}

#[test]
fn uniform_regions_match_then_differ_after_pixel_change() {
    let dims = ImageDims::new(10, 10);
    let mut store = RegionStore::new();
    let reference = store.add(RawRect::new(0.0, 0.0, 5.0, 5.0), dims).unwrap();
    let b = store.add(RawRect::new(5.0, 5.0, 10.0, 10.0), dims).unwrap();

    let analyzer = RegionAnalyzer::with_defaults();

    let uniform = PixelBuffer::uniform(10, 10, 1, 100).unwrap();
    let report = analyzer.analyze(&uniform, store.snapshot());
    assert_eq!(report.status, AnalysisStatus::Complete);
    let ref_result = report.get(reference.id).unwrap();
    assert_eq!(ref_result.average, 100.0);
    assert_eq!(ref_result.classification, Classification::Reference);
    let b_result = report.get(b.id).unwrap();
    assert_eq!(b_result.average, 100.0);
    assert_eq!(b_result.delta, Some(0.0));
    assert_eq!(b_result.classification, Classification::Match);

    let patched = grey_with_patch(100, b.bounds, 110);
    let report = analyzer.analyze(&patched, store.snapshot());
    let b_result = report.get(b.id).unwrap();
    assert_eq!(b_result.average, 110.0);
    assert_eq!(b_result.delta, Some(10.0));
    assert_eq!(b_result.classification, Classification::Differ);
    assert_eq!(report.get(reference.id).unwrap().average, 100.0);
}

#[test]
fn removing_reference_reports_no_reference_until_next_add() {
    let mut session = AnalysisSession::with_defaults();
    session.load_buffer(PixelBuffer::uniform(10, 10, 3, 80).unwrap());

    let (reference, _) = session.add_region(RawRect::new(0.0, 0.0, 3.0, 3.0)).unwrap();
    session.add_region(RawRect::new(3.0, 3.0, 6.0, 6.0)).unwrap();
    session.add_region(RawRect::new(6.0, 6.0, 9.0, 9.0)).unwrap();

    let report = session.remove_region(reference.id);
    assert_eq!(report.status, AnalysisStatus::NoReference);
    assert!(report.results.is_empty());
    assert_eq!(session.regions().len(), 2);

    let (fresh, report) = session.add_region(RawRect::new(0.0, 6.0, 3.0, 9.0)).unwrap();
    assert!(fresh.is_reference);
    assert_eq!(report.status, AnalysisStatus::Complete);
    assert_eq!(report.results.len(), 3);
    assert_eq!(report.match_count(), 2);
    assert_eq!(report.reference().map(|r| r.region_id), Some(fresh.id));
    assert_eq!(report.results[0].region_id, fresh.id);

    let rows = report.rows(session.regions());
    assert!(rows[0].is_reference);
    assert_eq!(rows[0].position, 3);
    assert_eq!(rows[1].position, 1);
}

#[test]
fn full_image_region_covers_every_pixel() {
    // Gradient so the average depends on every pixel being included.
    let data: Vec<u8> = (0..100u8).collect();
    let buffer = PixelBuffer::new(10, 10, 1, data).unwrap();

    let mut store = RegionStore::new();
    let region = store
        .add(RawRect::new(0.0, 0.0, 10.0, 10.0), buffer.dims())
        .unwrap();
    assert_eq!(region.bounds, Bounds::covering(buffer.dims()));

    let report = RegionAnalyzer::with_defaults().analyze(&buffer, store.snapshot());
    assert_eq!(report.get(region.id).unwrap().average, 49.5);
}

#[test]
fn analysis_is_idempotent() {
    let data: Vec<u8> = (0..300u32).map(|i| (i * 37 % 251) as u8).collect();
    let buffer = PixelBuffer::new(10, 10, 3, data).unwrap();

    let mut store = RegionStore::new();
    store.add(RawRect::new(1.0, 1.0, 4.0, 7.0), buffer.dims()).unwrap();
    store.add(RawRect::new(9.0, 0.0, 3.0, 5.0), buffer.dims()).unwrap();
    store.add(RawRect::new(2.5, 8.7, 7.1, 3.3), buffer.dims()).unwrap();

    let analyzer = RegionAnalyzer::with_defaults();
    let first = analyzer.analyze(&buffer, store.snapshot());
    let second = analyzer.analyze(&buffer, store.snapshot());
    assert_eq!(first, second);
    for (a, b) in first.results.iter().zip(&second.results) {
        assert_eq!(a.average.to_bits(), b.average.to_bits());
    }
}

#[test]
fn smaller_image_reclamps_and_skips_collapsed_regions() {
    let mut session = AnalysisSession::with_defaults();
    session.load_buffer(PixelBuffer::uniform(20, 20, 1, 60).unwrap());

    let (reference, _) = session.add_region(RawRect::new(0.0, 0.0, 8.0, 8.0)).unwrap();
    let (partial, _) = session.add_region(RawRect::new(4.0, 4.0, 16.0, 16.0)).unwrap();
    let (outside, _) = session.add_region(RawRect::new(12.0, 12.0, 20.0, 20.0)).unwrap();

    let report = session.load_buffer(PixelBuffer::uniform(10, 10, 1, 60).unwrap());
    assert_eq!(report.status, AnalysisStatus::Complete);
    assert_eq!(report.skipped, vec![outside.id]);
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.get(reference.id).unwrap().average, 60.0);
    assert_eq!(
        report.get(partial.id).unwrap().classification,
        Classification::Match
    );
    // Stored geometry keeps its creation-time bounds.
    assert_eq!(session.regions().len(), 3);
    assert_eq!(
        session.store().get(outside.id).unwrap().bounds,
        Bounds::new(12, 12, 20, 20)
    );
}

#[test]
fn rows_follow_store_order_with_colors() {
    let mut session = AnalysisSession::with_defaults();
    session.load_buffer(grey_with_patch(100, Bounds::new(5, 0, 10, 10), 150));

    session.add_region(RawRect::new(0.0, 0.0, 5.0, 5.0)).unwrap();
    session.add_region(RawRect::new(5.0, 0.0, 10.0, 5.0)).unwrap();
    session.add_region(RawRect::new(0.0, 5.0, 5.0, 10.0)).unwrap();

    let rows = session.report().rows(session.regions());
    let summary: Vec<(usize, &str, Classification)> = rows
        .iter()
        .map(|r| (r.position, r.display_color.name(), r.classification))
        .collect();
    assert_eq!(
        summary,
        vec![
            (1, "red", Classification::Reference),
            (2, "blue", Classification::Differ),
            (3, "green", Classification::Match),
        ]
    );
    assert_eq!(rows[1].delta, Some(50.0));
}

proptest! {
    #[test]
    fn grey_and_rgb_with_equal_channels_agree(
        pixels in prop::collection::vec(any::<u8>(), 36),
        x1 in 0.0..6.0f64, y1 in 0.0..6.0f64, x2 in 0.0..6.0f64, y2 in 0.0..6.0f64,
    ) {
        let grey = PixelBuffer::new(6, 6, 1, pixels.clone()).unwrap();
        let rgb_data: Vec<u8> = pixels.iter().flat_map(|&v| [v, v, v]).collect();
        let rgb = PixelBuffer::new(6, 6, 3, rgb_data).unwrap();

        let mut store = RegionStore::new();
        if store.add(RawRect::new(x1, y1, x2, y2), grey.dims()).is_ok() {
            let analyzer = RegionAnalyzer::with_defaults();
            let grey_report = analyzer.analyze(&grey, store.snapshot());
            let rgb_report = analyzer.analyze(&rgb, store.snapshot());
            prop_assert_eq!(grey_report, rgb_report);
        }
    }

    #[test]
    fn averages_stay_on_sample_scale(
        pixels in prop::collection::vec(any::<u8>(), 64),
        x1 in -2.0..10.0f64, y1 in -2.0..10.0f64, x2 in -2.0..10.0f64, y2 in -2.0..10.0f64,
    ) {
        let buffer = PixelBuffer::new(4, 4, 4, pixels).unwrap();
        let mut store = RegionStore::new();
        if store.add(RawRect::new(x1, y1, x2, y2), buffer.dims()).is_ok() {
            let report = RegionAnalyzer::with_defaults().analyze(&buffer, store.snapshot());
            prop_assert_eq!(report.results.len(), 1);
            let average = report.results[0].average;
            prop_assert!((0.0..=255.0).contains(&average));
        }
    }
}
