//! Cutting Definition of Done (DoD) Integration Tests
//!
//! Exercises the public cutter API end to end.

use besquare_core::domain::CutErrorKind;
use besquare_core::{CutterConfig, Rectangle, SquareCutter, SquareFactory};

fn square(side: i64) -> Rectangle {
    Rectangle::square(side).unwrap()
}

/// DoD 1: A 25x15 sheet with 10-unit squares yields exactly two squares
#[test]
fn test_reference_cut() {
    let mut cutter = SquareCutter::new(10);

    let report = cutter.submit_material(25, 15).unwrap();

    assert_eq!((report.columns, report.rows), (3, 2));
    assert_eq!(cutter.squares_ready_for_delivery(), 2);
    assert_eq!(cutter.drain_squares(), vec![square(10), square(10)]);
}

/// DoD 2: Squares from several sheets are delivered in submission order
#[test]
fn test_queue_spans_submissions() {
    let mut cutter = SquareCutter::from_config(&CutterConfig::new(2));

    cutter.submit_material(4, 2).unwrap();
    cutter.set_square_size(3);
    cutter.submit_material(3, 7).unwrap();
    cutter.set_square_size(1);
    cutter.submit_material(1, 1).unwrap();

    let delivered: Vec<i64> = cutter.get_squares().map(|s| s.width()).collect();
    assert_eq!(delivered, vec![2, 2, 3, 3, 1]);
}

/// DoD 3: Partial retrieval leaves the rest queued for the next caller
#[test]
fn test_partial_retrieval() {
    let mut cutter = SquareCutter::new(1);
    cutter.submit_material(5, 2).unwrap();

    let first: Vec<Rectangle> = cutter.get_squares().take(4).collect();
    assert_eq!(first.len(), 4);
    assert_eq!(cutter.squares_ready_for_delivery(), 6);

    cutter.submit_material(1, 1).unwrap();
    assert_eq!(cutter.get_squares().count(), 7);
    assert_eq!(cutter.get_squares().count(), 0);
}

/// DoD 4: Each error category is reported and nothing is queued
#[test]
fn test_error_taxonomy() {
    let mut cutter = SquareCutter::new(10);
    let cases = [
        ((0, 10), CutErrorKind::InvalidDimension),
        ((10, -1), CutErrorKind::InvalidDimension),
        ((9, 10), CutErrorKind::MaterialTooSmall),
        ((10, 9), CutErrorKind::MaterialTooSmall),
    ];

    for ((width, height), kind) in cases {
        let err = cutter.submit_material(width, height).unwrap_err();
        assert_eq!(err.kind(), kind, "{}x{}", width, height);
    }

    cutter.set_square_size(0);
    let err = cutter.submit_material(10, 10).unwrap_err();
    assert_eq!(err.kind(), CutErrorKind::NotConfigured);

    assert_eq!(cutter.squares_ready_for_delivery(), 0);
}

/// DoD 5: Callers can work purely through the factory trait
#[test]
fn test_generic_factory_caller() {
    fn produce<F: SquareFactory>(
        factory: &mut F,
        sheets: &[(i64, i64)],
    ) -> (usize, Vec<Option<CutErrorKind>>) {
        let outcomes = sheets
            .iter()
            .map(|&(width, height)| factory.submit_material(width, height).err().map(|e| e.kind()))
            .collect();
        (factory.squares_ready_for_delivery(), outcomes)
    }

    let mut cutter = SquareCutter::new(3);
    let (ready, outcomes) = produce(&mut cutter, &[(9, 9), (2, 2), (6, 4)]);

    assert_eq!(ready, 9 + 2);
    assert_eq!(
        outcomes,
        vec![None, Some(CutErrorKind::MaterialTooSmall), None]
    );
}

/// DoD 6: Delivered squares serialize for downstream consumers
#[test]
fn test_squares_serialize() {
    let mut cutter = SquareCutter::new(4);
    cutter.submit_material(8, 4).unwrap();

    let json = serde_json::to_value(cutter.drain_squares()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{"width": 4, "height": 4}, {"width": 4, "height": 4}])
    );
}
