//! Property tests for the square cutter

#[cfg(test)]
mod tests {
    use super::super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn squares_added_matches_floor_product(
            square_size in 1i64..50,
            extra_w in 0i64..200,
            extra_h in 0i64..200,
        ) {
            let width = square_size + extra_w;
            let height = square_size + extra_h;
            let mut cutter = SquareCutter::new(square_size);

            let report = cutter.submit_material(width, height).unwrap();
            let expected = ((width / square_size) * (height / square_size)) as usize;

            prop_assert_eq!(report.squares_added, expected);
            prop_assert_eq!(cutter.squares_ready_for_delivery(), expected);
            prop_assert_eq!(
                report.squares_added + report.discarded_tiles,
                (report.columns * report.rows) as usize
            );
        }

        #[test]
        fn queue_accumulates_and_drains_in_order(
            batches in prop::collection::vec((1i64..20, 0i64..60, 0i64..60), 1..8),
        ) {
            let mut cutter = SquareCutter::new(1);
            let mut expected = Vec::new();

            for (size, extra_w, extra_h) in batches {
                cutter.set_square_size(size);
                let report = cutter.submit_material(size + extra_w, size + extra_h).unwrap();
                let square = Rectangle::square(size).unwrap();
                expected.extend(std::iter::repeat(square).take(report.squares_added));
            }

            prop_assert_eq!(cutter.squares_ready_for_delivery(), expected.len());
            let delivered: Vec<Rectangle> = cutter.get_squares().collect();
            prop_assert_eq!(delivered, expected);
            prop_assert_eq!(cutter.squares_ready_for_delivery(), 0);
            prop_assert_eq!(cutter.get_squares().next(), None);
        }

        #[test]
        fn exact_square_always_yields_one(square_size in 1i64..10_000) {
            let mut cutter = SquareCutter::new(square_size);
            cutter.submit_material(square_size, square_size).unwrap();

            prop_assert_eq!(cutter.drain_squares(), vec![Rectangle::square(square_size).unwrap()]);
        }

        #[test]
        fn undersized_material_is_rejected(square_size in 2i64..100, short in 1i64..100) {
            prop_assume!(short < square_size);
            let mut cutter = SquareCutter::new(square_size);

            prop_assert!(cutter.submit_material(short, square_size).is_err());
            prop_assert!(cutter.submit_material(square_size, short).is_err());
            prop_assert_eq!(cutter.squares_ready_for_delivery(), 0);
        }
    }
}
