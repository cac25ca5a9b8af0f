//! Property tests for the pure pager.

use postboard::{paginate, PageError};
use proptest::prelude::*;

use crate::common::proptest_prelude::proptest_prelude_config;

#[test]
fn worked_example_matches() {
    let window = paginate(25, 3, 10).unwrap();
    assert_eq!(window.offset, 20);
    assert_eq!(window.limit, 10);
    assert_eq!(window.meta.total_pages, 3);
    assert_eq!(window.expected_len(), 5);
}

#[test]
fn zero_inputs_are_rejected() {
    assert_eq!(paginate(10, 0, 10), Err(PageError::InvalidPageNumber));
    assert_eq!(paginate(10, 1, 0), Err(PageError::InvalidPageSize));
}

proptest! {
    #![proptest_config(proptest_prelude_config())]

    #[test]
    fn pages_tile_the_collection(total in 0u64..5_000, size in 1u64..200) {
        let first = paginate(total, 1, size).unwrap();
        let pages = first.meta.total_pages;
        prop_assert_eq!(pages, total.div_ceil(size));

        // Every item lands in exactly one page, in order.
        let mut covered = 0u64;
        for page in 1..=pages {
            let w = paginate(total, page, size).unwrap();
            prop_assert_eq!(w.offset, covered);
            prop_assert!(w.expected_len() >= 1);
            prop_assert!(w.expected_len() <= size);
            covered += w.expected_len();
        }
        prop_assert_eq!(covered, total);

        // Anything past the last page is empty but still valid.
        let past = paginate(total, pages + 1, size).unwrap();
        prop_assert_eq!(past.expected_len(), 0);
        prop_assert_eq!(past.meta.total_results, total);
    }

    #[test]
    fn huge_pages_do_not_overflow(page in 1u64..=u64::MAX, size in 1u64..=u64::MAX) {
        let w = paginate(7, page, size).unwrap();
        prop_assert_eq!(w.meta.current_page, page);
        prop_assert!(w.expected_len() <= 7);
    }
}
