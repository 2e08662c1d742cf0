//! Side-by-side bar offset tests

use test_log::test;

use stock_profile::charts::{bar_positions, group_midpoints, group_positions, BarLayout};

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{:?} vs {:?}", actual, expected);
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "{:?} vs {:?}", actual, expected);
    }
}

#[test]
fn test_revenue_and_earnings_offsets() {
    let revenue = bar_positions(1, 2, 4, 0.8);
    let earnings = bar_positions(2, 2, 4, 0.8);

    assert_close(&revenue, &[0.8, 2.8, 4.8, 6.8]);
    assert_close(&earnings, &[1.6, 3.6, 5.6, 7.6]);
    assert_close(&group_midpoints(&[revenue, earnings]).unwrap(), &[1.2, 3.2, 5.2, 7.2]);
}

#[test]
fn test_layout_matches_free_functions() {
    let layout = BarLayout::new(2, 4, 0.8);
    assert_eq!(layout.groups(), group_positions(2, 4, 0.8));
    assert_eq!(layout.positions(2), bar_positions(2, 2, 4, 0.8));
}

#[test]
fn test_groups_never_overlap() {
    let width = 0.6;
    let groups = group_positions(3, 5, width);
    for category in 0..5 {
        for pair in groups.windows(2) {
            let gap = pair[1][category] - pair[0][category];
            assert!((gap - width).abs() < 1e-9);
        }
    }
}
