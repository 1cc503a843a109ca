use pricegraph::core::price_labels;

#[test]
fn worked_example_picks_hundred_multiple() {
    // ideal step 112.5 sits closest to the 100 multiple.
    let labels = price_labels(1000.0, 1450.0, 4).expect("labels");
    assert_eq!(labels.as_slice(), &[1000.0, 1100.0, 1200.0, 1300.0, 1400.0]);
}

#[test]
fn labels_are_strictly_increasing_and_bounded() {
    for (min, max, count) in [
        (3000.0, 5000.0, 4),
        (0.0, 137.0, 3),
        (999.0, 12_345.0, 6),
        (-450.0, 450.0, 4),
    ] {
        let labels = price_labels(min, max, count).expect("labels");
        assert!(!labels.is_empty());
        assert!(labels.len() <= count + 1, "min={min} max={max} count={count}");
        for pair in labels.windows(2) {
            assert!(pair[0] < pair[1], "labels must strictly increase");
        }
    }
}

#[test]
fn labels_never_exceed_the_floored_maximum() {
    let labels = price_labels(4000.0, 4980.0, 4).expect("labels");
    assert_eq!(labels.as_slice(), &[4000.0, 4250.0, 4500.0, 4750.0]);
}

#[test]
fn flat_window_emits_a_single_deterministic_label() {
    // All multiples tie at distance zero from an ideal step of 0; the
    // smallest (100) must win every time.
    let labels = price_labels(142.0, 142.0, 4).expect("labels");
    assert_eq!(labels.as_slice(), &[100.0]);

    let again = price_labels(142.0, 142.0, 4).expect("labels");
    assert_eq!(labels, again);
}

#[test]
fn zero_desired_count_is_rejected() {
    assert!(price_labels(0.0, 100.0, 0).is_err());
}

#[test]
fn inverted_bounds_are_rejected() {
    assert!(price_labels(200.0, 100.0, 4).is_err());
}
