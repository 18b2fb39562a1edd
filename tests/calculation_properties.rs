use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tipcalc::prelude::*;

#[test]
fn test_reference_values() {
    assert_eq!(compute_tip(dec!(10), dec!(20), false), dec!(2.0));
    assert_eq!(compute_tip(dec!(10), dec!(20), true), dec!(2.0)); // already integral
    assert_eq!(compute_tip(dec!(10), dec!(21), true), dec!(3.0)); // 2.1 rounds up to 3
    assert_eq!(compute_total(dec!(10), dec!(2)), dec!(12.0));
}

#[test]
fn test_tip_is_monotonic_in_amount_and_percent() {
    let amounts = [dec!(0), dec!(0.01), dec!(1), dec!(9.99), dec!(10), dec!(42.5), dec!(100), dec!(1234.56)];
    let percents = [dec!(0), dec!(0.5), dec!(10), dec!(15), dec!(18), dec!(20), dec!(21), dec!(33.3), dec!(100), dec!(250)];

    for round_up in [false, true] {
        for pair in amounts.windows(2) {
            for &percent in &percents {
                let lower = compute_tip(pair[0], percent, round_up);
                let higher = compute_tip(pair[1], percent, round_up);
                assert!(
                    lower <= higher,
                    "tip decreased when amount rose {} -> {} at {}% (round_up={})",
                    pair[0], pair[1], percent, round_up
                );
            }
        }
        for pair in percents.windows(2) {
            for &amount in &amounts {
                let lower = compute_tip(amount, pair[0], round_up);
                let higher = compute_tip(amount, pair[1], round_up);
                assert!(
                    lower <= higher,
                    "tip decreased when percent rose {} -> {} on {} (round_up={})",
                    pair[0], pair[1], amount, round_up
                );
            }
        }
    }
}

#[test]
fn test_round_up_never_lowers_a_non_negative_tip() {
    for cents in [0, 1, 99, 100, 101, 1999, 2000] {
        let amount = Decimal::new(cents, 2);
        let exact = compute_tip(amount, dec!(15), false);
        let rounded = compute_tip(amount, dec!(15), true);
        assert!(rounded >= exact);
        assert!(rounded - exact < Decimal::ONE);
        assert_eq!(rounded.fract(), Decimal::ZERO);
    }
}

#[test]
fn test_invalid_text_yields_zero() {
    for (amount_text, percent_text) in [("", ""), ("abc", "15"), ("10", ""), ("  ", "xyz")] {
        let amount = parse_or_zero(amount_text);
        let percent = parse_or_zero(percent_text);
        let tip = compute_tip(amount, percent, true);
        assert_eq!(tip, Decimal::ZERO);
        assert_eq!(compute_total(amount, tip), amount);
    }

    let result = TipCalculator::from_text("", "").calculate();
    assert_eq!(result.tip_amount, Decimal::ZERO);
    assert_eq!(result.total_amount, Decimal::ZERO);
}

#[test]
fn test_calculator_matches_pure_functions() {
    let cases = [
        (dec!(47.30), dec!(18), false),
        (dec!(47.30), dec!(18), true),
        (dec!(0.99), dec!(12.5), true),
        (dec!(250), dec!(0), true),
    ];
    for (amount, percent, round_up) in cases {
        let result = TipCalculator::new(amount, percent).unwrap().round_up(round_up).calculate();
        let tip = compute_tip(amount, percent, round_up);
        assert_eq!(result.tip_amount, tip);
        assert_eq!(result.total_amount, compute_total(amount, tip));
    }
}

#[test]
fn test_logging_does_not_interfere() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let result = TipCalculator::from_text("80", "12.5").with_label("Lunch").calculate();
    assert_eq!(result.tip_amount, dec!(10));
    assert_eq!(result.summary(), "Lunch: Tip 10.00 - Total 90.00");
}
