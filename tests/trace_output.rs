use rust_decimal_macros::dec;
use tipcalc::prelude::*;

#[test]
fn test_breakdown_json_shape() {
    let breakdown = TipCalculator::new(10, 21).unwrap().round_up(true).calculate();
    let json = serde_json::to_string(&breakdown).unwrap();

    println!("Serialized JSON: {}", json);

    assert!(json.contains(r#""tip_amount":"3""#));
    assert!(json.contains(r#""total_amount":"13""#));
    assert!(json.contains(r#""operation":"initial""#));
    assert!(json.contains(r#""operation":"roundUp""#));
    assert!(json.contains(r#""operation":"result""#));

    let back: TipBreakdown = serde_json::from_str(&json).unwrap();
    assert_eq!(back, breakdown);
}

#[test]
fn test_trace_order() {
    let breakdown = TipCalculator::new(dec!(40), dec!(15)).unwrap().calculate();
    let ops: Vec<Operation> = breakdown.calculation_trace.iter().map(|s| s.operation).collect();
    assert_eq!(
        ops,
        vec![Operation::Initial, Operation::Rate, Operation::Multiply, Operation::Add, Operation::Result]
    );
}

#[test]
fn test_explain_output() {
    let breakdown = TipCalculator::new(10, 21)
        .unwrap()
        .round_up(true)
        .with_label("Cafe")
        .calculate();
    let text = breakdown.explain();
    assert!(text.contains("Explanation for 'Cafe':"));
    assert!(text.contains("Rounded Up Tip"));
    assert!(text.contains("Tip:   3.00"));
    assert!(text.contains("Total: 13.00"));
}
