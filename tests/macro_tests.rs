use typescan::{ScanError, scan};

#[test]
fn test_macro_basic() {
    let (request, reply) = scan!("Hello: world", "{}: {}", String, String)
        .unwrap()
        .into_values();
    assert_eq!(request, "Hello");
    assert_eq!(reply, "world");
}

#[test]
#[allow(clippy::float_cmp)]
fn test_macro_specifiers() {
    let (name, age, weight) = scan!("Charlie: 35 years, 72.5 kg", "{%s}: {%u} years, {%f} kg", &str, u8, f32)
        .unwrap()
        .into_values();
    assert_eq!(name, "Charlie");
    assert_eq!(age, 35);
    assert_eq!(weight, 72.5);
}

#[test]
fn test_macro_input_expression() {
    let lines = ["x=1", "x=-2"];
    let values: Vec<i64> = lines
        .iter()
        .map(|line| scan!(*line, "x={%d}", i64).map(|r| r.into_values().0))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(values, vec![1, -2]);
}

#[test]
fn test_macro_runtime_errors() {
    assert!(matches!(
        scan!("5 -> five", "{} XXX {}", i32, i32),
        Err(ScanError::LiteralMismatch { .. })
    ));
    assert!(matches!(
        scan!("-1", "{%u}", u32),
        Err(ScanError::OutOfRange { .. })
    ));
}

#[test]
fn test_macro_matches_function() {
    assert_eq!(
        scan!("3,4", "{},{}", f64, f64),
        typescan::scan::<(f64, f64)>("3,4", "{},{}")
    );
}
