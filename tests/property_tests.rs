//! Property-based tests: values written with a format scan back unchanged.

use proptest::prelude::*;
use typescan::scan;

proptest! {
    #[test]
    fn prop_signed_roundtrip(n in any::<i64>()) {
        let input = n.to_string();
        let (value,) = scan::<(i64,)>(&input, "{%d}").unwrap().into_values();
        prop_assert_eq!(value, n);
    }

    #[test]
    fn prop_unsigned_with_literals(n in any::<u32>(), m in any::<u8>()) {
        let input = format!("n={n}; m={m}!");
        let (a, b) = scan::<(u32, u8)>(&input, "n={%u}; m={%u}!").unwrap().into_values();
        prop_assert_eq!((a, b), (n, m));
    }

    #[test]
    fn prop_float_roundtrip(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        let input = x.to_string();
        let (value,) = scan::<(f64,)>(&input, "{%f}").unwrap().into_values();
        prop_assert_eq!(value, x);
    }

    #[test]
    fn prop_text_without_separator(word in "[a-zA-Z0-9]{0,16}", n in any::<i16>()) {
        let input = format!("{word}|{n}");
        let (text, value) = scan::<(String, i16)>(&input, "{%s}|{%d}").unwrap().into_values();
        prop_assert_eq!(text, word);
        prop_assert_eq!(value, n);
    }

    #[test]
    fn prop_scan_is_idempotent(input in ".{0,24}", format in "[a-z {}%du]{0,12}") {
        let first = scan::<(i32, String)>(&input, &format);
        let second = scan::<(i32, String)>(&input, &format);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_unsigned_rejects_negative(n in 1u64..=u64::MAX) {
        let input = format!("-{n}");
        let result = scan::<(u64,)>(&input, "{%u}");
        prop_assert!(result.is_err());
    }
}
