#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rust_decimal_macros::dec;

    use crate::{
        app::calc::convert,
        error::ConverterError,
        models::{CurrencyCode, RateTable},
        test::sample_rates,
    };

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::parse(s).unwrap()
    }

    #[test]
    fn converts_from_eur() {
        let rates = sample_rates();
        let result = convert(10.0, &code("EUR"), &code("USD"), &rates).unwrap();

        assert_eq!(*result.effective_rate(), 1.1);
        assert_eq!(*result.converted_amount(), 10.0 * 1.1);
        assert_eq!(*result.display_amount(), dec!(11.00));
        assert_eq!(*result.display_rate(), dec!(1.100000));
    }

    #[test]
    fn converts_to_eur() {
        let rates = sample_rates();
        let result = convert(10.0, &code("USD"), &code("EUR"), &rates).unwrap();

        assert_eq!(*result.converted_amount(), 10.0 * (1.0 / 1.1));
        assert_eq!(*result.display_amount(), dec!(9.09));
        assert_eq!(*result.display_rate(), dec!(0.909091));
    }

    #[test]
    fn pivots_through_eur_for_cross_pairs() {
        let rates = sample_rates();
        let result = convert(10.0, &code("USD"), &code("GBP"), &rates).unwrap();

        assert!((result.effective_rate() - 0.85 / 1.1).abs() < 1e-12);
        assert_eq!(*result.display_amount(), dec!(7.73));
        assert_eq!(*result.display_rate(), dec!(0.772727));
    }

    #[test]
    fn round_trip_returns_original_amount() {
        let rates = sample_rates();
        let there = convert(123.45, &code("GBP"), &code("USD"), &rates).unwrap();
        let back = convert(*there.converted_amount(), &code("USD"), &code("GBP"), &rates).unwrap();

        assert!((back.converted_amount() - 123.45).abs() < 1e-9);
    }

    #[test]
    fn identity_ignores_the_table() {
        let result = convert(42.5, &code("JPY"), &code("JPY"), &RateTable::default()).unwrap();

        assert_eq!(*result.converted_amount(), 42.5);
        assert_eq!(*result.effective_rate(), 1.0);
        assert!(result.is_identity());
    }

    #[test]
    fn empty_table_means_rates_unavailable() {
        let err = convert(10.0, &code("EUR"), &code("USD"), &RateTable::default()).unwrap_err();

        assert_eq!(err, ConverterError::RatesUnavailable);
    }

    #[test]
    fn missing_code_is_a_conversion_failure() {
        let rates = sample_rates();

        for (from, to) in [("EUR", "CHF"), ("CHF", "EUR"), ("CHF", "USD"), ("USD", "CHF")] {
            let err = convert(10.0, &code(from), &code(to), &rates).unwrap_err();
            assert_eq!(err, ConverterError::Conversion, "{} -> {}", from, to);
        }
    }

    #[test]
    fn rejects_out_of_range_amounts() {
        let rates = sample_rates();

        for amount in [0.0, -5.0, 1_000_000.01, f64::NAN, f64::INFINITY] {
            let err = convert(amount, &code("EUR"), &code("USD"), &rates).unwrap_err();
            assert!(
                matches!(err, ConverterError::Validation(_)),
                "amount {} gave {:?}",
                amount,
                err
            );
        }

        // Validation comes before the identity shortcut and the empty-table check.
        let err = convert(0.0, &code("USD"), &code("USD"), &RateTable::default()).unwrap_err();
        assert!(matches!(err, ConverterError::Validation(_)));
    }

    #[test]
    fn accepts_the_ceiling_itself() {
        let rates = sample_rates();
        let result = convert(1_000_000.0, &code("EUR"), &code("GBP"), &rates).unwrap();

        assert_eq!(*result.display_amount(), dec!(850000.00));
    }

    #[test]
    fn overflowing_rates_never_leak_infinity() {
        let rates = RateTable::from_rates(HashMap::from([
            (String::from("AAA"), f64::MIN_POSITIVE),
            (String::from("BBB"), f64::MAX),
        ]));
        let err = convert(10.0, &code("AAA"), &code("BBB"), &rates).unwrap_err();

        assert_eq!(err, ConverterError::Conversion);
    }

    #[test]
    fn display_rounds_half_away_from_zero() {
        let rates = RateTable::from_rates(HashMap::from([(String::from("USD"), 0.125)]));

        let result = convert(1.0, &code("EUR"), &code("USD"), &rates).unwrap();
        assert_eq!(*result.display_amount(), dec!(0.13));

        let result = convert(5.0, &code("EUR"), &code("USD"), &rates).unwrap();
        assert_eq!(*result.display_amount(), dec!(0.63));
        assert_eq!(*result.display_rate(), dec!(0.125000));
    }
}
