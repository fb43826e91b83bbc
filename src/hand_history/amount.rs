use rust_decimal::Decimal;

use crate::errors::AnalysisError;

/// Parse a decimal-formatted chip amount without going through a binary
/// float.
///
/// Leading and trailing whitespace is ignored. Text that would lose digits
/// when stored in a [`Decimal`] is rejected rather than rounded.
///
/// ```
/// use hand_stats::hand_history::parse_amount;
///
/// let amount = parse_amount("9.95").unwrap();
/// assert_eq!(amount.to_string(), "9.95");
/// assert!(parse_amount("nine").is_err());
/// ```
pub fn parse_amount(text: &str) -> Result<Decimal, AnalysisError> {
    Decimal::from_str_exact(text.trim())
        .map_err(|_| AnalysisError::InvalidAmount(text.to_string()))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_parse_keeps_written_scale() {
        assert_eq!(parse_amount("49.50").unwrap().to_string(), "49.50");
        assert_eq!(parse_amount("0.5").unwrap(), dec!(0.5));
        assert_eq!(parse_amount(" 10.05 ").unwrap(), dec!(10.05));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_amount("1.2.3"),
            Err(AnalysisError::InvalidAmount(_))
        ));
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn test_parse_is_exact_for_float_unfriendly_values() {
        let sum = parse_amount("0.1").unwrap() + parse_amount("0.2").unwrap();
        assert_eq!(sum, dec!(0.3));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_number_amount_is_exact() {
        use crate::hand_history::Action;

        let action: Action = serde_json::from_str(
            r#"{"type": "call", "playerName": "Carl", "amount": 0.12345678901234567891}"#,
        )
        .unwrap();
        assert_eq!(action.amount(), Some(dec!(0.12345678901234567891)));

        let action: Action =
            serde_json::from_str(r#"{"type": "bet", "playerName": "Mike", "amount": 9.95}"#)
                .unwrap();
        assert_eq!(action.amount(), Some(dec!(9.95)));
    }
}
