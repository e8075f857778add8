use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Invalid bounds '{0}'. Expected 'LOWER:UPPER' (e.g. '0.01:10.0').")]
    InvalidBoundsFormat(String),

    #[error("Bound component '{component}' of '{input}' is not a number.")]
    NotANumber { component: &'static str, input: String },
}

/// Parses a "LOWER:UPPER" pair as used by the `--*-bounds` options. Ordering
/// is left to the engine, which rejects inverted intervals with a proper
/// diagnostic.
pub fn parse_bounds(input: &str) -> Result<(f64, f64), ParseError> {
    let (lower, upper) = input
        .split_once(':')
        .ok_or_else(|| ParseError::InvalidBoundsFormat(input.to_string()))?;

    let lower = lower.trim().parse::<f64>().map_err(|_| ParseError::NotANumber {
        component: "lower",
        input: input.to_string(),
    })?;
    let upper = upper.trim().parse::<f64>().map_err(|_| ParseError::NotANumber {
        component: "upper",
        input: input.to_string(),
    })?;

    Ok((lower, upper))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_bounds_parse() {
        assert_eq!(parse_bounds("0.01:10.0"), Ok((0.01, 10.0)));
        assert_eq!(parse_bounds(" 4 : 9 "), Ok((4.0, 9.0)));
    }

    #[test]
    fn missing_separator_is_rejected() {
        assert_eq!(
            parse_bounds("0.01-10.0"),
            Err(ParseError::InvalidBoundsFormat("0.01-10.0".to_string()))
        );
    }

    #[test]
    fn non_numeric_components_are_rejected() {
        assert!(matches!(
            parse_bounds("low:10"),
            Err(ParseError::NotANumber { component: "lower", .. })
        ));
        assert!(matches!(
            parse_bounds("1:high"),
            Err(ParseError::NotANumber { component: "upper", .. })
        ));
    }

    #[test]
    fn inverted_bounds_still_parse_here() {
        // The engine owns ordering validation.
        assert_eq!(parse_bounds("9:4"), Ok((9.0, 4.0)));
    }
}
