use crate::error::{Error, Result};

/// Parses a whitespace- or comma-separated list of integers into a sequence
/// suitable for the LIS engine.
///
/// Elements that are not integers are rejected here, at the boundary; the
/// engine only ever sees well-typed input.
///
/// # Examples
///
/// ```
/// use lis::parse_sequence;
///
/// let values = parse_sequence("10, 9, 2, 5").unwrap();
/// assert_eq!(values, vec![10, 9, 2, 5]);
///
/// assert!(parse_sequence("1 two 3").is_err());
/// ```
pub fn parse_sequence(input: &str) -> Result<Vec<i64>> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|source| Error::InvalidElement {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_separators() {
        let values = parse_sequence("10 9,2,  5\t3").unwrap();
        assert_eq!(values, vec![10, 9, 2, 5, 3]);
    }

    #[test]
    fn test_parse_empty_is_empty_sequence() {
        assert_eq!(parse_sequence("").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_sequence(" , ,, ").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_parse_negative_values() {
        let values = parse_sequence("-3 0 7").unwrap();
        assert_eq!(values, vec![-3, 0, 7]);
    }

    #[test]
    fn test_parse_rejects_non_integer() {
        let err = parse_sequence("1 2 x 4").unwrap_err();
        match err {
            Error::InvalidElement { token, .. } => assert_eq!(token, "x"),
        }
    }
}
