//! Parsing of set shorthand like "8x60" into reps and weight
//!
//! This belongs to the editing surface, not the repositories: the store
//! persists whatever numeric values it is handed, and keeps the raw text
//! only as a display convenience.

/// Numeric values recovered from a set shorthand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedSetInput {
    pub reps: i64,
    pub weight: f64,
}

/// Parse "REPSxWEIGHT" shorthand. Missing or non-numeric tokens become 0,
/// so partially typed input still yields a storable set.
pub fn parse_set_input(input: &str) -> ParsedSetInput {
    let mut parts = input.split('x');

    let reps = parts
        .next()
        .and_then(|token| token.trim().parse::<i64>().ok())
        .unwrap_or(0);
    let weight = parts
        .next()
        .and_then(|token| token.trim().parse::<f64>().ok())
        .unwrap_or(0.0);

    ParsedSetInput { reps, weight }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_full_shorthand() {
        assert_eq!(
            parse_set_input("8x60"),
            ParsedSetInput {
                reps: 8,
                weight: 60.0
            }
        );
    }

    #[test]
    fn test_fractional_weight() {
        assert_eq!(parse_set_input("5x72.5").weight, 72.5);
    }

    #[test]
    fn test_missing_weight_defaults_to_zero() {
        assert_eq!(
            parse_set_input("12"),
            ParsedSetInput {
                reps: 12,
                weight: 0.0
            }
        );
    }

    #[test]
    fn test_non_numeric_tokens_default_to_zero() {
        assert_eq!(
            parse_set_input("heavy x light"),
            ParsedSetInput {
                reps: 0,
                weight: 0.0
            }
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            parse_set_input(""),
            ParsedSetInput {
                reps: 0,
                weight: 0.0
            }
        );
    }

    #[test]
    fn test_whitespace_around_tokens() {
        assert_eq!(
            parse_set_input(" 10 x 45 "),
            ParsedSetInput {
                reps: 10,
                weight: 45.0
            }
        );
    }
}
