//! Parsing of textual preference expressions.

/// Parses a tiered preference expression into (assumption, rank) pairs.
///
/// Tiers are separated by `>` and tied assumptions inside a tier by `,`.
/// The tier index gives the rank: the first tier gets rank 0 (most preferred),
/// the second rank 1, and so on. Unranked assumptions are handled downstream
/// as maximally unpreferred.
///
/// Empty tiers and surrounding whitespace are ignored.
/// If an assumption appears in several tiers, the last occurrence wins when the
/// pairs are applied to a framework.
///
/// # Example
///
/// ```
/// # use abaplus::aba::parse_preference_expression;
/// let ranks = parse_preference_expression("a, b > c > d");
/// assert_eq!(
///     vec![
///         ("a".to_string(), 0),
///         ("b".to_string(), 0),
///         ("c".to_string(), 1),
///         ("d".to_string(), 2)
///     ],
///     ranks
/// );
/// ```
pub fn parse_preference_expression(expression: &str) -> Vec<(String, usize)> {
    expression
        .split('>')
        .map(str::trim)
        .filter(|tier| !tier.is_empty())
        .enumerate()
        .flat_map(|(rank, tier)| {
            tier.split(',')
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(move |a| (a.to_string(), rank))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tier() {
        assert_eq!(
            vec![("a".to_string(), 0), ("b".to_string(), 0)],
            parse_preference_expression("a,b")
        );
    }

    #[test]
    fn test_tiers_and_ties() {
        assert_eq!(
            vec![
                ("a".to_string(), 0),
                ("b".to_string(), 0),
                ("c".to_string(), 1),
                ("d".to_string(), 2)
            ],
            parse_preference_expression("a,b > c > d")
        );
    }

    #[test]
    fn test_whitespace_and_empty_groups() {
        assert_eq!(
            vec![("a".to_string(), 0), ("b".to_string(), 1)],
            parse_preference_expression("  a  > > b , ")
        );
    }

    #[test]
    fn test_empty_expression() {
        assert!(parse_preference_expression("").is_empty());
        assert!(parse_preference_expression(" > > ").is_empty());
    }
}
