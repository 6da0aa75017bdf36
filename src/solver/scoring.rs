//! Word Hunt score table
//!
//! Points are a fixed function of word length over the accepted range 3–15.

/// Points awarded for a word of the given length
///
/// Lengths outside the dictionary's accepted range score 0.
///
/// # Examples
/// ```
/// use wordhunt::solver::score_for_length;
///
/// assert_eq!(score_for_length(3), 100);
/// assert_eq!(score_for_length(7), 1800);
/// assert_eq!(score_for_length(16), 0);
/// ```
#[must_use]
pub const fn score_for_length(length: usize) -> u32 {
    match length {
        3 => 100,
        4 => 400,
        5 => 800,
        6 => 1400,
        7 => 1800,
        8 => 2200,
        9 => 2600,
        10 => 3000,
        11 => 3400,
        12 => 3800,
        13 => 4200,
        14 => 4600,
        15 => 5000,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_endpoints() {
        assert_eq!(score_for_length(3), 100);
        assert_eq!(score_for_length(4), 400);
        assert_eq!(score_for_length(15), 5000);
    }

    #[test]
    fn out_of_range_scores_zero() {
        assert_eq!(score_for_length(0), 0);
        assert_eq!(score_for_length(1), 0);
        assert_eq!(score_for_length(2), 0);
        assert_eq!(score_for_length(16), 0);
        assert_eq!(score_for_length(100), 0);
    }

    #[test]
    fn schedule_is_non_decreasing() {
        for len in 3..15 {
            assert!(score_for_length(len) <= score_for_length(len + 1));
        }
    }
}
