/// Percentage of `covered` over `total`, unrounded.
/// A zero `total` yields `0.0` instead of NaN.
pub fn percent(covered: u32, total: u32) -> f64 {
    if total > 0 {
        covered as f64 / total as f64 * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use crate::percent;

    #[test]
    fn calculate_percentage_covered_and_total() {
        let p = percent(1, 1);
        assert_eq!(p as i32, 100);
    }

    #[test]
    fn calculate_percentage_without_rounding() {
        assert_eq!(percent(75, 110), 68.18181818181817);
        assert_eq!(percent(6, 20), 30.0);
    }

    #[test]
    fn zero_total_is_zero_percent() {
        let p = percent(0, 0);
        assert!(!p.is_nan());
        assert_eq!(p, 0.0);

        // covered without total is still guarded
        assert_eq!(percent(3, 0), 0.0);
    }
}
