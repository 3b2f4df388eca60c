//! Collateral bound derivation

/// Effective committee collateral from the two declared bounds.
///
/// The aggregate total and the per-member minimum (multiplied across the
/// committee) are both floors the committee must clear, so the effective
/// figure is whichever constraint is more demanding. Policy: the **max** of
/// the two bounds — the conservative posture; a per-member minimum cannot
/// weaken a declared aggregate floor, and vice versa. A zero value means
/// "not declared" and defers to the other bound.
pub fn effective_collateral(total: f64, per_member: f64, n: f64) -> f64 {
    if total == 0.0 {
        return per_member * n;
    }
    if per_member == 0.0 {
        return total;
    }
    total.max(per_member * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_per_member_declared() {
        assert_eq!(effective_collateral(0.0, 3.3, 100.0), 330.0);
    }

    #[test]
    fn test_only_total_declared() {
        assert_eq!(effective_collateral(330.0, 0.0, 100.0), 330.0);
    }

    #[test]
    fn test_both_declared_takes_more_demanding() {
        assert_eq!(effective_collateral(330.0, 5.0, 100.0), 500.0);
        assert_eq!(effective_collateral(800.0, 5.0, 100.0), 800.0);
    }
}
