#[cfg(test)]
mod tests {
    use super::super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) {
        assert!(
            (a - b).abs() < tol,
            "approx_eq failed: {a} vs {b}, diff = {}, tol = {tol}",
            (a - b).abs()
        );
    }

    // =====================================================================
    // Beta
    // =====================================================================

    #[test]
    fn beta_invalid_parameters() {
        assert!(Beta::new(0.0_f64, 1.0).is_err());
        assert!(Beta::new(1.0_f64, -2.0).is_err());
    }

    #[test]
    fn beta_moments() {
        let b = Beta::new(2.0_f64, 5.0).unwrap();
        approx_eq(b.mean(), 2.0 / 7.0, 1e-14);
        approx_eq(b.variance(), 10.0 / (49.0 * 8.0), 1e-14);
    }

    #[test]
    fn beta_pdf_integrates_to_cdf_shape() {
        // Beta(2,2): pdf 6x(1−x), cdf x²(3−2x)
        let b = Beta::new(2.0_f64, 2.0).unwrap();
        approx_eq(b.pdf(0.5), 1.5, 1e-13);
        approx_eq(b.cdf(0.5), 0.5, 1e-13);
        approx_eq(b.cdf(0.25), 0.0625 * 2.5, 1e-13);
    }

    #[test]
    fn beta_pdf_outside_support_is_zero() {
        let b = Beta::new(2.0_f64, 2.0).unwrap();
        assert_eq!(b.pdf(-0.1), 0.0);
        assert_eq!(b.pdf(1.1), 0.0);
        assert!(b.ln_pdf(-0.1).is_infinite());
    }

    #[test]
    fn beta_quantile_round_trips() {
        for &(alpha, beta) in &[(0.4, 0.7), (2.0, 5.0), (30.0, 30.0), (9.0, 0.5)] {
            let dist = Beta::new(alpha, beta).unwrap();
            for &p in &[1e-6, 0.01, 0.3, 0.5, 0.8, 0.99, 1.0 - 1e-6] {
                let x = dist.quantile(p);
                assert!(x >= 0.0 && x <= 1.0);
                approx_eq(dist.cdf(x), p, 1e-7 * p.max(1e-7));
            }
        }
    }

    #[test]
    fn beta_quantile_boundaries() {
        let b = Beta::new(2.0_f64, 3.0).unwrap();
        assert_eq!(b.quantile(0.0), 0.0);
        assert_eq!(b.quantile(1.0), 1.0);
    }

    #[test]
    fn beta_uniform_quantile_is_identity() {
        let b = Beta::new(1.0_f64, 1.0).unwrap();
        for &p in &[0.1, 0.5, 0.77] {
            assert_eq!(b.quantile(p), p);
        }
    }

    // =====================================================================
    // StudentT
    // =====================================================================

    #[test]
    fn student_t_invalid_parameters() {
        assert!(StudentT::new(0.0_f64).is_err());
        assert!(StudentT::new(-3.0_f64).is_err());
    }

    #[test]
    fn student_t_moments() {
        let t = StudentT::new(10.0_f64).unwrap();
        approx_eq(t.mean(), 0.0, 1e-14);
        approx_eq(t.variance(), 1.25, 1e-14);
        assert!(StudentT::new(1.5_f64).unwrap().variance().is_infinite());
        assert!(StudentT::new(0.5_f64).unwrap().variance().is_nan());
    }

    #[test]
    fn student_t_cdf_at_zero_is_half() {
        for &df in &[1.0, 2.0, 7.0, 31.5] {
            let t = StudentT::new(df).unwrap();
            approx_eq(t.cdf(0.0), 0.5, 1e-13);
        }
    }

    #[test]
    fn student_t_cauchy_quantiles() {
        // df = 1 is Cauchy: quantile(0.75) = 1.
        let t = StudentT::new(1.0_f64).unwrap();
        approx_eq(t.quantile(0.75), 1.0, 1e-13);
        approx_eq(t.quantile(0.25), -1.0, 1e-13);
    }

    #[test]
    fn student_t_classic_table_entry() {
        // df = 10, p = 0.975 → 2.228139
        let t = StudentT::new(10.0_f64).unwrap();
        approx_eq(t.quantile(0.975), 2.2281389, 1e-4);
    }

    #[test]
    fn student_t_quantile_round_trips() {
        for &df in &[1.0f64, 2.0, 2.5, 4.0, 6.0, 12.0] {
            let dist = StudentT::new(df).unwrap();
            for &p in &[0.001f64, 0.05, 0.4, 0.6, 0.95, 0.999] {
                let t = dist.quantile(p);
                assert!(
                    (dist.cdf(t) - p).abs() <= 1e-3 * p.min(1.0 - p) + 1e-12,
                    "df={df}, p={p}: t={t}, cdf={}",
                    dist.cdf(t)
                );
            }
        }
    }

    #[test]
    fn student_t_quantile_boundaries() {
        let t = StudentT::new(3.0_f64).unwrap();
        assert_eq!(t.quantile(0.0), f64::NEG_INFINITY);
        assert_eq!(t.quantile(1.0), f64::INFINITY);
    }

    #[test]
    fn student_t_quantile_is_odd() {
        let dist = StudentT::new(8.0_f64).unwrap();
        for &p in &[0.01, 0.2, 0.45] {
            let lo = dist.quantile(p);
            let hi = dist.quantile(1.0 - p);
            approx_eq(lo, -hi, 1e-10 * hi.abs().max(1.0));
        }
    }
}
