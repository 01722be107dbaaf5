use nalgebra::Vector3;

/// Evaluate the Lagrange polynomial passing through `(times[j], values[j])` at `t`.
///
/// The polynomial degree is `times.len() - 1`. `times` must hold pairwise distinct
/// values; `values` must have the same length.
pub(crate) fn lagrange_polynomial(times: &[f64], values: &[Vector3<f64>], t: f64) -> Vector3<f64> {
    debug_assert_eq!(times.len(), values.len());

    times
        .iter()
        .zip(values)
        .enumerate()
        .fold(Vector3::zeros(), |acc, (j, (tj, value))| {
            let weight: f64 = times
                .iter()
                .enumerate()
                .filter(|(m, _)| *m != j)
                .map(|(_, tm)| (t - tm) / (tj - tm))
                .product();
            acc + value * weight
        })
}

/// Straight-line interpolation between `(t0, p0)` and `(t1, p1)`.
pub(crate) fn linear(t0: f64, p0: &Vector3<f64>, t1: f64, p1: &Vector3<f64>, t: f64) -> Vector3<f64> {
    let ratio = (t - t0) / (t1 - t0);
    p0 + (p1 - p0) * ratio
}

/// Bounds `[first, last]` of the `degree + 1` samples used around the bracket
/// `[lower, lower + 1]`, shifted inward when the bracket is close to either end.
///
/// `n` is the total number of samples and must be at least `degree + 1`.
pub(crate) fn window_bounds(lower: usize, degree: usize, n: usize) -> (usize, usize) {
    let mut first = lower.saturating_sub(degree / 2);
    let mut last = first + degree;
    if last >= n {
        last = n - 1;
        first = last.saturating_sub(degree);
    }
    (first, last)
}

#[cfg(test)]
mod lagrange_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn cubic(t: f64) -> Vector3<f64> {
        Vector3::new(t * t * t - 2.0 * t, 3.0 * t * t + 1.0, -t + 5.0)
    }

    #[test]
    fn test_reproduces_polynomial_of_same_degree() {
        let times = [0.0, 1.0, 2.5, 4.0];
        let values: Vec<_> = times.iter().map(|t| cubic(*t)).collect();

        for t in [0.3, 1.7, 3.2, 3.99] {
            let p = lagrange_polynomial(&times, &values, t);
            let expected = cubic(t);
            assert_abs_diff_eq!(p.x, expected.x, epsilon = 1e-9);
            assert_abs_diff_eq!(p.y, expected.y, epsilon = 1e-9);
            assert_abs_diff_eq!(p.z, expected.z, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_passes_through_nodes() {
        let times = [0.0, 100.0, 200.0];
        let values = [
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-4.0, 0.5, 8.0),
            Vector3::new(7.0, 7.0, -1.0),
        ];
        for (t, v) in times.iter().zip(&values) {
            assert_eq!(lagrange_polynomial(&times, &values, *t), *v);
        }
    }

    #[test]
    fn test_linear() {
        let p = linear(
            10.0,
            &Vector3::new(0.0, 0.0, 0.0),
            20.0,
            &Vector3::new(10.0, -10.0, 2.0),
            12.5,
        );
        assert_eq!(p, Vector3::new(2.5, -2.5, 0.5));
    }

    #[test]
    fn test_window_bounds() {
        // centered
        assert_eq!(window_bounds(10, 8, 30), (6, 14));
        // clamped at the start
        assert_eq!(window_bounds(1, 8, 30), (0, 8));
        // clamped at the end
        assert_eq!(window_bounds(28, 8, 30), (21, 29));
        // exactly enough samples
        assert_eq!(window_bounds(4, 8, 9), (0, 8));
    }
}
