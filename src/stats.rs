//! Descriptive statistics behind the chart reports.
//!
//! Conventions follow the usual data-frame defaults: sample standard
//! deviation (ddof = 1), linearly interpolated quantiles, Scott's rule for
//! kernel bandwidths, Tukey whiskers at 1.5 · IQR.

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation, `None` with fewer than two values.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

/// Quantile `q ∈ [0, 1]` of already **sorted** values, linear interpolation.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Pearson correlation of two equally long series.
///
/// `NaN` when fewer than two pairs or either series is constant.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return f64::NAN;
    }
    let (xs, ys) = (&xs[..n], &ys[..n]);
    let mx = xs.iter().sum::<f64>() / n as f64;
    let my = ys.iter().sum::<f64>() / n as f64;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }
    sxy / (sxx * syy).sqrt()
}

/// Ordinary least-squares line `y = slope · x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// `None` with fewer than two points or no spread in `xs`.
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Option<LinearFit> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }
    let mx = mean(&xs[..n])?;
    let my = mean(&ys[..n])?;
    let (mut sxy, mut sxx) = (0.0, 0.0);
    for (x, y) in xs.iter().zip(ys).take(n) {
        sxy += (x - mx) * (y - my);
        sxx += (x - mx).powi(2);
    }
    if sxx == 0.0 {
        return None;
    }
    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: my - slope * mx,
    })
}

const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

fn gaussian(u: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * u * u).exp()
}

/// Scott's bandwidth for `n` points in `dims` dimensions.
fn scott_bandwidth(values: &[f64], dims: i32) -> Option<f64> {
    let sd = sample_std(values)?;
    if sd == 0.0 {
        return None;
    }
    Some(sd * (values.len() as f64).powf(-1.0 / (dims as f64 + 4.0)))
}

/// Evenly spaced grid covering the data plus three bandwidths each side.
fn padded_grid(values: &[f64], bandwidth: f64, steps: usize) -> Vec<f64> {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min) - 3.0 * bandwidth;
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max) + 3.0 * bandwidth;
    let step = (max - min) / (steps - 1) as f64;
    (0..steps).map(|i| min + i as f64 * step).collect()
}

/// Gaussian kernel density estimate sampled at `steps` grid points.
///
/// Returns `[x, density]` pairs, or `None` when the bandwidth is undefined
/// (fewer than two values or no spread).
pub fn kde_1d(values: &[f64], steps: usize) -> Option<Vec<[f64; 2]>> {
    let h = scott_bandwidth(values, 1)?;
    let n = values.len() as f64;
    let curve = padded_grid(values, h, steps.max(2))
        .into_iter()
        .map(|x| {
            let d: f64 = values.iter().map(|v| gaussian((x - v) / h)).sum();
            [x, d / (n * h)]
        })
        .collect();
    Some(curve)
}

/// Bivariate density on a regular grid.
#[derive(Debug, Clone)]
pub struct DensityGrid {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    /// Row-major: `density[j][i]` is the value at `(xs[i], ys[j])`.
    pub density: Vec<Vec<f64>>,
}

impl DensityGrid {
    pub fn max(&self) -> f64 {
        self.density
            .iter()
            .flatten()
            .cloned()
            .fold(0.0, f64::max)
    }

    /// Smallest density kept when the lowest `share` of the total mass is
    /// discarded: cells strictly below the cutoff hold at most `share` of it.
    pub fn mass_cutoff(&self, share: f64) -> f64 {
        let mut values: Vec<f64> = self.density.iter().flatten().cloned().collect();
        values.sort_by(f64::total_cmp);
        let total: f64 = values.iter().sum();

        let mut acc = 0.0;
        for v in values {
            acc += v;
            if acc > share * total {
                return v;
            }
        }
        0.0
    }
}

/// Gaussian product-kernel density with per-axis Scott bandwidths.
pub fn kde_2d(xs: &[f64], ys: &[f64], steps: usize) -> Option<DensityGrid> {
    let n = xs.len().min(ys.len());
    let (xs, ys) = (&xs[..n], &ys[..n]);
    let hx = scott_bandwidth(xs, 2)?;
    let hy = scott_bandwidth(ys, 2)?;
    let steps = steps.max(2);

    let gx = padded_grid(xs, hx, steps);
    let gy = padded_grid(ys, hy, steps);
    let norm = n as f64 * hx * hy;

    let density = gy
        .iter()
        .map(|&y| {
            gx.iter()
                .map(|&x| {
                    let d: f64 = xs
                        .iter()
                        .zip(ys)
                        .map(|(px, py)| gaussian((x - px) / hx) * gaussian((y - py) / hy))
                        .sum();
                    d / norm
                })
                .collect()
        })
        .collect();

    Some(DensityGrid {
        xs: gx,
        ys: gy,
        density,
    })
}

/// Five-number summary plus outliers, as drawn by a box-and-whisker plot.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile(&sorted, 0.25)?;
        let median = quantile(&sorted, 0.5)?;
        let q3 = quantile(&sorted, 0.75)?;
        let iqr = q3 - q1;
        let (lo_fence, hi_fence) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

        let inside = || sorted.iter().cloned().filter(|v| *v >= lo_fence && *v <= hi_fence);
        let lower_whisker = inside().fold(f64::INFINITY, f64::min).min(q1);
        let upper_whisker = inside().fold(f64::NEG_INFINITY, f64::max).max(q3);
        let outliers = sorted
            .iter()
            .cloned()
            .filter(|v| *v < lo_fence || *v > hi_fence)
            .collect();

        Some(BoxStats {
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
            outliers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_mean_and_std() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[2.0, 4.0]), Some(3.0));
        assert_eq!(sample_std(&[5.0]), None);
        assert!(approx(sample_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap(), 2.138089935299395));
    }

    #[test]
    fn test_quantile_interpolates() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert!(approx(quantile(&v, 0.25).unwrap(), 1.75));
        assert!(approx(quantile(&v, 0.5).unwrap(), 2.5));
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn test_pearson_perfect() {
        let r = pearson(&[10.0, 20.0, 30.0], &[5.0, 10.0, 15.0]);
        assert_eq!(format!("{r:.3}"), "1.000");
        let r = pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]);
        assert!(approx(r, -1.0));
    }

    #[test]
    fn test_pearson_undefined() {
        assert!(pearson(&[1.0], &[2.0]).is_nan());
        assert!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_nan());
    }

    #[test]
    fn test_linear_fit() {
        let fit = linear_fit(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
        assert!(approx(fit.slope, 2.0));
        assert!(approx(fit.intercept, 1.0));
        assert!(approx(fit.at(10.0), 21.0));
        assert_eq!(linear_fit(&[1.0, 1.0], &[1.0, 2.0]), None);
    }

    #[test]
    fn test_kde_1d_integrates_to_one() {
        let values = [1.0, 2.0, 2.5, 4.0, 7.0];
        let curve = kde_1d(&values, 400).unwrap();
        let dx = curve[1][0] - curve[0][0];
        let area: f64 = curve.iter().map(|p| p[1] * dx).sum();
        assert!((area - 1.0).abs() < 0.01, "area = {area}");
        assert!(kde_1d(&[3.0, 3.0], 10).is_none());
    }

    #[test]
    fn test_kde_2d_peak_near_data() {
        let xs = [1.0, 1.1, 0.9, 1.0, 5.0];
        let ys = [2.0, 2.1, 1.9, 2.0, 8.0];
        let grid = kde_2d(&xs, &ys, 40).unwrap();
        assert_eq!(grid.density.len(), 40);
        assert_eq!(grid.density[0].len(), 40);
        assert!(grid.max() > 0.0);
    }

    #[test]
    fn test_mass_cutoff_drops_at_most_share() {
        let grid = DensityGrid {
            xs: vec![0.0, 1.0],
            ys: vec![0.0, 1.0],
            density: vec![vec![1.0, 2.0], vec![3.0, 94.0]],
        };
        // 1 + 2 = 3 % of the mass; adding 3 crosses 5 %.
        assert_eq!(grid.mass_cutoff(0.05), 3.0);
        assert_eq!(grid.mass_cutoff(0.0), 1.0);

        let xs = [1.0, 1.1, 0.9, 1.0, 5.0];
        let ys = [2.0, 2.1, 1.9, 2.0, 8.0];
        let grid = kde_2d(&xs, &ys, 40).unwrap();
        let cutoff = grid.mass_cutoff(0.05);
        let total: f64 = grid.density.iter().flatten().sum();
        let dropped: f64 = grid.density.iter().flatten().filter(|d| **d < cutoff).sum();
        assert!(dropped <= 0.05 * total);
        assert!(cutoff > 0.0);
    }

    #[test]
    fn test_box_stats_outlier() {
        let stats = BoxStats::from_values(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
        assert!(approx(stats.q1, 2.0));
        assert!(approx(stats.median, 3.0));
        assert!(approx(stats.q3, 4.0));
        assert_eq!(stats.lower_whisker, 1.0);
        assert_eq!(stats.upper_whisker, 4.0);
        assert_eq!(stats.outliers, vec![100.0]);
        assert_eq!(BoxStats::from_values(&[]), None);
    }
}
