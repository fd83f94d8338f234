//! Axis scales and tick placement.

/// A tick mark and its label, in data coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Linear,
    Log,
}

/// A data range, its scale and its ticks.
#[derive(Debug, Clone)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub scale: Scale,
    pub label: String,
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Linear axis covering `[lo, hi]`, extended outward to whole multiples of a
    /// 1-2-5 tick step chosen so roughly `target_ticks` ticks fit.
    pub fn linear(lo: f64, hi: f64, target_ticks: usize) -> Self {
        let (lo, hi) = match (lo.is_finite(), hi.is_finite()) {
            (true, true) if hi - lo > 1e-12 => (lo, hi),
            (true, true) => (lo - 0.5, lo + 0.5),
            _ => (0.0, 1.0),
        };
        let step = nice_step((hi - lo) / target_ticks.max(2) as f64);
        let first = (lo / step + 1e-9).floor() as i64;
        let last = (hi / step - 1e-9).ceil() as i64;
        let ticks = (first..=last)
            .map(|k| {
                let value = k as f64 * step;
                Tick { value, label: decimal_label(value, step) }
            })
            .collect();
        Self { min: first as f64 * step, max: last as f64 * step, scale: Scale::Linear, label: String::new(), ticks }
    }

    /// Log axis spanning whole decades around `[lo, hi]`. Non-positive `lo` is clamped.
    pub fn log(lo: f64, hi: f64) -> Self {
        let lo = if lo > 0.0 { lo } else { 1.0 };
        let first = lo.log10().floor() as i32;
        let last = (hi.max(lo).log10().ceil() as i32).max(first + 1);
        let ticks = (first..=last).map(|e| Tick { value: 10f64.powi(e), label: decade_label(e) }).collect();
        Self { min: 10f64.powi(first), max: 10f64.powi(last), scale: Scale::Log, label: String::new(), ticks }
    }

    /// Axis for bars at ascending discrete `values`: half a pitch of room on each
    /// side, and ticks on the values themselves, thinned to at most `max_ticks`.
    pub fn discrete(values: &[f64], max_ticks: usize) -> Self {
        let (Some(&lo), Some(&hi)) = (values.first(), values.last()) else {
            return Self::linear(0.0, 1.0, 2);
        };
        let half = value_pitch(values) / 2.0;
        let stride = values.len().div_ceil(max_ticks.max(1));
        let ticks = values
            .iter()
            .step_by(stride.max(1))
            .map(|&value| Tick { value, label: format!("{}", value + 0.0) })
            .collect();
        Self { min: lo - half, max: hi + half, scale: Scale::Linear, label: String::new(), ticks }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Map a data value onto `[px_min, px_max]`. Values outside the axis range
    /// extrapolate.
    pub fn to_pixel(&self, value: f64, px_min: f64, px_max: f64) -> f64 {
        let (v, lo, hi) = match self.scale {
            Scale::Linear => (value, self.min, self.max),
            Scale::Log => (value.max(f64::MIN_POSITIVE).log10(), self.min.log10(), self.max.log10()),
        };
        if hi == lo {
            return (px_min + px_max) / 2.0;
        }
        px_min + (v - lo) / (hi - lo) * (px_max - px_min)
    }

    /// Ticks that land inside the pixel span, paired with their pixel position.
    pub fn placed_ticks(&self, px_min: f64, px_max: f64) -> impl Iterator<Item = (f64, &Tick)> + '_ {
        let (a, b) = if px_min <= px_max { (px_min, px_max) } else { (px_max, px_min) };
        self.ticks
            .iter()
            .map(move |t| (self.to_pixel(t.value, px_min, px_max), t))
            .filter(move |(px, _)| *px >= a - 0.5 && *px <= b + 0.5)
    }
}

/// Smallest positive gap between adjacent ascending values, 1 when there is none.
pub fn value_pitch(values: &[f64]) -> f64 {
    values.windows(2).map(|w| w[1] - w[0]).filter(|d| *d > 0.0).reduce(f64::min).unwrap_or(1.0)
}

/// Smallest of 1, 2, 5 times a power of ten that is at least `rough`.
fn nice_step(rough: f64) -> f64 {
    if !(rough.is_finite() && rough > 0.0) {
        return 1.0;
    }
    let decade = 10f64.powi(rough.log10().floor() as i32);
    [1.0, 2.0, 5.0].into_iter().map(|m| m * decade).find(|s| *s >= rough * (1.0 - 1e-9)).unwrap_or(10.0 * decade)
}

fn decimal_label(value: f64, step: f64) -> String {
    let decimals = (-step.log10().floor()).max(0.0) as usize;
    let value = if value.abs() < step * 1e-6 { 0.0 } else { value };
    format!("{:.*}", decimals, value)
}

fn decade_label(exp: i32) -> String {
    match u32::try_from(exp) {
        Ok(e) if e <= 6 => 10u64.pow(e).to_string(),
        _ => format!("1e{}", exp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(axis: &Axis) -> Vec<&str> {
        axis.ticks.iter().map(|t| t.label.as_str()).collect()
    }

    #[test]
    fn linear_extends_to_round_ticks() {
        let ax = Axis::linear(0.0, 9.3, 5);
        assert_eq!((ax.min, ax.max), (0.0, 10.0));
        assert_eq!(labels(&ax), ["0", "2", "4", "6", "8", "10"]);

        let ax = Axis::linear(0.0, 1.0, 5);
        assert_eq!(labels(&ax), ["0.0", "0.2", "0.4", "0.6", "0.8", "1.0"]);
    }

    #[test]
    fn linear_degenerate_and_non_finite() {
        let ax = Axis::linear(3.0, 3.0, 5);
        assert!(ax.min < 3.0 && ax.max > 3.0);
        let ax = Axis::linear(f64::NAN, 1.0, 5);
        assert_eq!((ax.min, ax.max), (0.0, 1.0));
    }

    #[test]
    fn log_covers_whole_decades() {
        let ax = Axis::log(1.0, 5000.0);
        assert_eq!(ax.scale, Scale::Log);
        assert_eq!(labels(&ax), ["1", "10", "100", "1000", "10000"]);
        let mid = ax.to_pixel(100.0, 0.0, 400.0);
        assert!((mid - 200.0).abs() < 1e-9);
        assert_eq!(decade_label(8), "1e8");
    }

    #[test]
    fn discrete_ticks_sit_on_values() {
        let values: Vec<f64> = (0..=40).map(f64::from).collect();
        let ax = Axis::discrete(&values, 12);
        assert_eq!((ax.min, ax.max), (-0.5, 40.5));
        assert_eq!(ax.ticks.len(), 11);
        assert_eq!(ax.ticks[1], Tick { value: 4.0, label: "4".into() });

        let ax = Axis::discrete(&[2.0, 4.0, 6.0], 12);
        assert_eq!((ax.min, ax.max), (1.0, 7.0));
        assert_eq!(labels(&ax), ["2", "4", "6"]);
    }

    #[test]
    fn placed_ticks_drop_out_of_range() {
        let mut ax = Axis::linear(0.0, 10.0, 5);
        ax.ticks.push(Tick { value: 50.0, label: "50".into() });
        let placed: Vec<f64> = ax.placed_ticks(300.0, 100.0).map(|(px, _)| px).collect();
        assert_eq!(placed.len(), 6);
        assert_eq!(placed[0], 300.0);
    }

    #[test]
    fn nice_step_rounds_up() {
        assert_eq!(nice_step(3.2), 5.0);
        assert!((nice_step(0.17) - 0.2).abs() < 1e-12);
        assert_eq!(nice_step(15.0), 20.0);
        assert_eq!(nice_step(2.0), 2.0);
        assert_eq!(nice_step(0.0), 1.0);
    }
}
