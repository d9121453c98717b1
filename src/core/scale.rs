use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Headroom multiplier applied to the maximum data value of a linear scale.
pub const VALUE_DOMAIN_HEADROOM: f64 = 1.1;

/// Shared construction options for band and linear scales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleOptions {
    /// Inter-band padding as a fraction of one band step.
    pub padding: f64,
    /// Target pixel range, `(start, end)`.
    pub range: (f64, f64),
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            padding: 0.2,
            range: (0.0, 100.0),
        }
    }
}

impl ScaleOptions {
    #[must_use]
    pub fn with_range(mut self, start: f64, end: f64) -> Self {
        self.range = (start, end);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }
}

/// Maps discrete category labels to contiguous pixel bands of equal width.
///
/// The domain keeps first-occurrence data order; duplicate labels keep their
/// first slot. Inner and outer padding use the same fraction and bands are
/// centered within the range.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    slots: IndexMap<String, usize>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Builds a band scale over the labels produced by `label_fn`, in data order.
    pub fn from_data<T>(
        data: &[T],
        label_fn: impl Fn(&T) -> String,
        options: ScaleOptions,
    ) -> Self {
        Self::from_labels(data.iter().map(label_fn), options)
    }

    /// Builds a band scale over the synthetic domain `"0".."count-1"`.
    ///
    /// Used to place N sub-series columns within one category band.
    #[must_use]
    pub fn from_size(count: usize, options: ScaleOptions) -> Self {
        Self::from_labels((0..count).map(|i| i.to_string()), options)
    }

    pub fn from_labels(labels: impl Iterator<Item = String>, options: ScaleOptions) -> Self {
        let mut slots = IndexMap::new();
        for label in labels {
            let next = slots.len();
            slots.entry(label).or_insert(next);
        }

        let n = slots.len() as f64;
        let padding = options.padding;
        let (range_start, range_end) = options.range;
        let span = range_end - range_start;

        let step = span / (n - padding + padding * 2.0).max(1.0);
        let start = range_start + (span - step * (n - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);

        Self {
            slots,
            start,
            step,
            bandwidth,
        }
    }

    /// Pixel start position of the band for `label`, if it is in the domain.
    #[must_use]
    pub fn position(&self, label: &str) -> Option<f64> {
        self.slots
            .get(label)
            .map(|&slot| self.start + self.step * slot as f64)
    }

    /// Natural (uncapped) band width in pixels.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Maps a continuous numeric domain to a continuous pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    /// Builds a value scale with domain `[0, max(value_fn) × 1.1]`.
    ///
    /// An all-zero input yields a degenerate scale mapping every value to the
    /// range start. That is accepted behavior, not an error.
    pub fn from_data<T>(
        data: &[T],
        value_fn: impl Fn(&T) -> f64,
        options: ScaleOptions,
    ) -> Self {
        let values: Vec<f64> = data.iter().map(value_fn).collect();
        Self::from_values(&values, options)
    }

    #[must_use]
    pub fn from_values(values: &[f64], options: ScaleOptions) -> Self {
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let max = if max.is_finite() { max } else { 0.0 };

        let (range_start, range_end) = options.range;
        Self {
            domain_start: 0.0,
            domain_end: max * VALUE_DOMAIN_HEADROOM,
            range_start,
            range_end,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value into the pixel range.
    ///
    /// A degenerate (zero-span) domain maps everything to the range start.
    #[must_use]
    pub fn scaled(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return self.range_start;
        }

        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Nice tick positions covering the domain, at 1/2/5 decade steps.
    ///
    /// `target` is the requested tick count; the returned count can differ
    /// while staying in the same order of magnitude.
    #[must_use]
    pub fn ticks(self, target: usize) -> Vec<f64> {
        let (start, stop) = if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };

        if start == stop {
            return vec![start];
        }

        let increment = tick_increment(start, stop, target.max(1));
        if !increment.is_finite() || increment <= 0.0 {
            return Vec::new();
        }

        let first = (start / increment).ceil() as i64;
        let last = (stop / increment).floor() as i64;
        (first..=last).map(|i| i as f64 * increment).collect()
    }
}

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);

    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    factor * 10f64.powf(power)
}
