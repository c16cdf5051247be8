//! Rounded band and linear scales.
//!
//! Both scales round their output to whole pixels so bar edges land on
//! pixel boundaries.

use std::collections::HashMap;

/// Round half up, matching browser `Math.round`.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Maps discrete categories to evenly spaced bands.
#[derive(Debug, Clone)]
pub struct BandScale {
    domain: Vec<String>,
    index: HashMap<String, usize>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Build a scale over the distinct `keys` in first-seen order.
    ///
    /// `padding` is used for both the inner and outer padding, and bands
    /// are centred in `[0, extent]`.
    pub fn new<I, S>(keys: I, extent: f64, padding: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut domain = Vec::new();
        let mut index = HashMap::new();
        for key in keys {
            let key = key.as_ref();
            if !index.contains_key(key) {
                index.insert(key.to_string(), domain.len());
                domain.push(key.to_string());
            }
        }

        let n = domain.len() as f64;
        let step = (extent / (n - padding + padding * 2.0).max(1.0)).floor();
        let start = round_half_up((extent - step * (n - padding)) * 0.5);
        let bandwidth = round_half_up(step * (1.0 - padding));

        Self {
            domain,
            index,
            start,
            step,
            bandwidth,
        }
    }

    /// Left edge of the band for `key`, if it is in the domain.
    pub fn position(&self, key: &str) -> Option<f64> {
        self.index
            .get(key)
            .map(|&i| self.start + self.step * i as f64)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}

/// Maps a continuous domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Scale `value`, rounded to a whole pixel.
    ///
    /// A zero-width domain maps everything to the start of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 || !span.is_finite() {
            0.0
        } else {
            (value - d0) / span
        };
        round_half_up(r0 * (1.0 - t) + r1 * t)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}
