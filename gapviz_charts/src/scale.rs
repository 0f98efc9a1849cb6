// Copyright 2026 the Gapviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale utilities.
//!
//! Scales follow a spec/instance split: a `*Spec` carries the domain
//! plus options, and `instantiate` resolves it against a concrete output
//! range. Instances are pure functions: identical input always yields
//! identical output, and nothing is mutated after construction.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use peniko::Color;

use gapviz_data::RegionSet;

use crate::palette::CATEGORY10;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

/// Specification for a linear scale (domain + buffer, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinearSpec {
    /// Domain in data units.
    pub domain: (f64, f64),
    /// Fractional outward expansion applied to each end of the domain,
    /// so extreme data points sit clear of the plot border.
    pub buffer: f64,
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A zero-width domain maps everything to the start of the range
    /// rather than dividing by zero.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns “nice-ish” tick values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

impl ScaleLinearSpec {
    /// Creates a new linear scale spec with no domain buffer.
    pub fn new(domain: (f64, f64)) -> Self {
        Self {
            domain,
            buffer: 0.0,
        }
    }

    /// Sets the fractional domain buffer (e.g. `0.025` for 2.5%).
    pub fn with_buffer(mut self, buffer: f64) -> Self {
        self.buffer = buffer.max(0.0);
        self
    }

    /// Returns the effective domain after applying the buffer.
    ///
    /// A degenerate domain (min == max) has zero span, so the buffer
    /// expands it by nothing and the domain resolves to itself.
    pub fn resolved_domain(&self) -> (f64, f64) {
        let (d0, d1) = self.domain;
        let pad = self.buffer * (d1 - d0);
        (d0 - pad, d1 + pad)
    }

    /// Instantiates a concrete scale over the buffered domain.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleLinear {
        ScaleLinear::new(self.resolved_domain(), range)
    }
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step0 = span / count.max(1) as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// A square-root mapping from a non-negative domain to a range.
///
/// The interpolation parameter comes from the square roots of the
/// domain endpoints, so the *area* of a circle whose radius is the
/// mapped value grows roughly linearly with the domain value. A linear
/// radius mapping would visually exaggerate large values.
#[derive(Clone, Copy, Debug)]
pub struct ScaleSqrt {
    domain: (f64, f64),
    range: (f64, f64),
}

/// Specification for a square-root scale (domain, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleSqrtSpec {
    /// Domain in data units (expected non-negative).
    pub domain: (f64, f64),
}

impl ScaleSqrt {
    /// Creates a new square-root scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// Negative inputs clamp to zero before the root. A degenerate
    /// domain maps everything to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let s0 = d0.max(0.0).sqrt();
        let s1 = d1.max(0.0).sqrt();
        let denom = s1 - s0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x.max(0.0).sqrt() - s0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }
}

impl ScaleSqrtSpec {
    /// Creates a new square-root scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleSqrt {
        ScaleSqrt::new(self.domain, range)
    }
}

/// An ordinal lookup from category keys to colors.
///
/// Colors are assigned by domain position: the first key gets the first
/// palette entry, and so on. A domain longer than the palette wraps
/// (assignment is modulo the palette length). A key outside the domain
/// maps to the first palette entry.
#[derive(Clone, Debug)]
pub struct ScaleOrdinal {
    domain: Vec<String>,
    palette: Vec<Color>,
}

impl ScaleOrdinal {
    /// Creates an ordinal scale over an explicit domain and palette.
    pub fn new(domain: Vec<String>, palette: Vec<Color>) -> Self {
        Self { domain, palette }
    }

    /// Creates an ordinal scale over a region set, using the standard
    /// ten-color categorical palette.
    pub fn from_regions(regions: &RegionSet) -> Self {
        Self::new(regions.as_slice().to_vec(), CATEGORY10.to_vec())
    }

    /// Returns the number of domain entries.
    pub fn domain_len(&self) -> usize {
        self.domain.len()
    }

    /// Maps a category key to its color.
    pub fn map(&self, key: &str) -> Color {
        let Some(first) = self.palette.first() else {
            return Color::BLACK;
        };
        match self.domain.iter().position(|k| k == key) {
            Some(i) => self.palette[i % self.palette.len()],
            None => *first,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    #[test]
    fn buffered_domain_expands_each_end() {
        let spec = ScaleLinearSpec::new((100.0, 300.0)).with_buffer(0.025);
        let (d0, d1) = spec.resolved_domain();
        assert_eq!(d0, 95.0);
        assert_eq!(d1, 305.0);
    }

    #[test]
    fn buffered_scale_keeps_extremes_off_the_range_ends() {
        let spec = ScaleLinearSpec::new((1000.0, 2000.0)).with_buffer(0.025);
        let s = spec.instantiate((0.0, 640.0));
        assert!(s.map(1000.0) > 0.0, "min must sit inside the range");
        assert!(s.map(2000.0) < 640.0, "max must sit inside the range");
        assert!(s.map(1200.0) < s.map(1800.0), "monotonically increasing");
    }

    #[test]
    fn inverted_range_makes_larger_values_map_lower() {
        let spec = ScaleLinearSpec::new((50.0, 80.0)).with_buffer(0.025);
        let s = spec.instantiate((420.0, 0.0));
        assert!(s.map(80.0) < s.map(50.0), "pixel y decreases as value grows");
        assert!(s.map(80.0) > 0.0 && s.map(50.0) < 420.0, "buffer insets both ends");
    }

    #[test]
    fn degenerate_domain_maps_to_range_start_without_panicking() {
        let spec = ScaleLinearSpec::new((42.0, 42.0)).with_buffer(0.025);
        assert_eq!(spec.resolved_domain(), (42.0, 42.0));
        let s = spec.instantiate((0.0, 640.0));
        assert_eq!(s.map(42.0), 0.0);
        assert!(s.map(42.0).is_finite(), "no NaN from a zero-span domain");
    }

    #[test]
    fn linear_ticks_cover_the_domain() {
        let s = ScaleLinear::new((0.0, 100.0), (0.0, 1.0));
        let ticks = s.ticks(10);
        assert!(ticks.len() >= 2, "expected several ticks");
        assert!(ticks.first().copied().unwrap() <= 0.0);
        assert!(ticks.last().copied().unwrap() >= 100.0);
    }

    #[test]
    fn sqrt_scale_maps_endpoints_to_range_endpoints() {
        let s = ScaleSqrtSpec::new((100.0, 400.0)).instantiate((4.0, 30.0));
        assert!((s.map(100.0) - 4.0).abs() < 1e-9);
        assert!((s.map(400.0) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn sqrt_scale_grows_sublinearly() {
        let s = ScaleSqrtSpec::new((0.0, 400.0)).instantiate((0.0, 30.0));
        // With a zero-based domain and range, doubling the value scales
        // the radius by sqrt(2), not 2.
        let r1 = s.map(100.0);
        let r2 = s.map(200.0);
        assert!(r2 < 2.0 * r1, "radius must not double with the value");
        assert!((r2 / r1 - core::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn sqrt_scale_increments_are_proportional_to_root_increments() {
        let s = ScaleSqrtSpec::new((100.0, 400.0)).instantiate((4.0, 30.0));
        // sqrt: 100 -> 10, 225 -> 15, 400 -> 20.
        let lo = s.map(100.0);
        let mid = s.map(225.0);
        let hi = s.map(400.0);
        assert!(((hi - lo) / (mid - lo) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn sqrt_scale_degenerate_domain_maps_to_range_start() {
        let s = ScaleSqrtSpec::new((250.0, 250.0)).instantiate((4.0, 30.0));
        assert_eq!(s.map(250.0), 4.0);
    }

    #[test]
    fn ordinal_scale_is_stable_and_distinct() {
        let regions = vec!["East".to_string(), "West".to_string()];
        let s = ScaleOrdinal::new(regions, CATEGORY10.to_vec());
        assert_eq!(s.map("East"), s.map("East"), "same key, same color");
        assert_ne!(s.map("East"), s.map("West"), "distinct keys, distinct colors");
    }

    #[test]
    fn ordinal_scale_wraps_past_the_palette() {
        let domain: Vec<String> = (0..12).map(|i| alloc::format!("r{i}")).collect();
        let s = ScaleOrdinal::new(domain, CATEGORY10.to_vec());
        assert_eq!(s.map("r10"), s.map("r0"), "11th key reuses the 1st color");
        assert_eq!(s.map("r11"), s.map("r1"));
    }

    #[test]
    fn ordinal_scale_unknown_key_falls_back_to_first_color() {
        let s = ScaleOrdinal::new(vec!["East".to_string()], CATEGORY10.to_vec());
        assert_eq!(s.map("nowhere"), CATEGORY10[0]);
    }
}
