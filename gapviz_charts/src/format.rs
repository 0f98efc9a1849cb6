// Copyright 2026 the Gapviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a tick value using the tick step to pick a decimal count.
///
/// A step of `0.05` yields two decimals, `0.5` yields one, and any step
/// of one or more yields none, so every label on an axis carries the
/// same precision. Nice steps are always 1, 2, or 5 times a power of
/// ten, so `ceil(-log10(step))` decimals are enough to render the step
/// exactly.
pub(crate) fn format_tick_with_step(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 && step < 1.0 {
        // The tiny bias keeps exact powers of ten (whose log10 lands a
        // hair above the integer) from gaining a spurious decimal.
        let d = (-step.log10() - 1.0e-10).ceil().clamp(0.0, 6.0);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "clamped to the 0..=6 range"
        )]
        {
            d as usize
        }
    } else {
        0
    };
    // Normalize negative zero so rounding never yields a "-0" label.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.decimals$}")
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn integer_steps_format_without_decimals() {
        assert_eq!(format_tick_with_step(20000.0, 5000.0), "20000");
        assert_eq!(format_tick_with_step(75.0, 5.0), "75");
    }

    #[test]
    fn fractional_steps_format_with_matching_decimals() {
        assert_eq!(format_tick_with_step(0.5, 0.5), "0.5");
        assert_eq!(format_tick_with_step(1.2, 0.2), "1.2");
        assert_eq!(format_tick_with_step(0.15, 0.05), "0.15");
    }

    #[test]
    fn negative_zero_is_normalized() {
        assert_eq!(format_tick_with_step(-0.0, 1.0), "0");
    }
}
