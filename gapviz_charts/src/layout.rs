// Copyright 2026 the Gapviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed margin convention of the chart.
//!
//! The chart surface is a fixed-size canvas; the plot rectangle is the
//! canvas inset by per-side margins that leave room for axis ticks and
//! labels. There is no measure/arrange pass: margins are constants of
//! the design, not derived from text metrics.

use kurbo::Rect;

/// A width/height pair in scene coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in scene coordinate units.
    pub width: f64,
    /// Height in scene coordinate units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Per-side margins between the canvas edge and the plot rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin (largest: the bottom axis labels live here).
    pub bottom: f64,
    /// Left margin.
    pub left: f64,
}

impl Margin {
    /// Creates a margin set.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Returns the plot rectangle: the canvas inset by these margins.
    pub fn inset(&self, canvas: Size) -> Rect {
        Rect::new(
            self.left,
            self.top,
            canvas.width - self.right,
            canvas.height - self.bottom,
        )
    }
}

impl Default for Margin {
    /// The chart's margin convention: 30 top/right/left, 50 bottom.
    fn default() -> Self {
        Self::new(30.0, 30.0, 50.0, 30.0)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn default_margins_carve_the_expected_plot_rect() {
        let plot = Margin::default().inset(Size::new(700.0, 500.0));
        assert_eq!(plot, Rect::new(30.0, 30.0, 670.0, 450.0));
        assert_eq!(plot.width(), 640.0);
        assert_eq!(plot.height(), 420.0);
    }
}
