// Copyright 2026 the Gapviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The wealth-and-health bubble chart.
//!
//! [`BubbleChartSpec`] composes the whole static chart: a buffered
//! linear income scale on the bottom axis, a buffered linear
//! life-expectancy scale on the left axis, a square-root population
//! scale for bubble radii, a categorical region color scale, and two
//! corner labels. [`BubbleChartSpec::scene`] turns a prepared dataset
//! into a scene in one pass.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

use gapviz_core::{Mark, MarkId, Scene, TextAnchor, TextBaseline};
use gapviz_data::Dataset;

use crate::axis::AxisSpec;
use crate::bubble_mark::BubbleMarkSpec;
use crate::layout::{Margin, Size};
use crate::scale::{ScaleLinear, ScaleLinearSpec, ScaleOrdinal, ScaleSqrt, ScaleSqrtSpec};
use crate::text_mark::TextMarkSpec;

/// Gap between a corner label and the plot edge.
const LABEL_PAD: f64 = 5.0;

/// Mark-id bases per chart component. Components never emit enough
/// marks to collide across bases.
const BUBBLE_ID_BASE: u64 = 0;
const X_AXIS_ID_BASE: u64 = 1_000_000;
const Y_AXIS_ID_BASE: u64 = 2_000_000;
const LABEL_ID_BASE: u64 = 3_000_000;

/// The concrete scales for one chart instantiation.
#[derive(Clone, Debug)]
pub struct ChartScales {
    /// Income to scene x.
    pub x: ScaleLinear,
    /// Life expectancy to scene y (inverted range).
    pub y: ScaleLinear,
    /// Population to bubble radius.
    pub r: ScaleSqrt,
    /// Region to fill color.
    pub color: ScaleOrdinal,
}

/// Top-level specification for the bubble chart.
#[derive(Clone, Debug)]
pub struct BubbleChartSpec {
    /// Full canvas size including margins.
    pub canvas: Size,
    /// Margins around the plot area.
    pub margin: Margin,
    /// Fractional domain buffer applied to both position scales.
    pub buffer: f64,
    /// Bubble radius range in scene units.
    pub radius_range: (f64, f64),
    /// Label along the bottom axis.
    pub x_label: String,
    /// Label along the left axis.
    pub y_label: String,
}

impl Default for BubbleChartSpec {
    fn default() -> Self {
        Self {
            canvas: Size::new(700.0, 500.0),
            margin: Margin::default(),
            buffer: 0.025,
            radius_range: (4.0, 30.0),
            x_label: "Life Expectancy".into(),
            y_label: "Income".into(),
        }
    }
}

impl BubbleChartSpec {
    /// Creates the chart spec with its standard dimensions.
    pub fn new() -> Self {
        Self::default()
    }

    /// The plot rectangle (canvas inset by the margins).
    pub fn plot(&self) -> Rect {
        self.margin.inset(self.canvas)
    }

    fn x_scale_spec(&self, data: &Dataset) -> ScaleLinearSpec {
        ScaleLinearSpec::new(data.income_extent().unwrap_or((0.0, 0.0)))
            .with_buffer(self.buffer)
    }

    fn y_scale_spec(&self, data: &Dataset) -> ScaleLinearSpec {
        ScaleLinearSpec::new(data.life_expectancy_extent().unwrap_or((0.0, 0.0)))
            .with_buffer(self.buffer)
    }

    /// Derives the concrete scales for a dataset.
    ///
    /// An empty (or all-NaN) field falls back to a `(0, 0)` domain,
    /// which maps every value to the start of its range rather than
    /// panicking.
    pub fn scales(&self, data: &Dataset) -> ChartScales {
        let plot = self.plot();
        ChartScales {
            x: self.x_scale_spec(data).instantiate((plot.x0, plot.x1)),
            y: self.y_scale_spec(data).instantiate((plot.y1, plot.y0)),
            r: ScaleSqrtSpec::new(data.population_extent().unwrap_or((0.0, 0.0)))
                .instantiate(self.radius_range),
            color: ScaleOrdinal::from_regions(&data.regions),
        }
    }

    /// Generates every mark of the chart for a prepared dataset.
    pub fn marks(&self, data: &Dataset) -> Vec<Mark> {
        let plot = self.plot();
        let scales = self.scales(data);

        let mut out = AxisSpec::bottom(X_AXIS_ID_BASE, self.x_scale_spec(data)).marks(plot);
        out.extend(AxisSpec::left(Y_AXIS_ID_BASE, self.y_scale_spec(data)).marks(plot));
        out.extend(BubbleMarkSpec::new(BUBBLE_ID_BASE).marks(
            &data.rows,
            &scales.x,
            &scales.y,
            &scales.r,
            &scales.color,
        ));

        // Bottom-right label, flush with the lower plot corner.
        out.push(
            TextMarkSpec::new(
                MarkId::from_raw(LABEL_ID_BASE),
                (plot.x1, plot.y1 - LABEL_PAD),
                self.x_label.clone(),
            )
            .with_anchor(TextAnchor::End)
            .with_baseline(TextBaseline::Alphabetic)
            .mark(),
        );
        // Top-left label, rotated to read upward along the left axis.
        out.push(
            TextMarkSpec::new(
                MarkId::from_raw(LABEL_ID_BASE + 1),
                (plot.x0 + 2.0 * LABEL_PAD, plot.y0 + LABEL_PAD),
                self.y_label.clone(),
            )
            .with_angle(-90.0)
            .with_anchor(TextAnchor::End)
            .with_baseline(TextBaseline::Alphabetic)
            .mark(),
        );

        out
    }

    /// Builds the complete scene for a prepared dataset.
    pub fn scene(&self, data: &Dataset) -> Scene {
        let mut scene = Scene::new();
        scene.extend(self.marks(data));
        scene
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use gapviz_core::MarkPayload;
    use gapviz_data::RawRow;

    use crate::z_order;

    use super::*;

    fn raw(country: &str, region: &str, income: &str, life: &str, pop: &str) -> RawRow {
        RawRow {
            country: country.to_string(),
            region: region.to_string(),
            income: income.to_string(),
            life_expectancy: life.to_string(),
            population: pop.to_string(),
        }
    }

    fn two_row_dataset() -> Dataset {
        Dataset::prepare(vec![
            raw("A", "Europe", "10000", "70", "1000000"),
            raw("B", "Asia", "40000", "80", "9000000"),
        ])
    }

    #[test]
    fn plot_rect_matches_the_standard_layout() {
        let chart = BubbleChartSpec::new();
        assert_eq!(chart.plot(), Rect::new(30.0, 30.0, 670.0, 450.0));
    }

    #[test]
    fn scales_cover_the_buffered_extents() {
        let chart = BubbleChartSpec::new();
        let scales = chart.scales(&two_row_dataset());
        let plot = chart.plot();
        // With the 2.5% buffer, the raw extremes land strictly inside
        // the plot.
        assert!(scales.x.map(10_000.0) > plot.x0);
        assert!(scales.x.map(40_000.0) < plot.x1);
        assert!(scales.y.map(70.0) < plot.y1);
        assert!(scales.y.map(80.0) > plot.y0);
        // Radius endpoints hit the configured range exactly.
        assert!((scales.r.map(1_000_000.0) - 4.0).abs() < 1e-9);
        assert!((scales.r.map(9_000_000.0) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn y_scale_is_inverted() {
        let chart = BubbleChartSpec::new();
        let scales = chart.scales(&two_row_dataset());
        assert!(
            scales.y.map(80.0) < scales.y.map(70.0),
            "higher life expectancy draws higher on screen"
        );
    }

    #[test]
    fn chart_emits_one_bubble_per_row_plus_axes_and_labels() {
        let chart = BubbleChartSpec::new();
        let data = two_row_dataset();
        let marks = chart.marks(&data);
        let bubbles = marks
            .iter()
            .filter(|m| m.z_index == z_order::BUBBLES)
            .count();
        let labels = marks
            .iter()
            .filter(|m| m.z_index == z_order::CHART_LABELS)
            .count();
        assert_eq!(bubbles, data.rows.len());
        assert_eq!(labels, 2);
        assert!(marks.iter().any(|m| m.z_index == z_order::AXIS_RULES));
        assert!(marks.iter().any(|m| m.z_index == z_order::AXIS_LABELS));
    }

    #[test]
    fn larger_population_sorts_first_and_gets_the_lower_id() {
        let chart = BubbleChartSpec::new();
        let data = two_row_dataset();
        let marks = chart.marks(&data);
        let bubbles: Vec<&Mark> = marks
            .iter()
            .filter(|m| m.z_index == z_order::BUBBLES)
            .collect();
        // B has the larger population, so it is row 0 after preparation
        // and draws first (underneath A).
        assert_eq!(data.rows[0].country, "B");
        assert!(bubbles[0].id < bubbles[1].id);
        let radius = |m: &Mark| match &m.payload {
            MarkPayload::Path(p) => p.bounds().expect("finite bubble").width() / 2.0,
            MarkPayload::Text(_) => 0.0,
        };
        assert!(radius(bubbles[0]) > radius(bubbles[1]));
    }

    #[test]
    fn corner_labels_carry_the_expected_text_and_rotation() {
        let chart = BubbleChartSpec::new();
        let marks = chart.marks(&two_row_dataset());
        let texts: Vec<&gapviz_core::TextMark> = marks
            .iter()
            .filter(|m| m.z_index == z_order::CHART_LABELS)
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t),
                MarkPayload::Path(_) => None,
            })
            .collect();
        let x_label = texts
            .iter()
            .find(|t| t.text == "Life Expectancy")
            .expect("bottom label present");
        let y_label = texts
            .iter()
            .find(|t| t.text == "Income")
            .expect("left label present");
        assert_eq!(x_label.angle, 0.0);
        assert_eq!(y_label.angle, -90.0);
        let plot = chart.plot();
        assert!(x_label.pos.x >= plot.x1 - 1e-9 && x_label.pos.y < plot.y1);
        assert!(y_label.pos.x > plot.x0 && y_label.pos.y > plot.y0);
    }

    #[test]
    fn single_row_dataset_renders_without_panicking() {
        let chart = BubbleChartSpec::new();
        let data = Dataset::prepare(vec![raw("A", "Europe", "10000", "70", "1000000")]);
        let marks = chart.marks(&data);
        // Degenerate domains collapse to the range start; the bubble
        // still renders at the minimum radius.
        let bubble = marks
            .iter()
            .find(|m| m.z_index == z_order::BUBBLES)
            .expect("one bubble");
        let MarkPayload::Path(p) = &bubble.payload else {
            panic!("bubble is a path");
        };
        let b = p.bounds().expect("finite bubble");
        assert!((b.width() / 2.0 - 4.0).abs() < 0.05, "minimum radius");
    }

    #[test]
    fn empty_dataset_still_yields_axes_and_labels() {
        let chart = BubbleChartSpec::new();
        let data = Dataset::prepare(Vec::new());
        let marks = chart.marks(&data);
        assert!(marks.iter().all(|m| m.z_index != z_order::BUBBLES));
        assert!(marks.iter().any(|m| m.z_index == z_order::AXIS_RULES));
    }

    #[test]
    fn scene_draw_order_puts_bubbles_under_labels() {
        let chart = BubbleChartSpec::new();
        let scene = chart.scene(&two_row_dataset());
        let order: Vec<i32> = scene.draw_order().iter().map(|m| m.z_index).collect();
        assert!(order.windows(2).all(|w| w[0] <= w[1]), "sorted by z");
        assert_eq!(order.first(), Some(&z_order::BUBBLES));
        assert_eq!(order.last(), Some(&z_order::CHART_LABELS));
    }
}
