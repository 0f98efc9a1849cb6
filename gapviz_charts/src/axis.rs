// Copyright 2026 the Gapviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! An axis is a single spec with an `orient`: a bottom axis along the
//! lower plot edge or a left axis along the left edge. Tick values come
//! from the axis scale itself (no hand-placed ticks); each tick gets a
//! short rule mark and a formatted label.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{BezPath, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use gapviz_core::{Mark, MarkId, PathMark, TextAnchor, TextBaseline, TextMark};

use crate::format::format_tick_with_step;
use crate::scale::{ScaleLinear, ScaleLinearSpec};
use crate::z_order;

/// A paint + width pair for stroked paths (domain lines, ticks).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis domain line and tick marks.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            label_fill: rule.brush.clone(),
            rule,
            label_font_size: 10.0,
        }
    }
}

/// Axis placement relative to the plot rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis placed below the plot area.
    Bottom,
    /// A vertical axis placed to the left of the plot area.
    Left,
}

/// An axis specification over a linear scale.
#[derive(Clone)]
pub struct AxisSpec {
    /// Stable-id base; each generated mark uses a deterministic offset
    /// from this base.
    pub id_base: u64,
    /// The axis scale specification (shared with the series marks so
    /// ticks and bubbles agree on the mapping).
    pub scale: ScaleLinearSpec,
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of ticks, delegated to the scale's tick
    /// generator.
    pub tick_count: usize,
    /// Tick line length in scene coordinates.
    pub tick_size: f64,
    /// Padding between the tick end and the tick label.
    pub tick_padding: f64,
    /// Axis styling.
    pub style: AxisStyle,
    /// Optional tick label formatter; the second argument is the tick
    /// step, for consistent decimal formatting.
    pub tick_formatter: Option<Arc<dyn Fn(f64, f64) -> String>>,
}

impl core::fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisSpec")
            .field("id_base", &self.id_base)
            .field("scale", &self.scale)
            .field("orient", &self.orient)
            .field("tick_count", &self.tick_count)
            .field("tick_size", &self.tick_size)
            .field("tick_padding", &self.tick_padding)
            .field("style", &self.style)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .finish()
    }
}

impl AxisSpec {
    fn new(id_base: u64, scale: ScaleLinearSpec, orient: AxisOrient) -> Self {
        let tick_padding = match orient {
            AxisOrient::Bottom => 12.0,
            AxisOrient::Left => 6.0,
        };
        Self {
            id_base,
            scale,
            orient,
            tick_count: 10,
            tick_size: 5.0,
            tick_padding,
            style: AxisStyle::default(),
            tick_formatter: None,
        }
    }

    /// Creates a bottom axis.
    pub fn bottom(id_base: u64, scale: ScaleLinearSpec) -> Self {
        Self::new(id_base, scale, AxisOrient::Bottom)
    }

    /// Creates a left axis.
    pub fn left(id_base: u64, scale: ScaleLinearSpec) -> Self {
        Self::new(id_base, scale, AxisOrient::Left)
    }

    /// Sets the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets the tick size in scene coordinates.
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Sets the tick padding in scene coordinates.
    pub fn with_tick_padding(mut self, tick_padding: f64) -> Self {
        self.tick_padding = tick_padding;
        self
    }

    /// Sets the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets a custom tick label formatter.
    pub fn with_tick_formatter(mut self, f: impl Fn(f64, f64) -> String + 'static) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }

    /// Instantiates the axis scale for a given plot rectangle.
    ///
    /// Bottom axes map into `(plot.x0, plot.x1)`; left axes map into
    /// `(plot.y1, plot.y0)` since scene y grows downward.
    pub fn scale_for(&self, plot: Rect) -> ScaleLinear {
        let range = match self.orient {
            AxisOrient::Bottom => (plot.x0, plot.x1),
            AxisOrient::Left => (plot.y1, plot.y0),
        };
        self.scale.instantiate(range)
    }

    fn tick_values(&self) -> (Vec<f64>, f64) {
        let domain = self.scale.resolved_domain();
        let tmp = ScaleLinear::new(domain, (0.0, 1.0));
        let ticks = tmp.ticks(self.tick_count);
        let step = tick_step(&ticks);
        (ticks, step)
    }

    fn format_tick(&self, v: f64, step: f64) -> String {
        match &self.tick_formatter {
            Some(f) => (f)(v, step),
            None => format_tick_with_step(v, step),
        }
    }

    /// Generates the axis marks for the given plot rectangle.
    pub fn marks(&self, plot: Rect) -> Vec<Mark> {
        match self.orient {
            AxisOrient::Bottom => self.marks_bottom(plot),
            AxisOrient::Left => self.marks_left(plot),
        }
    }

    fn marks_bottom(&self, plot: Rect) -> Vec<Mark> {
        let y = plot.y1;
        let tick_size = self.tick_size.abs();
        let label_gap = self.tick_padding.max(0.0);
        let (ticks, step) = self.tick_values();
        let scale = self.scale_for(plot);

        let mut out = Vec::new();

        // Domain line.
        let mut domain = BezPath::new();
        domain.move_to((plot.x0, y));
        domain.line_to((plot.x1, y));
        out.push(rule_mark(
            MarkId::from_raw(self.id_base),
            domain,
            &self.style.rule,
        ));

        let ticks_len = ticks.len();
        for (i, v) in ticks.iter().copied().enumerate() {
            let x = scale.map(v);
            // Nice ticks may overshoot the domain; drop the ones that
            // land outside the plot.
            if x < plot.x0 - 1.0e-9 || x > plot.x1 + 1.0e-9 {
                continue;
            }

            let mut tick = BezPath::new();
            tick.move_to((x, y));
            tick.line_to((x, y + tick_size));
            out.push(rule_mark(
                MarkId::from_raw(self.id_base + 1 + i as u64),
                tick,
                &self.style.rule,
            ));

            // Clamp the first/last label anchors so they stay inside the
            // plot instead of spilling past its corners.
            let (anchor, x) = if i == 0 {
                (TextAnchor::Start, x.clamp(plot.x0, plot.x1))
            } else if i + 1 == ticks_len {
                (TextAnchor::End, x.clamp(plot.x0, plot.x1))
            } else {
                (TextAnchor::Middle, x)
            };
            out.push(Mark::text(
                MarkId::from_raw(self.id_base + 1000 + i as u64),
                z_order::AXIS_LABELS,
                TextMark {
                    pos: (x, y + tick_size + label_gap).into(),
                    text: self.format_tick(v, step),
                    font_size: self.style.label_font_size,
                    angle: 0.0,
                    anchor,
                    baseline: TextBaseline::Hanging,
                    fill: self.style.label_fill.clone(),
                },
            ));
        }

        out
    }

    fn marks_left(&self, plot: Rect) -> Vec<Mark> {
        let x = plot.x0;
        let tick_size = self.tick_size.abs();
        let label_gap = self.tick_padding.max(0.0);
        let (ticks, step) = self.tick_values();
        let scale = self.scale_for(plot);

        let mut out = Vec::new();

        // Domain line.
        let mut domain = BezPath::new();
        domain.move_to((x, plot.y0));
        domain.line_to((x, plot.y1));
        out.push(rule_mark(
            MarkId::from_raw(self.id_base),
            domain,
            &self.style.rule,
        ));

        for (i, v) in ticks.iter().copied().enumerate() {
            let y = scale.map(v);
            if y < plot.y0 - 1.0e-9 || y > plot.y1 + 1.0e-9 {
                continue;
            }

            let mut tick = BezPath::new();
            tick.move_to((x, y));
            tick.line_to((x - tick_size, y));
            out.push(rule_mark(
                MarkId::from_raw(self.id_base + 1 + i as u64),
                tick,
                &self.style.rule,
            ));

            out.push(Mark::text(
                MarkId::from_raw(self.id_base + 1000 + i as u64),
                z_order::AXIS_LABELS,
                TextMark {
                    pos: (x - tick_size - label_gap, y).into(),
                    text: self.format_tick(v, step),
                    font_size: self.style.label_font_size,
                    angle: 0.0,
                    anchor: TextAnchor::End,
                    baseline: TextBaseline::Middle,
                    fill: self.style.label_fill.clone(),
                },
            ));
        }

        out
    }
}

fn rule_mark(id: MarkId, path: BezPath, stroke: &StrokeStyle) -> Mark {
    Mark::path(
        id,
        z_order::AXIS_RULES,
        PathMark::stroked(path, stroke.brush.clone(), stroke.stroke_width),
    )
}

fn tick_step(ticks: &[f64]) -> f64 {
    let step = ticks
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold(f64::INFINITY, f64::min);
    if step.is_finite() { step } else { 0.0 }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::format;
    use alloc::vec::Vec;

    use gapviz_core::MarkPayload;

    use super::*;

    fn plot() -> Rect {
        Rect::new(30.0, 30.0, 670.0, 450.0)
    }

    fn tick_label_texts(marks: &[Mark]) -> Vec<String> {
        marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.clone()),
                MarkPayload::Path(_) => None,
            })
            .collect()
    }

    #[test]
    fn bottom_axis_pairs_every_label_with_a_tick() {
        let axis = AxisSpec::bottom(0x10_000, ScaleLinearSpec::new((0.0, 100.0)));
        let marks = axis.marks(plot());
        let labels = tick_label_texts(&marks).len();
        let rules = marks.len() - labels;
        // Domain line plus one rule per label.
        assert_eq!(rules, labels + 1);
        assert!(labels >= 2, "expected several ticks");
    }

    #[test]
    fn bottom_axis_marks_sit_on_the_lower_edge() {
        let axis = AxisSpec::bottom(0x10_000, ScaleLinearSpec::new((0.0, 100.0)));
        for mark in axis.marks(plot()) {
            match &mark.payload {
                MarkPayload::Path(p) => {
                    let b = p.bounds().expect("axis rules are finite");
                    assert!(b.y0 >= plot().y1 - 1e-9, "rule above the plot edge: {b:?}");
                }
                MarkPayload::Text(t) => {
                    assert!(t.pos.y > plot().y1, "label above the plot edge");
                }
            }
        }
    }

    #[test]
    fn left_axis_labels_anchor_end_before_the_plot() {
        let axis = AxisSpec::left(0x11_000, ScaleLinearSpec::new((50.0, 80.0)));
        let marks = axis.marks(plot());
        for mark in &marks {
            if let MarkPayload::Text(t) = &mark.payload {
                assert_eq!(t.anchor, TextAnchor::End);
                assert!(t.pos.x < plot().x0, "label right of the plot edge");
            }
        }
    }

    #[test]
    fn left_axis_positions_decrease_as_values_grow() {
        let axis = AxisSpec::left(0x11_000, ScaleLinearSpec::new((50.0, 80.0)));
        let scale = axis.scale_for(plot());
        assert!(scale.map(80.0) < scale.map(50.0));
    }

    #[test]
    fn ticks_outside_the_plot_are_dropped() {
        // A buffered scale insets the domain endpoints, so the niced
        // ticks at the extremes can fall outside the plot.
        let axis = AxisSpec::bottom(
            0x10_000,
            ScaleLinearSpec::new((0.0, 100.0)).with_buffer(0.025),
        );
        let scale = axis.scale_for(plot());
        for mark in axis.marks(plot()) {
            if let MarkPayload::Path(p) = &mark.payload {
                let b = p.bounds().expect("finite rule");
                assert!(b.x0 >= plot().x0 - 1e-6 && b.x1 <= plot().x1 + 1e-6);
            }
        }
        assert!(scale.map(0.0) > plot().x0, "buffer insets the minimum");
    }

    #[test]
    fn custom_formatter_overrides_tick_labels() {
        let axis = AxisSpec::bottom(0x10_000, ScaleLinearSpec::new((0.0, 100.0)))
            .with_tick_formatter(|v, _| format!("<{v}>"));
        let labels = tick_label_texts(&axis.marks(plot()));
        assert!(labels.iter().all(|l| l.starts_with('<')), "formatter used");
    }

    #[test]
    fn degenerate_domain_produces_a_single_tick_without_panicking() {
        let axis = AxisSpec::bottom(0x10_000, ScaleLinearSpec::new((42.0, 42.0)));
        let marks = axis.marks(plot());
        let labels = tick_label_texts(&marks);
        assert_eq!(labels.len(), 1, "one tick for a single-point domain");
        assert_eq!(labels[0], "42");
    }
}
