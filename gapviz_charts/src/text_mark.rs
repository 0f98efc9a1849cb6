// Copyright 2026 the Gapviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Standalone text marks (chart corner labels).

extern crate alloc;

use alloc::string::String;

use kurbo::Point;
use peniko::Brush;
use peniko::color::palette::css;

use gapviz_core::{Mark, MarkId, TextAnchor, TextBaseline, TextMark};

use crate::z_order;

/// Specification for a single free-standing text mark.
#[derive(Clone, Debug)]
pub struct TextMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene units.
    pub font_size: f64,
    /// Rotation in degrees around `pos`, clockwise.
    pub angle: f64,
    /// Horizontal anchoring.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
    /// Z stacking index.
    pub z_index: i32,
}

impl TextMarkSpec {
    /// Creates a black, unrotated label at the chart-label layer.
    pub fn new(id: MarkId, pos: impl Into<Point>, text: impl Into<String>) -> Self {
        Self {
            id,
            pos: pos.into(),
            text: text.into(),
            font_size: 10.0,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            fill: css::BLACK.into(),
            z_index: z_order::CHART_LABELS,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the rotation in degrees.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the horizontal anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the vertical baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Builds the mark.
    pub fn mark(&self) -> Mark {
        Mark::text(
            self.id,
            self.z_index,
            TextMark {
                pos: self.pos,
                text: self.text.clone(),
                font_size: self.font_size,
                angle: self.angle,
                anchor: self.anchor,
                baseline: self.baseline,
                fill: self.fill.clone(),
            },
        )
    }
}
