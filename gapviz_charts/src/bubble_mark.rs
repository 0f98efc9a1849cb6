// Copyright 2026 the Gapviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bubble (scatter circle) mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Shape};
use peniko::Brush;
use peniko::color::palette::css;

use gapviz_core::{Mark, MarkId, PathMark};
use gapviz_data::Row;

use crate::scale::{ScaleLinear, ScaleOrdinal, ScaleSqrt};
use crate::z_order;

/// Specification for one bubble series.
///
/// Each row becomes one circle mark: x from income, y from life
/// expectancy, radius from population through a square-root scale, and
/// fill from the row's region. The mark id is `id_base + row index`, so
/// ids are stable under the dataset's row order.
#[derive(Clone, Debug)]
pub struct BubbleMarkSpec {
    /// Stable-id base; row `i` gets `id_base + i`.
    pub id_base: u64,
    /// Fill and stroke opacity applied to every bubble.
    pub opacity: f32,
    /// Outline paint, applied at the same opacity as the fill.
    pub stroke: Brush,
    /// Outline width in scene coordinates.
    pub stroke_width: f64,
}

impl BubbleMarkSpec {
    /// Creates a bubble spec with the default purple outline at 0.75
    /// opacity.
    pub fn new(id_base: u64) -> Self {
        Self {
            id_base,
            opacity: 0.75,
            stroke: css::PURPLE.into(),
            stroke_width: 1.0,
        }
    }

    /// Sets the bubble opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Generates one circle mark per row.
    ///
    /// Rows with non-finite coordinates still emit a mark (the circle
    /// path is empty, so it draws nothing); this keeps ids aligned with
    /// row indices.
    pub fn marks(
        &self,
        rows: &[Row],
        x: &ScaleLinear,
        y: &ScaleLinear,
        r: &ScaleSqrt,
        color: &ScaleOrdinal,
    ) -> Vec<Mark> {
        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                let cx = x.map(row.income);
                let cy = y.map(row.life_expectancy);
                let radius = r.map(row.population);
                let path = if cx.is_finite() && cy.is_finite() && radius.is_finite() {
                    Circle::new((cx, cy), radius).to_path(0.1)
                } else {
                    BezPath::new()
                };
                let fill = color.map(&row.region).with_alpha(self.opacity);
                let stroke = apply_alpha(&self.stroke, self.opacity);
                Mark::path(
                    MarkId::for_row(self.id_base, i as u64),
                    z_order::BUBBLES,
                    PathMark::filled(path, fill).with_stroke(stroke, self.stroke_width),
                )
            })
            .collect()
    }
}

fn apply_alpha(brush: &Brush, alpha: f32) -> Brush {
    match brush {
        Brush::Solid(c) => Brush::Solid(c.with_alpha(alpha)),
        other => other.clone(),
    }
}
