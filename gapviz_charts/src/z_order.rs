// Copyright 2026 the Gapviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for chart-generated marks.
//!
//! `gapviz_core` marks carry an explicit `z_index` for paint ordering.
//! The chart layer sets z-indexes consistently so callers never have to
//! hand-tune paint order. Renderers sort by `(z_index, MarkId)` for a
//! deterministic tie-break.
//!
//! Bubbles share one band: within it, marks paint in id order, which the
//! chart assigns from the population-descending dataset order so the
//! largest circles go down first.

/// Bubble (data point) marks.
pub const BUBBLES: i32 = 0;

/// Axis domain lines and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;

/// Chart-level labels and annotations.
pub const CHART_LABELS: i32 = 80;
