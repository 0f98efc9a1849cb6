// Copyright 2026 the Gapviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bubble-scatter chart building blocks on top of `gapviz_core`.
//!
//! This crate is the middle of the pipeline: a prepared
//! [`gapviz_data::Dataset`] goes in, a flat set of `gapviz_core::Mark`s
//! comes out. It provides:
//! - **Scales** mapping data values into scene coordinates: linear with
//!   a buffered domain for the axes, square-root for bubble radii, and
//!   ordinal for region colors.
//! - **Guides** (axes, corner labels) generated as marks.
//! - A composed [`BubbleChartSpec`] that derives all four scales from
//!   the dataset's extents and renders the whole chart in one pass.
//!
//! Text shaping and layout are out of scope; text marks store unshaped
//! strings.

#![no_std]

extern crate alloc;

mod axis;
mod bubble_mark;
mod chart;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod layout;
mod palette;
mod scale;
mod text_mark;
mod z_order;

pub use axis::{AxisOrient, AxisSpec, AxisStyle, StrokeStyle};
pub use bubble_mark::BubbleMarkSpec;
pub use chart::{BubbleChartSpec, ChartScales};
pub use layout::{Margin, Size};
pub use palette::CATEGORY10;
pub use scale::{ScaleLinear, ScaleLinearSpec, ScaleOrdinal, ScaleSqrt, ScaleSqrtSpec};
pub use text_mark::TextMarkSpec;
pub use z_order::*;
