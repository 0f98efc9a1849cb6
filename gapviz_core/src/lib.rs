// Copyright 2026 the Gapviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static scene-graph primitives for gapviz charts.
//!
//! A scene is a flat collection of [`Mark`]s. Each mark carries:
//! - a stable [`MarkId`] (used as the draw-order tie-break),
//! - a `z_index` band, and
//! - a payload: a vector path or an unshaped text string.
//!
//! The scene here is deliberately *static*: a chart pipeline builds the
//! full mark set once, hands it to a renderer, and discards it. There is
//! no diffing, no signals, and no update path.
//!
//! Text shaping and layout are out of scope; text marks store unshaped
//! strings plus anchor/baseline hints for the renderer.

#![no_std]

extern crate alloc;

mod mark;
mod scene;

pub use mark::{Mark, MarkId, MarkPayload, PathMark, TextAnchor, TextBaseline, TextMark};
pub use scene::Scene;
