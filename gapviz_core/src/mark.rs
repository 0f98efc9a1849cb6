// Copyright 2026 the Gapviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark types: the drawable atoms of a scene.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::Brush;

/// A stable mark identity.
///
/// Chart components derive ids deterministically (an id base per
/// component plus an offset per generated mark), so the same pipeline
/// input always produces the same ids. Renderers sort by
/// `(z_index, MarkId)` for a deterministic paint order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates a mark id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Derives a per-row mark id from a component id base.
    pub const fn for_row(base: u64, row: u64) -> Self {
        Self(base + row)
    }
}

/// Horizontal text anchoring, matching SVG `text-anchor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The anchor point is at the start of the text run.
    Start,
    /// The anchor point is at the middle of the text run.
    Middle,
    /// The anchor point is at the end of the text run.
    End,
}

/// Vertical text baselines, matching SVG `dominant-baseline`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The Latin alphabetic baseline.
    Alphabetic,
    /// The middle of the em box.
    Middle,
    /// The hanging baseline (text hangs below the anchor).
    Hanging,
    /// The ideographic baseline.
    Ideographic,
}

/// A filled and/or stroked vector path.
#[derive(Clone, Debug)]
pub struct PathMark {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint, if the path is filled.
    pub fill: Option<Brush>,
    /// Stroke paint, if the path is stroked.
    pub stroke: Option<Brush>,
    /// Stroke width in scene coordinates; ignored when `stroke` is `None`.
    pub stroke_width: f64,
}

impl PathMark {
    /// Creates a filled path with no stroke.
    pub fn filled(path: BezPath, fill: impl Into<Brush>) -> Self {
        Self {
            path,
            fill: Some(fill.into()),
            stroke: None,
            stroke_width: 0.0,
        }
    }

    /// Creates a stroked path with no fill.
    pub fn stroked(path: BezPath, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            path,
            fill: None,
            stroke: Some(stroke.into()),
            stroke_width,
        }
    }

    /// Adds a stroke on top of an existing fill.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = Some(stroke.into());
        self.stroke_width = stroke_width;
        self
    }

    /// Returns the path's bounding box, or `None` if it is empty or
    /// contains non-finite coordinates.
    ///
    /// Marks positioned from non-finite data (e.g. a coerced NaN field)
    /// produce non-finite geometry; such marks are kept in the scene but
    /// contribute nothing to scene bounds.
    pub fn bounds(&self) -> Option<Rect> {
        if self.path.elements().is_empty() {
            return None;
        }
        let b = self.path.bounding_box();
        let finite =
            b.x0.is_finite() && b.y0.is_finite() && b.x1.is_finite() && b.y1.is_finite();
        finite.then_some(b)
    }
}

/// A text mark (unshaped string plus renderer hints).
#[derive(Clone, Debug)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation angle in degrees, applied around `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// The drawable payload of a [`Mark`].
#[derive(Clone, Debug)]
pub enum MarkPayload {
    /// A vector path.
    Path(PathMark),
    /// An unshaped text run.
    Text(TextMark),
}

impl MarkPayload {
    /// Returns geometry bounds where they are known.
    ///
    /// Text bounds depend on shaping, which lives downstream; text
    /// payloads return `None` and renderers estimate as needed.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Path(p) => p.bounds(),
            Self::Text(_) => None,
        }
    }
}

/// A mark: identity + draw-order band + payload.
#[derive(Clone, Debug)]
pub struct Mark {
    /// Stable identity, also the draw-order tie-break.
    pub id: MarkId,
    /// Coarse draw-order band; see `gapviz_charts`' z-order constants.
    pub z_index: i32,
    /// The drawable payload.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a path mark.
    pub fn path(id: MarkId, z_index: i32, path: PathMark) -> Self {
        Self {
            id,
            z_index,
            payload: MarkPayload::Path(path),
        }
    }

    /// Creates a text mark.
    pub fn text(id: MarkId, z_index: i32, text: TextMark) -> Self {
        Self {
            id,
            z_index,
            payload: MarkPayload::Text(text),
        }
    }
}
