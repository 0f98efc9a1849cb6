// Copyright 2026 the Gapviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A static retained scene: the full mark set for one render pass.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;

use crate::mark::Mark;

/// An ordered collection of marks produced by one chart pipeline pass.
///
/// Marks are kept in insertion order; [`Scene::draw_order`] produces the
/// deterministic paint order `(z_index, MarkId)`. Ids are expected to be
/// unique within a scene; duplicates are not rejected and paint in
/// insertion order (the sort is stable).
#[derive(Clone, Debug, Default)]
pub struct Scene {
    marks: Vec<Mark>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single mark.
    pub fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    /// Appends a batch of marks.
    pub fn extend(&mut self, marks: impl IntoIterator<Item = Mark>) {
        self.marks.extend(marks);
    }

    /// Returns the number of marks in the scene.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if the scene holds no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns the marks in insertion order.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Returns the marks sorted by `(z_index, id)` — the paint order.
    pub fn draw_order(&self) -> Vec<&Mark> {
        let mut out: Vec<&Mark> = self.marks.iter().collect();
        out.sort_by_key(|m| (m.z_index, m.id));
        out
    }

    /// Returns the union of all finite mark bounds.
    ///
    /// Text marks (whose extents depend on shaping) and marks with
    /// non-finite geometry are skipped.
    pub fn bounds(&self) -> Option<Rect> {
        let mut rect: Option<Rect> = None;
        for mark in &self.marks {
            let Some(b) = mark.payload.bounds() else {
                continue;
            };
            rect = Some(match rect {
                None => b,
                Some(r) => Rect::new(
                    r.x0.min(b.x0),
                    r.y0.min(b.y0),
                    r.x1.max(b.x1),
                    r.y1.max(b.y1),
                ),
            });
        }
        rect
    }
}
