// Copyright 2026 the Gapviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row model and dataset preparation for gapviz.
//!
//! This crate owns the first stage of the pipeline: raw text rows come
//! in, a [`Dataset`] comes out. Preparation does three things, in one
//! pass plus a sort:
//! - coerces the numeric fields (`income`, `life_expectancy`,
//!   `population`) with a NaN sentinel for malformed text,
//! - collects the distinct regions in first-seen order, and
//! - sorts rows by population, descending and stable, so large bubbles
//!   paint first and small ones stay visible on top.
//!
//! Coercion never fails the pipeline and never drops a row; downstream
//! extent computation skips non-finite values instead.

#![no_std]

extern crate alloc;

mod prepare;
mod row;

pub use prepare::{Dataset, RegionSet, infer_extent};
pub use row::{RawRow, Row, coerce_number};
