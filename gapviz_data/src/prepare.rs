// Copyright 2026 the Gapviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dataset preparation: coercion pass, region collection, population sort.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cmp::Ordering;

use hashbrown::HashSet;

use crate::row::{RawRow, Row};

/// The distinct regions of a dataset, in first-seen order.
///
/// Built incrementally during the coercion pass — before the population
/// sort — so the order reflects the input file, not the sorted rows.
/// This set is the domain of the color scale.
#[derive(Clone, Debug, Default)]
pub struct RegionSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl RegionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a region, keeping first-seen order.
    ///
    /// Returns `true` if the region was not present yet.
    pub fn insert(&mut self, region: &str) -> bool {
        if self.seen.contains(region) {
            return false;
        }
        self.seen.insert(region.to_string());
        self.order.push(region.to_string());
        true
    }

    /// Collects the distinct regions of already-prepared rows, in the
    /// order the rows appear.
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut set = Self::new();
        for row in rows {
            set.insert(&row.region);
        }
        set
    }

    /// Returns the position of a region in first-seen order.
    pub fn position(&self, region: &str) -> Option<usize> {
        if !self.seen.contains(region) {
            return None;
        }
        self.order.iter().position(|r| r == region)
    }

    /// Returns the regions in first-seen order.
    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    /// Returns the number of distinct regions.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no region has been seen.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// A prepared dataset: coerced rows in population-descending order,
/// plus the accumulated region set.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    /// Prepared rows, sorted by population descending.
    pub rows: Vec<Row>,
    /// Distinct regions in first-seen (pre-sort) order.
    pub regions: RegionSet,
}

impl Dataset {
    /// Runs the preparation pass over raw rows.
    ///
    /// The sort is stable: rows with equal population — including rows
    /// whose population coerced to NaN, which compare as ties — retain
    /// their relative input order.
    pub fn prepare(raw: Vec<RawRow>) -> Self {
        let mut regions = RegionSet::new();
        let mut rows: Vec<Row> = raw
            .into_iter()
            .map(|r| {
                let row = Row::from_raw(r);
                regions.insert(&row.region);
                row
            })
            .collect();

        rows.sort_by(|a, b| {
            b.population
                .partial_cmp(&a.population)
                .unwrap_or(Ordering::Equal)
        });

        Self { rows, regions }
    }

    /// Income extent over rows with a finite income.
    pub fn income_extent(&self) -> Option<(f64, f64)> {
        infer_extent(&self.rows, |r| r.income)
    }

    /// Life-expectancy extent over rows with a finite value.
    pub fn life_expectancy_extent(&self) -> Option<(f64, f64)> {
        infer_extent(&self.rows, |r| r.life_expectancy)
    }

    /// Population extent over rows with a finite population.
    pub fn population_extent(&self) -> Option<(f64, f64)> {
        infer_extent(&self.rows, |r| r.population)
    }
}

/// Infers a `(min, max)` extent for one numeric field.
///
/// Non-finite values (the coercion sentinel) are ignored, so a malformed
/// field excludes that row from the extent without poisoning the scale
/// domain. Returns `None` if no finite values are present.
pub fn infer_extent(rows: &[Row], field: impl Fn(&Row) -> f64) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in rows {
        let v = field(row);
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}
