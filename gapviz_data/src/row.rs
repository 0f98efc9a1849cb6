// Copyright 2026 the Gapviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row types and numeric coercion.

extern crate alloc;

use alloc::string::String;

/// One record as loaded from the source file: every field is text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRow {
    /// Country name.
    pub country: String,
    /// Categorical region name.
    pub region: String,
    /// Average income, as source text.
    pub income: String,
    /// Life expectancy in years, as source text.
    pub life_expectancy: String,
    /// Population count, as source text.
    pub population: String,
}

/// One prepared data point.
///
/// Rows are immutable after preparation. Numeric fields hold either the
/// parsed value or the NaN sentinel left by [`coerce_number`].
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    /// Country name.
    pub country: String,
    /// Categorical region name; the color-scale key.
    pub region: String,
    /// Average income (strictly positive in well-formed data).
    pub income: f64,
    /// Life expectancy in years.
    pub life_expectancy: f64,
    /// Population count.
    pub population: f64,
}

impl Row {
    /// Coerces a raw row's numeric fields.
    pub fn from_raw(raw: RawRow) -> Self {
        Self {
            country: raw.country,
            region: raw.region,
            income: coerce_number(&raw.income),
            life_expectancy: coerce_number(&raw.life_expectancy),
            population: coerce_number(&raw.population),
        }
    }
}

/// Parses a numeric field, coercing malformed text to NaN.
///
/// This is deliberately silent: the pipeline never rejects a row over a
/// bad field. NaN is the sentinel for "not a number"; every consumer of
/// these values (extents, scales) treats non-finite input explicitly.
pub fn coerce_number(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    fn raw(income: &str, life: &str, pop: &str) -> RawRow {
        RawRow {
            country: "Atlantis".to_string(),
            region: "Nowhere".to_string(),
            income: income.to_string(),
            life_expectancy: life.to_string(),
            population: pop.to_string(),
        }
    }

    #[test]
    fn numeric_fields_parse_to_values() {
        let row = Row::from_raw(raw("12500", "71.5", " 1400000 "));
        assert_eq!(row.income, 12500.0);
        assert_eq!(row.life_expectancy, 71.5);
        assert_eq!(row.population, 1400000.0);
    }

    #[test]
    fn malformed_fields_coerce_to_nan_and_keep_the_row() {
        let row = Row::from_raw(raw("n/a", "", "4,200"));
        assert!(row.income.is_nan(), "malformed income");
        assert!(row.life_expectancy.is_nan(), "empty life expectancy");
        assert!(row.population.is_nan(), "grouped digits are not parsed");
        assert_eq!(row.country, "Atlantis");
    }
}
