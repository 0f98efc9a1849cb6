// Copyright 2026 the Gapviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the wealth-and-health bubble chart from a CSV file to a
//! standalone HTML page.

mod html;
mod svg;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use kurbo::Rect;

use gapviz_charts::BubbleChartSpec;
use gapviz_data::{Dataset, RawRow};

const DEFAULT_DATA: &str = "gapviz_demo/data/wealth-health-2014.csv";
const OUTPUT: &str = "gapviz_demo.html";

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_DATA), PathBuf::from);

    let raw = load_rows(&path)?;
    let data = Dataset::prepare(raw);
    println!(
        "loaded {} rows across {} regions from {}",
        data.rows.len(),
        data.regions.len(),
        path.display()
    );

    let chart = BubbleChartSpec::new();
    let scene = chart.scene(&data);
    let view = Rect::new(0.0, 0.0, chart.canvas.width, chart.canvas.height);
    let page = html::render_page("Wealth & Health of Nations", &svg::scene_to_svg(&scene, view));

    std::fs::write(OUTPUT, page).with_context(|| format!("write {OUTPUT}"))?;
    println!("wrote {OUTPUT}");
    Ok(())
}

/// Reads the CSV into raw (still-textual) rows.
///
/// Columns are matched by header name, case-insensitively, so column
/// order does not matter. Field values are kept as text; numeric
/// coercion happens during dataset preparation, where a malformed cell
/// becomes NaN instead of an error.
fn load_rows(path: &Path) -> Result<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("open csv '{}'", path.display()))?;

    let headers: Vec<String> = rdr
        .headers()
        .context("read csv headers")?
        .iter()
        .map(str::to_lowercase)
        .collect();
    let col = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("missing column '{name}' in '{}'", path.display()))
    };
    let i_country = col("country")?;
    let i_region = col("region")?;
    let i_income = col("income")?;
    let i_life = col("lifeexpectancy")?;
    let i_population = col("population")?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec.context("read csv record")?;
        let field = |i: usize| rec.get(i).unwrap_or("").to_string();
        out.push(RawRow {
            country: field(i_country),
            region: field(i_region),
            income: field(i_income),
            life_expectancy: field(i_life),
            population: field(i_population),
        });
    }
    Ok(out)
}
