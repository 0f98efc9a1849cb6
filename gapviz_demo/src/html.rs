// Copyright 2026 the Gapviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiny HTML page wrapper around the generated SVG.

pub(crate) fn render_page(title: &str, svg: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; margin: 24px; }}
h1 {{ font-size: 18px; }}
</style>
</head>
<body>
<h1>{title}</h1>
{svg}</body>
</html>
"#
    )
}
