// Copyright 2026 the Gapviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The categorical color palette.

use peniko::Color;

/// The classic ten-color categorical palette ("category10").
///
/// Colors are assigned to regions by first-seen position; see
/// [`crate::ScaleOrdinal`] for the wrap-around rule when a domain has
/// more than ten entries.
pub const CATEGORY10: [Color; 10] = [
    Color::from_rgba8(0x1f, 0x77, 0xb4, 0xff),
    Color::from_rgba8(0xff, 0x7f, 0x0e, 0xff),
    Color::from_rgba8(0x2c, 0xa0, 0x2c, 0xff),
    Color::from_rgba8(0xd6, 0x27, 0x28, 0xff),
    Color::from_rgba8(0x94, 0x67, 0xbd, 0xff),
    Color::from_rgba8(0x8c, 0x56, 0x4b, 0xff),
    Color::from_rgba8(0xe3, 0x77, 0xc2, 0xff),
    Color::from_rgba8(0x7f, 0x7f, 0x7f, 0xff),
    Color::from_rgba8(0xbc, 0xbd, 0x22, 0xff),
    Color::from_rgba8(0x17, 0xbe, 0xcf, 0xff),
];

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn palette_colors_are_pairwise_distinct() {
        for (i, a) in CATEGORY10.iter().enumerate() {
            for b in CATEGORY10.iter().skip(i + 1) {
                assert_ne!(a, b, "palette entries must be distinguishable");
            }
        }
    }
}
