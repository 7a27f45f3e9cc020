//! Chart colors

use serde::{Serialize, Serializer};

/// A color in HSL space with alpha; `h` is normalized to 0.0..1.0
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    /// CSS color string, e.g. `hsl(12 76% 61%)`
    pub fn to_css(&self) -> String {
        let h = (self.h * 360.0).round();
        let s = (self.s * 100.0).round();
        let l = (self.l * 100.0).round();
        if self.a >= 1.0 {
            format!("hsl({} {}% {}%)", h, s, l)
        } else {
            format!("hsl({} {}% {}% / {})", h, s, l, self.a)
        }
    }
}

impl Serialize for Hsla {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

/// Chart color palette, cycled by series or slice index
pub const CHART_COLORS: [Hsla; 5] = [
    Hsla { h: 12.0 / 360.0,  s: 0.76, l: 0.61, a: 1.0 },  // Coral
    Hsla { h: 173.0 / 360.0, s: 0.58, l: 0.39, a: 1.0 },  // Teal
    Hsla { h: 197.0 / 360.0, s: 0.37, l: 0.24, a: 1.0 },  // Slate Blue
    Hsla { h: 43.0 / 360.0,  s: 0.74, l: 0.66, a: 1.0 },  // Amber
    Hsla { h: 27.0 / 360.0,  s: 0.87, l: 0.67, a: 1.0 },  // Orange
];

/// Palette color for the given index, wrapping around
pub fn palette_color(index: usize) -> Hsla {
    CHART_COLORS[index % CHART_COLORS.len()]
}
