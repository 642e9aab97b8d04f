//! Colour lookup tables.

use std::fmt;
use std::str::FromStr;

use image::Rgb;

use crate::error::RenderError;

type Anchor = (f64, [u8; 3]);

// Five anchors per map, sampled from the matplotlib tables at 0, ¼, ½, ¾, 1.
// Colours between anchors are linear blends and only approximate the
// published maps.
const VIRIDIS: [Anchor; 5] = [
    (0.0, [68, 1, 84]),
    (0.25, [59, 82, 139]),
    (0.5, [33, 145, 140]),
    (0.75, [94, 201, 98]),
    (1.0, [253, 231, 37]),
];
const PLASMA: [Anchor; 5] = [
    (0.0, [13, 8, 135]),
    (0.25, [126, 3, 168]),
    (0.5, [204, 71, 120]),
    (0.75, [248, 149, 64]),
    (1.0, [240, 249, 33]),
];
const INFERNO: [Anchor; 5] = [
    (0.0, [0, 0, 4]),
    (0.25, [87, 16, 110]),
    (0.5, [188, 55, 84]),
    (0.75, [249, 142, 9]),
    (1.0, [252, 255, 164]),
];
const MAGMA: [Anchor; 5] = [
    (0.0, [0, 0, 4]),
    (0.25, [81, 18, 124]),
    (0.5, [183, 55, 121]),
    (0.75, [252, 137, 97]),
    (1.0, [252, 253, 191]),
];
const CIVIDIS: [Anchor; 5] = [
    (0.0, [0, 34, 78]),
    (0.25, [65, 77, 108]),
    (0.5, [124, 123, 120]),
    (0.75, [187, 175, 113]),
    (1.0, [254, 232, 56]),
];
const COOLWARM: [Anchor; 5] = [
    (0.0, [59, 76, 192]),
    (0.25, [141, 176, 254]),
    (0.5, [221, 220, 220]),
    (0.75, [244, 154, 123]),
    (1.0, [180, 4, 38]),
];

/// A perceptual colour map from `[0, 1]` to RGB.
///
/// Each map is stored as five anchor colours. The anchors match the
/// published tables; intermediate colours are interpolated in RGB and are
/// close to, but not exactly, the reference values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Colormap {
    #[default]
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
    /// Diverging blue-white-red map used for difference fields.
    Coolwarm,
}

impl Colormap {
    /// Maps selectable for ordinary stage rendering. [`Colormap::Coolwarm`] is
    /// reserved for difference maps.
    pub const SEQUENTIAL: [Self; 5] = [
        Self::Viridis,
        Self::Plasma,
        Self::Inferno,
        Self::Magma,
        Self::Cividis,
    ];

    /// Lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Viridis => "viridis",
            Self::Plasma => "plasma",
            Self::Inferno => "inferno",
            Self::Magma => "magma",
            Self::Cividis => "cividis",
            Self::Coolwarm => "coolwarm",
        }
    }

    fn anchors(&self) -> &'static [Anchor] {
        match self {
            Self::Viridis => &VIRIDIS,
            Self::Plasma => &PLASMA,
            Self::Inferno => &INFERNO,
            Self::Magma => &MAGMA,
            Self::Cividis => &CIVIDIS,
            Self::Coolwarm => &COOLWARM,
        }
    }

    /// Colour at position `t`, clamped to `[0, 1]`. NaN maps to the low end.
    pub fn sample(&self, t: f64) -> Rgb<u8> {
        let x = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let anchors = self.anchors();
        let mut i = 0;
        while i + 2 < anchors.len() && x > anchors[i + 1].0 {
            i += 1;
        }
        let (x0, c0) = anchors[i];
        let (x1, c1) = anchors[i + 1];
        let w = if x1 > x0 { (x - x0) / (x1 - x0) } else { 0.0 };
        let lerp = |a: u8, b: u8| (a as f64 + w * (b as f64 - a as f64)).round() as u8;
        Rgb([lerp(c0[0], c1[0]), lerp(c0[1], c1[1]), lerp(c0[2], c1[2])])
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colormap {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "viridis" => Ok(Self::Viridis),
            "plasma" => Ok(Self::Plasma),
            "inferno" => Ok(Self::Inferno),
            "magma" => Ok(Self::Magma),
            "cividis" => Ok(Self::Cividis),
            "coolwarm" => Ok(Self::Coolwarm),
            _ => Err(RenderError::InvalidConfig {
                reason: format!("unknown colormap: {s:?}"),
            }),
        }
    }
}
