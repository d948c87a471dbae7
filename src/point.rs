use serde::{Deserialize, Serialize};

/// 64-bit color value with `0xAARRGGBB` in the low 32 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u64);

impl Color {
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const RED: Color = Color(0xFFFF_3D00);
    pub const BLUE: Color = Color(0xFF19_76D2);

    /// The packed ARGB components.
    pub const fn argb(self) -> u32 {
        self.0 as u32
    }

    /// RGBA byte order as used by raster canvases.
    pub const fn to_rgba8(self) -> [u8; 4] {
        let argb = self.argb();
        [
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        ]
    }
}

/// Quick-access brush colors shown on the main palette row.
pub const QUICK_PALETTE: [Color; 4] = [Color::WHITE, Color::RED, Color::BLACK, Color::BLUE];

/// The extended palette offered by the color picker, in display order.
pub const EXTRA_PALETTE: [Color; 25] = [
    // row 1
    Color(0xFFFF_FECC),
    Color(0xFFFF_95D5),
    Color(0xFFFF_D1A9),
    Color(0xFFED_CAFF),
    Color(0xFFCC_F3FF),
    // row 2
    Color(0xFFF3_ED00),
    Color(0xFFF8_D3E3),
    Color(0xFFFA_9A46),
    Color(0xFFB1_8CFE),
    Color(0xFF94_E4FD),
    // row 3
    Color(0xFFA8_DB10),
    Color(0xFFFB_66A4),
    Color(0xFFFC_7600),
    Color(0xFF97_47FF),
    Color(0xFF00_C9FB),
    // row 4
    Color(0xFF75_BB41),
    Color(0xFFDC_0057),
    Color(0xFFED_746C),
    Color(0xFF4D_21B2),
    Color(0xFF73_A8FC),
    // row 5
    Color(0xFF4E_7A25),
    Color(0xFF9D_234C),
    Color(0xFFFF_3D00),
    Color(0xFF64_1580),
    Color(0xFF19_76D2),
];

/// A committed dot of ink. Equality is structural: position and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub pos: (i32, i32),
    pub color: Color,
}

impl Point {
    pub fn new(pos: (i32, i32), color: Color) -> Self {
        Self { pos, color }
    }
}

/// An in-progress stroke segment. Lives only inside the stroke buffer while
/// a drag is active and is rasterized into [`Point`]s on commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub start: (i32, i32),
    pub end: (i32, i32),
}

impl Line {
    pub fn new(start: (i32, i32), end: (i32, i32)) -> Self {
        Self { start, end }
    }
}
