use crate::utils::Color;
use rand::Rng;
use rand::seq::SliceRandom;

/// Accent colors as sRGB, cycled through by clicking.
pub const ACCENTS_SRGB: [[u8; 3]; 4] = [
    [0x40, 0x60, 0xff],
    [0x20, 0xff, 0xa0],
    [0xff, 0x40, 0x60],
    [0xff, 0xcc, 0x00],
];
pub const PALETTE_SIZE: usize = ACCENTS_SRGB.len();

pub const DARK_SRGB: [u8; 3] = [0x44, 0x44, 0x44];
pub const LIGHT_SRGB: [u8; 3] = [0xff, 0xff, 0xff];

pub const GLOSSY: f32 = 0.1;
pub const MATTE: f32 = 0.75;

pub fn accent_color(index: usize) -> Color {
    let [r, g, b] = ACCENTS_SRGB[index % PALETTE_SIZE];
    Color::from_srgb8(r, g, b)
}

fn dark() -> Color {
    let [r, g, b] = DARK_SRGB;
    Color::from_srgb8(r, g, b)
}

fn light() -> Color {
    let [r, g, b] = LIGHT_SRGB;
    Color::from_srgb8(r, g, b)
}

/// Immutable look of one connector.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ConnectorSpec {
    pub color: Color,
    pub roughness: f32,
    pub accent: bool,
}

impl ConnectorSpec {
    pub fn new(color: Color, roughness: f32) -> Self {
        ConnectorSpec {
            color,
            roughness,
            accent: false,
        }
    }

    pub fn accent(color: Color, roughness: f32) -> Self {
        ConnectorSpec {
            color,
            roughness,
            accent: true,
        }
    }
}

/// Which groups of the palette are spawned.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PaletteLayout {
    /// Three dark, three light and three accent connectors
    #[default]
    Full,
    /// Only the three dark connectors
    DarkOnly,
}

/// The spec list for the given accent. Order and length only depend on `layout`.
pub fn shuffle(accent_index: usize, layout: PaletteLayout) -> Vec<ConnectorSpec> {
    let mut specs = vec![
        ConnectorSpec::new(dark(), GLOSSY),
        ConnectorSpec::new(dark(), MATTE),
        ConnectorSpec::new(dark(), MATTE),
    ];

    if layout == PaletteLayout::Full {
        let accent = accent_color(accent_index);
        specs.extend([
            ConnectorSpec::new(light(), GLOSSY),
            ConnectorSpec::new(light(), MATTE),
            ConnectorSpec::new(light(), GLOSSY),
            ConnectorSpec::accent(accent, GLOSSY),
            ConnectorSpec::accent(accent, MATTE),
            ConnectorSpec::accent(accent, GLOSSY),
        ]);
    }

    specs
}

/// A layout plus a fixed permutation of its entries.
///
/// The permutation is chosen once; re-deriving for another accent keeps every
/// slot at the same palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    layout: PaletteLayout,
    order: Vec<usize>,
}

impl Palette {
    pub fn new(layout: PaletteLayout) -> Self {
        let len = shuffle(0, layout).len();
        Palette {
            layout,
            order: (0..len).collect(),
        }
    }

    pub fn permuted<R: Rng>(layout: PaletteLayout, rng: &mut R) -> Self {
        let mut palette = Self::new(layout);
        palette.order.shuffle(rng);
        palette
    }

    pub fn layout(&self) -> PaletteLayout {
        self.layout
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn derive(&self, accent_index: usize) -> Vec<ConnectorSpec> {
        let specs = shuffle(accent_index, self.layout);
        self.order.iter().map(|&i| specs[i]).collect()
    }
}

/// The active accent. Advancing wraps around the palette.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct AccentCycle {
    index: usize,
}

impl AccentCycle {
    pub fn new(index: usize) -> Self {
        AccentCycle {
            index: index % PALETTE_SIZE,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn color(&self) -> Color {
        accent_color(self.index)
    }

    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % PALETTE_SIZE;
        self.index
    }
}
