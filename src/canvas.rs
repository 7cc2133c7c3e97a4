//! The `canvas` module puts the modules of a QR code onto a grid: the
//! functional patterns, the format and version info, the data with one of
//! the eight masks, and the mask selection by penalty score.

use crate::types::{Color, EcLevel, Version};

/// The color of a module with its drawing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    /// The module is not yet drawn.
    Empty,

    /// The module belongs to a functional pattern or the format/version
    /// info, and must not be masked.
    Masked(Color),

    /// The module carries data and is subject to masking.
    Unmasked(Color),
}

impl Module {
    /// The color of the module, where an empty module counts as light.
    pub fn color(self) -> Color {
        match self {
            Module::Empty => Color::Light,
            Module::Masked(color) | Module::Unmasked(color) => color,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Module::Empty
    }

    /// Applies the mask to the module. Data modules flip when `flip` is
    /// set, functional modules never change.
    fn mask(self, flip: bool) -> Self {
        match (self, flip) {
            (Module::Empty, true) => Module::Masked(Color::Dark),
            (Module::Empty, false) => Module::Masked(Color::Light),
            (Module::Unmasked(color), true) => Module::Masked(!color),
            (Module::Unmasked(color), false) | (Module::Masked(color), _) => Module::Masked(color),
        }
    }
}

/// The canvas of a QR code symbol, without the quiet zone.
#[derive(Clone)]
pub struct Canvas {
    width: i16,
    version: Version,
    ec_level: EcLevel,
    mask: Option<MaskPattern>,
    modules: Vec<Module>,
}

impl Canvas {
    /// Constructs a new canvas big enough for the version, with all modules
    /// empty.
    pub fn new(version: Version, ec_level: EcLevel) -> Self {
        let width = version.width();
        Self {
            width,
            version,
            ec_level,
            mask: None,
            modules: vec![Module::Empty; (width * width) as usize],
        }
    }

    /// The number of modules per side.
    pub fn width(&self) -> i16 {
        self.width
    }

    /// The mask applied to the canvas, if any.
    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    /// Converts a coordinate pair into the module index. Negative
    /// coordinates index from the opposite edge, e.g. `(8, -8)` is 8 modules
    /// right of and 8 modules above the bottom-left corner.
    fn coords_to_index(&self, x: i16, y: i16) -> usize {
        debug_assert!(-self.width <= x && x < self.width);
        debug_assert!(-self.width <= y && y < self.width);
        let x = if x < 0 { x + self.width } else { x };
        let y = if y < 0 { y + self.width } else { y };
        (y * self.width + x) as usize
    }

    /// Obtains a module at the given coordinates.
    pub fn get(&self, x: i16, y: i16) -> Module {
        self.modules[self.coords_to_index(x, y)]
    }

    fn get_mut(&mut self, x: i16, y: i16) -> &mut Module {
        let index = self.coords_to_index(x, y);
        &mut self.modules[index]
    }

    /// Sets a functional (unmaskable) module at the given coordinates.
    pub fn put(&mut self, x: i16, y: i16, color: Color) {
        *self.get_mut(x, y) = Module::Masked(color);
    }

    /// Converts the canvas into the colors of its modules, row by row.
    pub fn into_colors(self) -> Vec<Color> {
        self.modules.into_iter().map(Module::color).collect()
    }
}

/// Finder patterns

impl Canvas {
    /// Draws a 7x7 finder pattern with its separator around the given
    /// center; parts that stick out of the canvas are clipped.
    fn draw_finder_pattern_at(&mut self, x: i16, y: i16) {
        for j in -4..=4 {
            for i in -4..=4 {
                let (xx, yy) = (x + i, y + j);
                if xx < 0 || xx >= self.width || yy < 0 || yy >= self.width {
                    continue;
                }
                let color = match i16::max(i.abs(), j.abs()) {
                    2 | 4 => Color::Light,
                    _ => Color::Dark,
                };
                self.put(xx, yy, color);
            }
        }
    }

    /// Draws the finder patterns at the three corners.
    fn draw_finder_patterns(&mut self) {
        self.draw_finder_pattern_at(3, 3);
        self.draw_finder_pattern_at(self.width - 4, 3);
        self.draw_finder_pattern_at(3, self.width - 4);
    }
}

/// Alignment patterns

impl Canvas {
    /// Draws a 5x5 alignment pattern around the given center, unless the
    /// center is already covered by another pattern.
    fn draw_alignment_pattern_at(&mut self, x: i16, y: i16) {
        if !self.get(x, y).is_empty() {
            return;
        }
        for j in -2i16..=2 {
            for i in -2i16..=2 {
                let color = match i16::max(i.abs(), j.abs()) {
                    1 => Color::Light,
                    _ => Color::Dark,
                };
                self.put(x + i, y + j, color);
            }
        }
    }

    /// Draws the alignment patterns at the cartesian product of the
    /// version's center coordinates.
    fn draw_alignment_patterns(&mut self) {
        let centres = ALIGNMENT_PATTERN_CENTRES[usize::from(self.version.number() - 1)];
        for &x in centres {
            for &y in centres {
                self.draw_alignment_pattern_at(x, y);
            }
        }
    }
}

/// Timing patterns

impl Canvas {
    /// Draws the two timing patterns between the finder patterns, dark at
    /// even coordinates.
    fn draw_timing_patterns(&mut self) {
        for i in 8..self.width - 8 {
            let color = if i % 2 == 0 { Color::Dark } else { Color::Light };
            self.put(i, 6, color);
            self.put(6, i, color);
        }
    }
}

/// Format & version info

impl Canvas {
    /// Draws the high `bits` bits of `number`, most significant bit first,
    /// at the given sequence of coordinates.
    fn draw_number(
        &mut self,
        number: u32,
        bits: u32,
        on_color: Color,
        off_color: Color,
        coords: &[(i16, i16)],
    ) {
        let mut mask = 1u32 << (bits - 1);
        for &(x, y) in coords {
            let color = if number & mask == 0 { off_color } else { on_color };
            self.put(x, y, color);
            mask >>= 1;
        }
    }

    /// Reserves the format info area so that data placement skips it. The
    /// real values are drawn when a mask is applied.
    fn draw_reserved_format_info_patterns(&mut self) {
        self.draw_number(0, 15, Color::Light, Color::Light, &FORMAT_INFO_COORDS_MAIN);
        self.draw_number(0, 15, Color::Light, Color::Light, &FORMAT_INFO_COORDS_SIDE);
        // The module above the bottom-left finder pattern is always dark.
        self.put(8, -8, Color::Dark);
    }

    /// Draws the two copies of the format info for the given mask pattern.
    fn draw_format_info_patterns(&mut self, pattern: MaskPattern) {
        let format_info =
            u32::from(FORMAT_INFOS[self.ec_level as usize][pattern as usize]);
        self.draw_number(format_info, 15, Color::Dark, Color::Light, &FORMAT_INFO_COORDS_MAIN);
        self.draw_number(format_info, 15, Color::Dark, Color::Light, &FORMAT_INFO_COORDS_SIDE);
        self.put(8, -8, Color::Dark);
    }

    /// Draws the two version info blocks. Versions below 7 carry none.
    fn draw_version_info_patterns(&mut self) {
        if self.version.number() < 7 {
            return;
        }
        let version_info = VERSION_INFOS[usize::from(self.version.number() - 7)];
        self.draw_number(version_info, 18, Color::Dark, Color::Light, &VERSION_INFO_COORDS_BL);
        self.draw_number(version_info, 18, Color::Dark, Color::Light, &VERSION_INFO_COORDS_TR);
    }
}

impl Canvas {
    /// Draws everything that does not depend on the data: finder, alignment
    /// and timing patterns, the reserved format info area and the version
    /// info.
    pub fn draw_all_functional_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_alignment_patterns();
        self.draw_timing_patterns();
        self.draw_reserved_format_info_patterns();
        self.draw_version_info_patterns();
    }
}

/// Iterates over the data region in the zig-zag order: two-column pairs
/// from the right edge, the right column first, running up and down in
/// turns and skipping the vertical timing column.
struct DataModuleIter {
    x: i16,
    y: i16,
    width: i16,
    x_offset: i16,
    going_up: bool,
}

impl DataModuleIter {
    fn new(width: i16) -> Self {
        Self {
            x: width - 2,
            y: width - 1,
            width,
            x_offset: 1,
            going_up: true,
        }
    }
}

impl Iterator for DataModuleIter {
    type Item = (i16, i16);

    fn next(&mut self) -> Option<(i16, i16)> {
        if self.x < 0 {
            return None;
        }
        let coord = (self.x + self.x_offset, self.y);
        if self.x_offset == 1 {
            self.x_offset = 0;
        } else {
            self.x_offset = 1;
            if self.going_up {
                if self.y > 0 {
                    self.y -= 1;
                } else {
                    self.going_up = false;
                    self.x -= 2;
                }
            } else if self.y < self.width - 1 {
                self.y += 1;
            } else {
                self.going_up = true;
                self.x -= 2;
            }
        }
        if self.x == 5 {
            // The column pair would straddle the vertical timing pattern.
            self.x -= 1;
        }
        Some(coord)
    }
}

/// Data placement

impl Canvas {
    /// Draws the interleaved data and error correction codewords into the
    /// data region, then fills the remainder bits with zeroes. On return no
    /// module is empty.
    pub fn draw_data(&mut self, data: &[u8], ec_data: &[u8]) {
        let mut is_dark = data
            .iter()
            .chain(ec_data)
            .flat_map(|byte| (0..8).rev().map(move |i| (byte >> i) & 1 != 0))
            .chain(core::iter::repeat(false));
        for (x, y) in DataModuleIter::new(self.width) {
            if self.get(x, y).is_empty() {
                let color = if is_dark.next().unwrap_or(false) {
                    Color::Dark
                } else {
                    Color::Light
                };
                *self.get_mut(x, y) = Module::Unmasked(color);
            }
        }
        debug_assert!(
            self.modules.iter().all(|module| !module.is_empty()),
            "data region not completely filled"
        );
    }
}

/// The eight QR code mask patterns, named after their shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskPattern {
    /// Pattern 000: `(x + y) % 2 == 0`.
    Checkerboard = 0,

    /// Pattern 001: `y % 2 == 0`.
    HorizontalLines = 1,

    /// Pattern 010: `x % 3 == 0`.
    VerticalLines = 2,

    /// Pattern 011: `(x + y) % 3 == 0`.
    DiagonalLines = 3,

    /// Pattern 100: `((y/2) + (x/3)) % 2 == 0`.
    LargeCheckerboard = 4,

    /// Pattern 101: `(x*y)%2 + (x*y)%3 == 0`.
    Fields = 5,

    /// Pattern 110: `((x*y)%2 + (x*y)%3) % 2 == 0`.
    Diamonds = 6,

    /// Pattern 111: `((x+y)%2 + (x*y)%3) % 2 == 0`.
    Meadow = 7,
}

static ALL_PATTERNS: [MaskPattern; 8] = [
    MaskPattern::Checkerboard,
    MaskPattern::HorizontalLines,
    MaskPattern::VerticalLines,
    MaskPattern::DiagonalLines,
    MaskPattern::LargeCheckerboard,
    MaskPattern::Fields,
    MaskPattern::Diamonds,
    MaskPattern::Meadow,
];

mod mask_functions {
    pub fn checkerboard(x: i16, y: i16) -> bool {
        (x + y) % 2 == 0
    }
    pub fn horizontal_lines(_: i16, y: i16) -> bool {
        y % 2 == 0
    }
    pub fn vertical_lines(x: i16, _: i16) -> bool {
        x % 3 == 0
    }
    pub fn diagonal_lines(x: i16, y: i16) -> bool {
        (x + y) % 3 == 0
    }
    pub fn large_checkerboard(x: i16, y: i16) -> bool {
        ((y / 2) + (x / 3)) % 2 == 0
    }
    pub fn fields(x: i16, y: i16) -> bool {
        (x * y) % 2 + (x * y) % 3 == 0
    }
    pub fn diamonds(x: i16, y: i16) -> bool {
        ((x * y) % 2 + (x * y) % 3) % 2 == 0
    }
    pub fn meadow(x: i16, y: i16) -> bool {
        ((x + y) % 2 + (x * y) % 3) % 2 == 0
    }
}

impl Canvas {
    /// Applies the mask to the data modules and draws the matching format
    /// info.
    pub fn apply_mask(&mut self, pattern: MaskPattern) {
        let mask_fn = match pattern {
            MaskPattern::Checkerboard => mask_functions::checkerboard,
            MaskPattern::HorizontalLines => mask_functions::horizontal_lines,
            MaskPattern::VerticalLines => mask_functions::vertical_lines,
            MaskPattern::DiagonalLines => mask_functions::diagonal_lines,
            MaskPattern::LargeCheckerboard => mask_functions::large_checkerboard,
            MaskPattern::Fields => mask_functions::fields,
            MaskPattern::Diamonds => mask_functions::diamonds,
            MaskPattern::Meadow => mask_functions::meadow,
        };
        for y in 0..self.width {
            for x in 0..self.width {
                let module = self.get(x, y);
                *self.get_mut(x, y) = module.mask(mask_fn(x, y));
            }
        }
        self.mask = Some(pattern);
        self.draw_format_info_patterns(pattern);
    }
}

/// Penalty scores

impl Canvas {
    /// Penalty of runs of the same color along one direction. A run scores
    /// 4 when it reaches 6 modules and 1 for every further module.
    fn compute_adjacent_penalty_score(&self, is_horizontal: bool) -> u32 {
        let mut penalty = 0;
        for i in 0..self.width {
            let mut last_color = if is_horizontal {
                self.get(0, i)
            } else {
                self.get(i, 0)
            }
            .color();
            let mut count = 1u32;
            for j in 1..self.width {
                let color = if is_horizontal {
                    self.get(j, i)
                } else {
                    self.get(i, j)
                }
                .color();
                if color != last_color {
                    last_color = color;
                    count = 1;
                } else {
                    count += 1;
                    if count == 6 {
                        penalty += 4;
                    } else if count > 6 {
                        penalty += 1;
                    }
                }
            }
        }
        penalty
    }

    /// Penalty of 2x2 blocks of the same color. Blocks overlap.
    fn compute_block_penalty_score(&self) -> u32 {
        let mut penalty = 0;
        for y in 1..self.width {
            for x in 1..self.width {
                let color = self.get(x, y).color();
                if color == self.get(x - 1, y).color()
                    && color == self.get(x, y - 1).color()
                    && color == self.get(x - 1, y - 1).color()
                {
                    penalty += 3;
                }
            }
        }
        penalty
    }

    /// Penalty of finder-like patterns along one direction: the 11 modules
    /// `10111010000` in either orientation score 40, and so does a line
    /// ending in the bare `1011101`.
    fn compute_finder_penalty_score(&self, is_horizontal: bool) -> u32 {
        let mut penalty = 0;
        for i in 0..self.width {
            let mut bits = 0u16;
            for j in 0..self.width {
                bits <<= 1;
                let color = if is_horizontal {
                    self.get(j, i)
                } else {
                    self.get(i, j)
                }
                .color();
                if color == Color::Dark {
                    bits |= 1;
                }
                match bits & 0x7ff {
                    0x05d | 0x5d0 => {
                        penalty += 40;
                        bits = 0xff;
                    }
                    _ => {
                        if j == self.width - 1 && bits & 0x7f == 0x5d {
                            penalty += 40;
                            bits = 0xff;
                        }
                    }
                }
            }
        }
        penalty
    }

    /// Penalty of an unbalanced dark module ratio.
    fn compute_balance_penalty_score(&self) -> u32 {
        let total_modules = self.modules.len();
        let dark_modules = self
            .modules
            .iter()
            .filter(|module| module.color() == Color::Dark)
            .count();
        let deviation = (total_modules / 2).abs_diff(dark_modules);
        (10 * (deviation / (total_modules / 20))) as u32
    }

    /// The total penalty score of the canvas.
    pub fn compute_total_penalty_scores(&self) -> u32 {
        let adjacent = self.compute_adjacent_penalty_score(true)
            + self.compute_adjacent_penalty_score(false);
        let block = self.compute_block_penalty_score();
        let finder =
            self.compute_finder_penalty_score(true) + self.compute_finder_penalty_score(false);
        let balance = self.compute_balance_penalty_score();
        adjacent + block + finder + balance
    }
}

impl Canvas {
    /// Applies every mask pattern and returns the canvas with the lowest
    /// total penalty score. Equal scores resolve to the lowest pattern
    /// number.
    pub fn apply_best_mask(&self) -> Self {
        ALL_PATTERNS
            .iter()
            .map(|pattern| {
                let mut candidate = self.clone();
                candidate.apply_mask(*pattern);
                candidate
            })
            .min_by_key(Self::compute_total_penalty_scores)
            .expect("at least one mask pattern")
    }
}

/// Alignment pattern center coordinates per version.
static ALIGNMENT_PATTERN_CENTRES: [&[i16]; 40] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

/// The 15-bit BCH-protected format info per error correction level
/// \[L, M, Q, H\] and mask pattern.
static FORMAT_INFOS: [[u16; 8]; 4] = [
    [0x77c4, 0x72f3, 0x7daa, 0x789d, 0x662f, 0x6318, 0x6c41, 0x6976],
    [0x5412, 0x5125, 0x5e7c, 0x5b4b, 0x45f9, 0x40ce, 0x4f97, 0x4aa0],
    [0x355f, 0x3068, 0x3f31, 0x3a06, 0x24b4, 0x2183, 0x2eda, 0x2bed],
    [0x1689, 0x13be, 0x1ce7, 0x19d0, 0x0762, 0x0255, 0x0d0c, 0x083b],
];

/// The 18-bit Golay-protected version info for versions 7 to 40.
static VERSION_INFOS: [u32; 34] = [
    0x07c94, 0x085bc, 0x09a99, 0x0a4d3, 0x0bbf6, 0x0c762, 0x0d847, 0x0e60d, 0x0f928, 0x10b78,
    0x1145d, 0x12a17, 0x13532, 0x149a6, 0x15683, 0x168c9, 0x177ec, 0x18ec4, 0x191e1, 0x1afab,
    0x1b08e, 0x1cc1a, 0x1d33f, 0x1ed75, 0x1f250, 0x209d5, 0x216f0, 0x228ba, 0x2379f, 0x24b0b,
    0x2542e, 0x26a64, 0x27541, 0x28c69,
];

/// Format info positions around the top-left finder pattern, most
/// significant bit first. The vertical timing column is skipped.
static FORMAT_INFO_COORDS_MAIN: [(i16, i16); 15] = [
    (0, 8),
    (1, 8),
    (2, 8),
    (3, 8),
    (4, 8),
    (5, 8),
    (7, 8),
    (8, 8),
    (8, 7),
    (8, 5),
    (8, 4),
    (8, 3),
    (8, 2),
    (8, 1),
    (8, 0),
];

/// Second format info copy along the bottom-left and top-right finder
/// patterns, most significant bit first.
static FORMAT_INFO_COORDS_SIDE: [(i16, i16); 15] = [
    (8, -1),
    (8, -2),
    (8, -3),
    (8, -4),
    (8, -5),
    (8, -6),
    (8, -7),
    (-8, 8),
    (-7, 8),
    (-6, 8),
    (-5, 8),
    (-4, 8),
    (-3, 8),
    (-2, 8),
    (-1, 8),
];

/// Version info positions next to the bottom-left finder pattern, most
/// significant bit first.
static VERSION_INFO_COORDS_BL: [(i16, i16); 18] = [
    (5, -9),
    (5, -10),
    (5, -11),
    (4, -9),
    (4, -10),
    (4, -11),
    (3, -9),
    (3, -10),
    (3, -11),
    (2, -9),
    (2, -10),
    (2, -11),
    (1, -9),
    (1, -10),
    (1, -11),
    (0, -9),
    (0, -10),
    (0, -11),
];

/// Version info positions next to the top-right finder pattern, most
/// significant bit first.
static VERSION_INFO_COORDS_TR: [(i16, i16); 18] = [
    (-9, 5),
    (-10, 5),
    (-11, 5),
    (-9, 4),
    (-10, 4),
    (-11, 4),
    (-9, 3),
    (-10, 3),
    (-11, 3),
    (-9, 2),
    (-10, 2),
    (-11, 2),
    (-9, 1),
    (-10, 1),
    (-11, 1),
    (-9, 0),
    (-10, 0),
    (-11, 0),
];

#[cfg(test)]
impl Canvas {
    fn to_debug_str(&self) -> String {
        let mut s = String::with_capacity((self.width * (self.width + 1)) as usize);
        for y in 0..self.width {
            s.push('\n');
            for x in 0..self.width {
                s.push(match self.get(x, y) {
                    Module::Empty => '?',
                    Module::Masked(Color::Light) => '.',
                    Module::Masked(Color::Dark) => '#',
                    Module::Unmasked(Color::Light) => '-',
                    Module::Unmasked(Color::Dark) => '*',
                });
            }
        }
        s
    }
}

#[cfg(test)]
mod draw_tests {
    use crate::canvas::{Canvas, Module};
    use crate::types::{Color, EcLevel, Version};

    #[test]
    fn test_draw_finder_patterns() {
        let mut c = Canvas::new(Version::new(1).unwrap(), EcLevel::L);
        c.draw_finder_patterns();
        assert_eq!(
            &*c.to_debug_str(),
            "\n\
             #######.?????.#######\n\
             #.....#.?????.#.....#\n\
             #.###.#.?????.#.###.#\n\
             #.###.#.?????.#.###.#\n\
             #.###.#.?????.#.###.#\n\
             #.....#.?????.#.....#\n\
             #######.?????.#######\n\
             ........?????........\n\
             ?????????????????????\n\
             ?????????????????????\n\
             ?????????????????????\n\
             ?????????????????????\n\
             ?????????????????????\n\
             ........?????????????\n\
             #######.?????????????\n\
             #.....#.?????????????\n\
             #.###.#.?????????????\n\
             #.###.#.?????????????\n\
             #.###.#.?????????????\n\
             #.....#.?????????????\n\
             #######.?????????????"
        );
    }

    #[test]
    fn test_draw_alignment_patterns() {
        let mut c = Canvas::new(Version::new(2).unwrap(), EcLevel::L);
        c.draw_finder_patterns();
        c.draw_alignment_patterns();
        // Only the (18, 18) center survives; the others collide with the
        // finder patterns.
        assert_eq!(
            &*c.to_debug_str(),
            "\n\
             #######.?????????.#######\n\
             #.....#.?????????.#.....#\n\
             #.###.#.?????????.#.###.#\n\
             #.###.#.?????????.#.###.#\n\
             #.###.#.?????????.#.###.#\n\
             #.....#.?????????.#.....#\n\
             #######.?????????.#######\n\
             ........?????????........\n\
             ?????????????????????????\n\
             ?????????????????????????\n\
             ?????????????????????????\n\
             ?????????????????????????\n\
             ?????????????????????????\n\
             ?????????????????????????\n\
             ?????????????????????????\n\
             ?????????????????????????\n\
             ????????????????#####????\n\
             ........????????#...#????\n\
             #######.????????#.#.#????\n\
             #.....#.????????#...#????\n\
             #.###.#.????????#####????\n\
             #.###.#.?????????????????\n\
             #.###.#.?????????????????\n\
             #.....#.?????????????????\n\
             #######.?????????????????"
        );
    }

    #[test]
    fn test_draw_timing_patterns() {
        let mut c = Canvas::new(Version::new(1).unwrap(), EcLevel::L);
        c.draw_timing_patterns();
        assert_eq!(c.get(8, 6), Module::Masked(Color::Dark));
        assert_eq!(c.get(9, 6), Module::Masked(Color::Light));
        assert_eq!(c.get(12, 6), Module::Masked(Color::Dark));
        assert_eq!(c.get(6, 8), Module::Masked(Color::Dark));
        assert_eq!(c.get(6, 11), Module::Masked(Color::Light));
        assert_eq!(c.get(7, 6), Module::Empty);
    }

    #[test]
    fn test_draw_format_info() {
        use crate::canvas::MaskPattern;

        // Format info for (L, pattern 0) is 0b111011111000100.
        let mut c = Canvas::new(Version::new(1).unwrap(), EcLevel::L);
        c.draw_format_info_patterns(MaskPattern::Checkerboard);
        assert_eq!(c.get(0, 8), Module::Masked(Color::Dark)); // bit 14
        assert_eq!(c.get(3, 8), Module::Masked(Color::Light)); // bit 11
        assert_eq!(c.get(8, 0), Module::Masked(Color::Light)); // bit 0
        assert_eq!(c.get(8, 2), Module::Masked(Color::Dark)); // bit 2
        assert_eq!(c.get(8, -1), Module::Masked(Color::Dark)); // bit 14
        assert_eq!(c.get(-1, 8), Module::Masked(Color::Light)); // bit 0
        // The fixed dark module.
        assert_eq!(c.get(8, -8), Module::Masked(Color::Dark));
    }

    #[test]
    fn test_draw_version_info() {
        // Version info for version 7 is 0b000111110010010100.
        let mut c = Canvas::new(Version::new(7).unwrap(), EcLevel::L);
        c.draw_version_info_patterns();
        assert_eq!(c.get(5, -9), Module::Masked(Color::Light)); // bit 17
        assert_eq!(c.get(4, -9), Module::Masked(Color::Dark)); // bit 14
        assert_eq!(c.get(0, -11), Module::Masked(Color::Light)); // bit 0
        assert_eq!(c.get(0, -9), Module::Masked(Color::Dark)); // bit 2
        // The transposed copy.
        assert_eq!(c.get(-9, 5), Module::Masked(Color::Light));
        assert_eq!(c.get(-9, 4), Module::Masked(Color::Dark));
        assert_eq!(c.get(-9, 0), Module::Masked(Color::Dark));
    }
}
