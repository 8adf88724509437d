use rand::Rng;

use super::{CellRegistry, LiveCell, Position, Rgb};

/// Generators used to seed an empty plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prefill {
    /// Noise in a 40x40 square around the origin
    AllRandom,
    /// Long vertical lines, every other column
    VerticalLines,
    /// Concentric square outlines
    Squares,
}

impl Prefill {
    pub fn all() -> Vec<Prefill> {
        vec![Prefill::AllRandom, Prefill::VerticalLines, Prefill::Squares]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Prefill::AllRandom => "Random",
            Prefill::VerticalLines => "Lines",
            Prefill::Squares => "Squares",
        }
    }

    /// Pick one of the generators uniformly
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let all = Self::all();
        all[rng.random_range(0..all.len())]
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<LiveCell> {
        match self {
            Prefill::AllRandom => all_random(rng),
            Prefill::VerticalLines => vertical_lines(rng),
            Prefill::Squares => squares(rng),
        }
    }

    /// Add the generated cells to `registry`. Meant for an empty registry,
    /// generated positions are not checked against existing ones.
    pub fn fill<R: Rng + ?Sized>(&self, registry: &mut CellRegistry, rng: &mut R) {
        registry.extend(self.generate(rng));
    }
}

/// Every position in [-20, 20)² alive with probability 0.3, each in its own color
pub fn all_random<R: Rng + ?Sized>(rng: &mut R) -> Vec<LiveCell> {
    let mut cells = Vec::new();
    for x in -20..20 {
        for y in -20..20 {
            if rng.random_bool(0.3) {
                cells.push(LiveCell::new(x, y, Rgb::random(rng)));
            }
        }
    }
    cells
}

/// Columns at even x in [-40, 40), each kept with probability 0.8.
/// All columns share a random extra length `a` in 0..10 and span [-20 - a, 20 + 2a).
pub fn vertical_lines<R: Rng + ?Sized>(rng: &mut R) -> Vec<LiveCell> {
    let extra: i32 = rng.random_range(0..10);
    let mut cells = Vec::new();
    for x in (-40..40).step_by(2) {
        if rng.random_bool(0.8) {
            for y in (-20 - extra)..(20 + extra * 2) {
                cells.push(LiveCell::new(x, y, Rgb::random(rng)));
            }
        }
    }
    cells
}

/// Square outlines centred on the origin. Sides start at an even length in 2..=40
/// and grow by 16 while below 80; each square has one color.
pub fn squares<R: Rng + ?Sized>(rng: &mut R) -> Vec<LiveCell> {
    const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

    let start = rng.random_range(0..20) * 2 + 2;
    let mut cells = Vec::new();
    for side in (start..80).step_by(16) {
        let color = Rgb::random(rng);
        let (mut x, mut y) = (-side / 2, -side / 2);
        for (dx, dy) in DIRECTIONS {
            for _ in 0..side {
                x += dx;
                y += dy;
                cells.push(LiveCell::new(x, y, color));
            }
        }
    }
    cells
}

/// Fixed arrangement of live cells, offsets taken from its top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    pub fn width(&self) -> i32 {
        self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0)
    }

    pub fn height(&self) -> i32 {
        self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0)
    }

    /// Stamp the pattern with its top-left corner at (x, y), overwriting occupants.
    /// Cells that would land past the i32 plane are dropped.
    pub fn place_on(&self, registry: &mut CellRegistry, x: i32, y: i32, color: Rgb) {
        let corner = Position::new(x, y);
        for &(dx, dy) in self.cells {
            if let Some(p) = corner.offset(dx, dy) {
                registry.paint(p.x, p.y, color);
            }
        }
    }

    /// Same as `place_on` but centred on (x, y)
    pub fn place_centered(&self, registry: &mut CellRegistry, x: i32, y: i32, color: Rgb) {
        let left = x.saturating_sub(self.width() / 2);
        let top = y.saturating_sub(self.height() / 2);
        self.place_on(registry, left, top, color);
    }
}

/// Classic patterns that can be dropped onto the running plane
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Glider,
    Blinker,
    Lwss,
    GliderGun,
    RPentomino,
    Acorn,
    Block,
}

impl Preset {
    pub fn all() -> Vec<Preset> {
        vec![
            Preset::Glider,
            Preset::Blinker,
            Preset::Lwss,
            Preset::GliderGun,
            Preset::RPentomino,
            Preset::Acorn,
            Preset::Block,
        ]
    }

    pub fn name(self) -> &'static str {
        self.pattern().name
    }

    pub const fn pattern(self) -> Pattern {
        match self {
            // period 4, travels diagonally
            Preset::Glider => Pattern {
                name: "Glider",
                cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
            },
            Preset::Blinker => Pattern {
                name: "Blinker",
                cells: &[(0, 0), (1, 0), (2, 0)],
            },
            Preset::Lwss => Pattern {
                name: "LWSS",
                cells: &[(1, 0), (4, 0), (0, 1), (0, 2), (4, 2), (0, 3), (1, 3), (2, 3), (3, 3)],
            },
            // Gosper gun, one glider every 30 generations
            Preset::GliderGun => Pattern {
                name: "Glider Gun",
                cells: &[
                    (0, 4), (0, 5), (1, 4), (1, 5),
                    (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8), (13, 2), (13, 8),
                    (14, 5), (15, 3), (15, 7), (16, 4), (16, 5), (16, 6), (17, 5),
                    (20, 2), (20, 3), (20, 4), (21, 2), (21, 3), (21, 4), (22, 1), (22, 5),
                    (24, 0), (24, 1), (24, 5), (24, 6),
                    (34, 2), (34, 3), (35, 2), (35, 3),
                ],
            },
            // settles after 1103 generations
            Preset::RPentomino => Pattern {
                name: "R-pentomino",
                cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
            },
            // settles after 5206 generations
            Preset::Acorn => Pattern {
                name: "Acorn",
                cells: &[(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)],
            },
            Preset::Block => Pattern {
                name: "Block",
                cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    fn unique(cells: &[LiveCell]) -> bool {
        cells.iter().map(|c| (c.x, c.y)).collect::<HashSet<_>>().len() == cells.len()
    }

    #[test]
    fn test_all_random_bounds() {
        let cells = all_random(&mut StdRng::seed_from_u64(1));
        assert!(!cells.is_empty());
        assert!(unique(&cells));
        assert!(cells.iter().all(|c| (-20..20).contains(&c.x) && (-20..20).contains(&c.y)));
    }

    #[test]
    fn test_vertical_lines_on_even_columns() {
        for seed in 0..10 {
            let cells = vertical_lines(&mut StdRng::seed_from_u64(seed));
            assert!(unique(&cells));
            assert!(cells.iter().all(|c| c.x % 2 == 0 && (-40..40).contains(&c.x)));
            assert!(cells.iter().all(|c| (-29..38).contains(&c.y)));
        }
    }

    #[test]
    fn test_squares_are_closed_outlines() {
        for seed in 0..10 {
            let cells = squares(&mut StdRng::seed_from_u64(seed));
            assert!(!cells.is_empty());
            assert!(unique(&cells));
            // every square contributes 4 * side cells, sides step by 16
            assert_eq!(cells.len() % 4, 0);
            assert!(cells.iter().all(|c| c.x.abs() <= 40 && c.y.abs() <= 40));
        }
    }

    #[test]
    fn test_squares_share_one_color_per_outline() {
        let cells = squares(&mut StdRng::seed_from_u64(4));
        // the walk starts one step right of the top-left corner (-side / 2, -side / 2)
        let side = -2 * (cells[0].x - 1);
        let first = &cells[..(side as usize * 4)];
        assert!(first.iter().all(|c| c.color == first[0].color));
    }

    #[test]
    fn test_fill_adds_generated_cells() {
        let mut registry = CellRegistry::new();
        Prefill::AllRandom.fill(&mut registry, &mut StdRng::seed_from_u64(2));
        let expected = all_random(&mut StdRng::seed_from_u64(2));
        assert_eq!(registry.cells(), expected.as_slice());
    }

    #[test]
    fn test_random_prefill_is_listed() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..20 {
            assert!(Prefill::all().contains(&Prefill::random(&mut rng)));
        }
    }

    #[test]
    fn test_place_does_not_duplicate() {
        let mut registry = CellRegistry::new();
        let block = Preset::Block.pattern();
        block.place_on(&mut registry, 3, 3, Rgb::WHITE);
        block.place_on(&mut registry, 4, 3, Rgb::WHITE);
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_place_centered() {
        let mut registry = CellRegistry::new();
        Preset::Blinker.pattern().place_centered(&mut registry, 0, 0, Rgb::WHITE);
        let xs: HashSet<_> = registry.cells().iter().map(|c| c.x).collect();
        assert_eq!(xs, HashSet::from([-1, 0, 1]));
    }

    #[test]
    fn test_pattern_dimensions() {
        let gun = Preset::GliderGun.pattern();
        assert_eq!((gun.width(), gun.height()), (36, 9));
    }

    #[test]
    fn test_preset_cells_are_unique() {
        for preset in Preset::all() {
            let cells = preset.pattern().cells;
            let distinct: HashSet<_> = cells.iter().collect();
            assert_eq!(distinct.len(), cells.len(), "{}", preset.name());
        }
    }

    #[test]
    fn test_place_clips_at_plane_edge() {
        let mut registry = CellRegistry::new();
        Preset::Block.pattern().place_on(&mut registry, i32::MAX, i32::MAX, Rgb::WHITE);
        assert_eq!(registry.cells(), &[LiveCell::new(i32::MAX, i32::MAX, Rgb::WHITE)]);

        // centring near the edge shifts inward instead of wrapping
        let mut registry = CellRegistry::new();
        Preset::Blinker.pattern().place_centered(&mut registry, i32::MIN, 0, Rgb::WHITE);
        assert_eq!(registry.len(), 3);
        assert!(registry.cells().iter().all(|c| c.x >= i32::MIN && c.x <= i32::MIN + 2));
    }
}
