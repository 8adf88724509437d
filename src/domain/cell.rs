use super::Rgb;

/// Integer coordinate on the unbounded plane
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by (dx, dy); `None` past the edge of the i32 plane
    pub fn offset(self, dx: i32, dy: i32) -> Option<Position> {
        Some(Position::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// The 3x3 block centred on this position, paired with the offset used to reach it.
    /// The centre itself comes out with offset (0, 0). Positions past `i32::MIN`/`i32::MAX`
    /// are left out.
    pub fn neighborhood(self) -> impl Iterator<Item = ((i32, i32), Position)> {
        (-1..=1)
            .flat_map(|dx| (-1..=1).map(move |dy| (dx, dy)))
            .filter_map(move |(dx, dy)| Some(((dx, dy), self.offset(dx, dy)?)))
    }

    /// Chebyshev distance, i.e. king moves
    pub fn distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

/// LiveCell is one occupied position on the plane together with its color.
/// Dead positions are never stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LiveCell {
    pub x: i32,
    pub y: i32,
    pub color: Rgb,
}

impl LiveCell {
    pub const fn new(x: i32, y: i32, color: Rgb) -> Self {
        Self { x, y, color }
    }

    pub const fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub const fn is_at(&self, x: i32, y: i32) -> bool {
        self.x == x && self.y == y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighborhood_has_nine_distinct_positions() {
        let mut all: Vec<_> = Position::new(4, -2).neighborhood().map(|(_, p)| p).collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 9);
        assert!(all.iter().all(|p| p.distance(Position::new(4, -2)) <= 1));
    }

    #[test]
    fn test_neighborhood_centre_has_zero_offset() {
        let centre: Vec<_> = Position::new(0, 0)
            .neighborhood()
            .filter(|&(offset, _)| offset == (0, 0))
            .collect();
        assert_eq!(centre, vec![((0, 0), Position::new(0, 0))]);
    }

    #[test]
    fn test_neighborhood_clipped_at_plane_edge() {
        let corner: Vec<_> = Position::new(i32::MAX, i32::MIN).neighborhood().collect();
        // only dx in {-1, 0} and dy in {0, 1} stay on the plane
        assert_eq!(corner.len(), 4);
        assert!(corner.contains(&((0, 0), Position::new(i32::MAX, i32::MIN))));
        assert!(corner.contains(&((-1, 1), Position::new(i32::MAX - 1, i32::MIN + 1))));
    }

    #[test]
    fn test_offset() {
        assert_eq!(Position::new(1, 2).offset(-1, 1), Some(Position::new(0, 3)));
        assert_eq!(Position::new(i32::MAX, 0).offset(1, 0), None);
        assert_eq!(Position::new(0, i32::MIN).offset(0, -1), None);
    }

    #[test]
    fn test_is_at() {
        let cell = LiveCell::new(3, 5, Rgb::WHITE);
        assert!(cell.is_at(3, 5));
        assert!(!cell.is_at(5, 3));
        assert_eq!(cell.position(), Position::new(3, 5));
    }
}
