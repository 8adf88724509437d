/// What happens to a single position in the next generation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Fate {
    /// Occupied and kept as is
    Survive,
    /// Occupied and removed
    Die,
    /// Empty and gets a new cell
    Birth,
    /// Empty and stays empty
    StayDead,
}

impl Fate {
    /// Conway's rules (B3/S23):
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn of(occupied: bool, neighbors: usize) -> Self {
        match (occupied, neighbors) {
            (true, 2 | 3) => Fate::Survive,
            (true, _) => Fate::Die,
            (false, 3) => Fate::Birth,
            (false, _) => Fate::StayDead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Fate::of(true, 0), Fate::Die);
        assert_eq!(Fate::of(true, 1), Fate::Die);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Fate::of(true, 2), Fate::Survive);
        assert_eq!(Fate::of(true, 3), Fate::Survive);
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert_eq!(Fate::of(true, n), Fate::Die);
        }
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(Fate::of(false, 3), Fate::Birth);
    }

    #[test]
    fn test_empty_stays_dead() {
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(Fate::of(false, n), Fate::StayDead);
        }
    }
}
