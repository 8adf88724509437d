//! Sparse generation transition.
//!
//! Only the 3x3 neighborhood of every live cell is ever visited, so the cost of a
//! step depends on the population and not on how far apart the cells are.

use std::collections::HashMap;
use std::hash::{BuildHasherDefault, DefaultHasher};

use rand::Rng;

use super::{Fate, LiveCell, Position};

/// Per-position aggregate built fresh for every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborInfo<'a> {
    pub position: Position,
    /// Cell sitting on this position right now, if any
    pub occupant: Option<&'a LiveCell>,
    /// Live cells in the surrounding 8 positions, in visiting order
    pub neighbors: Vec<&'a LiveCell>,
}

impl<'a> NeighborInfo<'a> {
    fn new(position: Position) -> Self {
        Self {
            position,
            occupant: None,
            neighbors: Vec::with_capacity(8),
        }
    }

    pub fn fate(&self) -> Fate {
        Fate::of(self.occupant.is_some(), self.neighbors.len())
    }
}

/// Unseeded hasher: identical input is always iterated in the same order, which
/// keeps birth colors reproducible for a seeded rng.
pub type NeighborMap<'a> = HashMap<Position, NeighborInfo<'a>, BuildHasherDefault<DefaultHasher>>;

/// Result of one transition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    pub cells: Vec<LiveCell>,
    pub survivors: usize,
    pub births: usize,
}

impl Outcome {
    /// Cells of the previous generation that were not carried over
    pub fn deaths(&self, previous_population: usize) -> usize {
        previous_population.saturating_sub(self.survivors)
    }
}

/// Visit the 9-neighborhood of every live cell and collect what each position sees.
/// Positions with no live cell within distance 1 never get an entry.
pub fn aggregate(cells: &[LiveCell]) -> NeighborMap<'_> {
    let mut map = NeighborMap::with_capacity_and_hasher(cells.len() * 4, Default::default());

    for cell in cells {
        for (offset, position) in cell.position().neighborhood() {
            let info = map
                .entry(position)
                .or_insert_with(|| NeighborInfo::new(position));
            if offset == (0, 0) {
                info.occupant = Some(cell);
            } else {
                info.neighbors.push(cell);
            }
        }
    }

    map
}

/// Apply B3/S23 to the aggregate. Survivors are copied unchanged; a newborn takes the
/// color of one of its three parents, picked uniformly at random.
pub fn transition<R: Rng + ?Sized>(cells: &[LiveCell], rng: &mut R) -> Outcome {
    let map = aggregate(cells);
    let mut outcome = Outcome {
        cells: Vec::with_capacity(cells.len()),
        ..Default::default()
    };

    for info in map.values() {
        match (info.fate(), info.occupant) {
            (Fate::Survive, Some(cell)) => {
                outcome.cells.push(*cell);
                outcome.survivors += 1;
            }
            (Fate::Birth, _) => {
                let parent = info.neighbors[rng.random_range(0..info.neighbors.len())];
                outcome
                    .cells
                    .push(LiveCell::new(info.position.x, info.position.y, parent.color));
                outcome.births += 1;
            }
            _ => {}
        }
    }

    outcome
}

/// Next generation of `cells`. Order of the returned cells carries no meaning.
pub fn next_generation<R: Rng + ?Sized>(cells: &[LiveCell], rng: &mut R) -> Vec<LiveCell> {
    transition(cells, rng).cells
}
