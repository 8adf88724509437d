use log::debug;
use rand::Rng;

use super::{LiveCell, Rgb, transition};
use crate::error::RegistryError;

/// CellRegistry holds the live cells of the current generation.
///
/// The registry does not check inserts made through [`CellRegistry::add`] or
/// [`CellRegistry::extend`]; callers keep positions unique themselves, or go
/// through [`CellRegistry::paint`] / [`CellRegistry::try_add`] which do.
#[derive(Clone, Debug, PartialEq)]
pub struct CellRegistry {
    cells: Vec<LiveCell>,
    generation: u64,
}

impl CellRegistry {
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            generation: 1,
        }
    }

    /// Build a registry at generation 1 from existing cells
    pub fn from_cells(cells: Vec<LiveCell>) -> Self {
        Self { cells, generation: 1 }
    }

    pub fn cells(&self) -> &[LiveCell] {
        &self.cells
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Replace the cells with the next generation and bump the counter.
    /// Always counts, even when nothing changes or everything is dead.
    pub fn advance_generation<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let previous = self.cells.len();
        let outcome = transition::transition(&self.cells, rng);
        debug!(
            "generation {} -> {}: {} cells ({} born, {} died)",
            self.generation,
            self.generation + 1,
            outcome.cells.len(),
            outcome.births,
            outcome.deaths(previous)
        );
        self.cells = outcome.cells;
        self.generation += 1;
    }

    /// Drop every cell and start over at generation 1
    pub fn reset(&mut self) {
        self.cells.clear();
        self.generation = 1;
    }

    /// Insert without checking the position
    pub fn add(&mut self, cell: LiveCell) {
        self.cells.push(cell);
    }

    /// Insert, refusing positions that are already taken
    pub fn try_add(&mut self, cell: LiveCell) -> Result<(), RegistryError> {
        if self.cell_at(cell.x, cell.y).is_some() {
            return Err(RegistryError::Occupied { x: cell.x, y: cell.y });
        }
        self.cells.push(cell);
        Ok(())
    }

    pub fn extend(&mut self, cells: impl IntoIterator<Item = LiveCell>) {
        self.cells.extend(cells);
    }

    pub fn cell_at(&self, x: i32, y: i32) -> Option<&LiveCell> {
        self.cells.iter().find(|c| c.is_at(x, y))
    }

    /// Remove whatever lives on (x, y)
    pub fn remove_at(&mut self, x: i32, y: i32) -> Option<LiveCell> {
        let idx = self.cells.iter().position(|c| c.is_at(x, y))?;
        Some(self.cells.swap_remove(idx))
    }

    /// Put a cell of `color` on (x, y), replacing any current occupant
    pub fn paint(&mut self, x: i32, y: i32, color: Rgb) {
        self.remove_at(x, y);
        self.cells.push(LiveCell::new(x, y, color));
    }
}

impl Default for CellRegistry {
    fn default() -> Self {
        Self::new()
    }
}
