use std::collections::HashMap;
use crate::dataset::Cell;

/// What happens with values that have no entry in [`ValueMap`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Unmapped{
    /// Value is left as it is.
    Keep,
    /// Value becomes [`Cell::Missing`].
    Missing,
}

/// Lookup table translating a finite set of values.
/// ```
/// use agon_examples::dataset::{Cell, ValueMap};
/// let map = ValueMap::partial([(Cell::Int(0), Cell::text("Standard"))]);
/// assert_eq!(map.apply(&Cell::Int(0)), Cell::text("Standard"));
/// assert_eq!(map.apply(&Cell::Int(7)), Cell::Missing);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValueMap{
    entries: HashMap<Cell, Cell>,
    unmapped: Unmapped,
}

impl ValueMap{
    pub fn new(entries: impl IntoIterator<Item = (Cell, Cell)>, unmapped: Unmapped) -> Self{
        Self{
            entries: entries.into_iter().collect(),
            unmapped,
        }
    }

    /// Map defined only on its entries, every other value becomes missing.
    pub fn partial(entries: impl IntoIterator<Item = (Cell, Cell)>) -> Self{
        Self::new(entries, Unmapped::Missing)
    }

    /// Replacement of listed values, every other value is kept.
    pub fn replace(entries: impl IntoIterator<Item = (Cell, Cell)>) -> Self{
        Self::new(entries, Unmapped::Keep)
    }

    pub fn apply(&self, cell: &Cell) -> Cell{
        match (self.entries.get(cell), self.unmapped){
            (Some(mapped), _) => mapped.clone(),
            (None, Unmapped::Keep) => cell.clone(),
            (None, Unmapped::Missing) => Cell::Missing,
        }
    }
}
