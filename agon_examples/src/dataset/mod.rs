//! Tiny in-memory table with named columns and value substitution on them.
mod table;
mod value_map;
mod survey;

pub use table::*;
pub use value_map::*;
pub use survey::*;
