use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use agon_core::error::DataError;
use crate::dataset::ValueMap;

/// Single value in table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell{
    Int(i64),
    Text(String),
    Missing,
}

impl Cell{
    pub fn text(s: impl Into<String>) -> Self{
        Cell::Text(s.into())
    }
}

impl From<i64> for Cell{
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<&str> for Cell{
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl Display for Cell{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self{
            Cell::Int(i) => write!(f, "{i}"),
            Cell::Text(s) => write!(f, "{s}"),
            Cell::Missing => write!(f, "NaN"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column{
    pub name: String,
    pub cells: Vec<Cell>,
}

/// Columns of equal length, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table{
    columns: Vec<Column>,
}

impl Table{
    pub fn new() -> Self{
        Self::default()
    }

    /// Appends column, it must have the same length as columns already present.
    pub fn with_column(mut self, name: &str, cells: Vec<Cell>) -> Result<Self, DataError>{
        if self.column(name).is_some(){
            return Err(DataError::DuplicateColumn { name: name.to_string() });
        }
        if let Some(first) = self.columns.first(){
            if first.cells.len() != cells.len(){
                return Err(DataError::LengthMismatch {
                    left: first.cells.len(),
                    right: cells.len(),
                    context: format!("adding column \"{name}\""),
                });
            }
        }
        self.columns.push(Column{name: name.to_string(), cells});
        Ok(self)
    }

    pub fn number_of_rows(&self) -> usize{
        self.columns.first().map(|c| c.cells.len()).unwrap_or(0)
    }

    pub fn column_names(&self) -> Vec<&str>{
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&[Cell]>{
        self.columns.iter()
            .find(|c| c.name == name)
            .map(|c| c.cells.as_slice())
    }

    /// Cells of column `name`, editable in place. Length stays fixed.
    pub fn column_mut(&mut self, name: &str) -> Result<&mut [Cell], DataError>{
        self.columns.iter_mut()
            .find(|c| c.name == name)
            .map(|c| c.cells.as_mut_slice())
            .ok_or_else(|| DataError::MissingColumn { name: name.to_string() })
    }

    /// Replaces every value of column `name` in place, returns number of changed cells.
    pub fn map_column(&mut self, name: &str, map: &ValueMap) -> Result<usize, DataError>{
        let cells = self.column_mut(name)?;
        let mut changed = 0;
        for cell in cells.iter_mut(){
            let mapped = map.apply(cell);
            if mapped != *cell{
                *cell = mapped;
                changed += 1;
            }
        }
        log::debug!("Column \"{name}\": {changed} of {} values changed", cells.len());
        Ok(changed)
    }
}

impl Display for Table{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<Vec<String>> = self.columns.iter()
            .map(|c| c.cells.iter().map(|cell| cell.to_string()).collect())
            .collect();
        let widths: Vec<usize> = self.columns.iter().zip(rendered.iter())
            .map(|(c, cells)| cells.iter().map(|s| s.len()).chain([c.name.len()]).max().unwrap_or(0))
            .collect();
        let header = self.columns.iter().zip(widths.iter())
            .map(|(c, w)| format!("{:>w$}", c.name, w = *w))
            .collect::<Vec<_>>()
            .join("  ");
        write!(f, "{}", header.trim_end())?;
        for row in 0..self.number_of_rows(){
            let line = rendered.iter().zip(widths.iter())
                .map(|(cells, w)| format!("{:>w$}", cells[row], w = *w))
                .collect::<Vec<_>>()
                .join("  ");
            write!(f, "\n{}", line.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests{
    use agon_core::error::DataError;
    use crate::dataset::{Cell, Table, ValueMap};

    #[test]
    fn reject_column_of_different_length(){
        let r = Table::new()
            .with_column("a", vec![Cell::Int(1), Cell::Int(2)]).unwrap()
            .with_column("b", vec![Cell::Missing]);
        assert!(matches!(r, Err(DataError::LengthMismatch { left: 2, right: 1, .. })));
    }

    #[test]
    fn reject_duplicate_column(){
        let r = Table::new()
            .with_column("a", vec![Cell::Int(1)]).unwrap()
            .with_column("a", vec![Cell::Int(2)]);
        assert_eq!(r, Err(DataError::DuplicateColumn { name: "a".into() }));
    }

    #[test]
    fn display_aligns_columns(){
        let table = Table::new()
            .with_column("id", vec![Cell::Int(1), Cell::Int(22)]).unwrap()
            .with_column("label", vec!["x".into(), Cell::Missing]).unwrap();
        assert_eq!(format!("{table}"), "id  label\n 1      x\n22    NaN");
    }

    #[test]
    fn edit_in_place_keeps_table_rectangular(){
        let mut table = Table::new()
            .with_column("a", vec![Cell::Int(1)]).unwrap()
            .with_column("b", vec![Cell::Int(2)]).unwrap();
        let cells = table.column_mut("a").unwrap();
        assert_eq!(cells.len(), 1);
        cells[0] = Cell::text("one");
        assert_eq!(format!("{table}"), "  a  b\none  2");
        assert_eq!(table.number_of_rows(), 1);
        assert_eq!(table.column_mut("c"), Err(DataError::MissingColumn { name: "c".into() }));
    }

    #[test]
    fn map_column_counts_changes(){
        let mut table = Table::new()
            .with_column("supp", vec![Cell::Int(0), Cell::Int(1), Cell::Int(0)]).unwrap();
        let map = ValueMap::replace([(Cell::Int(1), Cell::text("Supplemental"))]);
        assert_eq!(table.map_column("supp", &map), Ok(1));
        assert_eq!(table.column("supp").unwrap()[1], Cell::text("Supplemental"));
        assert!(matches!(table.map_column("time", &map), Err(DataError::MissingColumn { .. })));
    }

    #[test]
    fn json_uses_plain_values(){
        let table = Table::new()
            .with_column("supp", vec![Cell::text("Standard"), Cell::Missing, Cell::Int(3)]).unwrap();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"columns":[{"name":"supp","cells":["Standard",null,3]}]}"#);
        let back: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
