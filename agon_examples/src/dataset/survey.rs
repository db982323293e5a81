use agon_core::error::DataError;
use crate::dataset::{Cell, Table, ValueMap};

/// `supp` code: `0` standard, `1` supplemental.
pub fn supp_map() -> ValueMap{
    ValueMap::partial([
        (Cell::Int(0), Cell::text("Standard")),
        (Cell::Int(1), Cell::text("Supplemental")),
    ])
}

/// `store_type` code `1..=4` to store category.
pub fn store_type_map() -> ValueMap{
    ValueMap::partial([
        (Cell::Int(1), Cell::text("Large Supermarket")),
        (Cell::Int(2), Cell::text("Small Supermarket")),
        (Cell::Int(3), Cell::text("Pharmacy")),
        (Cell::Int(4), Cell::text("Gas Station")),
    ])
}

/// Moves `MAR2015` period to `MAR2016`, other periods stay.
pub fn time_map() -> ValueMap{
    ValueMap::replace([
        (Cell::text("MAR2015"), Cell::text("MAR2016")),
    ])
}

/// Translates coded columns `supp`, `store_type` and `time` in place.
/// Codes of `supp` and `store_type` outside their known domain become missing.
pub fn remap_survey(table: &mut Table) -> Result<(), DataError>{
    table.map_column("supp", &supp_map())?;
    table.map_column("store_type", &store_type_map())?;
    table.map_column("time", &time_map())?;
    Ok(())
}

/// Small sample of store survey used by `update_dataframe`.
pub fn demo_table() -> Result<Table, DataError>{
    Table::new()
        .with_column("store_id", (101..=106).map(Cell::Int).collect())?
        .with_column("supp", [0, 1, 0, 1, 1, 0].into_iter().map(Cell::Int).collect())?
        .with_column("store_type", [1, 2, 3, 4, 2, 1].into_iter().map(Cell::Int).collect())?
        .with_column("time", ["MAR2015", "MAR2015", "JAN2017", "MAR2016", "MAR2015", "JAN2017"]
            .into_iter().map(Cell::from).collect())
}

#[cfg(test)]
mod tests{
    use agon_core::error::DataError;
    use crate::dataset::{demo_table, remap_survey, store_type_map, supp_map, time_map, Cell, Table};

    #[test]
    fn code_maps(){
        assert_eq!(supp_map().apply(&Cell::Int(0)), Cell::text("Standard"));
        assert_eq!(supp_map().apply(&Cell::Int(1)), Cell::text("Supplemental"));
        assert_eq!(store_type_map().apply(&Cell::Int(4)), Cell::text("Gas Station"));
        assert_eq!(time_map().apply(&Cell::text("MAR2015")), Cell::text("MAR2016"));
        assert_eq!(time_map().apply(&Cell::text("JAN2017")), Cell::text("JAN2017"));
    }

    #[test]
    fn unknown_codes_become_missing(){
        assert_eq!(supp_map().apply(&Cell::Int(2)), Cell::Missing);
        assert_eq!(store_type_map().apply(&Cell::Int(0)), Cell::Missing);
        assert_eq!(store_type_map().apply(&Cell::text("1")), Cell::Missing);
    }

    #[test]
    fn remap_demo_table(){
        let mut table = demo_table().unwrap();
        remap_survey(&mut table).unwrap();
        assert_eq!(table.column("supp").unwrap()[0], Cell::text("Standard"));
        assert_eq!(table.column("store_type").unwrap()[2], Cell::text("Pharmacy"));
        assert_eq!(table.column("time").unwrap(), &[
            Cell::text("MAR2016"), Cell::text("MAR2016"), Cell::text("JAN2017"),
            Cell::text("MAR2016"), Cell::text("MAR2016"), Cell::text("JAN2017"),
        ]);
        assert_eq!(table.column("store_id").unwrap()[5], Cell::Int(106));
    }

    #[test]
    fn missing_column_is_error(){
        let mut table = Table::new().with_column("supp", vec![Cell::Int(0)]).unwrap();
        assert_eq!(remap_survey(&mut table), Err(DataError::MissingColumn { name: "store_type".into() }));
        assert_eq!(table.column("supp").unwrap()[0], Cell::text("Standard"));
    }
}
