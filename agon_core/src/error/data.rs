use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataError{
    #[error("Data should have the same length, but left is {left:} and right is {right:}. {context:}")]
    LengthMismatch{
        left: usize,
        right: usize,
        context: String,
    },
    #[error("Column \"{name:}\" does not exist")]
    MissingColumn{
        name: String,
    },
    #[error("Column \"{name:}\" already exists")]
    DuplicateColumn{
        name: String,
    }
}
