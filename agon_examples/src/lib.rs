pub mod setup;
pub mod options;
pub mod dataset;
