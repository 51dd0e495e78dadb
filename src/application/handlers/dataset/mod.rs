//! Dataset handlers - intake and validation of ratings tables.

mod prepare_dataset;

pub use prepare_dataset::{
    DatasetSource, PrepareDatasetCommand, PrepareDatasetHandler, PreparedDataset,
};
