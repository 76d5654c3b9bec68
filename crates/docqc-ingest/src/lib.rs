pub mod cell_grid;
pub mod deliverables;
pub mod discovery;
pub mod error;

pub use cell_grid::{
    classify_cell, read_cell_grid, read_cell_grid_from_reader, write_cell_grid,
    write_cell_grid_to_writer,
};
pub use deliverables::{
    DeliverableColumn, DeliverableListOptions, read_deliverables, read_deliverables_from_reader,
};
pub use discovery::{DiscoveryOptions, extract_filenames, list_submitted_files};
pub use error::{IngestError, Result};
