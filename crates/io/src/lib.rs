// Tabular serialization and export drivers

pub mod export;
pub mod tabular;

pub use export::{
    export_as, export_extraction_results, export_extraction_results_to_excel, extraction_rows,
    ExportArtifact, ExportError, ExportFormat,
};
pub use tabular::{header_union, to_csv, RowMap};
