pub mod export;

pub use export::{DataExporter, ExportSnapshot};
