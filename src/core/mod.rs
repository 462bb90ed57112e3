pub mod convert;
pub mod mapper;
pub mod normalizer;

pub use convert::ConvertLogic;
pub use mapper::{ColumnMapping, MappedColumn, map_columns};
pub use normalizer::{NormalizeOptions, normalize_row, normalize_rows};
