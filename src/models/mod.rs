pub mod cell;
pub mod field;
pub mod record;
pub mod table;

pub use cell::Cell;
pub use field::Field;
pub use record::{OUTPUT_HEADERS, OutputRecord, PauseValue};
pub use table::InputTable;
