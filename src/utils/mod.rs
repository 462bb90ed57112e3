pub mod path;
pub mod table;
pub mod time;

pub use path::expand_tilde;
pub use time::format_duration;
