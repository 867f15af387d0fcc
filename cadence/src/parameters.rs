pub mod enums;
pub mod float;
pub mod formatter;
pub mod state;
pub mod step_size;
