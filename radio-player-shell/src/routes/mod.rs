pub mod console;
pub mod log;
