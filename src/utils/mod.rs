pub mod environment;
pub mod logger;

pub use environment::*;
pub use logger::*;
