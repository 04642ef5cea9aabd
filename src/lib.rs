pub mod config;
pub mod providers;
pub mod render;
pub mod segments;
pub mod themes;
pub mod utils;

pub use config::*;
pub use providers::*;
pub use render::*;
pub use segments::*;
pub use themes::*;
pub use utils::*;
