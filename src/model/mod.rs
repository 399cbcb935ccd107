pub mod database_read;
pub mod database_write;
pub mod lifetime;
pub mod match_play;
pub mod types;
pub mod utils;

pub use database_read::*;
pub use database_write::*;
pub use lifetime::*;
pub use match_play::*;
pub use types::*;
pub use utils::*;
