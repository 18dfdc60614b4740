pub mod category;
pub mod item;
pub mod list;
pub mod config;

pub use category::*;
pub use item::*;
pub use list::*;
pub use config::*;
