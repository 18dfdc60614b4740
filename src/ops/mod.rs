pub mod checked;
pub mod group;
pub mod quantity;

pub use checked::sort_by_checked;
pub use group::{Section, group_by_category};
pub use quantity::aggregate;
