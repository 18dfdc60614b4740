pub mod host;
pub mod reconciler;
pub mod reorder;

pub use host::{CollectingHost, GroceryHost, NoopHost};
pub use reconciler::{DisplayView, ListReconciler, ReconcileReport, SectionView};
pub use reorder::ReorderSession;
