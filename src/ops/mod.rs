pub mod store;
pub mod task_ops;

pub use store::Store;
pub use task_ops::{Action, reduce};
