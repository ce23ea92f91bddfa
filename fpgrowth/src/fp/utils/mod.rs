pub mod matrix;
pub mod storage;

pub use matrix::transactions_from_matrix;
pub use storage::{FrequentLevel, ItemsetStorage};
