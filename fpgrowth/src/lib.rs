//! Frequent itemset mining with FP-growth.
//!
//! Transactions are counted once, projected onto their frequent items and
//! folded into an [`FPTree`]. Mining then walks each item's route, builds the
//! item's conditional tree from its prefix paths and descends into it, emitting
//! every itemset whose support reaches the threshold.
//!
//! ```
//! let transactions = vec![vec!["a", "b"], vec!["a", "c"], vec!["a", "b"]];
//! let found: Vec<_> = fpgrowth::find_frequent_itemsets(&transactions, 2, true)
//!     .unwrap()
//!     .collect();
//! assert_eq!(found.len(), 3);
//! ```

pub mod config;
pub mod error;
pub mod fp;

pub use config::{GrowthConfig, ItemOrder};
pub use error::{FpError, Result};
pub use fp::{build_conditional_tree, build_fp_tree, find_frequent_itemsets, find_with_config};
pub use fp::{FPNode, FPTree, FrequentItemsets, FrequentLevel, Itemset, NodeId, PrefixPath};
