pub mod builder;
pub mod mining;
pub mod tree;

pub use builder::{build_conditional_tree, build_fp_tree, count_items, project_transaction, ItemCounts};
pub use mining::{find_frequent_itemsets, find_with_config, FrequentItemsets, Itemset};
pub use tree::{FPNode, FPTree, NodeId, PrefixPath, PrefixPaths, RouteNodes, TreeId};
