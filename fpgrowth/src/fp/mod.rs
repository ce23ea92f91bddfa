pub mod growth;
pub mod utils;


pub use growth::{build_conditional_tree, build_fp_tree, count_items, project_transaction, ItemCounts};
pub use growth::{find_frequent_itemsets, find_with_config, FrequentItemsets, Itemset};
pub use growth::{FPNode, FPTree, NodeId, PrefixPath, PrefixPaths, RouteNodes, TreeId};
pub use utils::{transactions_from_matrix, FrequentLevel, ItemsetStorage};
