use super::builder::{build_fp_tree, ConditionalBuilder};
use super::tree::FPTree;
use crate::config::GrowthConfig;
use crate::error::Result;
use crate::fp::utils::FrequentLevel;
use std::hash::Hash;
use std::iter::FusedIterator;
use tracing::trace;

/// One mined itemset: the condition item first, then the suffix it extends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itemset<I> {
    pub items: Vec<I>,
    /// Present only when the miner was asked to report supports.
    pub support: Option<usize>,
}

impl<I> Itemset<I> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<I> {
        self.items
    }
}

struct Frame<I> {
    tree: FPTree<I>,
    suffix: Vec<I>,
    next_route: usize,
}

// Conditional tree still owed for the itemset emitted last.
struct Expansion<I> {
    route: usize,
    suffix: Vec<I>,
}

/// Depth-first FP-growth over an explicit stack of conditional trees.
///
/// Each frame walks its tree's routes in creation order. An item whose
/// support reaches the threshold and that is not already in the frame's
/// suffix is emitted; its conditional tree is built only when the next
/// element is requested, so taking a prefix of the output does no extra
/// tree work.
pub struct FrequentItemsets<I> {
    min_support: usize,
    include_support: bool,
    stack: Vec<Frame<I>>,
    pending: Option<Expansion<I>>,
}

impl<I: Eq + Hash + Clone> FrequentItemsets<I> {
    pub fn new(tree: FPTree<I>, config: &GrowthConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            min_support: config.min_support,
            include_support: config.include_support,
            stack: vec![Frame {
                tree,
                suffix: Vec::new(),
                next_route: 0,
            }],
            pending: None,
        })
    }

    /// Drain the remaining itemsets into per-size levels.
    pub fn into_levels(self) -> Vec<FrequentLevel<I>> {
        let mut result: Vec<FrequentLevel<I>> = Vec::new();

        for itemset in self {
            let size = itemset.len();
            while result.len() < size {
                result.push(FrequentLevel::new(result.len() + 1));
            }
            if size > 0 {
                result[size - 1].add_itemset(itemset.items, itemset.support);
            }
        }
        result
    }

    fn expand(&mut self, expansion: Expansion<I>) {
        let Some(frame) = self.stack.last() else {
            return;
        };

        let mut builder = ConditionalBuilder::new(&frame.tree);
        for terminal in frame.tree.route_indices(expansion.route) {
            builder.add_path(&frame.tree.path_to(terminal));
        }

        if let Some(tree) = builder.finish() {
            trace!(
                depth = self.stack.len(),
                suffix_len = expansion.suffix.len(),
                nodes = tree.len(),
                "built conditional tree"
            );
            self.stack.push(Frame {
                tree,
                suffix: expansion.suffix,
                next_route: 0,
            });
        }
    }
}

impl<I: Eq + Hash + Clone> Iterator for FrequentItemsets<I> {
    type Item = Itemset<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(expansion) = self.pending.take() {
            self.expand(expansion);
        }

        loop {
            let frame = self.stack.last_mut()?;
            if frame.next_route >= frame.tree.route_count() {
                self.stack.pop();
                continue;
            }

            let route = frame.next_route;
            frame.next_route += 1;

            let item = frame.tree.route_item(route);
            let support = frame.tree.route_support(route);
            if support < self.min_support || frame.suffix.contains(item) {
                continue;
            }

            let mut found_set = Vec::with_capacity(frame.suffix.len() + 1);
            found_set.push(item.clone());
            found_set.extend(frame.suffix.iter().cloned());

            self.pending = Some(Expansion {
                route,
                suffix: found_set.clone(),
            });
            return Some(Itemset {
                items: found_set,
                support: self.include_support.then_some(support),
            });
        }
    }
}

impl<I: Eq + Hash + Clone> FusedIterator for FrequentItemsets<I> {}

/// Mine every itemset reaching `minimum_support` across `transactions`.
///
/// With `include_support` each itemset carries its support. Fails with
/// `InvalidArgument` when `minimum_support` is zero, before any tree is built.
pub fn find_frequent_itemsets<I, T>(
    transactions: &[T],
    minimum_support: usize,
    include_support: bool,
) -> Result<FrequentItemsets<I>>
where
    I: Eq + Hash + Clone,
    T: AsRef<[I]>,
{
    let config = GrowthConfig::new(minimum_support).with_support(include_support);
    find_with_config(transactions, &config)
}

pub fn find_with_config<I, T>(transactions: &[T], config: &GrowthConfig) -> Result<FrequentItemsets<I>>
where
    I: Eq + Hash + Clone,
    T: AsRef<[I]>,
{
    let (fp_tree, _) = build_fp_tree(transactions, config)?;
    FrequentItemsets::new(fp_tree, config)
}
