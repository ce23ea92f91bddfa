use super::tree::{FPTree, PrefixPath};
use crate::config::{GrowthConfig, ItemOrder};
use crate::error::{FpError, Result};
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::hash::Hash;
use tracing::debug;

/// Global item supports with the rank each item was first seen at.
///
/// Absent items read as zero; an entry is created on first increment.
#[derive(Debug, Clone)]
pub struct ItemCounts<I> {
    counts: FxHashMap<I, (usize, usize)>,
}

impl<I: Eq + Hash + Clone> Default for ItemCounts<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Eq + Hash + Clone> ItemCounts<I> {
    pub fn new() -> Self {
        Self {
            counts: FxHashMap::default(),
        }
    }

    pub fn increment(&mut self, item: &I) {
        let rank = self.counts.len();
        match self.counts.get_mut(item) {
            Some((count, _)) => *count += 1,
            None => {
                self.counts.insert(item.clone(), (1, rank));
            }
        }
    }

    pub fn get(&self, item: &I) -> usize {
        self.counts.get(item).map_or(0, |&(count, _)| count)
    }

    pub fn rank(&self, item: &I) -> Option<usize> {
        self.counts.get(item).map(|&(_, rank)| rank)
    }

    pub fn contains(&self, item: &I) -> bool {
        self.counts.contains_key(item)
    }

    pub fn retain_frequent(&mut self, min_support: usize) {
        self.counts.retain(|_, &mut (count, _)| count >= min_support);
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&I, usize)> {
        self.counts.iter().map(|(item, &(count, _))| (item, count))
    }
}

/// Count every item over all transactions and keep those reaching
/// `min_support`.
pub fn count_items<I, T>(transactions: &[T], min_support: usize) -> Result<ItemCounts<I>>
where
    I: Eq + Hash + Clone,
    T: AsRef<[I]>,
{
    if min_support == 0 {
        return Err(FpError::InvalidArgument(
            "minimum support must be a positive integer".to_string(),
        ));
    }

    let mut counts = ItemCounts::new();
    for transaction in transactions {
        for item in transaction.as_ref() {
            counts.increment(item);
        }
    }
    counts.retain_frequent(min_support);
    Ok(counts)
}

/// Keep the transaction's frequent items, ordered per `order`.
pub fn project_transaction<I>(transaction: &[I], counts: &ItemCounts<I>, order: ItemOrder) -> Vec<I>
where
    I: Eq + Hash + Clone,
{
    let mut projected: Vec<I> = transaction
        .iter()
        .filter(|item| counts.contains(item))
        .cloned()
        .collect();

    match order {
        ItemOrder::Encountered => {}
        ItemOrder::Support => projected.sort_by_key(|item| Reverse(counts.get(item))),
        ItemOrder::Ranked => {
            projected.sort_by_key(|item| (Reverse(counts.get(item)), counts.rank(item)))
        }
    }
    projected
}

/// Count, project and insert every transaction into a fresh tree.
pub fn build_fp_tree<I, T>(transactions: &[T], config: &GrowthConfig) -> Result<(FPTree<I>, ItemCounts<I>)>
where
    I: Eq + Hash + Clone,
    T: AsRef<[I]>,
{
    config.validate()?;
    let counts = count_items(transactions, config.min_support)?;
    let mut fp_tree = FPTree::new();

    for transaction in transactions {
        let tx_items = project_transaction(transaction.as_ref(), &counts, config.item_order);
        if !tx_items.is_empty() {
            fp_tree.insert(tx_items);
        }
    }

    debug!(
        transactions = transactions.len(),
        frequent_items = counts.len(),
        nodes = fp_tree.len(),
        "built fp-tree"
    );
    Ok((fp_tree, counts))
}

/// Build the conditional tree of the item that terminates every path.
///
/// All handles must belong to `source`. The condition item is the terminal
/// item of the first path.
pub fn build_conditional_tree<I, P>(source: &FPTree<I>, paths: P) -> Result<FPTree<I>>
where
    I: Eq + Hash + Clone,
    P: IntoIterator<Item = PrefixPath>,
{
    let mut builder = ConditionalBuilder::new(source);

    for path in paths {
        if path.is_empty() {
            return Err(FpError::InvalidArgument("prefix path is empty".to_string()));
        }
        let indices = path
            .iter()
            .map(|&id| source.resolve(id))
            .collect::<Result<Vec<_>>>()?;
        builder.add_path(&indices);
    }

    builder.finish().ok_or_else(|| {
        FpError::InvalidArgument("cannot build a conditional tree from no paths".to_string())
    })
}

/// Two-phase conditional build over arena indices of `source`.
///
/// `add_path` lays out structure only: condition-item nodes take the source
/// terminal's count, every other new node starts at zero. `finish` then
/// pushes each condition-item count up through its ancestors, once every
/// path is linked into the shared structure.
pub(crate) struct ConditionalBuilder<'a, I> {
    source: &'a FPTree<I>,
    tree: FPTree<I>,
    condition: Option<I>,
}

impl<'a, I: Eq + Hash + Clone> ConditionalBuilder<'a, I> {
    pub(crate) fn new(source: &'a FPTree<I>) -> Self {
        Self {
            source,
            tree: FPTree::new(),
            condition: None,
        }
    }

    pub(crate) fn add_path(&mut self, path: &[usize]) {
        let source = self.source;
        let Some(&terminal) = path.last() else {
            return;
        };
        if self.condition.is_none() {
            self.condition = source.item_at(terminal).cloned();
        }

        let mut point = 0;
        for &index in path {
            let Some(item) = source.item_at(index) else {
                continue;
            };
            point = match self.tree.child_at(point, item) {
                Some(next_point) => next_point,
                None => {
                    let count = if self.condition.as_ref() == Some(item) {
                        source.weight_at(index)
                    } else {
                        0
                    };
                    self.tree.add_child(point, item.clone(), count)
                }
            };
        }
    }

    pub(crate) fn finish(mut self) -> Option<FPTree<I>> {
        let condition = self.condition.take()?;
        let Some(route) = self.tree.route_of(&condition) else {
            return Some(self.tree);
        };

        let terminals: Vec<usize> = self.tree.route_indices(route).collect();
        for terminal in terminals {
            let count = self.tree.weight_at(terminal);
            let mut current = self.tree.parent_at(terminal);
            while let Some(index) = current {
                if index == 0 {
                    break;
                }
                self.tree.add_count(index, count);
                current = self.tree.parent_at(index);
            }
        }
        Some(self.tree)
    }
}
