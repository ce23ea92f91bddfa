/// Flat storage of itemsets: one item buffer addressed by `(start, len)` offsets.
#[derive(Debug, Clone)]
pub struct ItemsetStorage<I> {
    items: Vec<I>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<Option<usize>>,
}

/// All mined itemsets of a single size.
#[derive(Debug, Clone)]
pub struct FrequentLevel<I> {
    pub(crate) storage: ItemsetStorage<I>,
    pub itemset_size: usize,
}

impl<I> Default for ItemsetStorage<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> ItemsetStorage<I> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            offsets: Vec::new(),
            supports: Vec::new(),
        }
    }

    pub fn add_itemset(&mut self, items: Vec<I>, support: Option<usize>) -> usize {
        let start = self.items.len();
        let len = items.len();

        self.items.extend(items);
        self.offsets.push((start, len));
        self.supports.push(support);

        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[I] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn support(&self, idx: usize) -> Option<usize> {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl<I> FrequentLevel<I> {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: ItemsetStorage::new(),
            itemset_size,
        }
    }

    pub fn add_itemset(&mut self, items: Vec<I>, support: Option<usize>) -> usize {
        debug_assert_eq!(items.len(), self.itemset_size);
        self.storage.add_itemset(items, support)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &[I] {
        self.storage.get_itemset(idx)
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[I]> {
        (0..self.storage.len()).map(move |idx| self.get_itemset(idx))
    }

    /// Itemsets paired with their support, if it was recorded.
    pub fn iter(&self) -> impl Iterator<Item = (&[I], Option<usize>)> {
        (0..self.storage.len()).map(move |idx| (self.get_itemset(idx), self.storage.support(idx)))
    }
}
