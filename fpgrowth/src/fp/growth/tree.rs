use crate::error::{FpError, Result};
use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(0);

const ROOT: usize = 0;

/// Identity of one tree; every node handle carries the id of its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeId(u64);

impl TreeId {
    fn next() -> Self {
        TreeId(NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to a node in a specific tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    tree: TreeId,
    index: usize,
}

impl NodeId {
    pub fn tree(&self) -> TreeId {
        self.tree
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// Root-to-node sequence of node handles, root excluded.
pub type PrefixPath = Vec<NodeId>;

#[derive(Debug, Clone)]
pub struct FPNode<I> {
    tree: TreeId,
    item: Option<I>,
    count: Option<usize>,
    parent: Option<usize>,
    neighbor: Option<usize>,
    children: FxHashMap<I, usize>,
}

impl<I> FPNode<I> {
    fn new_root(tree: TreeId) -> Self {
        Self {
            tree,
            item: None,
            count: None,
            parent: None,
            neighbor: None,
            children: FxHashMap::default(),
        }
    }

    fn new_item(tree: TreeId, item: I, count: usize, parent: usize) -> Self {
        Self {
            tree,
            item: Some(item),
            count: Some(count),
            parent: Some(parent),
            neighbor: None,
            children: FxHashMap::default(),
        }
    }

    /// The item this node represents; `None` only for the root.
    pub fn item(&self) -> Option<&I> {
        self.item.as_ref()
    }

    /// Occurrence count of this path position.
    ///
    /// The root carries no count, asking for it is an `InvalidOperation`.
    pub fn count(&self) -> Result<usize> {
        self.count.ok_or_else(|| {
            FpError::InvalidOperation("root nodes have no associated count".to_string())
        })
    }

    pub fn is_root(&self) -> bool {
        self.item.is_none() && self.count.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent.map(|index| NodeId { tree: self.tree, index })
    }

    /// Next instance of the same item in creation order.
    pub fn neighbor(&self) -> Option<NodeId> {
        self.neighbor.map(|index| NodeId { tree: self.tree, index })
    }

    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children
            .values()
            .map(move |&index| NodeId { tree: self.tree, index })
    }

    fn increment(&mut self, by: usize) -> Result<()> {
        match self.count.as_mut() {
            Some(count) => {
                *count += by;
                Ok(())
            }
            None => Err(FpError::InvalidOperation(
                "cannot increment the root's count".to_string(),
            )),
        }
    }

    // Item nodes always carry a count; the root never sits on a route.
    fn weight(&self) -> usize {
        self.count.unwrap_or(0)
    }
}

/// Chain through every instance of one item, in creation order.
#[derive(Debug, Clone)]
struct Route<I> {
    item: I,
    head: usize,
    tail: usize,
    len: usize,
}

/// Prefix tree over transactions, stored as an index arena.
///
/// `nodes[0]` is the root. Children are owned through the per-node child map;
/// `parent` and `neighbor` are plain indices into the same arena, so no link
/// can reach a node of another tree. Routes are kept in creation order, which
/// fixes the iteration order of [`FPTree::items`].
#[derive(Debug)]
pub struct FPTree<I> {
    id: TreeId,
    nodes: Vec<FPNode<I>>,
    routes: Vec<Route<I>>,
    route_index: FxHashMap<I, usize>,
}

impl<I: Eq + Hash + Clone> Default for FPTree<I> {
    fn default() -> Self {
        Self::new()
    }
}

// A clone is a distinct tree, so it gets its own id.
impl<I: Clone> Clone for FPTree<I> {
    fn clone(&self) -> Self {
        let id = TreeId::next();
        let nodes = self
            .nodes
            .iter()
            .map(|node| FPNode {
                tree: id,
                ..node.clone()
            })
            .collect();
        Self {
            id,
            nodes,
            routes: self.routes.clone(),
            route_index: self.route_index.clone(),
        }
    }
}

impl<I: Eq + Hash + Clone> FPTree<I> {
    pub fn new() -> Self {
        let id = TreeId::next();
        Self {
            id,
            nodes: vec![FPNode::new_root(id)],
            routes: Vec::new(),
            route_index: FxHashMap::default(),
        }
    }

    pub fn id(&self) -> TreeId {
        self.id
    }

    pub fn root(&self) -> NodeId {
        self.handle(ROOT)
    }

    /// Number of item nodes, root excluded.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn node(&self, id: NodeId) -> Result<&FPNode<I>> {
        let index = self.resolve(id)?;
        Ok(&self.nodes[index])
    }

    pub fn child(&self, parent: NodeId, item: &I) -> Result<Option<NodeId>> {
        let index = self.resolve(parent)?;
        Ok(self.nodes[index]
            .children
            .get(item)
            .map(|&child| self.handle(child)))
    }

    /// Attach a new `item` child under `parent` and register it on the
    /// item's route. An existing child for `item` is returned unchanged.
    pub fn attach(&mut self, parent: NodeId, item: I, count: usize) -> Result<NodeId> {
        let parent_index = self.resolve(parent)?;
        if let Some(&existing) = self.nodes[parent_index].children.get(&item) {
            return Ok(self.handle(existing));
        }
        let index = self.add_child(parent_index, item, count);
        Ok(self.handle(index))
    }

    pub fn increment(&mut self, id: NodeId, by: usize) -> Result<()> {
        let index = self.resolve(id)?;
        self.nodes[index].increment(by)
    }

    /// Insert one transaction with weight 1.
    pub fn insert<T>(&mut self, transaction: T)
    where
        T: IntoIterator<Item = I>,
    {
        self.insert_with_count(transaction, 1);
    }

    /// Insert one transaction observed `count` times.
    pub fn insert_with_count<T>(&mut self, transaction: T, count: usize)
    where
        T: IntoIterator<Item = I>,
    {
        let mut current_index = ROOT;

        for item in transaction {
            if let Some(&child_index) = self.nodes[current_index].children.get(&item) {
                self.add_count(child_index, count);
                current_index = child_index;
            } else {
                current_index = self.add_child(current_index, item, count);
            }
        }
    }

    /// Every instance of `item`, following the route from head to tail.
    pub fn nodes(&self, item: &I) -> RouteNodes<'_, I> {
        RouteNodes {
            tree: self,
            next: self.route_of(item).map(|route| self.routes[route].head),
        }
    }

    pub fn route_len(&self, item: &I) -> usize {
        self.route_of(item).map_or(0, |route| self.routes[route].len)
    }

    /// Distinct items in the order their first node was created.
    pub fn items(&self) -> impl Iterator<Item = &I> {
        self.routes.iter().map(|route| &route.item)
    }

    /// Sum of counts over every instance of `item`.
    pub fn support(&self, item: &I) -> usize {
        self.route_of(item).map_or(0, |route| self.route_support(route))
    }

    /// Lazily yields the root-to-node path of every instance of `item`.
    pub fn prefix_paths(&self, item: &I) -> PrefixPaths<'_, I> {
        PrefixPaths {
            tree: self,
            next: self.route_of(item).map(|route| self.routes[route].head),
        }
    }

    pub(crate) fn resolve(&self, id: NodeId) -> Result<usize> {
        if id.tree != self.id {
            return Err(FpError::InvalidOperation(
                "node belongs to another tree".to_string(),
            ));
        }
        if id.index >= self.nodes.len() {
            return Err(FpError::InvalidOperation(format!(
                "node index {} out of bounds",
                id.index
            )));
        }
        Ok(id.index)
    }

    pub(crate) fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub(crate) fn route_item(&self, route: usize) -> &I {
        &self.routes[route].item
    }

    pub(crate) fn route_support(&self, route: usize) -> usize {
        self.route_indices(route)
            .map(|index| self.nodes[index].weight())
            .sum()
    }

    pub(crate) fn route_of(&self, item: &I) -> Option<usize> {
        self.route_index.get(item).copied()
    }

    pub(crate) fn route_indices(&self, route: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(self.routes[route].head), move |&index| {
            self.nodes[index].neighbor
        })
    }

    /// Arena indices of one instance's root-to-node path, root excluded.
    pub(crate) fn path_to(&self, index: usize) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = Some(index);

        while let Some(i) = current {
            if i == ROOT {
                break;
            }
            path.push(i);
            current = self.nodes[i].parent;
        }

        path.reverse();
        path
    }

    pub(crate) fn item_at(&self, index: usize) -> Option<&I> {
        self.nodes[index].item.as_ref()
    }

    pub(crate) fn weight_at(&self, index: usize) -> usize {
        self.nodes[index].weight()
    }

    pub(crate) fn parent_at(&self, index: usize) -> Option<usize> {
        self.nodes[index].parent
    }

    pub(crate) fn child_at(&self, parent: usize, item: &I) -> Option<usize> {
        self.nodes[parent].children.get(item).copied()
    }

    pub(crate) fn add_count(&mut self, index: usize, by: usize) {
        if let Some(count) = self.nodes[index].count.as_mut() {
            *count += by;
        }
    }

    pub(crate) fn add_child(&mut self, parent: usize, item: I, count: usize) -> usize {
        let index = self.nodes.len();
        self.nodes
            .push(FPNode::new_item(self.id, item.clone(), count, parent));
        self.nodes[parent].children.insert(item.clone(), index);
        self.update_route(item, index);
        index
    }

    fn update_route(&mut self, item: I, index: usize) {
        match self.route_index.get(&item) {
            Some(&route) => {
                let tail = self.routes[route].tail;
                self.nodes[tail].neighbor = Some(index);
                self.routes[route].tail = index;
                self.routes[route].len += 1;
            }
            None => {
                self.route_index.insert(item.clone(), self.routes.len());
                self.routes.push(Route {
                    item,
                    head: index,
                    tail: index,
                    len: 1,
                });
            }
        }
    }

    fn handle(&self, index: usize) -> NodeId {
        NodeId {
            tree: self.id,
            index,
        }
    }
}

pub struct RouteNodes<'a, I> {
    tree: &'a FPTree<I>,
    next: Option<usize>,
}

impl<'a, I: Eq + Hash + Clone> Iterator for RouteNodes<'a, I> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        self.next = self.tree.nodes[index].neighbor;
        Some(self.tree.handle(index))
    }
}

pub struct PrefixPaths<'a, I> {
    tree: &'a FPTree<I>,
    next: Option<usize>,
}

impl<'a, I: Eq + Hash + Clone> Iterator for PrefixPaths<'a, I> {
    type Item = PrefixPath;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        self.next = self.tree.nodes[index].neighbor;
        Some(
            self.tree
                .path_to(index)
                .into_iter()
                .map(|i| self.tree.handle(i))
                .collect(),
        )
    }
}
