use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::types::NodeId;

pub const ROOT: NodeId = 0;

/// One item occurrence on a transaction path.
///
/// `parent` and `next` are plain arena indices: the arena owns every node,
/// they are only used to walk up the tree and along the same-item chain.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// `None` only for the root.
    pub item: Option<T>,
    pub count: usize,
    pub parent: Option<NodeId>,
    pub children: HashMap<T, NodeId>,
    /// Next node elsewhere in the tree carrying the same item.
    pub next: Option<NodeId>,
}

impl<T> Node<T> {
    fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
            next: None,
        }
    }

    fn new_item(item: T, parent: NodeId) -> Self {
        Self {
            item: Some(item),
            count: 0,
            parent: Some(parent),
            children: HashMap::new(),
            next: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Chain {
    head: NodeId,
    tail: NodeId,
}

/// Prefix tree of transactions with a header table of same-item chains.
#[derive(Debug, Clone)]
pub struct PrefixTree<T> {
    nodes: Vec<Node<T>>,
    header_table: HashMap<T, Chain>,
    /// Items in chain-creation order; the header table only answers lookups.
    header_order: Vec<T>,
}

impl<T: Eq + Hash + Clone> Default for PrefixTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> PrefixTree<T> {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new_root()],
            header_table: HashMap::new(),
            header_order: Vec::new(),
        }
    }

    pub fn add_transaction(&mut self, transaction: &[T]) {
        self.add_weighted(transaction, 1);
    }

    /// Insert `transaction` as if it occurred `count` times.
    pub fn add_weighted(&mut self, transaction: &[T], count: usize) {
        if count == 0 {
            return;
        }

        let mut current_index = ROOT;
        for item in transaction {
            let child_index = match self.nodes[current_index].children.get(item) {
                Some(&child_index) => child_index,
                None => self.insert_child(current_index, item),
            };
            self.nodes[child_index].count += count;
            current_index = child_index;
        }
    }

    fn insert_child(&mut self, parent: NodeId, item: &T) -> NodeId {
        let new_index = self.nodes.len();
        self.nodes.push(Node::new_item(item.clone(), parent));
        self.nodes[parent].children.insert(item.clone(), new_index);

        match self.header_table.get_mut(item) {
            Some(chain) => {
                self.nodes[chain.tail].next = Some(new_index);
                chain.tail = new_index;
            }
            None => {
                self.header_table.insert(
                    item.clone(),
                    Chain {
                        head: new_index,
                        tail: new_index,
                    },
                );
                self.header_order.push(item.clone());
            }
        }

        new_index
    }

    /// Items whose summed chain count reaches `min_support_count`, in
    /// chain-creation order.
    pub fn get_frequent_items(&self, min_support_count: usize) -> Vec<(T, usize)> {
        self.header_order
            .iter()
            .map(|item| (item.clone(), self.item_support(item)))
            .filter(|&(_, support)| support >= min_support_count)
            .collect()
    }

    /// Sum of counts along the item's chain.
    pub fn item_support(&self, item: &T) -> usize {
        self.chain(item).map(|index| self.nodes[index].count).sum()
    }

    pub fn chain(&self, item: &T) -> ChainIter<'_, T> {
        ChainIter {
            tree: self,
            current: self.header_table.get(item).map(|chain| chain.head),
        }
    }

    /// Prefix paths above every occurrence of `item`, root first, each paired
    /// with the occurrence's count. Occurrences directly under the root give
    /// no path.
    pub fn conditional_pattern_base(&self, item: &T) -> Vec<(Vec<T>, usize)> {
        self.chain(item)
            .filter_map(|index| {
                let mut path = Vec::new();
                let mut current = self.nodes[index].parent;

                while let Some(i) = current {
                    if let Some(item) = &self.nodes[i].item {
                        path.push(item.clone());
                    }
                    current = self.nodes[i].parent;
                }

                path.reverse();
                (!path.is_empty()).then(|| (path, self.nodes[index].count))
            })
            .collect()
    }

    pub fn node(&self, index: NodeId) -> &Node<T> {
        &self.nodes[index]
    }

    pub fn root(&self) -> &Node<T> {
        &self.nodes[ROOT]
    }

    pub fn items(&self) -> &[T] {
        &self.header_order
    }

    /// Number of item nodes, root excluded.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct ChainIter<'a, T> {
    tree: &'a PrefixTree<T>,
    current: Option<NodeId>,
}

impl<'a, T> Iterator for ChainIter<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let index = self.current?;
        self.current = self.tree.nodes[index].next;
        Some(index)
    }
}

/// Indented `item:count` lines, children in insertion order.
impl<T: fmt::Display> fmt::Display for PrefixTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(ROOT, 0)];
        while let Some((index, depth)) = stack.pop() {
            let node = &self.nodes[index];
            let indent = "    ".repeat(depth);
            match &node.item {
                Some(item) => writeln!(f, "{}{}:{}", indent, item, node.count)?,
                None => writeln!(f, "{}*", indent)?,
            }

            let mut children: Vec<NodeId> = node.children.values().copied().collect();
            children.sort_unstable_by(|a, b| b.cmp(a));
            stack.extend(children.into_iter().map(|child| (child, depth + 1)));
        }
        Ok(())
    }
}
