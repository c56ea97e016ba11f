use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::fmt;

use super::frequency::{count_frequencies, merge_frequencies};
use super::priority_queue::MinPriorityQueue;
use super::{Symbol, SymbolFrequency, Weight};
use crate::error::Error;
use crate::Result;

#[derive(Clone, Debug)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        weight: Weight,
    },
    Internal {
        weight: Weight,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    pub fn leaf(symbol: S, weight: Weight) -> Self {
        Node::Leaf { symbol, weight }
    }

    /// `first` is the node extracted first and becomes the left child.
    pub fn merge(first: Self, second: Self) -> Self {
        Node::Internal {
            weight: first.weight() + second.weight(),
            left: Box::new(first),
            right: Box::new(second),
        }
    }

    pub fn weight(&self) -> Weight {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn symbol(&self) -> Option<&S> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.symbol().is_some()
    }
}

// only the weight takes part in the queue ordering
impl<S> Ord for Node<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight().cmp(&other.weight())
    }
}

impl<S> PartialOrd for Node<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> PartialEq for Node<S> {
    fn eq(&self, other: &Self) -> bool {
        self.weight() == other.weight()
    }
}

impl<S> Eq for Node<S> {}

pub struct HuffmanTree<S> {
    root: Node<S>,
}

impl<S: Symbol> HuffmanTree<S> {
    pub fn new(symbols: &[S]) -> Result<HuffmanTree<S>> {
        if symbols.is_empty() {
            return Err(Error::EmptyInput);
        }
        Self::from_frequencies(&count_frequencies(symbols))
    }

    /// Leaves enter the queue in the order of `symbols_and_frequencies`,
    /// which decides between nodes of equal weight. Repeated symbols are
    /// summed into one leaf at their first position.
    pub fn from_frequencies(
        symbols_and_frequencies: &[SymbolFrequency<S>],
    ) -> Result<HuffmanTree<S>> {
        if symbols_and_frequencies.is_empty() {
            return Err(Error::EmptyInput);
        }
        let symbols_and_frequencies = merge_frequencies(symbols_and_frequencies);
        let mut queue = MinPriorityQueue::new();
        for sf in &symbols_and_frequencies {
            queue.push(Node::leaf(sf.symbol.clone(), sf.frequency));
        }
        // merge nodes until one is left
        while queue.len() > 1 {
            let first = queue.pop()?;
            let second = queue.pop()?;
            queue.push(Node::merge(first, second));
        }
        let root = queue.pop()?;
        log::debug!(
            "Built huffman tree over {} distinct symbols with root weight {}",
            symbols_and_frequencies.len(),
            root.weight()
        );
        Ok(HuffmanTree { root })
    }
}

impl<S> HuffmanTree<S> {
    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    pub fn weight(&self) -> Weight {
        self.root.weight()
    }

    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { .. } => count += 1,
                Node::Internal { left, right, .. } => {
                    stack.push(left);
                    stack.push(right);
                }
            }
        }
        count
    }

    /// Number of edges on the longest root to leaf path.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(&self.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { .. } => max_depth = max_depth.max(depth),
                Node::Internal { left, right, .. } => {
                    stack.push((left.as_ref(), depth + 1));
                    stack.push((right.as_ref(), depth + 1));
                }
            }
        }
        max_depth
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

fn center_of(line: &str) -> usize {
    let leading = line.chars().position(|c| c != ' ').unwrap_or(0);
    (leading * 2 + line.trim().chars().count()) / 2
}

// Node & Tree visualization
impl<S: fmt::Debug> Node<S> {
    fn get_string(&self) -> Vec<String> {
        match self {
            Node::Leaf { symbol, weight } => vec![format!("({:?},w:{})", symbol, weight)],
            Node::Internal { left, right, .. } => {
                let left_box = left.get_string();
                let right_box = right.get_string();
                let left_width = left_box[0].chars().count();
                let right_width = right_box[0].chars().count();
                let mut result: Vec<String> = Vec::new();

                result.push(format!(
                    "{}•{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));
                result.push(format!(
                    "{}║{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));

                let left_pos = center_of(&left_box[0]);
                let right_pos = center_of(&right_box[0]);
                result.push(format!(
                    "{}╔{}╩{}╗{}",
                    SPACE.repeat(left_pos),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_pos - 1),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(right_pos),
                    SPACE.repeat(right_width - right_pos - 1)
                ));

                let left_depth = left_box.len();
                let right_depth = right_box.len();
                for i in 0..std::cmp::max(left_depth, right_depth) {
                    let left_str = left_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(left_width));
                    let right_str = right_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(right_width));
                    result.push(format!("{} {}", left_str, right_str));
                }
                result
            }
        }
    }
}

impl<S: fmt::Debug> fmt::Display for HuffmanTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in self.root.get_string().iter() {
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}
