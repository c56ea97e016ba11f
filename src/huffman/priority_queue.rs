use std::cmp::Ordering;

use crate::error::Error;
use crate::Result;

struct Entry<T> {
    item: T,
    sequence: u64,
}

impl<T: Ord> Entry<T> {
    // equal items leave in insertion order
    fn precedes(&self, other: &Self) -> bool {
        match self.item.cmp(&other.item) {
            Ordering::Equal => self.sequence < other.sequence,
            ordering => ordering == Ordering::Less,
        }
    }
}

/// Array backed binary min-heap.
pub struct MinPriorityQueue<T> {
    elements: Vec<Entry<T>>,
    next_sequence: u64,
}

impl<T> MinPriorityQueue<T> {
    pub fn new() -> Self {
        MinPriorityQueue {
            elements: Vec::new(),
            next_sequence: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn left(i: usize) -> usize {
        2 * i + 1
    }

    fn right(i: usize) -> usize {
        2 * i + 2
    }
}

impl<T: Ord> MinPriorityQueue<T> {
    pub fn push(&mut self, item: T) {
        let entry = Entry {
            item,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.elements.push(entry);
        self.sift_up(self.elements.len() - 1);
    }

    pub fn pop(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let entry = self.elements.pop().ok_or(Error::EmptyQueue)?;
        self.sift_down(0);
        Ok(entry.item)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = Self::parent(index);
            if !self.elements[index].precedes(&self.elements[parent]) {
                break;
            }
            self.elements.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let size = self.elements.len();
        loop {
            let left = Self::left(index);
            let right = Self::right(index);
            let mut smallest = index;

            if left < size && self.elements[left].precedes(&self.elements[smallest]) {
                smallest = left;
            }
            if right < size && self.elements[right].precedes(&self.elements[smallest]) {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.elements.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T> Default for MinPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
