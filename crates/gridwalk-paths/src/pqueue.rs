//! [`PriorityQueue`]: an ascending-priority singly linked list.
//!
//! Insertion is a linear scan, so this only suits small frontiers. There is
//! no deduplication and no decrease-key: a node found again with a better
//! score is inserted again, and the caller ignores the stale entry when it
//! surfaces.

use std::fmt;

use crate::traits::Cost;

struct QueueNode<T> {
    item: T,
    priority: Cost,
    next: Option<Box<QueueNode<T>>>,
}

/// Min-priority queue. Equal priorities pop in insertion order.
pub struct PriorityQueue<T> {
    head: Option<Box<QueueNode<T>>>,
    len: usize,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Place `item` just before the first entry whose priority is strictly
    /// greater than `priority`.
    pub fn insert(&mut self, item: T, priority: Cost) {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.priority <= priority) {
            cursor = match cursor {
                Some(node) => &mut node.next,
                None => unreachable!(),
            };
        }
        let next = cursor.take();
        *cursor = Some(Box::new(QueueNode {
            item,
            priority,
            next,
        }));
        self.len += 1;
    }

    /// Remove and return the minimum-priority item.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty; check [`is_empty`](Self::is_empty) first.
    pub fn pop(&mut self) -> T {
        self.pop_with_priority().0
    }

    /// Like [`pop`](Self::pop), also returning the entry's priority.
    pub fn pop_with_priority(&mut self) -> (T, Cost) {
        let Some(node) = self.head.take() else {
            panic!("pop on empty priority queue");
        };
        let QueueNode {
            item,
            priority,
            next,
        } = *node;
        self.head = next;
        self.len -= 1;
        (item, priority)
    }

    /// The head entry, without removing it.
    pub fn peek(&self) -> Option<(&T, Cost)> {
        self.head.as_deref().map(|n| (&n.item, n.priority))
    }

    /// Entries in pop order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Drop for PriorityQueue<T> {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop can overflow the
        // stack on long queues.
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over `(item, priority)` pairs of a [`PriorityQueue`].
pub struct Iter<'a, T> {
    next: Option<&'a QueueNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, Cost);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some((&node.item, node.priority))
    }
}
