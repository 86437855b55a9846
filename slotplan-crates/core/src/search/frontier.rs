use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// How entries with the same priority are ordered in a [`PriorityFrontier`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum TieBreaking {
    /// The most recently pushed entry is popped first; the search dives deeper on ties.
    #[default]
    Lifo,
    /// Entries are popped in the order in which they were pushed.
    Fifo,
}

/// The collection of generated but not yet expanded nodes of a searcher.
pub trait SearchFrontier<Item> {
    fn push(&mut self, priority: i64, item: Item);

    /// Removes the entry with the lowest priority.
    fn pop(&mut self) -> Option<(i64, Item)>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A [`SearchFrontier`] backed by a binary heap.
///
/// Equal priorities are resolved deterministically through [`TieBreaking`].
#[derive(Debug)]
pub struct PriorityFrontier<Item> {
    heap: BinaryHeap<FrontierEntry<Item>>,
    num_pushed: i64,
    tie_breaking: TieBreaking,
}

impl<Item> PriorityFrontier<Item> {
    pub fn new(tie_breaking: TieBreaking) -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            num_pushed: 0,
            tie_breaking,
        }
    }
}

impl<Item> Default for PriorityFrontier<Item> {
    fn default() -> Self {
        PriorityFrontier::new(TieBreaking::default())
    }
}

impl<Item> SearchFrontier<Item> for PriorityFrontier<Item> {
    fn push(&mut self, priority: i64, item: Item) {
        self.num_pushed += 1;
        let tie_key = match self.tie_breaking {
            TieBreaking::Lifo => self.num_pushed,
            TieBreaking::Fifo => -self.num_pushed,
        };

        self.heap.push(FrontierEntry {
            priority,
            tie_key,
            item,
        });
    }

    fn pop(&mut self) -> Option<(i64, Item)> {
        self.heap.pop().map(|entry| (entry.priority, entry.item))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[derive(Debug)]
struct FrontierEntry<Item> {
    priority: i64,
    /// Among equal priorities the largest key is popped first.
    tie_key: i64,
    item: Item,
}

impl<Item> PartialEq for FrontierEntry<Item> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<Item> Eq for FrontierEntry<Item> {}

impl<Item> PartialOrd for FrontierEntry<Item> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Item> Ord for FrontierEntry<Item> {
    fn cmp(&self, other: &Self) -> Ordering {
        // `BinaryHeap` is a max-heap, the lowest priority has to compare as the greatest.
        other
            .priority
            .cmp(&self.priority)
            .then(self.tie_key.cmp(&other.tie_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(mut frontier: PriorityFrontier<char>) -> Vec<char> {
        std::iter::from_fn(|| frontier.pop().map(|(_, item)| item)).collect()
    }

    #[test]
    fn lowest_priority_is_popped_first() {
        let mut frontier = PriorityFrontier::default();
        frontier.push(3, 'c');
        frontier.push(1, 'a');
        frontier.push(2, 'b');

        assert_eq!(drain(frontier), vec!['a', 'b', 'c']);
    }

    #[test]
    fn lifo_pops_most_recent_of_equal_priorities() {
        let mut frontier = PriorityFrontier::new(TieBreaking::Lifo);
        frontier.push(1, 'a');
        frontier.push(1, 'b');
        frontier.push(0, 'z');
        frontier.push(1, 'c');

        assert_eq!(drain(frontier), vec!['z', 'c', 'b', 'a']);
    }

    #[test]
    fn fifo_pops_in_insertion_order_of_equal_priorities() {
        let mut frontier = PriorityFrontier::new(TieBreaking::Fifo);
        frontier.push(1, 'a');
        frontier.push(1, 'b');
        frontier.push(1, 'c');

        assert_eq!(drain(frontier), vec!['a', 'b', 'c']);
    }
}
