use std::collections::BinaryHeap;

/// A frontier entry: a packed cell index with its accumulated cost and the
/// priority it was queued under.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) idx: usize,
    pub(crate) cost: i32,
    pub(crate) priority: i32,
    seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // and among equal priorities the earliest inserted.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue with FIFO tie-breaking.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, idx: usize, cost: i32, priority: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            idx,
            cost,
            priority,
            seq,
        });
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
