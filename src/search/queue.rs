use std::collections::VecDeque;

/// Strict FIFO queue. The search's visiting order, and with it the
/// choice of augmenting path, depends on this ordering guarantee.
#[derive(Default)]
pub struct Fifo<T> {
    items: VecDeque<T>,
}

impl<T> Fifo<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dequeue_returns_oldest_first() {
        let mut queue = Fifo::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);

        assert_eq!(3, queue.len());
        assert_eq!(Some(1), queue.dequeue());
        assert_eq!(Some(2), queue.dequeue());
        assert_eq!(Some(3), queue.dequeue());
        assert_eq!(None, queue.dequeue());
        assert!(queue.is_empty());
    }
}
