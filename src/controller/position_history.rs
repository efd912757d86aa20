//! Zobrist keys of every position reached in a game, oldest first.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionHistory {
    keys: Vec<u64>,
}

impl PositionHistory {
    pub fn new(initial_key: u64) -> Self {
        Self {
            keys: vec![initial_key],
        }
    }

    #[inline]
    pub fn push(&mut self, key: u64) {
        self.keys.push(key);
    }

    /// Drop the most recent key. The initial position is never removed.
    pub fn pop(&mut self) -> Option<u64> {
        if self.keys.len() > 1 {
            self.keys.pop()
        } else {
            None
        }
    }

    #[inline]
    pub fn current(&self) -> Option<u64> {
        self.keys.last().copied()
    }

    /// How many times `key` has occurred, the current position included.
    pub fn repetition_count(&self, key: u64) -> usize {
        self.keys.iter().filter(|&&seen| seen == key).count()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::PositionHistory;

    #[test]
    fn counts_repeated_keys() {
        let mut history = PositionHistory::new(1);
        for key in [2, 1, 3, 1] {
            history.push(key);
        }
        assert_eq!(history.repetition_count(1), 3);
        assert_eq!(history.repetition_count(2), 1);
        assert_eq!(history.repetition_count(9), 0);
        assert_eq!(history.current(), Some(1));
    }

    #[test]
    fn initial_key_survives_pop() {
        let mut history = PositionHistory::new(5);
        history.push(6);
        assert_eq!(history.pop(), Some(6));
        assert_eq!(history.pop(), None);
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
    }
}
