use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use super::board::Board;
use super::slot::{DropColor, Slot};
use crate::error::MoveError;

/// A board shared between threads. Insertions take the write lock, so the
/// lowest-empty-slot lookup and the write happen atomically; analysis and win
/// detection run under read locks and may overlap each other.
#[derive(Debug, Clone, Default)]
pub struct SharedBoard {
    inner: Arc<RwLock<Board>>,
}

impl SharedBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_board(board: Board) -> Self {
        SharedBoard {
            inner: Arc::new(RwLock::new(board)),
        }
    }

    pub fn insert(&self, column_key: char, color: DropColor) -> Result<Slot, MoveError> {
        let mut board = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        board.insert(column_key, color)
    }

    pub fn reset(&self) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .reset();
    }

    /// Read access for analysis; blocks while an insertion is in flight.
    pub fn read(&self) -> RwLockReadGuard<'_, Board> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_concurrent_inserts_never_share_a_slot() {
        let shared = SharedBoard::new();
        let handles: Vec<_> = (0..6)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let color = if i % 2 == 0 { DropColor::Red } else { DropColor::Yellow };
                    shared.insert('C', color)
                })
            })
            .collect();

        let rows: HashSet<usize> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap().position().row())
            .collect();
        assert_eq!(rows, (1..=6).collect());
        assert_eq!(shared.insert('C', DropColor::Red), Err(MoveError::ColumnFull('C')));
    }

    #[test]
    fn test_readers_see_inserted_drops() {
        let shared = SharedBoard::new();
        shared.insert('A', DropColor::Red).unwrap();
        {
            let board = shared.read();
            assert_eq!(board.count_occupied(), 1);
            assert_eq!(board.count_drops(DropColor::Red), 1);
        }
        shared.reset();
        assert_eq!(shared.read().count_occupied(), 0);
    }
}
