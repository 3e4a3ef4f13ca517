use serde::{Deserialize, Serialize};

/// Table number as printed on the floor plan. Real tables start at 1.
pub type TableId = u32;

/// A physical table in the restaurant layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub number: TableId,
    pub capacity: u32,
}

impl Table {
    pub fn new(number: TableId, capacity: u32) -> Self {
        Self { number, capacity }
    }

    /// True when seating `covers` guests here would overfill the table.
    pub fn overflows(&self, covers: u32) -> bool {
        self.capacity < covers
    }
}
