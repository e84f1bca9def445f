use core::cmp::Ordering;

use super::ZIndex;

/// Position of a node in the registry's paint order.
///
/// Ordering rules:
/// 1) `z`: ascending (back-to-front)
/// 2) `order`: ascending insertion sequence, so among equal `z` the node
///    inserted last paints last and is the one a hit test returns
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    /// Registry-wide insertion sequence number.
    pub order: u64,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u64) -> Self {
        Self { z, order }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match self.z.cmp(&other.z) {
            Ordering::Equal => self.order.cmp(&other.order),
            o => o,
        }
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
