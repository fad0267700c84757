use serde::{Deserialize, Serialize};

use crate::error::{Result, TreeError};

pub const MIN_ORDER: usize = 3;
const DEFAULT_ORDER: usize = 4;

/// A validated tree order. Always even and at least 4, so an overflowing node
/// divides into two equal halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order(usize);
impl Order {
    /// Validates `requested`, rounding odd values up to the next even one.
    pub fn new(requested: usize) -> Result<Self> {
        if requested < MIN_ORDER {
            return Err(TreeError::InvalidOrder {
                requested,
                minimum: MIN_ORDER,
            });
        }
        if requested % 2 != 0 {
            let Some(rounded) = requested.checked_add(1) else {
                return Err(TreeError::OrderTooLarge { requested });
            };
            tracing::debug!(requested, rounded, "rounding odd order up");
            return Ok(Order(rounded));
        }
        Ok(Order(requested))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Where an overflowing node is cut in two.
    pub fn separator_index(self) -> usize {
        self.0 / 2
    }

    pub(crate) fn leaf_overflows(self, key_count: usize) -> bool {
        key_count == self.0
    }

    pub(crate) fn branch_overflows(self, child_count: usize) -> bool {
        child_count == self.0
    }
}

/// Construction parameters for a [`BPlusTree`](crate::BPlusTree). Meant to be
/// embedded in a host application's own config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    pub order: usize,
}
impl TreeConfig {
    pub fn new(order: usize) -> Self {
        TreeConfig { order }
    }

    pub fn validate(&self) -> Result<Order> {
        Order::new(self.order)
    }
}
impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            order: DEFAULT_ORDER,
        }
    }
}
