//! An in-memory B+ tree index. Each key maps to the list of values inserted
//! under it, and leaves are chained in key order for ordered traversal.
//!
//! ```
//! use bplus_index::BPlusTree;
//!
//! let mut tree = BPlusTree::new(4).unwrap();
//! for key in 0..10 {
//!     tree.insert(key, key.to_string());
//! }
//! tree.insert(5, "five".to_string());
//!
//! let entry = tree.search(&5).unwrap();
//! assert_eq!(entry.values, ["5", "five"]);
//! assert!(tree.search(&99).is_none());
//! assert_eq!(tree.keys().count(), 10);
//! ```

pub mod config;
pub mod dump;
pub mod error;
pub mod generate;
pub mod iter;
mod node;
mod split;
pub mod tree;

#[cfg(test)]
mod invariants;

pub use config::{Order, TreeConfig, MIN_ORDER};
pub use error::{Result, TreeError};
pub use tree::{BPlusTree, Entry};
