//! In-place reversal of singly-linked lists.
//!
//! The core is [`reverse::reverse_list`], which rewires the `next` link of
//! every node in a chain without allocating. [`list::LinkedList`] wraps a chain
//! in a container, and [`arena::NodeArena`] offers the same operation over
//! index-linked nodes.

pub mod arena;
pub mod config;
pub mod error;
pub mod list;
pub mod node;
pub mod reverse;

pub use arena::{NodeArena, NodeId};
pub use error::{ArenaError, ConfigError};
pub use list::LinkedList;
pub use node::{Link, ListNode};
pub use reverse::reverse_list;
