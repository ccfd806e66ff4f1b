//! Arena-based ordered trees.
//!
//! A [`Forest`] stores any number of disjoint rooted trees in one
//! [`generational_arena`] arena. Each node holds one payload and an
//! explicitly ordered child sequence; insertion position is a
//! first-class input, duplicate/cycle attempts are rejected before any
//! mutation, and path/distance queries run through the lowest common
//! ancestor.
//!
//! ```
//! use ordtree::{Forest, Position, Scope};
//!
//! let mut forest = Forest::new();
//! let root = forest.new_node("R");
//! let x = forest.new_node("X");
//! let y = forest.new_node("Y");
//!
//! forest.link(root, Position::End, &[x]).unwrap();
//! forest.link(root, Position::At(0), &[y]).unwrap();
//!
//! assert_eq!(forest.render(root).unwrap(), "R[Y X]");
//! assert_eq!(forest.size(root, Scope::Tree).unwrap(), 3);
//! ```

pub mod arena;
mod display;
pub mod error;
mod iter;
mod link;
mod path;
mod query;
pub mod util;

pub use arena::{Forest, NodeId, Position, TreeNode};
pub use error::{TreeError, TreeResult};
pub use iter::{PostOrderIter, SubtreeIter};
pub use query::Scope;
