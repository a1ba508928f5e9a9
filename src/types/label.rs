//! The bound every node label satisfies.

use std::hash::Hash;

/// A node label: anything hashable, comparable and cloneable.
///
/// Labels are cloned when an edge is stored in both endpoint sets, so cheap
/// clones (integers, `Rc<str>`, small strings) work best.
pub trait Label: Hash + Eq + Clone {}

impl<T: Hash + Eq + Clone> Label for T {}
