//! Set containers sharing one contract, realized three ways.
//!
//! Every container in this crate stores distinct elements and exposes the
//! same operations ([`insert`](Set::insert), [`contains`](Set::contains),
//! and [`len`](Set::len)) through the [`Set`] trait:
//!
//! * [`BstSet`]: an unbalanced binary search tree. For every node, all
//!   elements in its left subtree compare strictly less than the node's
//!   element and all elements in its right subtree compare strictly
//!   greater. No rebalancing is ever performed, so a run of ordered
//!   insertions degrades it to a list.
//! * [`AvlSet`]: a binary search tree with the same ordering invariant
//!   that additionally keeps itself height-balanced: after every
//!   insertion, the heights of any node's two subtrees differ by at most
//!   one.
//! * [`HashSet`]: a separately chained hash table driven by a
//!   caller-supplied hash function, doubling its bucket array whenever an
//!   insertion would push the load factor past 0.8.
//!
//! The tree sets order their elements with a comparator from the
//! [`compare`] crate, defaulting to the natural order of the element type.
//! None of the containers support removal or iteration.
//!
//! [`WordChecker`] is a consumer of the contract: given any populated
//! `Set<String>`, it generates spelling suggestions for a word by probing
//! single-character edits with `contains`.

#![deny(missing_docs)]

pub use self::avl::AvlSet;
pub use self::bst::BstSet;
pub use self::hash::HashSet;
pub use self::suggest::WordChecker;

pub mod avl;
pub mod bst;
pub mod hash;
pub mod suggest;

mod balance;
mod node;

#[cfg(feature = "quickcheck")]
mod quickcheck;

/// A collection of distinct elements.
///
/// The trait is object-safe, so consumers that work with any
/// implementation can hold a `&dyn Set<T>` or `&mut dyn Set<T>`.
///
/// # Examples
///
/// ```
/// use sets::{BstSet, Set};
///
/// fn populate(set: &mut dyn Set<i32>) {
///     set.insert(2);
///     set.insert(1);
///     set.insert(2);
/// }
///
/// let mut set = BstSet::new();
/// populate(&mut set);
///
/// assert!(set.contains(&1));
/// assert!(!set.contains(&3));
/// assert_eq!(set.len(), 2);
/// ```
pub trait Set<T> {
    /// Inserts an item into the set, returning `true` if the set did not
    /// already contain the item.
    ///
    /// Inserting an item that is already present has no effect.
    fn insert(&mut self, item: T) -> bool;

    /// Checks if the set contains the given item.
    fn contains(&self, item: &T) -> bool;

    /// Returns the number of items in the set.
    fn len(&self) -> usize;

    /// Checks if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
