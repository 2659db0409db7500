//! A height-balanced set based on an AVL tree.

use compare::{Compare, Natural};
use std::fmt::{self, Debug};
use std::iter;
use std::mem;

use crate::balance::Avl;
use crate::node::{self, Link};
use crate::Set;

/// A set based on a binary search tree that is kept height-balanced.
///
/// After every insertion the tree restores the AVL invariant (the heights
/// of any node's two subtrees differ by at most one) by rotating at most
/// two ancestors of the new node, so lookups and insertions cost O(log n)
/// regardless of insertion order.
///
/// The behavior of this set is undefined if an item's ordering relative
/// to any other item changes while the item is in the set. This is
/// normally only possible through `Cell`, `RefCell`, or unsafe code.
#[derive(Clone)]
pub struct AvlSet<T, C = Natural<T>>
where
    C: Compare<T>,
{
    root: Link<T>,
    len: usize,
    cmp: C,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Creates an empty set ordered according to the natural order of its
    /// items.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = sets::AvlSet::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert!(set.contains(&3));
    /// assert_eq!(set.len(), 3);
    /// ```
    pub fn new() -> Self {
        AvlSet::with_cmp(compare::natural())
    }
}

impl<T, C> AvlSet<T, C>
where
    C: Compare<T>,
{
    /// Creates an empty set ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{natural, Compare};
    ///
    /// let mut set = sets::AvlSet::with_cmp(natural().rev());
    ///
    /// set.insert(2);
    /// set.insert(1);
    ///
    /// assert!(set.contains(&2));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        AvlSet { root: None, len: 0, cmp }
    }

    /// Checks if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = sets::AvlSet::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(2);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of items in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = sets::AvlSet::new();
    /// assert_eq!(set.len(), 0);
    ///
    /// set.insert(2);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns a reference to the set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::Compare;
    ///
    /// let set = sets::AvlSet::<i32>::new();
    /// assert!(set.cmp().compares_gt(&2, &1));
    /// ```
    pub fn cmp(&self) -> &C {
        &self.cmp
    }

    /// Removes all items from the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = sets::AvlSet::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    ///
    /// set.clear();
    ///
    /// assert_eq!(set.len(), 0);
    /// assert!(!set.contains(&1));
    /// ```
    pub fn clear(&mut self) {
        node::teardown(self.root.take());
        self.len = 0;
    }

    /// Inserts an item into the set, returning `true` if the set did not
    /// already contain the item.
    ///
    /// Inserting an item that is already present has no effect. After the
    /// item lands, balance is restored bottom-up: any ancestor whose
    /// subtree heights now differ by more than one is rotated, with a
    /// single rotation for the left-left and right-right cases and a
    /// double rotation for left-right and right-left.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = sets::AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert!(set.contains(&1));
    /// ```
    pub fn insert(&mut self, item: T) -> bool {
        let inserted = node::insert::<_, _, Avl>(&mut self.root, &self.cmp, item);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Checks if the set contains the given item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = sets::AvlSet::new();
    /// assert!(!set.contains(&1));
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool
    where
        C: Compare<Q, T>,
    {
        node::contains(&self.root, &self.cmp, item)
    }

    /// Returns the height of the tree: the number of nodes on the longest
    /// path from the root to a leaf, with the empty tree at 0.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = sets::AvlSet::new();
    ///
    /// for item in 1..=7 {
    ///     set.insert(item);
    /// }
    ///
    /// // Rebalancing keeps ordered insertions logarithmic.
    /// assert_eq!(set.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Moves the set's contents out, leaving the source empty but fully
    /// usable, with a copy of the same comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = sets::AvlSet::new();
    /// set.insert(1);
    ///
    /// let moved = set.take();
    ///
    /// assert!(moved.contains(&1));
    /// assert!(set.is_empty());
    ///
    /// set.insert(2);
    /// assert!(set.contains(&2));
    /// ```
    pub fn take(&mut self) -> Self
    where
        C: Clone,
    {
        let cmp = self.cmp.clone();
        mem::replace(self, AvlSet::with_cmp(cmp))
    }
}

impl<T, C> Debug for AvlSet<T, C>
where
    C: Compare<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AvlSet").field("len", &self.len).finish()
    }
}

impl<T, C> Default for AvlSet<T, C>
where
    C: Compare<T> + Default,
{
    fn default() -> Self {
        AvlSet::with_cmp(C::default())
    }
}

impl<T, C> Drop for AvlSet<T, C>
where
    C: Compare<T>,
{
    fn drop(&mut self) {
        node::teardown(self.root.take());
    }
}

impl<T, C> Extend<T> for AvlSet<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, it: I) {
        for item in it {
            self.insert(item);
        }
    }
}

impl<T, C> iter::FromIterator<T> for AvlSet<T, C>
where
    C: Compare<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(it: I) -> Self {
        let mut set = AvlSet::default();
        set.extend(it);
        set
    }
}

impl<T, C> Set<T> for AvlSet<T, C>
where
    C: Compare<T>,
{
    fn insert(&mut self, item: T) -> bool {
        AvlSet::insert(self, item)
    }

    fn contains(&self, item: &T) -> bool {
        AvlSet::contains(self, item)
    }

    fn len(&self) -> usize {
        AvlSet::len(self)
    }
}
