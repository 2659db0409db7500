use compare::Compare;
use std::cmp::Ordering::*;
use std::mem;

use crate::balance::Balance;

pub type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone)]
pub struct Node<T> {
    pub left: Link<T>,
    pub right: Link<T>,
    pub height: usize,
    pub item: T,
}

/// Height of the subtree rooted at `link`, with an empty link at 0.
pub fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

impl<T> Node<T> {
    fn new(item: T) -> Self {
        Node { left: None, right: None, height: 1, item }
    }

    /// Recomputes the node's cached height from its children's.
    pub fn refresh_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Height of the left subtree minus height of the right subtree.
    pub fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Promotes the node's left child to the local root, reattaching the
    /// promoted node's right subtree as the demoted node's left subtree.
    pub fn rotate_right(node: &mut Box<Self>) {
        if node.left.is_some() {
            let mut save = node.left.take().unwrap();
            mem::swap(&mut node.left, &mut save.right); // save.right now None
            mem::swap(node, &mut save);
            save.refresh_height();
            node.right = Some(save);
            node.refresh_height();
        }
    }

    /// Mirror image of [`rotate_right`](Node::rotate_right).
    pub fn rotate_left(node: &mut Box<Self>) {
        if node.right.is_some() {
            let mut save = node.right.take().unwrap();
            mem::swap(&mut node.right, &mut save.left); // save.left now None
            mem::swap(node, &mut save);
            save.refresh_height();
            node.left = Some(save);
            node.refresh_height();
        }
    }
}

/// Inserts `item` into the subtree rooted at `link` unless an equal item
/// is already present, returning `true` if a node was created.
///
/// On the way back up, every ancestor's cached height is refreshed and the
/// balance discipline `B` is applied to it.
pub fn insert<T, C, B>(link: &mut Link<T>, cmp: &C, item: T) -> bool
where
    C: Compare<T>,
    B: Balance,
{
    match *link {
        None => {
            *link = Some(Box::new(Node::new(item)));
            true
        }
        Some(ref mut node) => {
            let inserted = match cmp.compare(&item, &node.item) {
                Equal => return false,
                Less => insert::<_, _, B>(&mut node.left, cmp, item),
                Greater => insert::<_, _, B>(&mut node.right, cmp, item),
            };

            if inserted {
                node.refresh_height();
                B::rebalance(node);
            }

            inserted
        }
    }
}

/// Checks if the subtree rooted at `link` contains an item equal to the
/// given one.
pub fn contains<T, C, Q: ?Sized>(link: &Link<T>, cmp: &C, item: &Q) -> bool
where
    C: Compare<Q, T>,
{
    let mut link = link;

    while let Some(ref node) = *link {
        match cmp.compare(item, &node.item) {
            Equal => return true,
            Less => link = &node.left,
            Greater => link = &node.right,
        }
    }

    false
}

/// Tears down the subtree rooted at `root` with an explicit work list, so
/// that a degenerate (list-shaped) tree cannot exhaust the call stack the
/// way a recursive teardown would.
pub fn teardown<T>(root: Link<T>) {
    let mut pending = Vec::new();
    pending.extend(root);

    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}
