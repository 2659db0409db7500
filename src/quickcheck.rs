use ::quickcheck::{Arbitrary, Gen};
use compare::Compare;

use crate::{AvlSet, BstSet};

impl<T, C> Arbitrary for BstSet<T, C>
where
    T: Arbitrary + Send,
    C: 'static + Clone + Compare<T> + Default + Send,
{
    fn arbitrary(g: &mut Gen) -> Self {
        Vec::<T>::arbitrary(g).into_iter().collect()
    }
}

impl<T, C> Arbitrary for AvlSet<T, C>
where
    T: Arbitrary + Send,
    C: 'static + Clone + Compare<T> + Default + Send,
{
    fn arbitrary(g: &mut Gen) -> Self {
        Vec::<T>::arbitrary(g).into_iter().collect()
    }
}
