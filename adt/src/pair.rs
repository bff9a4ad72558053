/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Pair: a two-component product with a comonadic second slot.

use std::fmt;

use algebra::Bifunctor;
use algebra::Comonad;
use algebra::Extend;
use algebra::Functor;
use algebra::Monoid;
use algebra::Named;
use algebra::Semigroup;
use algebra::Setoid;
use algebra::StrictSetoid;
use algebra::TotalOrd;
use serde::Deserialize;
use serde::Serialize;

/// A product of two values of independent types.
///
/// [`Functor`] maps the second component only; [`Bifunctor`] maps both
/// independently; [`Comonad::extract`] returns the second component and
/// [`Extend::extend`] rebuilds the second component from the whole
/// pair.
///
/// # Example
///
/// ```
/// use adt::Comonad;
/// use adt::Extend;
/// use adt::Functor;
/// use adt::Pair;
///
/// let p = Pair("label", 2);
/// assert_eq!(p.map(|n| n * 10), Pair("label", 20));
/// assert_eq!(Pair("label", 2).extract(), 2);
/// assert_eq!(
///     Pair("label", 2).extend(|w| *w.snd() + w.fst().len()),
///     Pair("label", 7)
/// );
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Pair<A, B>(pub A, pub B);

impl<A, B> Pair<A, B> {
    /// The first component.
    pub fn fst(&self) -> &A {
        &self.0
    }

    /// The second component.
    pub fn snd(&self) -> &B {
        &self.1
    }

    /// Consume the pair, keeping the first component.
    pub fn into_fst(self) -> A {
        self.0
    }

    /// Consume the pair, keeping the second component.
    pub fn into_snd(self) -> B {
        self.1
    }

    /// Swap the components.
    pub fn swap(self) -> Pair<B, A> {
        Pair(self.1, self.0)
    }
}

/// Construct a [`Pair`].
pub fn pair<A, B>(first: A, second: B) -> Pair<A, B> {
    Pair(first, second)
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Pair(first, second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(p: Pair<A, B>) -> Self {
        (p.0, p.1)
    }
}

impl<A, B> Functor for Pair<A, B> {
    type Item = B;
    type Mapped<C> = Pair<A, C>;

    fn map<C, F>(self, mut f: F) -> Pair<A, C>
    where
        F: FnMut(B) -> C,
    {
        Pair(self.0, f(self.1))
    }
}

impl<A, B> Bifunctor for Pair<A, B> {
    type First = A;
    type Second = B;
    type Bimapped<C, D> = Pair<C, D>;

    fn bimap<C, D, F, G>(self, f: F, g: G) -> Pair<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        Pair(f(self.0), g(self.1))
    }
}

impl<A, B> Extend for Pair<A, B> {
    fn extend<C, F>(self, f: F) -> Pair<A, C>
    where
        F: FnOnce(&Self) -> C,
    {
        let c = f(&self);
        Pair(self.0, c)
    }
}

impl<A, B> Comonad for Pair<A, B> {
    fn extract(self) -> B {
        self.1
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for Pair<A, B> {
    fn combine(&self, other: &Self) -> Self {
        Pair(self.0.combine(&other.0), self.1.combine(&other.1))
    }
}

impl<A: Monoid, B: Monoid> Monoid for Pair<A, B> {
    fn empty() -> Self {
        Pair(A::empty(), B::empty())
    }
}

impl<A: StrictSetoid, B: StrictSetoid> Setoid for Pair<A, B> {
    fn equals(&self, other: &Self) -> bool {
        self.0.strict_equals(&other.0) && self.1.strict_equals(&other.1)
    }
}

impl<A: StrictSetoid, B: StrictSetoid> StrictSetoid for Pair<A, B> {}

impl<A, B> TotalOrd for Pair<A, B>
where
    A: TotalOrd + StrictSetoid,
    B: TotalOrd + StrictSetoid,
{
    fn lte(&self, other: &Self) -> bool {
        if self.0.lt(&other.0) {
            return true;
        }
        if other.0.lt(&self.0) {
            return false;
        }
        self.1.lte(&other.1)
    }
}

impl<A, B> Named for Pair<A, B> {
    fn type_tag() -> &'static str {
        "fpcore/Pair"
    }
}

impl<A: fmt::Debug, B: fmt::Debug> fmt::Display for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pair({:?}, {:?})", self.0, self.1)
    }
}
