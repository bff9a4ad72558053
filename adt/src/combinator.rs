/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Generic free-function combinators dispatching through the
//! type-class traits.
//!
//! Each function delegates to the matching instance method of its
//! argument. Any type implementing the capability participates — the
//! container types of this crate and the host instances alike; a value
//! lacking the capability is rejected by the trait bound at compile
//! time.

use algebra::Alt;
use algebra::Applicative;
use algebra::Apply;
use algebra::Bifunctor;
use algebra::Chain;
use algebra::Comonad;
use algebra::Extend;
use algebra::Foldable;
use algebra::Functor;
use algebra::Monoid;
use algebra::Plus;
use algebra::Semigroup;
use algebra::Setoid;
use algebra::StrictSetoid;
use algebra::TotalOrd;
use algebra::Traversable;

/// Map `f` over the contents of `value`.
pub fn map<M, B, F>(f: F, value: M) -> M::Mapped<B>
where
    M: Functor,
    F: FnMut(M::Item) -> B,
{
    value.map(f)
}

/// Apply the function(s) held by `function` to the contents of
/// `value`.
pub fn ap<M, A, B>(function: M, value: M::Mapped<A>) -> M::Mapped<B>
where
    M: Apply,
    M::Item: FnMut(A) -> B,
{
    function.ap(value)
}

/// Sequence `f` over the contents of `value`, flattening the result.
pub fn chain<M, B, F>(f: F, value: M) -> M::Mapped<B>
where
    M: Chain,
    F: FnOnce(M::Item) -> M::Mapped<B>,
{
    value.chain(f)
}

/// Lift a bare value into the container `M`.
pub fn of<M: Applicative>(item: M::Item) -> M {
    M::pure(item)
}

/// Prefer `first` when it has contents, otherwise `second`.
pub fn alt<M: Alt>(first: M, second: M) -> M {
    first.alt(second)
}

/// The identity for [`alt`].
pub fn zero<M: Plus>() -> M {
    M::zero()
}

/// Fold the contents of `value` into `init` with `f`.
pub fn reduce<M, B, F>(f: F, init: B, value: M) -> B
where
    M: Foldable,
    F: FnMut(B, M::Item) -> B,
{
    value.reduce(init, f)
}

/// Combine two semigroup values associatively.
pub fn concat<S: Semigroup>(first: &S, second: &S) -> S {
    first.combine(second)
}

/// The identity element of the monoid `M`.
pub fn empty<M: Monoid>() -> M {
    M::empty()
}

/// Value equality: NaN equals NaN, the zeros are equal.
pub fn equals<T: Setoid>(first: &T, second: &T) -> bool {
    first.equals(second)
}

/// Sign-of-zero-preserving value equality, as used for container
/// payloads.
pub fn strict_equals<T: StrictSetoid>(first: &T, second: &T) -> bool {
    first.strict_equals(second)
}

/// Total-order comparison consistent with [`equals`].
pub fn lte<T: TotalOrd>(first: &T, second: &T) -> bool {
    first.lte(second)
}

/// Map `f` over the first slot and `g` over the second slot of
/// `value`.
pub fn bimap<M, C, D, F, G>(f: F, g: G, value: M) -> M::Bimapped<C, D>
where
    M: Bifunctor,
    F: FnOnce(M::First) -> C,
    G: FnOnce(M::Second) -> D,
{
    value.bimap(f, g)
}

/// Map `f` over the whole container.
pub fn extend<M, B, F>(f: F, value: M) -> M::Mapped<B>
where
    M: Extend,
    F: FnOnce(&M) -> B,
{
    value.extend(f)
}

/// Extract the contents of a comonadic container.
pub fn extract<M: Comonad>(value: M) -> M::Item {
    value.extract()
}

/// Map each item of `value` to an applicative and collect the
/// results, applicative on the outside.
pub fn traverse<M, G, F>(f: F, value: M) -> G::Mapped<M::Mapped<G::Item>>
where
    M: Traversable,
    G: Applicative,
    G::Mapped<M::Mapped<G::Item>>: Applicative<Item = M::Mapped<G::Item>>,
    F: FnOnce(M::Item) -> G,
{
    value.traverse(f)
}

/// Flip a container of applicative values inside out.
pub fn sequence<M>(
    value: M,
) -> <M::Item as Functor>::Mapped<M::Mapped<<M::Item as Functor>::Item>>
where
    M: Traversable,
    M::Item: Applicative,
    <M::Item as Functor>::Mapped<M::Mapped<<M::Item as Functor>::Item>>:
        Applicative<Item = M::Mapped<<M::Item as Functor>::Item>>,
{
    value.sequence()
}
