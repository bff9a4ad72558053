/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Traversable: turning a container of effects inside out.

use super::Applicative;
use super::Functor;

/// A functor whose contents can be traversed with an effectful
/// function, collecting the effects on the outside.
///
/// `traverse` maps each item to a value in some [`Applicative`] `G`
/// and flips the result, producing the applicative on the outside and
/// the original container shape on the inside. `sequence` is
/// `traverse` with the identity function.
///
/// Laws (not enforced by type system):
///
/// - **Naturality**: any applicative homomorphism `t` satisfies
///   `t(m.traverse(f)) == m.traverse(|x| t(f(x)))`
/// - **Identity**: traversing with the identity applicative returns
///   the container unchanged
/// - **Composition**: traversing with a composite applicative equals
///   composing two traversals
pub trait Traversable: Functor {
    /// Map each item to an applicative value and collect the results.
    fn traverse<G, F>(self, f: F) -> G::Mapped<Self::Mapped<G::Item>>
    where
        G: Applicative,
        G::Mapped<Self::Mapped<G::Item>>: Applicative<Item = Self::Mapped<G::Item>>,
        F: FnOnce(Self::Item) -> G;

    /// Flip a container of applicative values inside out.
    fn sequence(self) -> <Self::Item as Functor>::Mapped<Self::Mapped<<Self::Item as Functor>::Item>>
    where
        Self::Item: Applicative,
        <Self::Item as Functor>::Mapped<Self::Mapped<<Self::Item as Functor>::Item>>:
            Applicative<Item = Self::Mapped<<Self::Item as Functor>::Item>>,
    {
        self.traverse(|g| g)
    }
}
