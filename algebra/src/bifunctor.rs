/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Bifunctor: mapping over both slots of a two-parameter container.

/// A container with two independent type slots, both mappable.
///
/// Exactly one of the two functions runs for sum types; both run for
/// product types.
///
/// Laws (not enforced by type system):
///
/// - **Identity**: `m.bimap(|x| x, |y| y) == m`
/// - **Composition**:
///   `m.bimap(f1, g1).bimap(f2, g2) == m.bimap(|x| f2(f1(x)), |y| g2(g1(y)))`
pub trait Bifunctor: Sized {
    /// The first slot's type.
    type First;

    /// The second slot's type.
    type Second;

    /// The same container with both slots retyped.
    type Bimapped<C, D>: Bifunctor<First = C, Second = D>;

    /// Map `f` over the first slot and `g` over the second.
    fn bimap<C, D, F, G>(self, f: F, g: G) -> Self::Bimapped<C, D>
    where
        F: FnOnce(Self::First) -> C,
        G: FnOnce(Self::Second) -> D;
}
