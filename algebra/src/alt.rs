/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Alt, Plus, Alternative: choice between container values.

use super::Applicative;
use super::Functor;

/// A functor supporting a choice between two values of the same shape.
///
/// `alt` is left-biased: when both sides could supply contents, the
/// receiver wins.
///
/// Laws (not enforced by type system):
///
/// - **Associativity**: `a.alt(b).alt(c) == a.alt(b.alt(c))`
/// - **Distributivity**: `a.alt(b).map(f) == a.map(f).alt(b.map(f))`
pub trait Alt: Functor {
    /// Prefer `self` when it has contents, otherwise `other`.
    fn alt(self, other: Self) -> Self;
}

/// An [`Alt`] with an identity element for `alt`.
///
/// Laws (not enforced by type system):
///
/// - **Left identity**: `Self::zero().alt(m) == m`
/// - **Right identity**: `m.alt(Self::zero()) == m`
/// - **Annihilation**: `Self::zero().map(f) == Self::zero()`
pub trait Plus: Alt {
    /// The identity for `alt`.
    fn zero() -> Self;
}

/// A [`Plus`] that is also [`Applicative`].
///
/// Laws (not enforced by type system):
///
/// - **Distributivity**: `f.alt(g).ap(x) == f.ap(x).alt(g.ap(x))`
/// - **Annihilation**: `Self::zero().ap(x) == Self::zero()`
pub trait Alternative: Applicative + Plus {}
