/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Extend and Comonad: computing from the whole of a container.

use super::Functor;

/// A functor that can map a function over the *whole* container rather
/// than its contents, dual to [`Chain`](super::Chain).
///
/// The callback receives a reference to the entire container, not the
/// unwrapped item.
///
/// Laws (not enforced by type system):
///
/// - **Associativity**:
///   `m.extend(f).extend(g) == m.extend(|w| g(&w.clone().extend(f)))`
///   for cloneable containers
pub trait Extend: Functor {
    /// Map `f` over the whole container.
    fn extend<B, F>(self, f: F) -> Self::Mapped<B>
    where
        F: FnOnce(&Self) -> B;
}

/// An [`Extend`] whose contents can always be extracted.
///
/// Laws (not enforced by type system):
///
/// - **Left identity**: `m.clone().extend(|w| w.clone().extract()) == m`
/// - **Right identity**: `m.extend(f).extract() == f(&m)`
pub trait Comonad: Extend {
    /// Extract the contained value.
    fn extract(self) -> Self::Item;
}
