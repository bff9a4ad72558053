/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Chain and Monad: sequencing computations within a container.

use super::Applicative;
use super::Functor;

/// A functor whose mapped function may itself return the container,
/// flattening as it goes.
///
/// Laws (not enforced by type system):
///
/// - **Associativity**:
///   `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
pub trait Chain: Functor {
    /// Sequence a computation that returns the container.
    fn chain<B, F>(self, f: F) -> Self::Mapped<B>
    where
        F: FnOnce(Self::Item) -> Self::Mapped<B>;
}

/// A [`Chain`] that is also [`Applicative`].
///
/// Laws (not enforced by type system):
///
/// - **Left identity**: `Self::pure(x).chain(f) == f(x)`
/// - **Right identity**: `m.chain(Self::pure) == m`
/// - **Associativity**: inherited from Chain
pub trait Monad: Applicative + Chain {}
