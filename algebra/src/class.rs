/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Runtime names for the type-class capabilities.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// The capability set a type variable may be constrained by.
///
/// Mirrors the trait vocabulary of this crate one-to-one; used by the
/// typed-function-definition surface and in missing-instance errors,
/// where a class must be named as data rather than as a trait bound.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TypeClass {
    /// Lawful equality ([`Setoid`](crate::Setoid)).
    Setoid,
    /// Total ordering ([`TotalOrd`](crate::TotalOrd)).
    Ord,
    /// Associative combination ([`Semigroup`](crate::Semigroup)).
    Semigroup,
    /// Semigroup with identity ([`Monoid`](crate::Monoid)).
    Monoid,
    /// Mapping ([`Functor`](crate::Functor)).
    Functor,
    /// Two-slot mapping ([`Bifunctor`](crate::Bifunctor)).
    Bifunctor,
    /// Function application inside a container ([`Apply`](crate::Apply)).
    Apply,
    /// Apply with pure ([`Applicative`](crate::Applicative)).
    Applicative,
    /// Sequencing ([`Chain`](crate::Chain)).
    Chain,
    /// Applicative chain ([`Monad`](crate::Monad)).
    Monad,
    /// Choice ([`Alt`](crate::Alt)).
    Alt,
    /// Choice with identity ([`Plus`](crate::Plus)).
    Plus,
    /// Applicative choice ([`Alternative`](crate::Alternative)).
    Alternative,
    /// Reduction ([`Foldable`](crate::Foldable)).
    Foldable,
    /// Effect flipping ([`Traversable`](crate::Traversable)).
    Traversable,
    /// Whole-container mapping ([`Extend`](crate::Extend)).
    Extend,
    /// Extend with extract ([`Comonad`](crate::Comonad)).
    Comonad,
}

impl TypeClass {
    /// The class name as it appears in signatures and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            TypeClass::Setoid => "Setoid",
            TypeClass::Ord => "Ord",
            TypeClass::Semigroup => "Semigroup",
            TypeClass::Monoid => "Monoid",
            TypeClass::Functor => "Functor",
            TypeClass::Bifunctor => "Bifunctor",
            TypeClass::Apply => "Apply",
            TypeClass::Applicative => "Applicative",
            TypeClass::Chain => "Chain",
            TypeClass::Monad => "Monad",
            TypeClass::Alt => "Alt",
            TypeClass::Plus => "Plus",
            TypeClass::Alternative => "Alternative",
            TypeClass::Foldable => "Foldable",
            TypeClass::Traversable => "Traversable",
            TypeClass::Extend => "Extend",
            TypeClass::Comonad => "Comonad",
        }
    }
}

impl fmt::Display for TypeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
