/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

#![deny(missing_docs)]

//! Polymorphic algebraic data types with a law-governed instance
//! matrix.
//!
//! Provides [`Maybe`], [`Either`], and [`Pair`], each implementing the
//! type-class traits of the `algebra` crate, together with generic
//! free-function combinators that dispatch through those traits, the
//! conversions between the containers, and the typed-function
//! registration surface consumed by the external validation
//! collaborator.
//!
//! Everything here is pure, synchronous, and immutable after
//! construction: each operation builds a new value and never mutates
//! an argument in place.
//!
//! # Quick Start
//!
//! ```
//! use adt::Apply;
//! use adt::Chain;
//! use adt::Either;
//! use adt::Maybe;
//! use adt::Semigroup;
//!
//! // Apply a wrapped function to a wrapped value.
//! let inc = |n: i32| n + 1;
//! assert_eq!(Maybe::Just(inc).ap(Maybe::Just(42)), Maybe::Just(43));
//!
//! // Left short-circuits sequencing.
//! let safe_sqrt = |n: f64| {
//!     if n >= 0.0 {
//!         Either::Right(n.sqrt())
//!     } else {
//!         Either::Left("div0".to_string())
//!     }
//! };
//! assert_eq!(Either::Right(25.0).chain(safe_sqrt), Either::Right(5.0));
//!
//! // Nothing is the identity for payload concatenation.
//! let xs = Maybe::Just(vec![1, 2, 3]);
//! assert_eq!(
//!     xs.combine(&Maybe::Just(vec![4, 5, 6])),
//!     Maybe::Just(vec![1, 2, 3, 4, 5, 6])
//! );
//! assert_eq!(Maybe::Nothing.combine(&xs), xs);
//! ```

pub mod combinator;
mod convert;
mod either;
mod maybe;
mod pair;
mod sig;

/// Property-based generators for randomized test input.
#[cfg(test)]
pub mod strategy;

pub use combinator::alt;
pub use combinator::ap;
pub use combinator::bimap;
pub use combinator::chain;
pub use combinator::concat;
pub use combinator::empty;
pub use combinator::equals;
pub use combinator::extend;
pub use combinator::extract;
pub use combinator::lte;
pub use combinator::map;
pub use combinator::of;
pub use combinator::reduce;
pub use combinator::sequence;
pub use combinator::strict_equals;
pub use combinator::traverse;
pub use combinator::zero;
pub use convert::either_to_maybe;
pub use convert::maybe_to_either;
pub use either::Either;
pub use either::either;
pub use either::encase_either;
pub use either::lefts;
pub use either::rights;
pub use maybe::Maybe;
pub use maybe::encase;
pub use maybe::from_maybe;
pub use maybe::justs;
pub use maybe::maybe;
pub use pair::Pair;
pub use pair::pair;
pub use sig::DispatchError;
pub use sig::FnDef;
pub use sig::definitions;
pub use sig::instances;
pub use sig::require_instance;

// Re-export the trait vocabulary and the curry surface so that
// downstream code can use the containers without naming the leaf
// crates.
pub use algebra::Alt;
pub use algebra::Alternative;
pub use algebra::Applicative;
pub use algebra::Apply;
pub use algebra::Bifunctor;
pub use algebra::Chain;
pub use algebra::Comonad;
pub use algebra::Extend;
pub use algebra::Foldable;
pub use algebra::Functor;
pub use algebra::Monad;
pub use algebra::Monoid;
pub use algebra::Named;
pub use algebra::Plus;
pub use algebra::Semigroup;
pub use algebra::Setoid;
pub use algebra::StrictSetoid;
pub use algebra::TotalOrd;
pub use algebra::Traversable;
pub use algebra::TypeClass;
pub use curry::ArityError;
pub use curry::Curried1;
pub use curry::Curried2;
pub use curry::Curried3;
pub use curry::Curried4;
pub use curry::Placeholder;
pub use curry::__;
pub use curry::count_in_words;
pub use curry::curry1;
pub use curry::curry2;
pub use curry::curry3;
pub use curry::curry4;
