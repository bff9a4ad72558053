/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

#![deny(missing_docs)]

//! Law-governed type-class traits for container and value types.
//!
//! This crate defines one trait per type class, each carrying its laws
//! in the trait documentation, together with instances for the host
//! types (`Vec`, `String`, maps, scalars) that participate in generic
//! dispatch.
//!
//! # Core Concepts
//!
//! - **Setoid**: A type with a lawful equality relation (`equals`).
//!   [`StrictSetoid`] refines it with the sign-of-zero-preserving
//!   comparison used for container payloads.
//!
//! - **TotalOrd**: A total order (`lte`) consistent with `equals`.
//!
//! - **Semigroup**: A type with an associative binary operation
//!   (`combine`). Examples: list concatenation, string concatenation.
//!
//! - **Monoid**: A semigroup with an identity element (`empty`).
//!
//! - **Functor / Apply / Applicative / Chain / Monad**: successively
//!   stronger capabilities for mapping and sequencing computations
//!   inside a container type.
//!
//! - **Alt / Plus / Alternative**: capabilities for choosing between
//!   two alternative container values.
//!
//! - **Foldable / Traversable**: reducing a container to a value, and
//!   flipping a container of effects into an effect of a container.
//!
//! - **Extend / Comonad**: computing a new container from the whole of
//!   a prior container, dual to Chain/Monad.
//!
//! - **Bifunctor**: mapping over both type parameters of a two-slot
//!   container independently.
//!
//! - **Named**: a stable string type tag plus the active variant name,
//!   for collaborators that must identify instances without host
//!   type-identity checks.
//!
//! # Quick Start
//!
//! ```
//! use algebra::Functor;
//! use algebra::Monoid;
//! use algebra::Semigroup;
//!
//! let xs = vec![1, 2].combine(&vec![3]);
//! assert_eq!(xs, vec![1, 2, 3]);
//! assert_eq!(Vec::<i32>::empty(), vec![]);
//!
//! let doubled = vec![1, 2, 3].map(|n| n * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```
//!
//! Laws are stated on each trait and exercised by the test suites of
//! the crates implementing them; nothing here enforces them at the
//! type level.

mod alt;
mod applicative;
mod apply;
mod bifunctor;
mod chain;
mod class;
mod extend;
mod foldable;
mod functor;
mod monoid;
mod named;
mod ord;
mod primitives;
mod semigroup;
mod setoid;
mod traversable;

pub use alt::Alt;
pub use alt::Alternative;
pub use alt::Plus;
pub use applicative::Applicative;
pub use apply::Apply;
pub use bifunctor::Bifunctor;
pub use chain::Chain;
pub use chain::Monad;
pub use class::TypeClass;
pub use extend::Comonad;
pub use extend::Extend;
pub use foldable::Foldable;
pub use functor::Functor;
pub use monoid::Monoid;
pub use named::Named;
pub use ord::TotalOrd;
pub use semigroup::Semigroup;
pub use setoid::Setoid;
pub use setoid::StrictSetoid;
pub use traversable::Traversable;
