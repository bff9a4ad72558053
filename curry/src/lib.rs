/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

#![deny(missing_docs)]

//! Fixed-arity curried function values.
//!
//! A curried value wraps an n-ary function together with its name and
//! accepts its arguments in any non-empty, non-exceeding grouping: all
//! at once, one at a time, or any prefix split in between. Each partial
//! application yields a smaller curried value holding the supplied
//! arguments; the final application invokes the wrapped function with
//! all arguments in their original order.
//!
//! ```
//! use curry::Curried3;
//!
//! let add3 = Curried3::new("add3", |a: i32, b: i32, c: i32| a + b + c);
//!
//! assert_eq!(add3.call(1, 2, 3), 6);
//! assert_eq!(add3.apply(1).call(2, 3), 6);
//! assert_eq!(add3.apply(1).apply(2).call(3), 6);
//! assert_eq!(add3.apply2(1, 2).call(3), 6);
//! ```
//!
//! Argument positions can also be skipped with the [`__`] placeholder
//! and filled by a later application:
//!
//! ```
//! use curry::Curried2;
//! use curry::__;
//!
//! let sub = Curried2::new("sub", |a: i32, b: i32| a - b);
//! let sub_ten = sub.apply_snd(__, 10);
//! assert_eq!(sub_ten.call(3), -7);
//! ```
//!
//! Arity is fixed once at wrap time. Supplying more arguments than the
//! declared arity through the dynamic checking surface produces an
//! [`ArityError`] that names the function and spells out both counts
//! (see [`count_in_words`]).

mod arity;
mod partial;

pub use arity::ArityError;
pub use arity::count_in_words;
pub use partial::Curried1;
pub use partial::Curried2;
pub use partial::Curried3;
pub use partial::Curried4;
pub use partial::Placeholder;
pub use partial::__;
pub use partial::curry1;
pub use partial::curry2;
pub use partial::curry3;
pub use partial::curry4;
