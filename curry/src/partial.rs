/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Curried function values with fixed argument slots.
//!
//! Each `CurriedN` owns the wrapped function behind an [`Rc`] and a
//! fixed set of argument slots. Partial application moves the supplied
//! arguments into the returned value's closure; nothing grows with the
//! number of applications, and saturation calls the wrapped function
//! with the slots in declaration order.

use std::fmt;
use std::rc::Rc;

use crate::ArityError;

/// Marker for an argument position deferred to a later application.
///
/// Written as [`__`] at call sites: `f.apply_snd(__, b)` supplies the
/// second argument while leaving the first open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder;

/// The placeholder constant used in skip-and-fill applications.
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;

macro_rules! impl_meta {
    ($ty:ident, $arity:expr, $($param:ident),*) => {
        impl<$($param,)* R> $ty<$($param,)* R> {
            /// The name the function was wrapped with.
            pub fn name(&self) -> &'static str {
                self.name
            }

            /// The arity declared at wrap time.
            pub fn arity(&self) -> usize {
                $arity
            }

            /// Reject an application that would exceed the declared
            /// arity.
            pub fn check_arity(&self, received: usize) -> Result<(), ArityError> {
                if received > $arity {
                    Err(ArityError::new(self.name, $arity, received))
                } else {
                    Ok(())
                }
            }
        }

        impl<$($param,)* R> Clone for $ty<$($param,)* R> {
            fn clone(&self) -> Self {
                $ty {
                    name: self.name,
                    run: Rc::clone(&self.run),
                }
            }
        }

        impl<$($param,)* R> fmt::Debug for $ty<$($param,)* R> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($ty))
                    .field("name", &self.name)
                    .field("arity", &$arity)
                    .finish()
            }
        }
    };
}

/// A unary function value awaiting its last argument.
pub struct Curried1<A, R> {
    name: &'static str,
    run: Rc<dyn Fn(A) -> R>,
}

impl<A, R> Curried1<A, R> {
    /// Wrap a unary function.
    pub fn new<F>(name: &'static str, f: F) -> Self
    where
        F: Fn(A) -> R + 'static,
    {
        Curried1 {
            name,
            run: Rc::new(f),
        }
    }

    /// Saturate with the final argument.
    pub fn call(&self, a: A) -> R {
        (self.run)(a)
    }
}

impl_meta!(Curried1, 1, A);

/// A binary function value accepting its arguments in any grouping.
pub struct Curried2<A, B, R> {
    name: &'static str,
    run: Rc<dyn Fn(A, B) -> R>,
}

impl<A, B, R> Curried2<A, B, R> {
    /// Wrap a binary function.
    pub fn new<F>(name: &'static str, f: F) -> Self
    where
        F: Fn(A, B) -> R + 'static,
    {
        Curried2 {
            name,
            run: Rc::new(f),
        }
    }

    /// Saturate with both arguments at once.
    pub fn call(&self, a: A, b: B) -> R {
        (self.run)(a, b)
    }
}

impl<A, B, R> Curried2<A, B, R>
where
    A: 'static,
    B: 'static,
    R: 'static,
{
    /// Supply the first argument.
    pub fn apply(&self, a: A) -> Curried1<B, R>
    where
        A: Clone,
    {
        let run = Rc::clone(&self.run);
        Curried1 {
            name: self.name,
            run: Rc::new(move |b| run(a.clone(), b)),
        }
    }

    /// Supply the second argument, deferring the first.
    pub fn apply_snd(&self, _: Placeholder, b: B) -> Curried1<A, R>
    where
        B: Clone,
    {
        let run = Rc::clone(&self.run);
        Curried1 {
            name: self.name,
            run: Rc::new(move |a| run(a, b.clone())),
        }
    }
}

impl_meta!(Curried2, 2, A, B);

/// A ternary function value accepting its arguments in any grouping.
pub struct Curried3<A, B, C, R> {
    name: &'static str,
    run: Rc<dyn Fn(A, B, C) -> R>,
}

impl<A, B, C, R> Curried3<A, B, C, R> {
    /// Wrap a ternary function.
    pub fn new<F>(name: &'static str, f: F) -> Self
    where
        F: Fn(A, B, C) -> R + 'static,
    {
        Curried3 {
            name,
            run: Rc::new(f),
        }
    }

    /// Saturate with all three arguments at once.
    pub fn call(&self, a: A, b: B, c: C) -> R {
        (self.run)(a, b, c)
    }
}

impl<A, B, C, R> Curried3<A, B, C, R>
where
    A: 'static,
    B: 'static,
    C: 'static,
    R: 'static,
{
    /// Supply the first argument.
    pub fn apply(&self, a: A) -> Curried2<B, C, R>
    where
        A: Clone,
    {
        let run = Rc::clone(&self.run);
        Curried2 {
            name: self.name,
            run: Rc::new(move |b, c| run(a.clone(), b, c)),
        }
    }

    /// Supply the first two arguments.
    pub fn apply2(&self, a: A, b: B) -> Curried1<C, R>
    where
        A: Clone,
        B: Clone,
    {
        let run = Rc::clone(&self.run);
        Curried1 {
            name: self.name,
            run: Rc::new(move |c| run(a.clone(), b.clone(), c)),
        }
    }

    /// Supply the second argument, deferring the first.
    pub fn apply_snd(&self, _: Placeholder, b: B) -> Curried2<A, C, R>
    where
        B: Clone,
    {
        let run = Rc::clone(&self.run);
        Curried2 {
            name: self.name,
            run: Rc::new(move |a, c| run(a, b.clone(), c)),
        }
    }

    /// Supply the third argument, deferring the first two.
    pub fn apply_trd(&self, _: Placeholder, _: Placeholder, c: C) -> Curried2<A, B, R>
    where
        C: Clone,
    {
        let run = Rc::clone(&self.run);
        Curried2 {
            name: self.name,
            run: Rc::new(move |a, b| run(a, b, c.clone())),
        }
    }
}

impl_meta!(Curried3, 3, A, B, C);

/// A four-argument function value accepting its arguments in any
/// grouping.
pub struct Curried4<A, B, C, D, R> {
    name: &'static str,
    run: Rc<dyn Fn(A, B, C, D) -> R>,
}

impl<A, B, C, D, R> Curried4<A, B, C, D, R> {
    /// Wrap a four-argument function.
    pub fn new<F>(name: &'static str, f: F) -> Self
    where
        F: Fn(A, B, C, D) -> R + 'static,
    {
        Curried4 {
            name,
            run: Rc::new(f),
        }
    }

    /// Saturate with all four arguments at once.
    pub fn call(&self, a: A, b: B, c: C, d: D) -> R {
        (self.run)(a, b, c, d)
    }
}

impl<A, B, C, D, R> Curried4<A, B, C, D, R>
where
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
    R: 'static,
{
    /// Supply the first argument.
    pub fn apply(&self, a: A) -> Curried3<B, C, D, R>
    where
        A: Clone,
    {
        let run = Rc::clone(&self.run);
        Curried3 {
            name: self.name,
            run: Rc::new(move |b, c, d| run(a.clone(), b, c, d)),
        }
    }

    /// Supply the first two arguments.
    pub fn apply2(&self, a: A, b: B) -> Curried2<C, D, R>
    where
        A: Clone,
        B: Clone,
    {
        let run = Rc::clone(&self.run);
        Curried2 {
            name: self.name,
            run: Rc::new(move |c, d| run(a.clone(), b.clone(), c, d)),
        }
    }

    /// Supply the first three arguments.
    pub fn apply3(&self, a: A, b: B, c: C) -> Curried1<D, R>
    where
        A: Clone,
        B: Clone,
        C: Clone,
    {
        let run = Rc::clone(&self.run);
        Curried1 {
            name: self.name,
            run: Rc::new(move |d| run(a.clone(), b.clone(), c.clone(), d)),
        }
    }

    /// Supply the second argument, deferring the first.
    pub fn apply_snd(&self, _: Placeholder, b: B) -> Curried3<A, C, D, R>
    where
        B: Clone,
    {
        let run = Rc::clone(&self.run);
        Curried3 {
            name: self.name,
            run: Rc::new(move |a, c, d| run(a, b.clone(), c, d)),
        }
    }

    /// Supply the third argument, deferring the first two.
    pub fn apply_trd(&self, _: Placeholder, _: Placeholder, c: C) -> Curried3<A, B, D, R>
    where
        C: Clone,
    {
        let run = Rc::clone(&self.run);
        Curried3 {
            name: self.name,
            run: Rc::new(move |a, b, d| run(a, b, c.clone(), d)),
        }
    }

    /// Supply the fourth argument, deferring the first three.
    pub fn apply_fth(
        &self,
        _: Placeholder,
        _: Placeholder,
        _: Placeholder,
        d: D,
    ) -> Curried3<A, B, C, R>
    where
        D: Clone,
    {
        let run = Rc::clone(&self.run);
        Curried3 {
            name: self.name,
            run: Rc::new(move |a, b, c| run(a, b, c, d.clone())),
        }
    }
}

impl_meta!(Curried4, 4, A, B, C, D);

/// Wrap a unary function as a curried value.
pub fn curry1<A, R, F>(name: &'static str, f: F) -> Curried1<A, R>
where
    F: Fn(A) -> R + 'static,
{
    Curried1::new(name, f)
}

/// Wrap a binary function as a curried value.
pub fn curry2<A, B, R, F>(name: &'static str, f: F) -> Curried2<A, B, R>
where
    F: Fn(A, B) -> R + 'static,
{
    Curried2::new(name, f)
}

/// Wrap a ternary function as a curried value.
pub fn curry3<A, B, C, R, F>(name: &'static str, f: F) -> Curried3<A, B, C, R>
where
    F: Fn(A, B, C) -> R + 'static,
{
    Curried3::new(name, f)
}

/// Wrap a four-argument function as a curried value.
pub fn curry4<A, B, C, D, R, F>(name: &'static str, f: F) -> Curried4<A, B, C, D, R>
where
    F: Fn(A, B, C, D) -> R + 'static,
{
    Curried4::new(name, f)
}
