/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Maybe: an optional value with the full instance matrix.

use std::fmt;

use algebra::Alt;
use algebra::Alternative;
use algebra::Applicative;
use algebra::Apply;
use algebra::Chain;
use algebra::Extend;
use algebra::Foldable;
use algebra::Functor;
use algebra::Monad;
use algebra::Monoid;
use algebra::Named;
use algebra::Plus;
use algebra::Semigroup;
use algebra::Setoid;
use algebra::StrictSetoid;
use algebra::TotalOrd;
use algebra::Traversable;
use serde::Deserialize;
use serde::Serialize;

/// An optional value: either [`Nothing`](Maybe::Nothing) or
/// [`Just`](Maybe::Just) a payload.
///
/// Every operation constructs a new value; nothing is ever mutated in
/// place. `Nothing` carries no state and is the identity for both
/// [`Alt`] and [`Semigroup`] combination.
///
/// # Example
///
/// ```
/// use adt::Maybe;
/// use adt::Apply;
/// use adt::Chain;
///
/// let inc = |n: i32| n + 1;
/// assert_eq!(Maybe::Just(inc).ap(Maybe::Just(42)), Maybe::Just(43));
///
/// let parsed = Maybe::Just("5").chain(|s: &str| match s.parse::<i32>() {
///     Ok(n) => Maybe::Just(n),
///     Err(_) => Maybe::Nothing,
/// });
/// assert_eq!(parsed, Maybe::Just(5));
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Maybe<A> {
    /// The absent case.
    Nothing,
    /// The present case, carrying exactly one payload.
    Just(A),
}

impl<A> Maybe<A> {
    /// True when this is `Nothing`.
    pub fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// True when this is a `Just`.
    pub fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    /// Keep a `Just` only when its payload satisfies `predicate`.
    pub fn filter<P>(self, predicate: P) -> Maybe<A>
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Maybe::Just(x) if predicate(&x) => Maybe::Just(x),
            _ => Maybe::Nothing,
        }
    }

    /// Convert into the host optional type.
    pub fn into_option(self) -> Option<A> {
        self.into()
    }

    /// Convert from the host optional type.
    pub fn from_option(option: Option<A>) -> Maybe<A> {
        option.into()
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Maybe::Nothing
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(option: Option<A>) -> Self {
        match option {
            None => Maybe::Nothing,
            Some(x) => Maybe::Just(x),
        }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(maybe: Maybe<A>) -> Self {
        match maybe {
            Maybe::Nothing => None,
            Maybe::Just(x) => Some(x),
        }
    }
}

impl<A> Functor for Maybe<A> {
    type Item = A;
    type Mapped<B> = Maybe<B>;

    fn map<B, F>(self, mut f: F) -> Maybe<B>
    where
        F: FnMut(A) -> B,
    {
        match self {
            Maybe::Nothing => Maybe::Nothing,
            Maybe::Just(x) => Maybe::Just(f(x)),
        }
    }
}

impl<F0> Apply for Maybe<F0> {
    fn ap<A, B>(self, value: Maybe<A>) -> Maybe<B>
    where
        F0: FnMut(A) -> B,
    {
        match self {
            Maybe::Nothing => Maybe::Nothing,
            Maybe::Just(f) => value.map(f),
        }
    }
}

impl<A> Applicative for Maybe<A> {
    fn pure(item: A) -> Self {
        Maybe::Just(item)
    }
}

impl<A> Chain for Maybe<A> {
    fn chain<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Maybe::Nothing => Maybe::Nothing,
            Maybe::Just(x) => f(x),
        }
    }
}

impl<A> Monad for Maybe<A> {}

impl<A> Alt for Maybe<A> {
    fn alt(self, other: Self) -> Self {
        match self {
            Maybe::Nothing => other,
            just => just,
        }
    }
}

impl<A> Plus for Maybe<A> {
    fn zero() -> Self {
        Maybe::Nothing
    }
}

impl<A> Alternative for Maybe<A> {}

impl<A> Foldable for Maybe<A> {
    type Item = A;

    fn reduce<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Maybe::Nothing => init,
            Maybe::Just(x) => f(init, x),
        }
    }
}

impl<A> Traversable for Maybe<A> {
    fn traverse<G, F>(self, f: F) -> G::Mapped<Maybe<G::Item>>
    where
        G: Applicative,
        G::Mapped<Maybe<G::Item>>: Applicative<Item = Maybe<G::Item>>,
        F: FnOnce(A) -> G,
    {
        match self {
            Maybe::Nothing => {
                <G::Mapped<Maybe<G::Item>> as Applicative>::pure(Maybe::Nothing)
            }
            Maybe::Just(x) => f(x).map(Maybe::Just),
        }
    }
}

impl<A> Extend for Maybe<A> {
    fn extend<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(&Self) -> B,
    {
        match self {
            Maybe::Nothing => Maybe::Nothing,
            just => {
                let b = f(&just);
                Maybe::Just(b)
            }
        }
    }
}

impl<A: Semigroup + Clone> Semigroup for Maybe<A> {
    fn combine(&self, other: &Self) -> Self {
        match (self, other) {
            (Maybe::Nothing, m) => m.clone(),
            (m, Maybe::Nothing) => m.clone(),
            (Maybe::Just(a), Maybe::Just(b)) => Maybe::Just(a.combine(b)),
        }
    }
}

impl<A: Semigroup + Clone> Monoid for Maybe<A> {
    fn empty() -> Self {
        Maybe::Nothing
    }
}

impl<A: StrictSetoid> Setoid for Maybe<A> {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Maybe::Nothing, Maybe::Nothing) => true,
            (Maybe::Just(a), Maybe::Just(b)) => a.strict_equals(b),
            _ => false,
        }
    }
}

impl<A: StrictSetoid> StrictSetoid for Maybe<A> {}

impl<A: TotalOrd + StrictSetoid> TotalOrd for Maybe<A> {
    fn lte(&self, other: &Self) -> bool {
        match (self, other) {
            (Maybe::Nothing, _) => true,
            (Maybe::Just(_), Maybe::Nothing) => false,
            (Maybe::Just(a), Maybe::Just(b)) => a.lte(b),
        }
    }
}

impl<A> Named for Maybe<A> {
    fn type_tag() -> &'static str {
        "fpcore/Maybe"
    }

    fn arm(&self) -> Option<&'static str> {
        Some(match self {
            Maybe::Nothing => "Nothing",
            Maybe::Just(_) => "Just",
        })
    }
}

impl<A: fmt::Debug> fmt::Display for Maybe<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Nothing => f.write_str("Nothing"),
            Maybe::Just(x) => write!(f, "Just({:?})", x),
        }
    }
}

/// Eliminate a [`Maybe`]: `default` for `Nothing`, `f` applied to the
/// payload for `Just`.
pub fn maybe<A, B, F>(default: B, f: F, value: Maybe<A>) -> B
where
    F: FnOnce(A) -> B,
{
    match value {
        Maybe::Nothing => default,
        Maybe::Just(x) => f(x),
    }
}

/// Take the payload of a `Just`, or `default` for `Nothing`.
pub fn from_maybe<A>(default: A, value: Maybe<A>) -> A {
    match value {
        Maybe::Nothing => default,
        Maybe::Just(x) => x,
    }
}

/// Collect the payloads of every `Just`, preserving order.
pub fn justs<A>(values: Vec<Maybe<A>>) -> Vec<A> {
    values
        .into_iter()
        .filter_map(|m| match m {
            Maybe::Nothing => None,
            Maybe::Just(x) => Some(x),
        })
        .collect()
}

/// Run a fallible host operation, converting its failure into
/// `Nothing`.
///
/// The failure value is discarded; use
/// [`encase_either`](crate::encase_either) to keep it.
pub fn encase<T, E, F>(operation: F) -> Maybe<T>
where
    F: FnOnce() -> Result<T, E>,
{
    match operation() {
        Ok(value) => Maybe::Just(value),
        Err(_) => Maybe::Nothing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_on_just_applies_and_on_nothing_passes_through() {
        assert_eq!(Maybe::Just(2).map(|x| x * 2), Maybe::Just(4));
        assert_eq!(Maybe::<i32>::Nothing.map(|x| x * 2), Maybe::Nothing);
    }

    #[test]
    fn functor_identity_and_composition() {
        let m = Maybe::Just(7);
        assert_eq!(m.map(|x| x), m);
        let f = |x: i32| x + 1;
        let g = |x: i32| x * 3;
        assert_eq!(m.map(g).map(f), m.map(|x| f(g(x))));
    }

    #[test]
    fn ap_applies_the_held_function() {
        let inc = |n: i32| n + 1;
        assert_eq!(Maybe::Just(inc).ap(Maybe::Just(42)), Maybe::Just(43));
        assert_eq!(Maybe::Just(inc).ap(Maybe::Nothing), Maybe::Nothing);
        let nothing: Maybe<fn(i32) -> i32> = Maybe::Nothing;
        assert_eq!(nothing.ap(Maybe::Just(42)), Maybe::Nothing);
    }

    #[test]
    fn monad_left_and_right_identity() {
        let f = |x: i32| Maybe::Just(x * 2);
        assert_eq!(Maybe::pure(21).chain(f), f(21));
        let m = Maybe::Just(3);
        assert_eq!(m.chain(Maybe::pure), m);
        assert_eq!(Maybe::<i32>::Nothing.chain(f), Maybe::Nothing);
    }

    #[test]
    fn chain_associativity() {
        let m = Maybe::Just(5);
        let f = |x: i32| Maybe::Just(x + 1);
        let g = |x: i32| if x > 3 { Maybe::Just(x) } else { Maybe::Nothing };
        assert_eq!(m.chain(f).chain(g), m.chain(|x| f(x).chain(g)));
    }

    #[test]
    fn alt_prefers_the_first_just() {
        assert_eq!(Maybe::Just(1).alt(Maybe::Just(2)), Maybe::Just(1));
        assert_eq!(Maybe::Nothing.alt(Maybe::Just(2)), Maybe::Just(2));
        assert_eq!(Maybe::Just(1).alt(Maybe::Nothing), Maybe::Just(1));
        assert_eq!(
            Maybe::<i32>::Nothing.alt(Maybe::Nothing),
            Maybe::Nothing
        );
        assert_eq!(Maybe::<i32>::zero(), Maybe::Nothing);
    }

    #[test]
    fn reduce_folds_the_payload_if_any() {
        assert_eq!(Maybe::Just(3).reduce(10, |acc, x| acc + x), 13);
        assert_eq!(Maybe::<i32>::Nothing.reduce(10, |acc, x| acc + x), 10);
    }

    #[test]
    fn concat_combines_payloads_with_nothing_as_identity() {
        let a = Maybe::Just(vec![1, 2, 3]);
        let b = Maybe::Just(vec![4, 5, 6]);
        assert_eq!(a.combine(&b), Maybe::Just(vec![1, 2, 3, 4, 5, 6]));
        assert_eq!(Maybe::Nothing.combine(&a), a);
        assert_eq!(a.combine(&Maybe::Nothing), a);
        assert_eq!(Maybe::<Vec<i32>>::empty(), Maybe::Nothing);
    }

    #[test]
    fn equals_is_variant_and_payload_sensitive() {
        assert!(Maybe::<i32>::Nothing.equals(&Maybe::Nothing));
        assert!(Maybe::Just(1).equals(&Maybe::Just(1)));
        assert!(!Maybe::Just(1).equals(&Maybe::Just(2)));
        assert!(!Maybe::Nothing.equals(&Maybe::Just(0)));
        assert!(!Maybe::Just(0).equals(&Maybe::Nothing));
    }

    #[test]
    fn just_nan_equals_just_nan() {
        assert!(Maybe::Just(f64::NAN).equals(&Maybe::Just(f64::NAN)));
    }

    #[test]
    fn just_distinguishes_the_sign_of_zero() {
        assert!(!Maybe::Just(0.0_f64).equals(&Maybe::Just(-0.0)));
        assert!(!Maybe::Just(-0.0_f64).equals(&Maybe::Just(0.0)));
        assert!(Maybe::Just(0.0_f64).equals(&Maybe::Just(0.0)));
        // The bare numbers are still equal under the free relation.
        assert!(0.0_f64.equals(&-0.0));
    }

    #[test]
    fn lte_orders_nothing_below_just() {
        assert!(Maybe::<i32>::Nothing.lte(&Maybe::Nothing));
        assert!(Maybe::Nothing.lte(&Maybe::Just(i32::MIN)));
        assert!(!Maybe::Just(0).lte(&Maybe::Nothing));
        assert!(Maybe::Just(1).lte(&Maybe::Just(2)));
        assert!(!Maybe::Just(2).lte(&Maybe::Just(1)));
    }

    #[test]
    fn extend_receives_the_whole_container() {
        let m = Maybe::Just(3);
        let extended = m.extend(|w| match w {
            Maybe::Nothing => 0,
            Maybe::Just(x) => x + 10,
        });
        assert_eq!(extended, Maybe::Just(13));
        assert_eq!(
            Maybe::<i32>::Nothing.extend(|_| 0),
            Maybe::Nothing
        );
    }

    #[test]
    fn traverse_collects_the_effect_outside() {
        use crate::Either;

        let safe_sqrt = |n: f64| {
            if n >= 0.0 {
                Either::Right(n.sqrt())
            } else {
                Either::Left("negative".to_string())
            }
        };
        assert_eq!(
            Maybe::Just(25.0).traverse(safe_sqrt),
            Either::Right(Maybe::Just(5.0))
        );
        assert_eq!(
            Maybe::Just(-1.0).traverse(safe_sqrt),
            Either::Left("negative".to_string())
        );
        let nothing: Either<String, Maybe<f64>> = Maybe::Nothing.traverse(safe_sqrt);
        assert_eq!(nothing, Either::Right(Maybe::Nothing));
    }

    #[test]
    fn sequence_flips_a_maybe_of_either() {
        use crate::Either;

        let m: Maybe<Either<String, i32>> = Maybe::Just(Either::Right(3));
        assert_eq!(m.sequence(), Either::Right(Maybe::Just(3)));
        let l: Maybe<Either<String, i32>> = Maybe::Just(Either::Left("e".to_string()));
        assert_eq!(l.sequence(), Either::Left("e".to_string()));
    }

    #[test]
    fn filter_keeps_matching_payloads() {
        assert_eq!(Maybe::Just(4).filter(|x| x % 2 == 0), Maybe::Just(4));
        assert_eq!(Maybe::Just(3).filter(|x| x % 2 == 0), Maybe::Nothing);
        assert_eq!(
            Maybe::<i32>::Nothing.filter(|x| x % 2 == 0),
            Maybe::Nothing
        );
    }

    #[test]
    fn eliminators_and_filters() {
        assert_eq!(maybe(0, |x: i32| x + 1, Maybe::Just(41)), 42);
        assert_eq!(maybe(0, |x: i32| x + 1, Maybe::Nothing), 0);
        assert_eq!(from_maybe(7, Maybe::Just(1)), 1);
        assert_eq!(from_maybe(7, Maybe::Nothing), 7);
        assert_eq!(
            justs(vec![Maybe::Just(1), Maybe::Nothing, Maybe::Just(3)]),
            vec![1, 3]
        );
    }

    #[test]
    fn encase_converts_failure_to_nothing() {
        assert_eq!(encase(|| "5".parse::<i32>()), Maybe::Just(5));
        assert_eq!(encase(|| "x".parse::<i32>()), Maybe::Nothing);
    }

    #[test]
    fn option_conversions_round_trip() {
        assert_eq!(Maybe::from_option(Some(1)), Maybe::Just(1));
        assert_eq!(Maybe::<i32>::from_option(None), Maybe::Nothing);
        assert_eq!(Maybe::Just(1).into_option(), Some(1));
        assert_eq!(Maybe::<i32>::Nothing.into_option(), None);
    }

    #[test]
    fn display_renders_the_canonical_form() {
        assert_eq!(Maybe::Just(42).to_string(), "Just(42)");
        assert_eq!(Maybe::<i32>::Nothing.to_string(), "Nothing");
        assert_eq!(
            Maybe::Just(vec![1, 2, 3]).to_string(),
            "Just([1, 2, 3])"
        );
    }

    #[test]
    fn named_reports_tag_and_arm() {
        assert_eq!(Maybe::<i32>::type_tag(), "fpcore/Maybe");
        assert_eq!(Maybe::Just(1).arm(), Some("Just"));
        assert_eq!(Maybe::<i32>::Nothing.arm(), Some("Nothing"));
    }

    #[test]
    fn serde_round_trips() {
        let m = Maybe::Just(5);
        let json = serde_json::to_string(&m).unwrap();
        let back: Maybe<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    mod properties {
        use proptest::prelude::*;

        use super::super::*;
        use crate::strategy::gen_maybe;
        use crate::strategy::gen_weird_f64;

        proptest! {
            #[test]
            fn equals_is_reflexive(m in gen_maybe(gen_weird_f64())) {
                prop_assert!(m.equals(&m));
            }

            #[test]
            fn equals_is_symmetric(
                a in gen_maybe(gen_weird_f64()),
                b in gen_maybe(gen_weird_f64()),
            ) {
                prop_assert_eq!(a.equals(&b), b.equals(&a));
            }

            #[test]
            fn alt_is_associative(
                a in gen_maybe(any::<i32>()),
                b in gen_maybe(any::<i32>()),
                c in gen_maybe(any::<i32>()),
            ) {
                prop_assert_eq!(a.alt(b).alt(c), a.alt(b.alt(c)));
            }

            #[test]
            fn lte_is_total(a in gen_maybe(any::<i32>()), b in gen_maybe(any::<i32>())) {
                prop_assert!(a.lte(&b) || b.lte(&a));
            }
        }
    }
}
