/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Either: a value of one of two types, Right-biased throughout.

use std::fmt;

use algebra::Applicative;
use algebra::Apply;
use algebra::Bifunctor;
use algebra::Chain;
use algebra::Extend;
use algebra::Foldable;
use algebra::Functor;
use algebra::Monad;
use algebra::Named;
use algebra::Semigroup;
use algebra::Setoid;
use algebra::StrictSetoid;
use algebra::TotalOrd;
use algebra::Traversable;
use serde::Deserialize;
use serde::Serialize;

/// A value of one of two types: [`Left`](Either::Left) conventionally
/// the failure branch, [`Right`](Either::Right) the success branch.
///
/// All sequencing instances are Right-biased: a `Left` short-circuits
/// without invoking the supplied function.
///
/// # Example
///
/// ```
/// use adt::Chain;
/// use adt::Either;
///
/// let safe_sqrt = |n: f64| {
///     if n >= 0.0 {
///         Either::Right(n.sqrt())
///     } else {
///         Either::Left("div0".to_string())
///     }
/// };
///
/// assert_eq!(Either::Right(25.0).chain(safe_sqrt), Either::Right(5.0));
/// let failed: Either<String, f64> = Either::Left("div0".to_string());
/// assert_eq!(failed.chain(safe_sqrt), Either::Left("div0".to_string()));
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Either<E, A> {
    /// The un-chosen branch; short-circuits sequencing.
    Left(E),
    /// The chosen branch; sequencing continues from here.
    Right(A),
}

impl<E, A> Either<E, A> {
    /// True when this is a `Left`.
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// True when this is a `Right`.
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Map over the Left payload only.
    pub fn map_left<C, F>(self, f: F) -> Either<C, A>
    where
        F: FnOnce(E) -> C,
    {
        match self {
            Either::Left(e) => Either::Left(f(e)),
            Either::Right(x) => Either::Right(x),
        }
    }

    /// Swap the branches.
    pub fn flip(self) -> Either<A, E> {
        match self {
            Either::Left(e) => Either::Right(e),
            Either::Right(x) => Either::Left(x),
        }
    }

    /// Convert into the host result type.
    pub fn into_result(self) -> Result<A, E> {
        self.into()
    }

    /// Convert from the host result type.
    pub fn from_result(result: Result<A, E>) -> Either<E, A> {
        result.into()
    }
}

impl<E, A> From<Result<A, E>> for Either<E, A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(x) => Either::Right(x),
            Err(e) => Either::Left(e),
        }
    }
}

impl<E, A> From<Either<E, A>> for Result<A, E> {
    fn from(either: Either<E, A>) -> Self {
        match either {
            Either::Left(e) => Err(e),
            Either::Right(x) => Ok(x),
        }
    }
}

impl<E, A> Functor for Either<E, A> {
    type Item = A;
    type Mapped<B> = Either<E, B>;

    fn map<B, F>(self, mut f: F) -> Either<E, B>
    where
        F: FnMut(A) -> B,
    {
        match self {
            Either::Left(e) => Either::Left(e),
            Either::Right(x) => Either::Right(f(x)),
        }
    }
}

impl<E, A> Bifunctor for Either<E, A> {
    type First = E;
    type Second = A;
    type Bimapped<C, D> = Either<C, D>;

    fn bimap<C, D, F, G>(self, f: F, g: G) -> Either<C, D>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(A) -> D,
    {
        match self {
            Either::Left(e) => Either::Left(f(e)),
            Either::Right(x) => Either::Right(g(x)),
        }
    }
}

impl<E, F0> Apply for Either<E, F0> {
    fn ap<A, B>(self, value: Either<E, A>) -> Either<E, B>
    where
        F0: FnMut(A) -> B,
    {
        match self {
            Either::Left(e) => Either::Left(e),
            Either::Right(f) => value.map(f),
        }
    }
}

impl<E, A> Applicative for Either<E, A> {
    fn pure(item: A) -> Self {
        Either::Right(item)
    }
}

impl<E, A> Chain for Either<E, A> {
    fn chain<B, F>(self, f: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        match self {
            Either::Left(e) => Either::Left(e),
            Either::Right(x) => f(x),
        }
    }
}

impl<E, A> Monad for Either<E, A> {}

impl<E, A> Foldable for Either<E, A> {
    type Item = A;

    fn reduce<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Either::Left(_) => init,
            Either::Right(x) => f(init, x),
        }
    }
}

impl<E, A> Traversable for Either<E, A> {
    fn traverse<G, F>(self, f: F) -> G::Mapped<Either<E, G::Item>>
    where
        G: Applicative,
        G::Mapped<Either<E, G::Item>>: Applicative<Item = Either<E, G::Item>>,
        F: FnOnce(A) -> G,
    {
        match self {
            Either::Left(e) => {
                <G::Mapped<Either<E, G::Item>> as Applicative>::pure(Either::Left(e))
            }
            Either::Right(x) => f(x).map(Either::Right),
        }
    }
}

impl<E, A> Extend for Either<E, A> {
    fn extend<B, F>(self, f: F) -> Either<E, B>
    where
        F: FnOnce(&Self) -> B,
    {
        match self {
            Either::Left(e) => Either::Left(e),
            right => {
                let b = f(&right);
                Either::Right(b)
            }
        }
    }
}

impl<E, A> Semigroup for Either<E, A>
where
    E: Semigroup + Clone,
    A: Semigroup + Clone,
{
    fn combine(&self, other: &Self) -> Self {
        match (self, other) {
            (Either::Left(a), Either::Left(b)) => Either::Left(a.combine(b)),
            (Either::Right(a), Either::Right(b)) => Either::Right(a.combine(b)),
            (Either::Right(a), Either::Left(_)) => Either::Right(a.clone()),
            (Either::Left(_), Either::Right(b)) => Either::Right(b.clone()),
        }
    }
}

impl<E, A> Setoid for Either<E, A>
where
    E: StrictSetoid,
    A: StrictSetoid,
{
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Either::Left(a), Either::Left(b)) => a.strict_equals(b),
            (Either::Right(a), Either::Right(b)) => a.strict_equals(b),
            _ => false,
        }
    }
}

impl<E, A> StrictSetoid for Either<E, A>
where
    E: StrictSetoid,
    A: StrictSetoid,
{
}

impl<E, A> TotalOrd for Either<E, A>
where
    E: TotalOrd + StrictSetoid,
    A: TotalOrd + StrictSetoid,
{
    fn lte(&self, other: &Self) -> bool {
        match (self, other) {
            (Either::Left(a), Either::Left(b)) => a.lte(b),
            (Either::Left(_), Either::Right(_)) => true,
            (Either::Right(_), Either::Left(_)) => false,
            (Either::Right(a), Either::Right(b)) => a.lte(b),
        }
    }
}

impl<E, A> Named for Either<E, A> {
    fn type_tag() -> &'static str {
        "fpcore/Either"
    }

    fn arm(&self) -> Option<&'static str> {
        Some(match self {
            Either::Left(_) => "Left",
            Either::Right(_) => "Right",
        })
    }
}

impl<E: fmt::Debug, A: fmt::Debug> fmt::Display for Either<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(e) => write!(f, "Left({:?})", e),
            Either::Right(x) => write!(f, "Right({:?})", x),
        }
    }
}

/// Eliminate an [`Either`]: `on_left` for a `Left` payload, `on_right`
/// for a `Right` payload. Exactly one of the two runs.
pub fn either<E, A, B, FL, FR>(on_left: FL, on_right: FR, value: Either<E, A>) -> B
where
    FL: FnOnce(E) -> B,
    FR: FnOnce(A) -> B,
{
    match value {
        Either::Left(e) => on_left(e),
        Either::Right(x) => on_right(x),
    }
}

/// Collect the payloads of every `Left`, preserving order.
pub fn lefts<E, A>(values: Vec<Either<E, A>>) -> Vec<E> {
    values
        .into_iter()
        .filter_map(|e| match e {
            Either::Left(x) => Some(x),
            Either::Right(_) => None,
        })
        .collect()
}

/// Collect the payloads of every `Right`, preserving order.
pub fn rights<E, A>(values: Vec<Either<E, A>>) -> Vec<A> {
    values
        .into_iter()
        .filter_map(|e| match e {
            Either::Left(_) => None,
            Either::Right(x) => Some(x),
        })
        .collect()
}

/// Run a fallible host operation, converting its failure into a
/// `Left`.
pub fn encase_either<T, E, F>(operation: F) -> Either<E, T>
where
    F: FnOnce() -> Result<T, E>,
{
    operation().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn safe_sqrt(n: f64) -> Either<String, f64> {
        if n >= 0.0 {
            Either::Right(n.sqrt())
        } else {
            Either::Left("negative".to_string())
        }
    }

    #[test]
    fn map_acts_only_on_right() {
        let r: Either<String, i32> = Either::Right(2);
        assert_eq!(r.map(|x| x * 2), Either::Right(4));
        let l: Either<String, i32> = Either::Left("e".to_string());
        assert_eq!(l.map(|x| x * 2), Either::Left("e".to_string()));
    }

    #[test]
    fn chain_short_circuits_on_left_without_invoking() {
        let l: Either<String, f64> = Either::Left("div0".to_string());
        let observed = std::cell::Cell::new(false);
        let result = l.chain(|x| {
            observed.set(true);
            safe_sqrt(x)
        });
        assert_eq!(result, Either::Left("div0".to_string()));
        assert!(!observed.get());
    }

    #[test]
    fn chain_continues_on_right() {
        let r: Either<String, f64> = Either::Right(25.0);
        assert_eq!(r.chain(safe_sqrt), Either::Right(5.0));
    }

    #[test]
    fn monad_identities() {
        let f = |x: i32| -> Either<String, i32> { Either::Right(x * 2) };
        assert_eq!(Either::<String, i32>::pure(21).chain(f), f(21));
        let m: Either<String, i32> = Either::Right(3);
        assert_eq!(m.clone().chain(Either::pure), m);
    }

    #[test]
    fn ap_is_right_biased() {
        let inc = |n: i32| n + 1;
        let f: Either<String, _> = Either::Right(inc);
        assert_eq!(f.ap(Either::Right(42)), Either::Right(43));
        let lf: Either<String, fn(i32) -> i32> = Either::Left("f".to_string());
        assert_eq!(lf.ap(Either::Right(42)), Either::Left("f".to_string()));
        let g: Either<String, _> = Either::Right(inc);
        assert_eq!(
            g.ap(Either::Left("x".to_string())),
            Either::Left("x".to_string())
        );
    }

    #[test]
    fn bimap_runs_exactly_one_side() {
        let l: Either<i32, String> = Either::Left(1);
        assert_eq!(
            l.bimap(|e| e + 1, |s: String| s.len()),
            Either::Left(2)
        );
        let r: Either<i32, String> = Either::Right("abc".to_string());
        assert_eq!(
            r.bimap(|e| e + 1, |s: String| s.len()),
            Either::Right(3)
        );
    }

    #[test]
    fn bimap_identity_and_composition() {
        let r: Either<i32, i32> = Either::Right(5);
        assert_eq!(r.bimap(|x| x, |y| y), r);
        let f1 = |x: i32| x + 1;
        let f2 = |x: i32| x * 2;
        let g1 = |y: i32| y - 1;
        let g2 = |y: i32| y * 3;
        assert_eq!(
            r.bimap(f1, g1).bimap(f2, g2),
            r.bimap(|x| f2(f1(x)), |y| g2(g1(y)))
        );
    }

    #[test]
    fn combine_concatenates_within_a_branch() {
        let a: Either<String, Vec<i32>> = Either::Left("ab".to_string());
        let b: Either<String, Vec<i32>> = Either::Left("cd".to_string());
        assert_eq!(a.combine(&b), Either::Left("abcd".to_string()));

        let x: Either<String, Vec<i32>> = Either::Right(vec![1]);
        let y: Either<String, Vec<i32>> = Either::Right(vec![2]);
        assert_eq!(x.combine(&y), Either::Right(vec![1, 2]));
    }

    #[test]
    fn combine_prefers_right_regardless_of_position() {
        let l: Either<String, Vec<i32>> = Either::Left("e".to_string());
        let r: Either<String, Vec<i32>> = Either::Right(vec![1]);
        assert_eq!(l.combine(&r), r);
        assert_eq!(r.combine(&l), r);
    }

    #[test]
    fn equals_is_branch_and_payload_sensitive() {
        let l: Either<i32, i32> = Either::Left(1);
        let r: Either<i32, i32> = Either::Right(1);
        assert!(!l.equals(&r));
        assert!(!r.equals(&l));
        assert!(l.equals(&Either::Left(1)));
        assert!(!l.equals(&Either::Left(2)));
        assert!(r.equals(&Either::Right(1)));
    }

    #[test]
    fn left_payloads_also_distinguish_zero_signs() {
        let a: Either<f64, i32> = Either::Left(0.0);
        let b: Either<f64, i32> = Either::Left(-0.0);
        assert!(!a.equals(&b));
        let n: Either<f64, i32> = Either::Left(f64::NAN);
        assert!(n.equals(&Either::Left(f64::NAN)));
    }

    #[test]
    fn lte_orders_left_below_right() {
        let l: Either<i32, i32> = Either::Left(9);
        let r: Either<i32, i32> = Either::Right(0);
        assert!(l.lte(&r));
        assert!(!r.lte(&l));
        assert!(Either::<i32, i32>::Left(1).lte(&Either::Left(2)));
        assert!(Either::<i32, i32>::Right(1).lte(&Either::Right(2)));
    }

    #[test]
    fn reduce_ignores_left() {
        let r: Either<String, i32> = Either::Right(3);
        assert_eq!(r.reduce(10, |acc, x| acc + x), 13);
        let l: Either<String, i32> = Either::Left("e".to_string());
        assert_eq!(l.reduce(10, |acc, x| acc + x), 10);
    }

    #[test]
    fn traverse_is_right_biased() {
        use crate::Maybe;

        let non_zero = |n: i32| {
            if n == 0 {
                Maybe::Nothing
            } else {
                Maybe::Just(n)
            }
        };
        let r: Either<String, i32> = Either::Right(3);
        assert_eq!(r.traverse(non_zero), Maybe::Just(Either::Right(3)));
        let z: Either<String, i32> = Either::Right(0);
        assert_eq!(z.traverse(non_zero), Maybe::Nothing);
        let l: Either<String, i32> = Either::Left("e".to_string());
        assert_eq!(
            l.traverse(non_zero),
            Maybe::Just(Either::Left("e".to_string()))
        );
    }

    #[test]
    fn extend_receives_the_whole_container() {
        let r: Either<String, i32> = Either::Right(3);
        let extended = r.extend(|w| match w {
            Either::Left(_) => 0,
            Either::Right(x) => x + 10,
        });
        assert_eq!(extended, Either::Right(13));
        let l: Either<String, i32> = Either::Left("e".to_string());
        assert_eq!(l.extend(|_| 0), Either::Left("e".to_string()));
    }

    #[test]
    fn eliminator_runs_the_matching_side() {
        let l: Either<String, i32> = Either::Left("ab".to_string());
        assert_eq!(either(|e: String| e.len(), |x: i32| x as usize, l), 2);
        let r: Either<String, i32> = Either::Right(7);
        assert_eq!(either(|e: String| e.len(), |x: i32| x as usize, r), 7);
    }

    #[test]
    fn lefts_and_rights_filter_in_order() {
        let values: Vec<Either<&str, i32>> = vec![
            Either::Right(1),
            Either::Left("a"),
            Either::Right(2),
            Either::Left("b"),
        ];
        assert_eq!(lefts(values.clone()), vec!["a", "b"]);
        assert_eq!(rights(values), vec![1, 2]);
    }

    #[test]
    fn map_left_and_flip() {
        let l: Either<i32, String> = Either::Left(1);
        assert_eq!(l.map_left(|e| e + 1), Either::Left(2));
        let r: Either<i32, String> = Either::Right("x".to_string());
        assert_eq!(r.clone().map_left(|e| e + 1), r);
        assert_eq!(r.flip(), Either::Left("x".to_string()));
    }

    #[test]
    fn result_conversions_round_trip() {
        let ok: Result<i32, String> = Ok(1);
        assert_eq!(Either::from_result(ok), Either::Right(1));
        let err: Result<i32, String> = Err("e".to_string());
        assert_eq!(Either::from_result(err), Either::Left("e".to_string()));
        assert_eq!(Either::<String, i32>::Right(1).into_result(), Ok(1));
    }

    #[test]
    fn encase_either_keeps_the_failure() {
        let ok = encase_either(|| "5".parse::<i32>());
        assert_eq!(ok, Either::Right(5));
        let err = encase_either(|| "x".parse::<i32>());
        assert!(err.is_left());
    }

    #[test]
    fn display_renders_the_canonical_form() {
        let l: Either<&str, i32> = Either::Left("x");
        assert_eq!(l.to_string(), "Left(\"x\")");
        let r: Either<&str, Vec<i32>> = Either::Right(vec![1, 2, 3]);
        assert_eq!(r.to_string(), "Right([1, 2, 3])");
    }

    #[test]
    fn named_reports_tag_and_arm() {
        assert_eq!(Either::<i32, i32>::type_tag(), "fpcore/Either");
        assert_eq!(Either::<i32, i32>::Left(1).arm(), Some("Left"));
        assert_eq!(Either::<i32, i32>::Right(1).arm(), Some("Right"));
    }

    mod properties {
        use proptest::prelude::*;

        use super::super::*;
        use crate::strategy::gen_either;
        use crate::strategy::gen_weird_f64;

        proptest! {
            #[test]
            fn equals_is_reflexive(e in gen_either(gen_weird_f64(), gen_weird_f64())) {
                prop_assert!(e.equals(&e));
            }

            #[test]
            fn equals_is_symmetric(
                a in gen_either(any::<i32>(), gen_weird_f64()),
                b in gen_either(any::<i32>(), gen_weird_f64()),
            ) {
                prop_assert_eq!(a.equals(&b), b.equals(&a));
            }

            #[test]
            fn lte_is_total(
                a in gen_either(any::<i32>(), any::<i32>()),
                b in gen_either(any::<i32>(), any::<i32>()),
            ) {
                prop_assert!(a.lte(&b) || b.lte(&a));
            }
        }
    }
}
