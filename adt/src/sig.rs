/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Typed-function definitions and the runtime capability matrix.
//!
//! The validation collaborator registers each exported operation by
//! name, type-variable constraints, and positional signature, and is
//! responsible for argument validation and message formatting. The
//! obligations on this side are an accurate arity for every definition
//! and a capability matrix that names, as data, which classes each
//! exported container tag satisfies.

use std::collections::BTreeMap;

use algebra::TypeClass;
use curry::ArityError;
use serde::Serialize;

/// A registered operation: name, constraints, and positional
/// signature.
///
/// The signature is an ordered sequence of type descriptors, the last
/// being the return type, so the arity is one less than its length.
///
/// # Example
///
/// ```
/// use adt::FnDef;
/// use adt::TypeClass;
///
/// let def = FnDef::new("map", vec!["a -> b", "f a", "f b"])
///     .with_constraint("f", vec![TypeClass::Functor]);
/// assert_eq!(def.arity(), 2);
/// assert!(def.check_arity(2).is_ok());
/// assert!(def.check_arity(3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FnDef {
    name: &'static str,
    constraints: BTreeMap<&'static str, Vec<TypeClass>>,
    signature: Vec<&'static str>,
}

impl FnDef {
    /// Define an operation with no constraints.
    pub fn new(name: &'static str, signature: Vec<&'static str>) -> Self {
        FnDef {
            name,
            constraints: BTreeMap::new(),
            signature,
        }
    }

    /// Constrain a type variable to a set of capabilities.
    pub fn with_constraint(mut self, variable: &'static str, classes: Vec<TypeClass>) -> Self {
        self.constraints.insert(variable, classes);
        self
    }

    /// The operation's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The constraints on each type variable.
    pub fn constraints(&self) -> &BTreeMap<&'static str, Vec<TypeClass>> {
        &self.constraints
    }

    /// The positional signature, return type last.
    pub fn signature(&self) -> &[&'static str] {
        &self.signature
    }

    /// The declared arity: one less than the signature length.
    pub fn arity(&self) -> usize {
        self.signature.len().saturating_sub(1)
    }

    /// Reject an application carrying more arguments than the declared
    /// arity.
    pub fn check_arity(&self, received: usize) -> Result<(), ArityError> {
        if received > self.arity() {
            Err(ArityError::new(self.name, self.arity(), received))
        } else {
            Ok(())
        }
    }
}

/// The error produced when generic dispatch is attempted against a
/// type tag lacking the required capability.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DispatchError {
    /// The tag does not satisfy the class.
    #[error("missing type-class instance: {class} for {tag}")]
    MissingInstance {
        /// The required capability.
        class: TypeClass,
        /// The runtime type tag of the offending value.
        tag: String,
    },
}

/// The capabilities of each exported container tag.
///
/// Returns `None` for an unknown tag.
pub fn instances(tag: &str) -> Option<&'static [TypeClass]> {
    match tag {
        "fpcore/Maybe" => Some(&[
            TypeClass::Setoid,
            TypeClass::Ord,
            TypeClass::Semigroup,
            TypeClass::Monoid,
            TypeClass::Functor,
            TypeClass::Apply,
            TypeClass::Applicative,
            TypeClass::Chain,
            TypeClass::Monad,
            TypeClass::Alt,
            TypeClass::Plus,
            TypeClass::Alternative,
            TypeClass::Foldable,
            TypeClass::Traversable,
            TypeClass::Extend,
        ]),
        "fpcore/Either" => Some(&[
            TypeClass::Setoid,
            TypeClass::Ord,
            TypeClass::Semigroup,
            TypeClass::Functor,
            TypeClass::Bifunctor,
            TypeClass::Apply,
            TypeClass::Applicative,
            TypeClass::Chain,
            TypeClass::Monad,
            TypeClass::Foldable,
            TypeClass::Traversable,
            TypeClass::Extend,
        ]),
        "fpcore/Pair" => Some(&[
            TypeClass::Setoid,
            TypeClass::Ord,
            TypeClass::Semigroup,
            TypeClass::Monoid,
            TypeClass::Functor,
            TypeClass::Bifunctor,
            TypeClass::Extend,
            TypeClass::Comonad,
        ]),
        _ => None,
    }
}

/// Require that `tag` satisfies `class`, never defaulting silently.
pub fn require_instance(tag: &str, class: TypeClass) -> Result<(), DispatchError> {
    match instances(tag) {
        Some(classes) if classes.contains(&class) => Ok(()),
        _ => Err(DispatchError::MissingInstance {
            class,
            tag: tag.to_string(),
        }),
    }
}

/// The definitions registered for the generic combinators of this
/// crate.
pub fn definitions() -> Vec<FnDef> {
    vec![
        FnDef::new("equals", vec!["a", "a", "Boolean"])
            .with_constraint("a", vec![TypeClass::Setoid]),
        FnDef::new("lte", vec!["a", "a", "Boolean"]).with_constraint("a", vec![TypeClass::Ord]),
        FnDef::new("concat", vec!["a", "a", "a"])
            .with_constraint("a", vec![TypeClass::Semigroup]),
        FnDef::new("empty", vec!["a"]).with_constraint("a", vec![TypeClass::Monoid]),
        FnDef::new("map", vec!["a -> b", "f a", "f b"])
            .with_constraint("f", vec![TypeClass::Functor]),
        FnDef::new("ap", vec!["f (a -> b)", "f a", "f b"])
            .with_constraint("f", vec![TypeClass::Apply]),
        FnDef::new("of", vec!["a", "f a"]).with_constraint("f", vec![TypeClass::Applicative]),
        FnDef::new("chain", vec!["a -> m b", "m a", "m b"])
            .with_constraint("m", vec![TypeClass::Chain]),
        FnDef::new("alt", vec!["f a", "f a", "f a"]).with_constraint("f", vec![TypeClass::Alt]),
        FnDef::new("zero", vec!["f a"]).with_constraint("f", vec![TypeClass::Plus]),
        FnDef::new("reduce", vec!["(b, a) -> b", "b", "f a", "b"])
            .with_constraint("f", vec![TypeClass::Foldable]),
        FnDef::new("traverse", vec!["a -> f b", "t a", "f (t b)"])
            .with_constraint("t", vec![TypeClass::Traversable])
            .with_constraint("f", vec![TypeClass::Applicative]),
        FnDef::new("sequence", vec!["t (f a)", "f (t a)"])
            .with_constraint("t", vec![TypeClass::Traversable])
            .with_constraint("f", vec![TypeClass::Applicative]),
        FnDef::new("bimap", vec!["a -> b", "c -> d", "p a c", "p b d"])
            .with_constraint("p", vec![TypeClass::Bifunctor]),
        FnDef::new("extend", vec!["w a -> b", "w a", "w b"])
            .with_constraint("w", vec![TypeClass::Extend]),
        FnDef::new("extract", vec!["w a", "a"])
            .with_constraint("w", vec![TypeClass::Comonad]),
        FnDef::new("maybe", vec!["b", "a -> b", "Maybe a", "b"]),
        FnDef::new("fromMaybe", vec!["a", "Maybe a", "a"]),
        FnDef::new("either", vec!["a -> c", "b -> c", "Either a b", "c"]),
        FnDef::new("eitherToMaybe", vec!["Either a b", "Maybe b"]),
        FnDef::new("maybeToEither", vec!["a", "Maybe b", "Either a b"]),
    ]
}
