/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Over-application errors and argument-count wording.

/// The error produced when a function receives more arguments than its
/// declared arity admits.
///
/// The rendering names the function and spells out both counts:
/// `add requires three arguments; received four arguments`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{name} requires {}; received {}", words(.declared), words(.received))]
pub struct ArityError {
    /// The wrapped function's name.
    pub name: &'static str,
    /// The arity declared at wrap time.
    pub declared: usize,
    /// The number of arguments actually received.
    pub received: usize,
}

impl ArityError {
    /// Create an over-application error.
    pub fn new(name: &'static str, declared: usize, received: usize) -> Self {
        ArityError {
            name,
            declared,
            received,
        }
    }
}

fn words(n: &usize) -> String {
    count_in_words(*n)
}

/// Render an argument count for an error message.
///
/// Counts up to ten are spelled out in words, larger counts are kept as
/// digits; the noun agrees in number.
///
/// ```
/// use curry::count_in_words;
///
/// assert_eq!(count_in_words(1), "one argument");
/// assert_eq!(count_in_words(3), "three arguments");
/// assert_eq!(count_in_words(11), "11 arguments");
/// ```
pub fn count_in_words(n: usize) -> String {
    const WORDS: [&str; 11] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ];
    let count = if n < WORDS.len() {
        WORDS[n].to_string()
    } else {
        n.to_string()
    };
    let noun = if n == 1 { "argument" } else { "arguments" };
    format!("{} {}", count, noun)
}
