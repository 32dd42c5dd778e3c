// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! A small boolean expression tree over post-parse occurrence counts.
//!
//! Leaves test whether a registered option or positional was seen ([`Validator::required`]) or
//! was not ([`Validator::absent`]). [`And`](Validator::And), [`Or`](Validator::Or),
//! [`Xor`](Validator::Xor) and [`NXor`](Validator::NXor) combine them. There is no stored `Not`
//! node: [`Validator::negate`] rewrites the tree eagerly via De Morgan's laws the moment it is
//! called, so the tree a caller builds is always already in negation-normal form and stays
//! self-describing.

use crate::validation::ValidationData;

/// A node in the validator expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validator {
    /// `data[name] > 0`.
    OptionRequired(String),
    /// `data[name] == 0`.
    OptionAbsent(String),
    /// True iff every child is true. Short-circuits on the first false child.
    And(Vec<Validator>),
    /// True iff at least one child is true. Short-circuits on the first true child.
    Or(Vec<Validator>),
    /// True iff an odd number of children are true.
    Xor(Vec<Validator>),
    /// True iff an even number of children are true ("all or none", for two children).
    NXor(Vec<Validator>),
}

impl Validator {
    pub fn required(name: impl Into<String>) -> Self {
        Validator::OptionRequired(name.into())
    }

    pub fn absent(name: impl Into<String>) -> Self {
        Validator::OptionAbsent(name.into())
    }

    /// Builds an `And`, flattening any direct `And` children into this node's child list so that
    /// `a && (b && c)` and `(a && b) && c` both produce a single flat 3-child node.
    pub fn and(children: Vec<Validator>) -> Self {
        Validator::And(flatten(children, |v| matches!(v, Validator::And(_))))
    }

    /// Builds an `Or`, flattening any direct `Or` children the same way `and` flattens `And`.
    pub fn or(children: Vec<Validator>) -> Self {
        Validator::Or(flatten(children, |v| matches!(v, Validator::Or(_))))
    }

    /// Builds an `Xor`. Unlike `And`/`Or`, `Xor` does not flatten nested `Xor` children, since
    /// parity is not associative in a way that collapsing preserves describability for.
    pub fn xor(children: Vec<Validator>) -> Self {
        Validator::Xor(children)
    }

    /// Builds an `NXor` ("all or none").
    pub fn nxor(children: Vec<Validator>) -> Self {
        Validator::NXor(children)
    }

    /// Returns the logical negation of this validator, rewritten eagerly via De Morgan's laws so
    /// that the result contains no residual `Not` wrapper:
    ///
    /// - `!OptionRequired(n)` = `OptionAbsent(n)`, and vice versa.
    /// - `!And(xs)` = `Or(!xs)`; `!Or(xs)` = `And(!xs)`.
    /// - `!Xor(xs)` = `NXor(xs)`; `!NXor(xs)` = `Xor(xs)`.
    pub fn negate(self) -> Validator {
        match self {
            Validator::OptionRequired(name) => Validator::OptionAbsent(name),
            Validator::OptionAbsent(name) => Validator::OptionRequired(name),
            Validator::And(children) => {
                Validator::Or(children.into_iter().map(Validator::negate).collect())
            },
            Validator::Or(children) => {
                Validator::And(children.into_iter().map(Validator::negate).collect())
            },
            Validator::Xor(children) => Validator::NXor(children),
            Validator::NXor(children) => Validator::Xor(children),
        }
    }

    /// Evaluates the tree against observed occurrence counts.
    pub fn evaluate(&self, data: &ValidationData) -> bool {
        match self {
            Validator::OptionRequired(name) => data.count(name) > 0,
            Validator::OptionAbsent(name) => data.count(name) == 0,
            Validator::And(children) => children.iter().all(|c| c.evaluate(data)),
            Validator::Or(children) => children.iter().any(|c| c.evaluate(data)),
            Validator::Xor(children) => {
                children.iter().filter(|c| c.evaluate(data)).count() % 2 == 1
            },
            Validator::NXor(children) => {
                children.iter().filter(|c| c.evaluate(data)).count() % 2 == 0
            },
        }
    }

    /// Collects every name referenced by a leaf predicate in this tree, for checking against the
    /// set of names actually registered with a parser before the validator is accepted.
    pub(crate) fn leaf_names(&self, out: &mut Vec<&str>) {
        match self {
            Validator::OptionRequired(name) | Validator::OptionAbsent(name) => out.push(name),
            Validator::And(children)
            | Validator::Or(children)
            | Validator::Xor(children)
            | Validator::NXor(children) => children.iter().for_each(|c| c.leaf_names(out)),
        }
    }

    /// Renders a human-readable, indented tree describing this validator. Used both for
    /// diagnostics and as the default description of a validator added without an explicit one.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        self.describe_at(0, &mut out);
        out
    }

    fn describe_at(&self, indent: usize, out: &mut String) {
        let pad = "  ".repeat(indent);
        match self {
            Validator::OptionRequired(name) => {
                out.push_str(&format!("{}{} is required\n", pad, name))
            },
            Validator::OptionAbsent(name) => {
                out.push_str(&format!("{}{} must be absent\n", pad, name))
            },
            Validator::And(children) => describe_combinator(children, "all of:", indent, out),
            Validator::Or(children) => describe_combinator(children, "any of:", indent, out),
            Validator::Xor(children) => describe_combinator(children, "exactly one of:", indent, out),
            Validator::NXor(children) => describe_combinator(children, "all or none of:", indent, out),
        }
    }
}

fn describe_combinator(children: &[Validator], label: &str, indent: usize, out: &mut String) {
    let pad = "  ".repeat(indent);
    out.push_str(&format!("{}{}\n", pad, label));
    for child in children {
        child.describe_at(indent + 1, out);
    }
}

fn flatten(children: Vec<Validator>, is_same: impl Fn(&Validator) -> bool) -> Vec<Validator> {
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        if is_same(&child) {
            match child {
                Validator::And(grandchildren) | Validator::Or(grandchildren) => {
                    out.extend(grandchildren)
                },
                other => out.push(other),
            }
        } else {
            out.push(child);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_counts(names: &[&str]) -> ValidationData {
        let mut data = ValidationData::new();
        for name in names {
            data.record(name);
        }
        data
    }

    #[test]
    fn negation_involution() {
        let v = Validator::and(vec![Validator::required("--a"), Validator::absent("--b")]);
        let data = with_counts(&["--a"]);
        let twice_negated = v.clone().negate().negate();
        assert_eq!(v.evaluate(&data), twice_negated.evaluate(&data));
    }

    #[test]
    fn de_morgan_and() {
        let a = Validator::required("--a");
        let b = Validator::required("--b");
        let not_and = Validator::and(vec![a.clone(), b.clone()]).negate();
        let or_of_nots = Validator::or(vec![a.negate(), b.negate()]);
        for present in [&[][..], &["--a"][..], &["--b"][..], &["--a", "--b"][..]] {
            let data = with_counts(present);
            assert_eq!(not_and.evaluate(&data), or_of_nots.evaluate(&data));
        }
    }

    #[test]
    fn and_flattens_nested_and() {
        let flat = Validator::and(vec![
            Validator::required("--a"),
            Validator::and(vec![Validator::required("--b"), Validator::required("--c")]),
        ]);
        match flat {
            Validator::And(children) => assert_eq!(children.len(), 3),
            _ => panic!("expected And"),
        }
    }

    #[test]
    fn xor_does_not_flatten() {
        let nested = Validator::xor(vec![
            Validator::required("--a"),
            Validator::xor(vec![Validator::required("--b"), Validator::required("--c")]),
        ]);
        match nested {
            Validator::Xor(children) => assert_eq!(children.len(), 2),
            _ => panic!("expected Xor"),
        }
    }

    #[test]
    fn xor_is_parity_of_true_children() {
        let v = Validator::xor(vec![Validator::required("--a"), Validator::required("--b")]);
        assert!(!v.evaluate(&with_counts(&[])));
        assert!(v.evaluate(&with_counts(&["--a"])));
        assert!(v.evaluate(&with_counts(&["--b"])));
        assert!(!v.evaluate(&with_counts(&["--a", "--b"])));
    }

    #[test]
    fn nxor_is_negation_of_xor() {
        let xor = Validator::xor(vec![Validator::required("--a"), Validator::required("--b")]);
        let nxor = Validator::nxor(vec![Validator::required("--a"), Validator::required("--b")]);
        for present in [&[][..], &["--a"][..], &["--b"][..], &["--a", "--b"][..]] {
            let data = with_counts(present);
            assert_eq!(xor.evaluate(&data), !nxor.evaluate(&data));
        }
    }

    #[test]
    fn describe_renders_indented_tree() {
        let v = Validator::and(vec![Validator::required("--a"), Validator::absent("--b")]);
        let rendered = v.describe();
        assert!(rendered.starts_with("all of:\n"));
        assert!(rendered.contains("  --a is required\n"));
        assert!(rendered.contains("  --b must be absent\n"));
    }
}
