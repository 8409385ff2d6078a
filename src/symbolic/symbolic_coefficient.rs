//! # Coefficient Module
//!
//! A coefficient is a sum of terms, the thing standing in front of a power of the
//! polynomial variable. In
//!
//! `P(x) = [2(a_1)^3b + 3b^2]x^4 - a_2b_4x^2 + 7ab + b_2`
//!
//! `2(a_1)^3b + 3b^2`, `-a_2b_4` and `7ab + b_2` are coefficients.
//!
//! ## Canonical form
//!
//! Every `Coefficient` handed out by this module is canonical:
//! 1. no two terms are like terms
//! 2. terms are sorted strictly ascending by the term order
//! 3. no zero terms, except the zero coefficient itself which is a single zero term
//! 4. never empty
//!
//! The canonical form is built by one iterative fold: each incoming term is simplified,
//! then located by binary search in the growing sorted list. A like term found there
//! absorbs the numerical factor (and is removed if the sum is exactly zero), otherwise the
//! term is inserted at the search position.
//!
//! ## Main Structures and Methods
//!
//! - `Coefficient<T>` - generic over the term type through [`CoefTerm`], `Term` by default
//! - `new`, `from_slice`, `from_term`, `from_constant`, `from_atom`, `from_letter` - constructors
//! - `place` - insert or merge one term, returning a new coefficient
//! - `plus`, `minus`, `times`, `times_scalar`, `negate` - arithmetic, all pure
//! - `is_zero`, `is_constant`, `constant_value` - predicates
//! - `Display` - renders `3x+2y-5`
//!
//! Operators `+`, `-`, `*` (by coefficient or by `f64`) and unary `-` are overloaded.

use crate::symbolic::symbolic_atom::Atom;
use crate::symbolic::symbolic_term::Term;
use crate::symbolic::symbolic_traits::CoefTerm;
use itertools::Itertools;
use log::{debug, trace, warn};
use std::fmt;
use strum_macros::{Display, EnumIter};

/// Error types for building coefficients
#[derive(Debug, Clone, PartialEq)]
pub enum CoefError {
    InvalidInput(String),
}

impl fmt::Display for CoefError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoefError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for CoefError {}

/// The two ways to bring a raw term list into canonical form. Both produce identical
/// results; `SortedInsert` is the one used by every public operation.
#[derive(Debug, Clone, Copy, PartialEq, Display, EnumIter)]
pub(crate) enum Canonicalizer {
    /// binary search into the sorted prefix
    SortedInsert,
    /// linear scan: merge with a like term, else insert before the first greater term, else append
    LinearScan,
}

/// An ordered, de-duplicated sum of terms. See the module docs for the invariants.
#[derive(Clone, Debug, PartialEq)]
pub struct Coefficient<T: CoefTerm = Term> {
    terms: Vec<T>,
}

impl<T: CoefTerm> Coefficient<T> {
    /// Builds a canonical coefficient from a list of terms.
    ///
    /// # Errors
    /// `CoefError::InvalidInput` if `terms` is empty.
    pub fn new(terms: Vec<T>) -> Result<Self, CoefError> {
        if terms.is_empty() {
            warn!("refusing to build a coefficient from an empty term list");
            return Err(CoefError::InvalidInput(
                "a coefficient needs at least one term".to_string(),
            ));
        }
        Ok(Self::canonical(terms, Canonicalizer::SortedInsert))
    }

    /// Same as [`Coefficient::new`], copying the terms out of `terms`.
    pub fn from_slice(terms: &[T]) -> Result<Self, CoefError> {
        Self::new(terms.to_vec())
    }

    pub fn from_term(term: T) -> Self {
        Self::canonical(vec![term], Canonicalizer::SortedInsert)
    }

    pub(crate) fn canonical(raw: Vec<T>, method: Canonicalizer) -> Self {
        trace!("canonicalizing {} terms with {}", raw.len(), method);
        let mut terms = Vec::with_capacity(raw.len());
        match method {
            Canonicalizer::SortedInsert => {
                for term in raw {
                    insert_sorted(&mut terms, term.simplify());
                }
            }
            Canonicalizer::LinearScan => {
                for term in raw {
                    smart_insert(&mut terms, term.simplify());
                }
            }
        }
        Self::from_canonical(terms)
    }

    /// `terms` must already be sorted, merged and free of zero terms
    fn from_canonical(mut terms: Vec<T>) -> Self {
        if terms.is_empty() {
            terms.push(T::constant(0.0));
        }
        Coefficient { terms }
    }

    pub fn terms(&self) -> &[T] {
        &self.terms
    }

    pub fn into_terms(self) -> Vec<T> {
        self.terms
    }

    pub fn number_of_terms(&self) -> usize {
        self.terms.len()
    }

    /// first (smallest) term
    pub fn head(&self) -> &T {
        &self.terms[0]
    }

    /// The coefficient without its first term, `None` when there is only one term.
    pub fn tail(&self) -> Option<Self> {
        if self.terms.len() < 2 {
            return None;
        }
        Some(Coefficient {
            terms: self.terms[1..].to_vec(),
        })
    }

    /// Returns a new coefficient with `term` inserted in order, or merged into the like
    /// term already present. A zero `term` gives back an unchanged copy.
    pub fn place(&self, term: &T) -> Self {
        let mut terms = if self.is_zero() {
            Vec::with_capacity(1)
        } else {
            self.terms.clone()
        };
        insert_sorted(&mut terms, term.simplify());
        Self::from_canonical(terms)
    }

    /// Canonical copy of `self`. Coefficients are canonical on construction, so this is
    /// idempotent and for any coefficient built here returns an equal value.
    pub fn simplify(&self) -> Self {
        Self::canonical(self.terms.clone(), Canonicalizer::SortedInsert)
    }

    /// Re-canonicalizes in place through the linear-scan path.
    pub(crate) fn reduce(&mut self) {
        let unordered = std::mem::take(&mut self.terms);
        *self = Self::canonical(unordered, Canonicalizer::LinearScan);
    }

    pub fn plus(&self, other: &Self) -> Self {
        let mut terms = Vec::with_capacity(self.terms.len() + other.terms.len());
        if !self.is_zero() {
            terms.extend(self.terms.iter().cloned());
        }
        if !other.is_zero() {
            terms.extend(other.terms.iter().cloned());
        }
        Self::canonical(terms, Canonicalizer::SortedInsert)
    }

    pub fn minus(&self, other: &Self) -> Self {
        self.plus(&other.negate())
    }

    /// Every term of `self` times every term of `other`, collected into one coefficient.
    pub fn times(&self, other: &Self) -> Self {
        let products = self
            .terms
            .iter()
            .cartesian_product(other.terms.iter())
            .map(|(a, b)| a.times(b))
            .collect();
        Self::canonical(products, Canonicalizer::SortedInsert)
    }

    /// A uniform scalar cannot make two unlike terms alike, so only the terms themselves
    /// are re-simplified; `scalar == 0` yields the zero coefficient.
    pub fn times_scalar(&self, scalar: f64) -> Self {
        let terms = self
            .terms
            .iter()
            .map(|term| term.times_scalar(scalar).simplify())
            .filter(|term| !term.is_zero())
            .collect();
        Self::from_canonical(terms)
    }

    pub fn negate(&self) -> Self {
        self.times_scalar(-1.0)
    }

    pub fn is_zero(&self) -> bool {
        self.terms.iter().all(|term| term.is_zero())
    }

    /// Zero test through the linear-scan canonicalizer. Agrees with [`Coefficient::is_zero`].
    pub fn is_zero_term(&self) -> bool {
        let mut reduced = self.clone();
        reduced.reduce();
        reduced.terms.iter().all(|term| term.is_zero())
    }

    /// a single term with no symbolic factors
    pub fn is_constant(&self) -> bool {
        self.terms.len() == 1 && self.terms[0].is_constant_term()
    }

    pub fn constant_value(&self) -> Option<f64> {
        if self.is_constant() {
            Some(self.terms[0].numerical_coefficient())
        } else {
            None
        }
    }
}

impl Coefficient<Term> {
    pub fn from_constant(constant: f64) -> Self {
        Self::from_term(Term::constant(constant))
    }

    pub fn from_atom(atom: Atom) -> Self {
        Self::from_term(Term::from_atom(atom))
    }

    /// bare letter, no numerical factor, subscript or power
    pub fn from_letter(letter: char) -> Self {
        Self::from_term(Term::from_letter(letter))
    }

    pub fn zero() -> Self {
        Self::from_constant(0.0)
    }

    pub fn one() -> Self {
        Self::from_constant(1.0)
    }
}

//___________________________________INSERTION____________________________________

/// Inserts `term` into the sorted, merged `terms`, locating it by binary search.
fn insert_sorted<T: CoefTerm>(terms: &mut Vec<T>, term: T) {
    if term.is_zero() {
        return;
    }
    match terms.binary_search_by(|probe| probe.order(&term)) {
        Ok(i) => merge_at(terms, i, &term),
        Err(i) => terms.insert(i, term),
    }
}

/// Linear version of [`insert_sorted`]: merge with a like term, else insert before the
/// first greater term, else append at the end.
fn smart_insert<T: CoefTerm>(terms: &mut Vec<T>, term: T) {
    if term.is_zero() {
        return;
    }
    for i in 0..terms.len() {
        if term.is_like(&terms[i]) {
            merge_at(terms, i, &term);
            return;
        }
        if term.is_less_than(&terms[i]) {
            terms.insert(i, term);
            return;
        }
    }
    terms.push(term);
}

/// Adds the factor of `term` to the like term at `i`, dropping it if they cancel.
fn merge_at<T: CoefTerm>(terms: &mut Vec<T>, i: usize, term: &T) {
    let sum = terms[i].numerical_coefficient() + term.numerical_coefficient();
    if sum == 0.0 {
        debug!("{} and {} cancel", terms[i], term);
        terms.remove(i);
    } else {
        terms[i].set_numerical_coefficient(sum);
    }
}

//___________________________________PRINTING____________________________________

/// Terms joined by `+`, with `+-` collapsed to `-` since negative terms carry their sign.
impl<T: CoefTerm> fmt::Display for Coefficient<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let joined = self
            .terms
            .iter()
            .map(|term| term.to_string())
            .filter(|term| !term.is_empty())
            .join("+");
        write!(f, "{}", joined.replace("+-", "-"))
    }
}

//___________________________________OPERATORS____________________________________

impl<T: CoefTerm> std::ops::Add for Coefficient<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(&rhs)
    }
}

impl<T: CoefTerm> std::ops::Sub for Coefficient<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.minus(&rhs)
    }
}

impl<T: CoefTerm> std::ops::Mul for Coefficient<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.times(&rhs)
    }
}

impl<T: CoefTerm> std::ops::Mul<f64> for Coefficient<T> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.times_scalar(rhs)
    }
}

impl<T: CoefTerm> std::ops::Neg for Coefficient<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<T: CoefTerm> std::ops::AddAssign for Coefficient<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.plus(&rhs);
    }
}

impl<T: CoefTerm> std::ops::MulAssign for Coefficient<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.times(&rhs);
    }
}
