// SYMBOLIC TRAITS //////////////////////////////////////////////////////////////////
// What the coefficient engine needs from a term type.
// The trait is implemented for the native Term in symbolic_term.rs,
// add other term representations here as needed

use crate::symbolic::symbolic_term::Term;
use std::cmp::Ordering;
use std::fmt;

pub trait CoefTerm: Clone + fmt::Debug + fmt::Display {
    fn numerical_coefficient(&self) -> f64;
    fn set_numerical_coefficient(&mut self, value: f64);
    /// numerical factor is exactly zero
    fn is_zero(&self) -> bool;
    /// no symbolic factors
    fn is_constant_term(&self) -> bool;
    /// like terms: equal symbolic parts
    fn is_like(&self, other: &Self) -> bool;
    /// strict total order over symbolic parts, `Equal` iff `is_like`
    fn order(&self, other: &Self) -> Ordering;
    fn is_less_than(&self, other: &Self) -> bool {
        self.order(other) == Ordering::Less
    }
    fn times(&self, other: &Self) -> Self;
    fn times_scalar(&self, scalar: f64) -> Self;
    fn simplify(&self) -> Self;
    fn constant(value: f64) -> Self;
}

///////////////// IMPLEMENTATION OF THE TRAIT FOR THE NATIVE TERM /////////////////////////
impl CoefTerm for Term {
    fn numerical_coefficient(&self) -> f64 {
        Term::numerical_coefficient(self)
    }
    fn set_numerical_coefficient(&mut self, value: f64) {
        Term::set_numerical_coefficient(self, value)
    }
    fn is_zero(&self) -> bool {
        Term::is_zero(self)
    }
    fn is_constant_term(&self) -> bool {
        Term::is_constant_term(self)
    }
    fn is_like(&self, other: &Self) -> bool {
        Term::is_like(self, other)
    }
    fn order(&self, other: &Self) -> Ordering {
        Term::order(self, other)
    }
    fn times(&self, other: &Self) -> Self {
        Term::times(self, other)
    }
    fn times_scalar(&self, scalar: f64) -> Self {
        Term::times_scalar(self, scalar)
    }
    fn simplify(&self) -> Self {
        Term::simplify(self)
    }
    fn constant(value: f64) -> Self {
        Term::constant(value)
    }
}
