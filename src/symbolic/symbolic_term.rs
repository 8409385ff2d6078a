//! # Term
//!
//! A term is a numerical factor times a product of atoms, e.g. `3xy`, `-(a_1)^3b` or `7`.
//! Terms are the unit of like-term combination inside a [`Coefficient`](crate::symbolic::symbolic_coefficient::Coefficient):
//! two terms are *like* when their atom parts agree, whatever their numerical factors.
//!
//! ## Canonical form
//!
//! Every constructor returns a simplified term:
//! - atoms sorted by base (letter, then subscript)
//! - atoms with the same base merged by adding powers, `x*x^2` → `x^3`
//! - atoms with power 0 dropped
//! - a zero numerical factor clears all atoms, so the zero term is the constant `0`
//!
//! ## Term order
//!
//! Terms are compared lexicographically over their sorted atoms using [`Atom::order`].
//! If one atom list is a prefix of the other, the shorter one is greater, so constants
//! always sort last: `x^2 < xy < x < y < 7`.

use crate::symbolic::symbolic_atom::Atom;
use itertools::Itertools;
use log::warn;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// The atom part of a term as an ordered map: base (letter, subscript) → power.
///
/// Using `BTreeMap` keeps the key canonical: `x*y` and `y*x` produce identical keys,
/// and iteration follows the base order used by [`Atom::order`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonomialKey(pub BTreeMap<(char, Option<u32>), u32>);

impl MonomialKey {
    /// Powers of same-base atoms are added; a sum past `u32::MAX` saturates there.
    pub fn from_atoms(atoms: &[Atom]) -> MonomialKey {
        let mut map: BTreeMap<(char, Option<u32>), u32> = BTreeMap::new();
        for atom in atoms {
            let power = map.entry(atom.base()).or_insert(0);
            *power = match power.checked_add(atom.power) {
                Some(sum) => sum,
                None => {
                    warn!(
                        "power of {} overflows u32, saturating at {}",
                        atom,
                        u32::MAX
                    );
                    u32::MAX
                }
            };
        }
        map.retain(|_, power| *power != 0);
        MonomialKey(map)
    }

    pub fn to_atoms(&self) -> Vec<Atom> {
        self.0
            .iter()
            .map(|(&(letter, subscript), &power)| Atom::new(letter, subscript, power))
            .collect()
    }

    pub fn is_constant(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Term {
    coefficient: f64,
    atoms: Vec<Atom>,
}

impl Term {
    pub fn new(coefficient: f64, atoms: Vec<Atom>) -> Term {
        Term { coefficient, atoms }.simplify()
    }

    pub fn constant(value: f64) -> Term {
        Term::new(value, Vec::new())
    }

    pub fn zero() -> Term {
        Term {
            coefficient: 0.0,
            atoms: Vec::new(),
        }
    }

    pub fn from_atom(atom: Atom) -> Term {
        Term::new(1.0, vec![atom])
    }

    pub fn from_letter(letter: char) -> Term {
        Term::from_atom(Atom::letter(letter))
    }

    pub fn numerical_coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Setting the factor to zero turns the term into the zero constant.
    pub fn set_numerical_coefficient(&mut self, value: f64) {
        self.coefficient = value;
        if value == 0.0 {
            *self = Term::zero();
        }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn monomial_key(&self) -> MonomialKey {
        MonomialKey::from_atoms(&self.atoms)
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient == 0.0
    }

    pub fn is_constant_term(&self) -> bool {
        self.atoms.is_empty()
    }

    /// like terms: same atoms, numerical factors may differ
    pub fn is_like(&self, other: &Term) -> bool {
        self.atoms == other.atoms
    }

    /// Strict total order over atom parts. `Equal` exactly when the terms are like terms.
    pub fn order(&self, other: &Term) -> Ordering {
        for (a, b) in self.atoms.iter().zip(other.atoms.iter()) {
            match a.order(b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        // a proper prefix is greater, constants end up last
        other.atoms.len().cmp(&self.atoms.len())
    }

    pub fn is_less_than(&self, other: &Term) -> bool {
        self.order(other) == Ordering::Less
    }

    pub fn times(&self, other: &Term) -> Term {
        let atoms = self
            .atoms
            .iter()
            .chain(other.atoms.iter())
            .copied()
            .collect();
        Term::new(self.coefficient * other.coefficient, atoms)
    }

    pub fn times_scalar(&self, scalar: f64) -> Term {
        Term::new(self.coefficient * scalar, self.atoms.clone())
    }

    pub fn simplify(&self) -> Term {
        if self.is_zero() {
            return Term::zero();
        }
        Term {
            coefficient: self.coefficient,
            atoms: self.monomial_key().to_atoms(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.atoms.is_empty() {
            return write!(f, "{}", self.coefficient);
        }
        let atoms = self.atoms.iter().join("");
        if self.coefficient == 1.0 {
            write!(f, "{}", atoms)
        } else if self.coefficient == -1.0 {
            write!(f, "-{}", atoms)
        } else {
            write!(f, "{}{}", self.coefficient, atoms)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Atom {
        Atom::letter('x')
    }
    fn y() -> Atom {
        Atom::letter('y')
    }

    #[test]
    fn test_simplify_merges_same_base() {
        let term = Term::new(2.0, vec![y(), x(), x().with_power(2)]);
        assert_eq!(term.atoms(), &[x().with_power(3), y()]);
        assert_eq!(term.numerical_coefficient(), 2.0);
    }

    #[test]
    fn test_simplify_drops_power_zero() {
        let term = Term::new(4.0, vec![x().with_power(0), y()]);
        assert_eq!(term.atoms(), &[y()]);
    }

    #[test]
    fn test_zero_factor_clears_atoms() {
        let term = Term::new(0.0, vec![x(), y()]);
        assert!(term.is_zero());
        assert!(term.is_constant_term());
        assert_eq!(term, Term::zero());
        let negative_zero = Term::new(-0.0, vec![x()]);
        assert_eq!(negative_zero.to_string(), "0");
    }

    #[test]
    fn test_like_terms() {
        let a = Term::new(3.0, vec![x(), y()]);
        let b = Term::new(-5.0, vec![y(), x()]);
        assert!(a.is_like(&b));
        assert_eq!(a.order(&b), Ordering::Equal);
        assert!(!a.is_like(&Term::new(3.0, vec![x()])));
    }

    #[test]
    fn test_term_order() {
        let x2 = Term::new(1.0, vec![x().with_power(2)]);
        let xy = Term::new(1.0, vec![x(), y()]);
        let x1 = Term::from_atom(x());
        let y1 = Term::from_atom(y());
        let seven = Term::constant(7.0);
        let sorted = [&x2, &xy, &x1, &y1, &seven];
        for pair in sorted.windows(2) {
            assert!(pair[0].is_less_than(pair[1]), "{} < {}", pair[0], pair[1]);
            assert!(!pair[1].is_less_than(pair[0]));
        }
        assert!(!seven.is_less_than(&Term::constant(-1.0)));
    }

    #[test]
    fn test_times() {
        let a = Term::new(2.0, vec![Atom::letter('a')]);
        let b = Term::new(3.0, vec![Atom::letter('b'), Atom::letter('a')]);
        let product = a.times(&b);
        assert_eq!(product.numerical_coefficient(), 6.0);
        assert_eq!(product.atoms(), &[Atom::letter('a').with_power(2), Atom::letter('b')]);
        assert_eq!(a.times_scalar(-0.5).numerical_coefficient(), -1.0);
        assert!(a.times_scalar(0.0).is_zero());
    }

    #[test]
    fn test_set_numerical_coefficient() {
        let mut term = Term::new(2.0, vec![x()]);
        term.set_numerical_coefficient(5.0);
        assert_eq!(term.to_string(), "5x");
        term.set_numerical_coefficient(0.0);
        assert_eq!(term, Term::zero());
    }

    #[test]
    fn test_term_display() {
        assert_eq!(Term::constant(3.0).to_string(), "3");
        assert_eq!(Term::constant(-2.0).to_string(), "-2");
        assert_eq!(Term::constant(0.5).to_string(), "0.5");
        assert_eq!(Term::new(3.0, vec![x(), y()]).to_string(), "3xy");
        assert_eq!(Term::new(1.0, vec![x()]).to_string(), "x");
        assert_eq!(Term::new(-1.0, vec![x().with_power(2)]).to_string(), "-x^2");
        assert_eq!(
            Term::new(2.0, vec![Atom::new('a', Some(1), 3), Atom::letter('b')]).to_string(),
            "2(a_1)^3b"
        );
    }

    #[test]
    fn test_power_overflow_saturates() {
        let huge = x().with_power(u32::MAX);
        let product = Term::from_atom(huge).times(&Term::from_atom(x()));
        assert!(!product.is_constant_term());
        assert_eq!(product.atoms(), &[huge]);
        assert_eq!(product.numerical_coefficient(), 1.0);

        let key = MonomialKey::from_atoms(&[huge, huge, y()]);
        assert_eq!(key.to_atoms(), vec![huge, y()]);
    }

    #[test]
    fn test_monomial_key() {
        let a = Term::new(1.0, vec![x(), y()]);
        let b = Term::new(9.0, vec![y(), x()]);
        assert_eq!(a.monomial_key(), b.monomial_key());
        assert!(Term::constant(4.0).monomial_key().is_constant());
    }
}
