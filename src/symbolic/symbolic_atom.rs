//! # Atom
//!
//! The smallest symbolic factor of a term: a letter, an optional subscript and a power.
//! `a_1^3` is `Atom { letter: 'a', subscript: Some(1), power: 3 }`, `x` is
//! `Atom { letter: 'x', subscript: None, power: 1 }`.

use std::cmp::Ordering;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Atom {
    pub letter: char,
    pub subscript: Option<u32>,
    pub power: u32,
}

impl Atom {
    pub fn new(letter: char, subscript: Option<u32>, power: u32) -> Atom {
        Atom {
            letter,
            subscript,
            power,
        }
    }

    /// bare letter: no subscript, power 1
    pub fn letter(letter: char) -> Atom {
        Atom::new(letter, None, 1)
    }

    pub fn subscripted(letter: char, subscript: u32) -> Atom {
        Atom::new(letter, Some(subscript), 1)
    }

    pub fn with_power(self, power: u32) -> Atom {
        Atom { power, ..self }
    }

    /// letter and subscript agree, powers may differ
    pub fn same_base(&self, other: &Atom) -> bool {
        self.letter == other.letter && self.subscript == other.subscript
    }

    pub fn base(&self) -> (char, Option<u32>) {
        (self.letter, self.subscript)
    }

    /// Order used when comparing terms: by letter, then by subscript (no subscript first),
    /// and for the same base the higher power comes first, so `x^2` sorts before `x`.
    pub fn order(&self, other: &Atom) -> Ordering {
        self.base()
            .cmp(&other.base())
            .then_with(|| other.power.cmp(&self.power))
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.subscript, self.power) {
            (None, 1) => write!(f, "{}", self.letter),
            (None, p) => write!(f, "{}^{}", self.letter, p),
            (Some(s), 1) => write!(f, "{}_{}", self.letter, s),
            (Some(s), p) => write!(f, "({}_{})^{}", self.letter, s, p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_display() {
        assert_eq!(Atom::letter('x').to_string(), "x");
        assert_eq!(Atom::letter('x').with_power(2).to_string(), "x^2");
        assert_eq!(Atom::subscripted('a', 1).to_string(), "a_1");
        assert_eq!(Atom::new('a', Some(1), 3).to_string(), "(a_1)^3");
    }

    #[test]
    fn test_atom_order() {
        let x = Atom::letter('x');
        let x2 = x.with_power(2);
        let y = Atom::letter('y');
        let a1 = Atom::subscripted('a', 1);
        let a = Atom::letter('a');
        assert_eq!(x2.order(&x), Ordering::Less);
        assert_eq!(x.order(&y), Ordering::Less);
        assert_eq!(a.order(&a1), Ordering::Less);
        assert_eq!(a1.order(&x), Ordering::Less);
        assert_eq!(x.order(&x), Ordering::Equal);
    }

    #[test]
    fn test_same_base() {
        let x = Atom::letter('x');
        assert!(x.same_base(&x.with_power(5)));
        assert!(!x.same_base(&Atom::subscripted('x', 2)));
    }
}
