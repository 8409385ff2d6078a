#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module with the smallest symbolic factor: a letter with optional subscript and a power, e.g. (a_1)^3
pub mod symbolic_atom;
///____________________________________________________________________________________________________________________________
/// # Terms
/// a numerical factor times a product of atoms, kept simplified (atoms sorted and merged)
///# Example
/// ```
/// use RustedPolyFun::symbolic::symbolic_atom::Atom;
/// use RustedPolyFun::symbolic::symbolic_term::Term;
/// let t = Term::new(3.0, vec![Atom::letter('y'), Atom::letter('x'), Atom::letter('x')]);
/// assert_eq!(t.to_string(), "3x^2y");
/// let product = t.times(&Term::new(2.0, vec![Atom::letter('y')]));
/// assert_eq!(product.to_string(), "6x^2y^2");
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod symbolic_term;
///________________________________________________________________________________________________________________________________________________
/// # Coefficients
/// a sum of terms in canonical form: like terms merged, zero terms removed, terms sorted.
/// Every operation returns a new canonical coefficient.
///# Example
/// ```
/// use RustedPolyFun::symbolic::symbolic_atom::Atom;
/// use RustedPolyFun::symbolic::symbolic_term::Term;
/// use RustedPolyFun::symbolic::symbolic_coefficient::Coefficient;
/// let x = Atom::letter('x');
/// let y = Atom::letter('y');
/// // 3xy + 2
/// let c = Coefficient::new(vec![Term::new(3.0, vec![x, y]), Term::constant(2.0)]).unwrap();
/// let sum = c.plus(&Coefficient::from_constant(5.0));
/// assert_eq!(sum.to_string(), "3xy+7");
/// // (x + 1)(x - 1) = x^2 - 1
/// let a = Coefficient::from_letter('x') + Coefficient::one();
/// let b = Coefficient::from_letter('x') - Coefficient::one();
/// assert_eq!((a * b).to_string(), "x^2-1");
/// assert!(Coefficient::from_letter('x').times_scalar(0.0).is_zero());
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_coefficient;
pub mod symbolic_traits;
