//! Most General Unifier (MGU) computation

use crate::fol::{Atom, Constant, FunctionSymbol, Literal, Substitution, Term, Variable};

/// Result of a unification attempt
pub type UnificationResult = Result<Substitution, UnificationError>;

/// Failures during unification. These drive resolver control flow and
/// are never surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnificationError {
    /// Constant symbols don't match
    ConstantClash(Constant, Constant),
    /// Function symbols don't match
    FunctionClash(FunctionSymbol, FunctionSymbol),
    /// Argument counts don't match
    ArityMismatch(usize, usize),
    /// Function against constant
    FunctionConstantClash(FunctionSymbol, Constant),
    /// Predicate symbols don't match
    PredicateClash,
    /// Both literals have the same sign
    PolarityMismatch,
    /// Occurs check failed (only when the check is enabled)
    OccursCheck(Variable, Term),
}

/// Unify two terms without the occurs check (the default mode)
pub fn unify(t1: &Term, t2: &Term) -> UnificationResult {
    unify_terms(t1, t2, false)
}

/// Unify two terms, returning a most general unifier if one exists.
///
/// A variable binds to whatever stands on the other side; when both
/// sides are variables the left one is bound. Without the occurs check,
/// `unify(x, f(x))` yields the cyclic binding `f(x)/x`.
pub fn unify_terms(t1: &Term, t2: &Term, occurs_check: bool) -> UnificationResult {
    match (t1, t2) {
        _ if t1 == t2 => Ok(Substitution::new()),

        (Term::Variable(v), t) | (t, Term::Variable(v)) => {
            if occurs_check && t.contains_variable(v) {
                Err(UnificationError::OccursCheck(v.clone(), t.clone()))
            } else {
                Ok(Substitution::singleton(v.clone(), t.clone()))
            }
        }

        (Term::Constant(c1), Term::Constant(c2)) => {
            Err(UnificationError::ConstantClash(c1.clone(), c2.clone()))
        }

        (Term::Function(f1, args1), Term::Function(f2, args2)) => {
            if f1.name != f2.name {
                return Err(UnificationError::FunctionClash(f1.clone(), f2.clone()));
            }
            if args1.len() != args2.len() {
                return Err(UnificationError::ArityMismatch(args1.len(), args2.len()));
            }
            unify_args(args1, args2, occurs_check)
        }

        (Term::Function(f, _), Term::Constant(c)) | (Term::Constant(c), Term::Function(f, _)) => {
            Err(UnificationError::FunctionConstantClash(f.clone(), c.clone()))
        }
    }
}

/// Unify two argument lists left to right, applying the accumulated
/// substitution before each step and composing the step result into it.
pub fn unify_args(args1: &[Term], args2: &[Term], occurs_check: bool) -> UnificationResult {
    debug_assert_eq!(args1.len(), args2.len());
    let mut subst = Substitution::new();
    for (a, b) in args1.iter().zip(args2.iter()) {
        let a = a.apply_substitution(&subst);
        let b = b.apply_substitution(&subst);
        let step = unify_terms(&a, &b, occurs_check)?;
        subst = subst.compose(&step);
    }
    Ok(subst)
}

/// Unify two atoms of the same predicate
pub fn unify_atoms(a1: &Atom, a2: &Atom, occurs_check: bool) -> UnificationResult {
    if a1.predicate != a2.predicate {
        return Err(UnificationError::PredicateClash);
    }
    unify_args(&a1.args, &a2.args, occurs_check)
}

/// Unify a complementary literal pair: same predicate and arity,
/// opposite polarity. This is the entry point used by resolution.
pub fn unify_complementary(l1: &Literal, l2: &Literal, occurs_check: bool) -> UnificationResult {
    if l1.polarity == l2.polarity {
        return Err(UnificationError::PolarityMismatch);
    }
    unify_atoms(&l1.atom, &l2.atom, occurs_check)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_clause;

    fn var(name: &str) -> Term {
        Term::Variable(Variable::new(name))
    }

    fn constant(name: &str) -> Term {
        Term::Constant(Constant::new(name))
    }

    fn func(name: &str, args: Vec<Term>) -> Term {
        Term::Function(FunctionSymbol::new(name, args.len()), args)
    }

    fn atom_of(clause: &str) -> Atom {
        parse_clause(clause).unwrap().literals[0].atom.clone()
    }

    #[test]
    fn identical_terms_unify_with_identity() {
        let t = func("f", vec![var("x"), constant("A")]);
        assert_eq!(unify(&t, &t).unwrap(), Substitution::new());
    }

    #[test]
    fn left_variable_binds_to_right_side() {
        let subst = unify(&var("y"), &var("t")).unwrap();
        assert_eq!(subst.to_string(), "[t / y]");
    }

    #[test]
    fn variable_binds_against_constant_from_either_side() {
        assert_eq!(unify(&var("x"), &constant("A")).unwrap().to_string(), "[A / x]");
        assert_eq!(unify(&constant("A"), &var("t")).unwrap().to_string(), "[A / t]");
    }

    #[test]
    fn constant_clash_fails() {
        assert!(matches!(
            unify(&constant("A"), &constant("B")),
            Err(UnificationError::ConstantClash(_, _))
        ));
    }

    #[test]
    fn function_constant_clash_fails() {
        assert!(matches!(
            unify(&func("f", vec![var("x")]), &constant("A")),
            Err(UnificationError::FunctionConstantClash(_, _))
        ));
    }

    #[test]
    fn function_name_and_arity_must_agree() {
        let fx = func("f", vec![var("x")]);
        let gx = func("g", vec![var("x")]);
        let fxy = func("f", vec![var("x"), var("y")]);
        assert!(matches!(unify(&fx, &gx), Err(UnificationError::FunctionClash(_, _))));
        assert!(matches!(unify(&fx, &fxy), Err(UnificationError::ArityMismatch(1, 2))));
    }

    #[test]
    fn accumulated_bindings_constrain_later_arguments() {
        // f(x,x) against f(A,B) must fail: x is already bound to A
        let t1 = func("f", vec![var("x"), var("x")]);
        let t2 = func("f", vec![constant("A"), constant("B")]);
        assert!(unify(&t1, &t2).is_err());

        let t3 = func("f", vec![constant("A"), constant("A")]);
        assert_eq!(unify(&t1, &t3).unwrap().to_string(), "[A / x]");
    }

    #[test]
    fn mgu_acceptance_case() {
        // unify(p(f(h(w)),y,g(k(f(h(w))),x)), p(u,k(f(h(w))),g(z,h(w))))
        let a1 = atom_of("p(f(h(w)),y,g(k(f(h(w))),x))");
        let a2 = atom_of("p(u,k(f(h(w))),g(z,h(w)))");
        let subst = unify_atoms(&a1, &a2, false).unwrap();
        assert_eq!(
            subst.to_string(),
            "[f(h(w)) / u, k(f(h(w))) / y, k(f(h(w))) / z, h(w) / x]"
        );
        assert_eq!(
            a1.apply_substitution(&subst),
            a2.apply_substitution(&subst)
        );
    }

    #[test]
    fn no_occurs_check_by_default() {
        // The cyclic binding is produced rather than rejected
        let fx = func("f", vec![var("x")]);
        let subst = unify(&var("x"), &fx).unwrap();
        assert_eq!(subst.to_string(), "[f(x) / x]");
    }

    #[test]
    fn occurs_check_rejects_cyclic_bindings_when_enabled() {
        let fx = func("f", vec![var("x")]);
        assert!(matches!(
            unify_terms(&var("x"), &fx, true),
            Err(UnificationError::OccursCheck(_, _))
        ));
    }

    #[test]
    fn complementary_literals_require_opposite_signs() {
        let clause = parse_clause("p(x),~p(A)").unwrap();
        let pos = clause.literals[0].clone();
        let neg = clause.literals[1].clone();
        assert_eq!(
            unify_complementary(&pos, &neg, false).unwrap().to_string(),
            "[A / x]"
        );
        assert!(matches!(
            unify_complementary(&pos, &pos, false),
            Err(UnificationError::PolarityMismatch)
        ));
    }

    #[test]
    fn unifier_makes_both_sides_equal() {
        let a1 = atom_of("p(x,f(y))");
        let a2 = atom_of("p(g(z),f(A))");
        let subst = unify_atoms(&a1, &a2, false).unwrap();
        assert_eq!(
            a1.apply_substitution(&subst),
            a2.apply_substitution(&subst)
        );
    }
}
