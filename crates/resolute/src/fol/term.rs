//! Terms in first-order logic

use std::collections::BTreeSet;
use std::fmt;

/// A variable; names start with a lower-case letter
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }
}

/// A constant symbol; names start with an upper-case letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constant {
    pub name: String,
}

impl Constant {
    pub fn new(name: impl Into<String>) -> Self {
        Constant { name: name.into() }
    }
}

/// A function symbol with arity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionSymbol {
    pub name: String,
    pub arity: usize,
}

impl FunctionSymbol {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        FunctionSymbol {
            name: name.into(),
            arity,
        }
    }
}

/// A term in first-order logic
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Variable(Variable),
    Constant(Constant),
    Function(FunctionSymbol, Vec<Term>),
}

impl Term {
    /// Collect all variables in this term
    pub fn collect_variables(&self, vars: &mut BTreeSet<Variable>) {
        match self {
            Term::Variable(v) => {
                vars.insert(v.clone());
            }
            Term::Constant(_) => {}
            Term::Function(_, args) => {
                for arg in args {
                    arg.collect_variables(vars);
                }
            }
        }
    }

    /// Check whether a variable occurs anywhere in this term
    pub fn contains_variable(&self, var: &Variable) -> bool {
        match self {
            Term::Variable(v) => v == var,
            Term::Constant(_) => false,
            Term::Function(_, args) => args.iter().any(|arg| arg.contains_variable(var)),
        }
    }
}

// Display implementations for pretty printing

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(v) => write!(f, "{}", v),
            Term::Constant(c) => write!(f, "{}", c),
            Term::Function(func, args) => {
                write!(f, "{}(", func.name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Term {
        Term::Variable(Variable::new(name))
    }

    fn constant(name: &str) -> Term {
        Term::Constant(Constant::new(name))
    }

    fn func(name: &str, args: Vec<Term>) -> Term {
        Term::Function(FunctionSymbol::new(name, args.len()), args)
    }

    #[test]
    fn display_is_compact() {
        let t = func("f", vec![var("x"), func("g", vec![constant("A"), var("y")])]);
        assert_eq!(t.to_string(), "f(x,g(A,y))");
    }

    #[test]
    fn collects_variables_in_order() {
        let t = func("f", vec![var("y"), func("g", vec![var("x"), var("y")])]);
        let mut vars = BTreeSet::new();
        t.collect_variables(&mut vars);
        let names: Vec<_> = vars.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y"]);
    }

    #[test]
    fn contains_variable_looks_under_functions() {
        let t = func("f", vec![constant("A"), func("g", vec![var("w")])]);
        assert!(t.contains_variable(&Variable::new("w")));
        assert!(!t.contains_variable(&Variable::new("x")));
    }
}
