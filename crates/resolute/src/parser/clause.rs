//! Parser for textual clause strings such as `~p(z,f(B)),q(z)`
//!
//! Grammar: a clause is a comma-separated list of literals; a literal is
//! an optionally `~`-negated predicate with a non-empty argument list;
//! arguments are variables (lower-case initial), constants (upper-case
//! initial) or functions (lower-case initial, parenthesised arguments).
//! Whitespace between tokens is accepted and never reproduced by the
//! canonical printer.

use crate::error::{ProverError, Result};
use crate::fol::{Atom, Clause, Constant, FunctionSymbol, Literal, PredicateSymbol, Term, Variable};
use nom::{
    bytes::complete::take_while,
    character::complete::{char, multispace0, satisfy},
    combinator::{all_consuming, opt, recognize},
    error::{Error, ErrorKind},
    multi::separated_list1,
    sequence::{pair, preceded, terminated},
    IResult,
};

/// Parse a clause string into a canonical clause
pub fn parse_clause(input: &str) -> Result<Clause> {
    match all_consuming(terminated(parse_literals, multispace0))(input) {
        Ok((_, literals)) => Ok(Clause::new(literals)),
        Err(err) => Err(ProverError::Parse {
            clause: input.to_string(),
            message: describe_error(err),
        }),
    }
}

fn describe_error(err: nom::Err<Error<&str>>) -> String {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            if e.input.is_empty() {
                "unexpected end of input".to_string()
            } else {
                format!("unexpected input at '{}'", e.input)
            }
        }
        nom::Err::Incomplete(_) => "incomplete input".to_string(),
    }
}

fn parse_literals(input: &str) -> IResult<&str, Vec<Literal>> {
    separated_list1(preceded(multispace0, char(',')), parse_literal)(input)
}

fn parse_literal(input: &str) -> IResult<&str, Literal> {
    let (input, _) = multispace0(input)?;
    let (input, negation) = opt(char('~'))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, name) = parse_identifier(input)?;

    // Predicate names start with a lower-case letter
    if !starts_lowercase(name) {
        return Err(nom::Err::Failure(Error::new(input, ErrorKind::Verify)));
    }

    let (input, _) = multispace0(input)?;
    let (input, _) = char('(')(input)?;
    let (input, args) = parse_term_list(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(')')(input)?;

    let atom = Atom::new(PredicateSymbol::new(name, args.len()), args);
    let literal = if negation.is_some() {
        Literal::negative(atom)
    } else {
        Literal::positive(atom)
    };
    Ok((input, literal))
}

fn parse_term_list(input: &str) -> IResult<&str, Vec<Term>> {
    separated_list1(preceded(multispace0, char(',')), parse_term)(input)
}

fn parse_term(input: &str) -> IResult<&str, Term> {
    let (input, _) = multispace0(input)?;
    let (input, name) = parse_identifier(input)?;
    let (input, _) = multispace0(input)?;

    if let Ok((rest, _)) = char::<&str, Error<&str>>('(')(input) {
        // Function application; function names start lower-case
        if !starts_lowercase(name) {
            return Err(nom::Err::Failure(Error::new(input, ErrorKind::Verify)));
        }
        let (rest, args) = parse_term_list(rest)?;
        let (rest, _) = multispace0(rest)?;
        let (rest, _) = char(')')(rest)?;
        let term = Term::Function(FunctionSymbol::new(name, args.len()), args);
        Ok((rest, term))
    } else if starts_lowercase(name) {
        Ok((input, Term::Variable(Variable::new(name))))
    } else {
        Ok((input, Term::Constant(Constant::new(name))))
    }
}

/// Identifiers: a letter followed by letters, digits or underscores
fn parse_identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c: char| c.is_alphabetic()),
        take_while(|c: char| c.is_alphanumeric() || c == '_'),
    ))(input)
}

fn starts_lowercase(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_lowercase())
}
