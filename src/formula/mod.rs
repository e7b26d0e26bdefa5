pub mod dimacs;

use std::collections::BTreeSet;
use std::fmt::{self, Debug, Display, Formatter};

/// A propositional variable, identified by its (1-based) index from the
/// input formula. Indices are never renumbered, so models come back in the
/// caller's own numbering.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Debug)]
pub struct Variable(pub usize);

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Literal {
    Positive(Variable),
    Negative(Variable),
}

impl Literal {
    pub fn variable(&self) -> &Variable {
        match self {
            Literal::Positive(v) => v,
            Literal::Negative(v) => v,
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Literal::Positive(_) => true,
            Literal::Negative(_) => false,
        }
    }

    pub fn idx(&self) -> usize {
        self.variable().0
    }

    pub fn negated(&self) -> Self {
        match self {
            Literal::Positive(v) => Literal::Negative(*v),
            Literal::Negative(v) => Literal::Positive(*v),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Literal::Positive(Variable(x)) => write!(f, "{}", x),
            Literal::Negative(Variable(x)) => write!(f, "-{}", x),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(disjuncts: impl IntoIterator<Item = Literal>) -> Self {
        Self {
            literals: disjuncts.into_iter().collect(),
        }
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// True if some variable occurs here with both polarities. Such a clause
    /// is satisfied under every assignment.
    pub fn is_tautology(&self) -> bool {
        self.literals.iter().any(|l| self.literals.contains(&l.negated()))
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Formula {
    clauses: Vec<Clause>,
}

impl Formula {
    pub fn new(conjuncts: impl IntoIterator<Item = Clause>) -> Self {
        Self {
            clauses: conjuncts.into_iter().collect(),
        }
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Every variable mentioned anywhere in the formula, in ascending order.
    pub fn variables(&self) -> BTreeSet<Variable> {
        self.clauses
            .iter()
            .flat_map(|clause| clause.literals.iter().map(|literal| *literal.variable()))
            .collect()
    }

    /// The literal of the first width-1 clause, if any.
    pub fn first_unit(&self) -> Option<Literal> {
        self.clauses
            .iter()
            .find(|clause| clause.len() == 1)
            .map(|clause| clause.literals[0].clone())
    }

    pub fn without_tautologies(self) -> Formula {
        Formula {
            clauses: self.clauses.into_iter().filter(|c| !c.is_tautology()).collect(),
        }
    }
}

impl Debug for Formula {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let mut first_clause = true;
        for clause in &self.clauses {
            if first_clause {
                first_clause = false;
            } else {
                f.write_str(" & ")?;
            }
            if clause.literals.len() != 1 {
                f.write_str("(")?;
            }
            let mut first_literal = true;
            for literal in &clause.literals {
                if first_literal {
                    first_literal = false;
                } else {
                    f.write_str(" | ")?;
                }
                match literal {
                    Literal::Positive(Variable(x)) => f.write_fmt(format_args!("{}", x))?,
                    Literal::Negative(Variable(x)) => f.write_fmt(format_args!("!{}", x))?,
                }
            }
            if clause.literals.len() != 1 {
                f.write_str(")")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn p(x: usize) -> Literal {
    Literal::Positive(Variable(x))
}

#[cfg(test)]
pub(crate) fn n(x: usize) -> Literal {
    Literal::Negative(Variable(x))
}

// Random formulas over few enough variables that the brute-force oracle can
// exhaustively check the answer.
#[cfg(test)]
pub(crate) fn formula_3sat_strategy() -> impl proptest::strategy::Strategy<Value = Formula> {
    use proptest::prelude::*;

    let literal = (1..=6usize, any::<bool>()).prop_map(|(x, positive)| {
        if positive {
            p(x)
        } else {
            n(x)
        }
    });
    let clause = proptest::collection::vec(literal, 1..=3).prop_map(Clause::new);
    proptest::collection::vec(clause, 0..=12).prop_map(Formula::new)
}
