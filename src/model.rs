use crate::formula::{Formula, Literal, Variable};
use std::fmt::{self, Display, Formatter};

/// A satisfying assignment: one signed literal per variable of the input
/// formula, in ascending variable order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Model {
    literals: Vec<Literal>,
}

impl Model {
    pub(crate) fn new(literals: Vec<Literal>) -> Self {
        debug_assert!(literals.windows(2).all(|w| w[0].idx() < w[1].idx()));
        Self { literals }
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

    pub fn value(&self, variable: Variable) -> Option<bool> {
        self.literals
            .binary_search_by_key(&variable.0, |literal| literal.idx())
            .ok()
            .map(|i| self.literals[i].is_positive())
    }

    /// Checks the model against a formula: every clause must have at least
    /// one literal the model makes true.
    pub fn satisfies(&self, formula: &Formula) -> bool {
        formula.clauses().all(|clause| {
            clause
                .literals()
                .any(|literal| self.value(*literal.variable()) == Some(literal.is_positive()))
        })
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let mut first = true;
        for literal in &self.literals {
            if first {
                first = false;
            } else {
                f.write_str(" ")?;
            }
            write!(f, "{}", literal)?;
        }
        Ok(())
    }
}
