use crate::formula::{Clause, Formula, Literal, Variable};
use crate::model::Model;
use crate::SatResult;
use log::trace;
use std::collections::{BTreeMap, BTreeSet};

/// Internal control signal: a clause shrank to empty, or a forced literal
/// contradicted the current assignment. Always caught at the branch point
/// that caused it.
#[derive(Debug)]
pub(crate) struct Conflict;

/// Asserts `literal` true against `formula`: clauses containing the literal
/// are satisfied and dropped, every occurrence of the negated literal is
/// stripped from the rest. The input is left untouched so sibling branches
/// keep their own snapshot.
pub(crate) fn simplify(formula: &Formula, literal: &Literal) -> Result<Formula, Conflict> {
    let negated = literal.negated();
    let mut clauses = Vec::with_capacity(formula.len());

    for clause in formula.clauses() {
        if clause.contains(literal) {
            continue;
        }
        if clause.contains(&negated) {
            let shrunk = Clause::new(clause.literals().filter(|l| **l != negated).cloned());
            if shrunk.is_empty() {
                return Err(Conflict);
            }
            clauses.push(shrunk);
        } else {
            clauses.push(clause.clone());
        }
    }

    Ok(Formula::new(clauses))
}

/// The current partial assignment: an ordered map of decided variables plus
/// a trail recording decision order, so a failed branch can be retracted by
/// truncating the trail back to a mark.
struct Assignment {
    values: BTreeMap<Variable, bool>,
    trail: Vec<Variable>,
}

impl Assignment {
    fn new() -> Self {
        Self {
            values: BTreeMap::new(),
            trail: vec![],
        }
    }

    fn value(&self, variable: Variable) -> Option<bool> {
        self.values.get(&variable).copied()
    }

    /// Records `literal` as true. Re-asserting the same polarity is a no-op;
    /// the opposite polarity is a conflict.
    fn assign(&mut self, literal: &Literal) -> Result<(), Conflict> {
        let value = literal.is_positive();
        match self.values.get(literal.variable()) {
            Some(&prev) if prev == value => Ok(()),
            Some(_) => Err(Conflict),
            None => {
                self.values.insert(*literal.variable(), value);
                self.trail.push(*literal.variable());
                Ok(())
            }
        }
    }

    fn mark(&self) -> usize {
        self.trail.len()
    }

    fn retract_to(&mut self, mark: usize) {
        for variable in self.trail.split_off(mark) {
            self.values.remove(&variable);
        }
    }
}

enum Search {
    Sat,
    Unsat,
    OutOfSteps,
}

pub struct Solver {
    formula: Formula,
    universe: BTreeSet<Variable>,
    assignment: Assignment,
    steps_left: Option<u64>,
}

impl Solver {
    pub fn new(formula: Formula) -> Self {
        // The universe is fixed before preprocessing: a variable appearing
        // only in a tautological clause still gets a value in the model.
        let universe = formula.variables();
        let formula = formula.without_tautologies();
        Self {
            formula,
            universe,
            assignment: Assignment::new(),
            steps_left: None,
        }
    }

    /// Like [`Solver::new`], but gives up with [`SatResult::Unknown`] after
    /// `limit` search steps (one step per propagate-and-decide round).
    pub fn with_step_limit(formula: Formula, limit: u64) -> Self {
        let mut solver = Self::new(formula);
        solver.steps_left = Some(limit);
        solver
    }

    pub fn solve(&mut self) -> SatResult {
        let formula = self.formula.clone();
        match self.search(formula) {
            Search::Sat => SatResult::Satisfiable(self.extract_model()),
            Search::Unsat => SatResult::Unsatisfiable,
            Search::OutOfSteps => SatResult::Unknown,
        }
    }

    fn search(&mut self, formula: Formula) -> Search {
        if let Some(steps) = &mut self.steps_left {
            if *steps == 0 {
                trace!("step budget exhausted");
                return Search::OutOfSteps;
            }
            *steps -= 1;
        }

        let formula = match self.propagate_units(formula) {
            Ok(formula) => formula,
            Err(Conflict) => return Search::Unsat,
        };

        if formula.is_empty() {
            return Search::Sat;
        }

        // an empty clause survives propagation only when it was in the input
        if formula.clauses().any(|clause| clause.is_empty()) {
            return Search::Unsat;
        }

        let variable = match self.decide(&formula) {
            Some(variable) => variable,
            None => return Search::Unsat,
        };

        match self.branch(&formula, Literal::Positive(variable)) {
            Search::Unsat => (),
            satisfied_or_out => return satisfied_or_out,
        }
        match self.branch(&formula, Literal::Negative(variable)) {
            Search::Unsat => (),
            satisfied_or_out => return satisfied_or_out,
        }
        Search::Unsat
    }

    /// Forces every unit clause's literal, to a fixed point. Simplification
    /// can shrink further clauses to units; the rescan picks those up.
    fn propagate_units(&mut self, mut formula: Formula) -> Result<Formula, Conflict> {
        while let Some(literal) = formula.first_unit() {
            trace!("forced {}", literal);
            self.assignment.assign(&literal)?;
            formula = simplify(&formula, &literal)?;
        }
        Ok(formula)
    }

    /// The branching variable: first literal in clause order whose variable
    /// is unassigned. Callers rely on this choice being deterministic.
    fn decide(&self, formula: &Formula) -> Option<Variable> {
        formula
            .clauses()
            .flat_map(|clause| clause.literals())
            .find(|literal| self.assignment.value(*literal.variable()).is_none())
            .map(|literal| *literal.variable())
    }

    /// Tries one polarity of the branching variable. On failure the
    /// assignment is restored to its state at entry, so the sibling branch
    /// and the caller see the pre-branch trail.
    fn branch(&mut self, formula: &Formula, literal: Literal) -> Search {
        let reduced = match simplify(formula, &literal) {
            Ok(reduced) => reduced,
            Err(Conflict) => return Search::Unsat,
        };

        let mark = self.assignment.mark();
        if self.assignment.assign(&literal).is_err() {
            return Search::Unsat;
        }
        trace!("assume {}", literal);

        let result = self.search(reduced);
        if let Search::Unsat = result {
            trace!("retract {}", literal);
            self.assignment.retract_to(mark);
        }
        result
    }

    /// Completes the partial assignment into a total model: every universe
    /// variable not forced either way defaults to true.
    fn extract_model(&self) -> Model {
        let literals = self
            .universe
            .iter()
            .map(|&variable| match self.assignment.value(variable) {
                Some(false) => Literal::Negative(variable),
                Some(true) | None => Literal::Positive(variable),
            })
            .collect();
        Model::new(literals)
    }
}
