pub mod formula;
mod model;
mod solver;

#[cfg(test)]
mod brute_force;

pub use formula::{Clause, Formula, Literal, Variable};
pub use model::Model;
pub use solver::Solver;

/// The answer to a solve: a witnessing model, a proof-by-exhaustion that
/// none exists, or `Unknown` when a configured step budget ran out before
/// the search finished. `Unknown` is never produced without a budget.
#[derive(PartialEq, Clone, Debug)]
pub enum SatResult {
    Satisfiable(Model),
    Unsatisfiable,
    Unknown,
}

impl SatResult {
    pub fn is_satisfiable(&self) -> bool {
        match self {
            SatResult::Satisfiable(_) => true,
            _ => false,
        }
    }

    pub fn is_unsatisfiable(&self) -> bool {
        match self {
            SatResult::Unsatisfiable => true,
            _ => false,
        }
    }

    pub fn model(&self) -> Option<&Model> {
        match self {
            SatResult::Satisfiable(model) => Some(model),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{n, p};

    fn formula(clauses: Vec<Vec<Literal>>) -> Formula {
        Formula::new(clauses.into_iter().map(Clause::new))
    }

    #[test]
    fn single_unit_formula() {
        let result = Solver::new(formula(vec![vec![p(1)]])).solve();
        assert_eq!(
            result.model().unwrap().literals().cloned().collect::<Vec<_>>(),
            vec![p(1)]
        );
    }

    #[test]
    fn contradictory_units_are_unsat() {
        let result = Solver::new(formula(vec![vec![p(1)], vec![n(1)]])).solve();
        assert!(result.is_unsatisfiable());
    }

    #[test]
    fn tautology_and_units_combined() {
        // the middle clause is a tautology; the rest pin 1 true and 2 false
        let f = formula(vec![vec![p(1)], vec![p(1), n(1)], vec![n(1), n(2)]]);
        let result = Solver::new(f.clone()).solve();
        let model = result.model().expect("satisfiable");
        assert!(model.satisfies(&f));
        assert_eq!(
            model.literals().cloned().collect::<Vec<_>>(),
            vec![p(1), n(2)]
        );
    }

    #[test]
    fn dimacs_to_model() {
        let cnf = "p cnf 3 3\n1 2 0\n-1 3 0\n-2 -3 0\n";
        let f = formula::dimacs::parse(cnf.as_bytes()).expect("parse");
        let result = Solver::new(f.clone()).solve();
        assert!(result.model().expect("satisfiable").satisfies(&f));
    }

    #[test]
    fn result_queries() {
        let sat = Solver::new(formula(vec![vec![p(1)]])).solve();
        assert!(sat.is_satisfiable());
        assert!(!sat.is_unsatisfiable());
        assert!(sat.model().is_some());

        let unsat = Solver::new(formula(vec![vec![]])).solve();
        assert!(unsat.is_unsatisfiable());
        assert!(unsat.model().is_none());
    }
}
