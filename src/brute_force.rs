use crate::formula::{Formula, Variable};

// Exhaustive truth-table enumeration, used only as a cross-checking oracle
// for the search engine on small instances.
pub(crate) fn solve_brute_force(f: &Formula) -> bool {
    let variables: Vec<Variable> = f.variables().into_iter().collect();
    assert!(variables.len() <= 16); // just for safety

    'search: for bits in 0..(1u32 << variables.len()) {
        let value = |variable: &Variable| {
            let i = variables.iter().position(|v| v == variable).unwrap();
            bits & (1 << i) != 0
        };

        'clauses: for clause in f.clauses() {
            for literal in clause.literals() {
                if value(literal.variable()) == literal.is_positive() {
                    // this clause is satisfied, on to the next one
                    continue 'clauses;
                }
            }
            // no literal satisfied this clause, so this assignment is bogus
            continue 'search;
        }
        // every clause was satisfied
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{n, p, Clause};

    #[test]
    fn unit_chain_is_sat() {
        let f = Formula::new(vec![
            Clause::new(vec![p(1), p(2)]),
            Clause::new(vec![n(1)]),
        ]);
        assert!(solve_brute_force(&f));
    }

    #[test]
    fn pinned_both_ways_is_unsat() {
        let f = Formula::new(vec![
            Clause::new(vec![p(1), p(2)]),
            Clause::new(vec![n(1)]),
            Clause::new(vec![n(2)]),
        ]);
        assert!(!solve_brute_force(&f));
    }

    #[test]
    fn empty_formula_is_sat() {
        assert!(solve_brute_force(&Formula::new(vec![])));
    }

    #[test]
    fn empty_clause_is_unsat() {
        assert!(!solve_brute_force(&Formula::new(vec![Clause::new(vec![])])));
    }

    #[test]
    fn sparse_variable_indices() {
        let f = Formula::new(vec![
            Clause::new(vec![p(10), n(40)]),
            Clause::new(vec![p(40)]),
        ]);
        assert!(solve_brute_force(&f));
    }
}
