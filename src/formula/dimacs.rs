use crate::formula::{Clause, Formula, Literal, Variable};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

#[derive(Debug)]
pub enum DimacsParseError {
    Io(std::io::Error),
    Format(String),
}

impl From<std::io::Error> for DimacsParseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Reads a line-oriented DIMACS CNF problem. Comment (`c`) and blank lines
/// are skipped; a `p cnf <vars> <clauses>` header must precede the clauses.
/// Each clause is one line of integers closed by a `0` sentinel; a line
/// holding only `0` is an (always-false) empty clause and is kept as such.
pub fn parse<R: Read>(reader: R) -> Result<Formula, DimacsParseError> {
    let reader = BufReader::new(reader);

    let mut clauses = vec![];
    let mut num_clauses = None;

    for line in reader.lines() {
        let line = line?;
        let mut tokens = line.split_whitespace().peekable();

        match tokens.peek() {
            Some(&"c") | None => continue,
            Some(&"p") => {
                num_clauses = Some(parse_header(tokens)?);
            }
            Some(_) => {
                let expected = match num_clauses {
                    Some(n) => n,
                    None => {
                        return Err(DimacsParseError::Format(
                            "missing 'p' line before clauses".into(),
                        ))
                    }
                };

                clauses.push(parse_clause(tokens)?);
                if clauses.len() >= expected {
                    break;
                }
            }
        }
    }

    if num_clauses.is_none() {
        return Err(DimacsParseError::Format("missing 'p' line before clauses".into()));
    }

    Ok(Formula::new(clauses))
}

pub fn parse_path<P: AsRef<Path>>(path: P) -> Result<Formula, DimacsParseError> {
    let file = File::open(path)?;
    parse(file)
}

fn parse_header<'a>(
    mut tokens: impl Iterator<Item = &'a str>,
) -> Result<usize, DimacsParseError> {
    let _ = tokens.next(); // the 'p'

    if tokens.next() != Some("cnf") {
        return Err(DimacsParseError::Format("missing 'cnf'".into()));
    }

    // The declared variable count is informative only; the solver works off
    // the variables the clauses actually mention.
    let _num_variables = tokens
        .next()
        .and_then(|t| t.parse::<usize>().ok())
        .ok_or_else(|| DimacsParseError::Format("invalid num_variables".into()))?;

    tokens
        .next()
        .and_then(|t| t.parse::<usize>().ok())
        .ok_or_else(|| DimacsParseError::Format("invalid num_clauses".into()))
}

fn parse_clause<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<Clause, DimacsParseError> {
    let mut literals = vec![];
    for token in tokens {
        match parse_literal(token)? {
            Some(literal) => literals.push(literal),
            // 0 closes the clause; anything after it on the line is ignored
            None => break,
        }
    }
    Ok(Clause::new(literals))
}

fn parse_literal(s: &str) -> Result<Option<Literal>, DimacsParseError> {
    let l = s
        .parse::<isize>()
        .map_err(|_| DimacsParseError::Format(format!("invalid literal '{}'", s)))?;
    if l > 0 {
        Ok(Some(Literal::Positive(Variable(l as usize))))
    } else if l < 0 {
        Ok(Some(Literal::Negative(Variable(-l as usize))))
    } else {
        Ok(None)
    }
}
