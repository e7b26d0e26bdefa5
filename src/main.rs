use clap::{App, Arg};
use dpllsat::formula::dimacs::{parse, parse_path};
use dpllsat::{SatResult, Solver};

fn main() {
    env_logger::init();

    let matches = App::new("dpllsat")
        .arg(Arg::with_name("INPUT").help("input file (in CNF)").index(1))
        .arg(
            Arg::with_name("limit")
                .long("limit")
                .takes_value(true)
                .value_name("STEPS")
                .help("give up after this many search steps"),
        )
        .get_matches();

    let f = if let Some(path) = matches.value_of("INPUT") {
        parse_path(path)
    } else {
        parse(std::io::stdin())
    };

    let f = match f {
        Ok(f) => f,
        Err(e) => {
            eprintln!("parse error: {:?}", e);
            std::process::exit(-1);
        }
    };

    let limit = matches.value_of("limit").map(|s| match s.parse::<u64>() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("invalid --limit: {}", s);
            std::process::exit(-1);
        }
    });

    let mut solver = match limit {
        Some(n) => Solver::with_step_limit(f.clone(), n),
        None => Solver::new(f.clone()),
    };

    let exit_code = match solver.solve() {
        SatResult::Satisfiable(model) => {
            // check the model against the formula as parsed, before any
            // preprocessing the solver applied
            if !model.satisfies(&f) {
                eprintln!("internal error: model does not satisfy the input");
                std::process::exit(3);
            }
            println!("s SATISFIABLE");
            if model.is_empty() {
                println!("v 0");
            } else {
                println!("v {} 0", model);
            }
            0
        }
        SatResult::Unsatisfiable => {
            println!("s UNSATISFIABLE");
            1
        }
        SatResult::Unknown => {
            println!("s UNKNOWN");
            2
        }
    };
    std::process::exit(exit_code);
}
