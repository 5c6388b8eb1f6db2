//! Command-line interface for cnf.
//! Normalizes a grammar into Chomsky normal form and prints every derivation of an
//! input string.
//!
//! Usage:
//!   cnf `<grammar>` `<input>` [--start `<symbol>`] [--show-cnf]
//!
//! Exits with status 1 when the input is not derivable and with status 2 when the
//! grammar or the input cannot be read.

use std::error::Error;
use std::fs;
use std::process;

use clap::{Arg, ArgAction, Command};
use log::info;

use cnf::{
    read_symbols, recognize, start_symbol, CnfNormalizeExt, Name, Pretty, RuleSet, RuleSetLoadExt,
};

fn main() {
    env_logger::init();

    let matches = Command::new("cnf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prints every CYK derivation of a string in a context-free grammar")
        .arg_required_else_help(true)
        .arg(
            Arg::new("grammar")
                .help("Path to the grammar, one `S -> aSb | ε` line per symbol")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("input")
                .help("The string to parse, one symbol per character or `<name>`")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .short('s')
                .help("Start symbol of the grammar")
                .default_value("S"),
        )
        .arg(
            Arg::new("show-cnf")
                .long("show-cnf")
                .help("Print the grammar in Chomsky normal form before the derivations")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("grammar")
        .expect("grammar is required");
    let input = matches.get_one::<String>("input").expect("input is required");
    let start = matches.get_one::<String>("start").expect("start has a default");

    let rules = load_grammar(path).unwrap_or_else(|e| {
        eprintln!("{}: {}", path, e);
        process::exit(2);
    });
    let input = read_symbols(input).unwrap_or_else(|e| {
        eprintln!("input: {}", e);
        process::exit(2);
    });

    let cnf = rules.to_cnf(start);
    if matches.get_flag("show-cnf") {
        println!("{}", cnf);
    }

    let input: Vec<Pretty> = input.into_iter().map(Pretty::Text).collect();
    let trees: Vec<String> = recognize(&cnf, &input, &start_symbol())
        .map(|tree| tree.format())
        .collect();
    if trees.is_empty() {
        eprintln!("no derivation");
        process::exit(1);
    }
    info!("{} derivations", trees.len());
    println!("{}", trees.join("\n\n"));
}

fn load_grammar(path: &str) -> Result<RuleSet<Name>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    Ok(RuleSet::load(&text)?)
}
