//! Quine-McCluskey Logic Minimizer - Command Line Interface
//!
//! Minimizes a function given on the command line, read from a term-list file,
//! or entered interactively when neither is given.

use clap::{Parser, ValueEnum};
use qmc_logic::{
    parse_term_list, InputError, PLAWriter, Solution, TermList, MAX_VARIABLES, SENTINEL,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Sum-of-products expression (default)
    Sop,
    /// Expression prefixed with the function signature, e.g. `F(A,B,C) = C'`
    Algebraic,
    /// Single-output PLA table
    Pla,
}

#[derive(Parser, Debug)]
#[command(name = "qmc")]
#[command(about = "Quine-McCluskey Boolean function minimizer", long_about = None)]
#[command(version)]
struct Args {
    /// Number of variables (1-8)
    #[arg(short = 'n', long = "vars", requires = "minterms")]
    num_vars: Option<usize>,

    /// Minterms, separated by commas or spaces
    #[arg(short = 'm', long = "minterms", requires = "num_vars")]
    minterms: Option<String>,

    /// Don't-care terms, separated by commas or spaces
    #[arg(short = 'd', long = "dont-cares", requires = "num_vars")]
    dont_cares: Option<String>,

    /// Term-list file: variable count, minterms ending in -1, don't-cares ending in -1
    /// ("-" reads standard input)
    #[arg(short = 'i', long = "input", value_name = "FILE", conflicts_with = "num_vars")]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value = "sop")]
    output_format: OutputFormat,

    /// Print prime implicants, essential primes and cover size to stderr
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) -> Result<(), log::SetLoggerError> {
    let level = match verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
}

/// Print `prompt` and read terms until the sentinel or end of input
fn prompt_terms<R: BufRead>(lines: &mut R, prompt: &str) -> Result<Vec<i64>, InputError> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut terms = Vec::new();
    let mut line = String::new();
    loop {
        line.clear();
        if lines.read_line(&mut line)? == 0 {
            return Ok(terms);
        }
        for term in parse_term_list(&line)? {
            if term == SENTINEL {
                return Ok(terms);
            }
            terms.push(term);
        }
    }
}

fn read_interactive() -> Result<TermList, InputError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock();

    print!("Enter number of variables (1-{}): ", MAX_VARIABLES);
    io::stdout().flush()?;
    let mut line = String::new();
    lines.read_line(&mut line)?;
    let num_vars = match parse_term_list(&line)?.first() {
        Some(&n) => usize::try_from(n).map_err(|_| InputError::InvalidToken {
            token: n.to_string().into(),
            line: 1,
        })?,
        None => return Err(InputError::MissingVariableCount),
    };

    let minterms = prompt_terms(&mut lines, "Enter minterms (space-separated, end with -1): ")?;
    let dont_cares = prompt_terms(
        &mut lines,
        "Enter don't care terms (space-separated, end with -1, or just -1 if none): ",
    )?;

    Ok(TermList {
        num_vars,
        minterms,
        dont_cares,
    })
}

fn read_problem(args: &Args) -> Result<TermList, InputError> {
    if let Some(path) = &args.input {
        if path.as_os_str() == "-" {
            return TermList::from_reader(io::stdin().lock());
        }
        return TermList::from_file(path);
    }

    match (args.num_vars, &args.minterms) {
        (Some(num_vars), Some(minterms)) => Ok(TermList {
            num_vars,
            minterms: parse_term_list(minterms)?,
            dont_cares: match &args.dont_cares {
                Some(dont_cares) => parse_term_list(dont_cares)?,
                None => Vec::new(),
            },
        }),
        _ => read_interactive(),
    }
}

fn print_summary(solution: &Solution) {
    eprintln!("Prime implicants:");
    for prime in solution.prime_implicants() {
        eprintln!("  {}", prime);
    }
    eprintln!("Essential prime implicants:");
    for essential in solution.essential_primes() {
        eprintln!("  {}", essential);
    }
    eprintln!("Cover terms: {}", solution.cover().len());
}

fn write_solution(solution: &Solution, format: &OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Sop => writeln!(out, "{}", solution),
        OutputFormat::Algebraic => {
            let labels: Vec<&str> = solution
                .labels()
                .as_slice()
                .iter()
                .map(|l| l.as_ref())
                .collect();
            writeln!(out, "F({}) = {}", labels.join(","), solution)
        }
        OutputFormat::Pla => solution.write_pla(&mut out),
    }
}

fn main() {
    let args = Args::parse();
    if let Err(e) = init_logging(args.verbose) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let problem = match read_problem(&args) {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let solution = match problem
        .minimizer()
        .and_then(|minimizer| minimizer.minimize())
    {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if args.summary {
        print_summary(&solution);
    }

    if let Err(e) = write_solution(&solution, &args.output_format) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}
