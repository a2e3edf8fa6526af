/// ackeval - Ackermann-Peter Evaluator CLI
use ackeval::{evaluate_with_limit, evaluate_with_stats, MAX_STACK_DEPTH};
use std::env;
use std::io::{self, Write};
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage() {
    eprintln!("ackeval v{}", VERSION);
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    ackeval [OPTIONS] <M> <N>");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -h, --help           Print this help message");
    eprintln!("    -v, --version        Print version information");
    eprintln!("    -s, --stats          Print loop counters to stderr after the result");
    eprintln!("    --max-depth <N>      Bound the work stack at N pending frames");
    eprintln!("                         (default: {})", MAX_STACK_DEPTH);
    eprintln!("    -i, --interactive    Read \"<m> <n>\" pairs from stdin");
    eprintln!();
    eprintln!("ARGUMENTS:");
    eprintln!("    <M> <N>              Non-negative arguments of A(m, n)");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("    ackeval 3 3");
    eprintln!("    ackeval --stats 3 8");
    eprintln!("    ackeval --interactive");
}

fn print_version() {
    println!("ackeval {}", VERSION);
}

struct Options {
    m: Option<i64>,
    n: Option<i64>,
    stats: bool,
    max_depth: usize,
    interactive: bool,
}

fn parse_args() -> Result<Options, String> {
    let args: Vec<String> = env::args().collect();

    let mut positional = Vec::new();
    let mut stats = false;
    let mut max_depth = MAX_STACK_DEPTH;
    let mut interactive = false;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                process::exit(0);
            }
            "-s" | "--stats" => {
                stats = true;
            }
            "--max-depth" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value after --max-depth".to_string());
                }
                max_depth = args[i]
                    .parse()
                    .map_err(|_| format!("Invalid depth bound: {}", args[i]))?;
            }
            "-i" | "--interactive" => {
                interactive = true;
            }
            arg => {
                // Parse positionals before rejecting dashed arguments so a
                // negative input like -1 reaches the evaluator's own
                // precondition check instead of reading as an option.
                if let Ok(value) = arg.parse::<i64>() {
                    if positional.len() == 2 {
                        return Err("Too many arguments specified".to_string());
                    }
                    positional.push(value);
                } else if arg.starts_with('-') {
                    return Err(format!("Unknown option: {}", arg));
                } else {
                    return Err(format!("Invalid integer: {}", arg));
                }
            }
        }
        i += 1;
    }

    let mut positional = positional.into_iter();
    Ok(Options {
        m: positional.next(),
        n: positional.next(),
        stats,
        max_depth,
        interactive,
    })
}

fn parse_pair(input: &str) -> Result<(i64, i64), String> {
    let mut parts = input.split_whitespace();
    let m = parts
        .next()
        .ok_or_else(|| "Expected two integers".to_string())?;
    let n = parts
        .next()
        .ok_or_else(|| "Expected two integers".to_string())?;
    if parts.next().is_some() {
        return Err("Expected exactly two integers".to_string());
    }

    let m = m.parse().map_err(|_| format!("Invalid integer: {}", m))?;
    let n = n.parse().map_err(|_| format!("Invalid integer: {}", n))?;
    Ok((m, n))
}

fn run_interactive(max_depth: usize) {
    println!("ackeval interactive mode v{}", VERSION);
    println!("Enter \"<m> <n>\" pairs. Type 'exit' or 'quit' to exit.\n");

    let mut line_num = 1;

    loop {
        print!("ack[{}]> ", line_num);
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).unwrap() == 0 {
            break;
        }
        let input = input.trim();

        if input == "exit" || input == "quit" {
            println!("Goodbye!");
            break;
        }

        if input.is_empty() {
            continue;
        }

        match parse_pair(input).and_then(|(m, n)| {
            evaluate_with_limit(m, n, max_depth)
                .map(|value| (m, n, value))
                .map_err(|e| e.to_string())
        }) {
            Ok((m, n, value)) => {
                println!("A({}, {}) = {}", m, n, value);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }

        line_num += 1;
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let options = match parse_args() {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    // Interactive mode
    if options.interactive {
        run_interactive(options.max_depth);
        return;
    }

    let (m, n) = match (options.m, options.n) {
        (Some(m), Some(n)) => (m, n),
        _ => {
            eprintln!("Error: Missing arguments");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    match evaluate_with_stats(m, n, options.max_depth) {
        Ok((value, stats)) => {
            println!("A({}, {}) = {}", m, n, value);
            if options.stats {
                eprintln!(
                    "iterations: {}  pushes: {}  peak stack depth: {}",
                    stats.iterations, stats.pushes, stats.max_depth
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
