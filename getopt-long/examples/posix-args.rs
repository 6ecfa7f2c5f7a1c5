//! This example demonstrates stopping at the first operand to parse a
//! subcommand with its own options.
//!
//! Try `posix-args -v commit -m message -a file`.
use getopt_long::{Getopt, Opt};

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let mut getopt = Getopt::from_env("+v");
    let mut verbose = false;
    while let Some(opt) = getopt.next_opt() {
        match opt {
            Opt::Short('v') => verbose = true,
            _ => std::process::exit(1),
        }
    }

    let Some(command) = getopt.operands().first().cloned() else {
        println!("usage: posix-args [-v] COMMAND [ARGS]...");
        return;
    };

    // the subcommand gets a scanner of its own over the remaining tokens
    let mut sub = Getopt::new(&command, getopt.operands()[1..].iter().cloned(), "am:");
    let mut message = None;
    let mut all = false;
    while let Some(opt) = sub.next_opt() {
        match opt {
            Opt::Short('a') => all = true,
            Opt::Short('m') => message = sub.optarg().map(str::to_string),
            _ => std::process::exit(1),
        }
    }

    println!("verbose: {}", verbose);
    println!("command: {}", command);
    println!("all: {}, message: {:?}", all, message);
    println!("args: {:?}", sub.operands());
}
