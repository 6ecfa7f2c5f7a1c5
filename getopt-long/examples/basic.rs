//! This is a basic example with help page, usage and error printing.
use getopt_long::{Getopt, Opt};

const USAGE: &str = "basic [-n NUMBER]... [-s] [-h] [FILE]...";
const HELP: &str = "basic
A small example of getopt-long

USAGE:
    !!USAGE!!

OPTIONS:
    -n NUMBER   adds a number to sum
    -s          shouts!
    -h          prints the help\
";

fn execute() -> Result<(), String> {
    let mut getopt = Getopt::from_env("n:sh");
    let mut numbers = Vec::<i64>::new();
    let mut shout = false;

    while let Some(opt) = getopt.next_opt() {
        match opt {
            Opt::Short('n') => {
                let value = getopt.optarg().unwrap_or_default();
                numbers.push(
                    value
                        .parse::<i64>()
                        .map_err(|err| format!("invalid number {:?}: {}", value, err))?,
                );
            }
            Opt::Short('s') => shout = true,
            Opt::Short('h') => {
                println!("{}", HELP.replace("!!USAGE!!", USAGE));
                return Ok(());
            }
            _ => return Err(USAGE.to_string()),
        }
    }

    if numbers.is_empty() && !shout {
        println!("{}", USAGE)
    } else {
        println!("Numbers: {:?}", &numbers);
        println!("Sum: {}", numbers.into_iter().sum::<i64>());
        if shout {
            println!("I AM SHOUTING!");
        }
    }
    println!("Files: {:?}", getopt.operands());

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();

    if let Err(err) = execute() {
        eprintln!("usage: {}", err);
        std::process::exit(1);
    }
}
