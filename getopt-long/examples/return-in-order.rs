//! Options apply to the operands that follow them, which requires seeing
//! both in command line order.
//!
//! Try `return-in-order -u a b -l c -- -u d`.
use getopt_long::{Getopt, Opt};

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let mut getopt = Getopt::from_env("-ul");
    let mut upper = false;
    while let Some(opt) = getopt.next_opt() {
        match opt {
            Opt::Short('u') => upper = true,
            Opt::Short('l') => upper = false,
            Opt::Operand => print_word(getopt.optarg().unwrap_or_default(), upper),
            _ => std::process::exit(1),
        }
    }
    for word in getopt.operands() {
        print_word(word, upper);
    }
}

fn print_word(word: &str, upper: bool) {
    if upper {
        println!("{}", word.to_uppercase());
    } else {
        println!("{}", word.to_lowercase());
    }
}
