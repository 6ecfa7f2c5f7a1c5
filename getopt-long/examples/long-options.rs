//! Shows long options, abbreviations, flag cells and `-W`.
//!
//! Try `long-options --verb --out=x.txt -Wcolor=never in.txt --brief`.
use getopt_long::{Error, Flag, Getopt, HasArg, LongOpt, Opt};
use tracing_subscriber::EnvFilter;

const BRIEF: i32 = 1;
const LONG: i32 = 2;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let format = Flag::new();
    let mut getopt = Getopt::env_builder()
        .optstring("vo:W;")
        .long_options(vec![
            LongOpt::new("verbose", HasArg::No).val('v' as i32),
            LongOpt::new("version", HasArg::No).val(300),
            LongOpt::new("output", HasArg::Required).val('o' as i32),
            LongOpt::new("color", HasArg::Optional).val(301),
            LongOpt::new("brief", HasArg::No).val(BRIEF).flag(format.clone()),
            LongOpt::new("long", HasArg::No).val(LONG).flag(format.clone()),
        ])
        .build()?;

    let mut errors = 0;
    while let Some(opt) = getopt.next_opt() {
        match opt {
            Opt::Short('v') => println!("verbose"),
            Opt::Short('o') => println!("output: {:?}", getopt.optarg()),
            Opt::Long(300) => println!("version 1.0"),
            Opt::Long(301) => println!("color: {}", getopt.optarg().unwrap_or("auto")),
            Opt::Flag => {
                let idx = getopt.longind().unwrap_or_default();
                println!("flag --{} set", getopt.long_options()[idx].name());
            }
            Opt::W => println!("unknown -W {:?}", getopt.optarg()),
            _ => errors += 1,
        }
    }

    match format.get() {
        Some(BRIEF) => println!("format: brief"),
        Some(LONG) => println!("format: long"),
        _ => println!("format: default"),
    }
    println!("operands: {:?}", getopt.operands());
    if errors > 0 {
        std::process::exit(2);
    }
    Ok(())
}
