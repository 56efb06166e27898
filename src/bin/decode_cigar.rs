use anyhow::{Context, Result};
use clap::{App, Arg};
#[macro_use]
extern crate log;

fn app() -> App<'static, 'static> {
    App::new("decode_cigar")
        .version("0.1")
        .author("Bansho Masutani")
        .about("Lay out reads on a reference with gap-padded insertion columns.")
        .setting(clap::AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Debug mode"),
        )
        .arg(
            Arg::with_name("input")
                .value_name("SAMPLE_INPUT")
                .required(true)
                .index(1)
                .help("Reference on the first line, then `<orientation> <offset> <cigar>` per read."),
        )
}

fn main() -> Result<()> {
    let matches = app().get_matches();
    let level = match matches.occurrences_of("verbose") {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    // Required by clap.
    let input = matches.value_of("input").unwrap_or_default();
    let contents = std::fs::read_to_string(input)
        .with_context(|| format!("cannot find input file '{}'", input))?;
    let layout = hapeval::cigar::Layout::parse(&contents).context("invalid layout")?;
    debug!("Decoded {} reads", layout.reads().len());
    print!("{}", layout);
    Ok(())
}
