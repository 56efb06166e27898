use anyhow::{Context, Result};
use clap::{App, Arg};
use hapeval::alignment::ScoringScheme;
use hapeval::{EvalConfig, Mode};
#[macro_use]
extern crate log;

fn app() -> App<'static, 'static> {
    App::new("hapeval")
        .version("0.1")
        .author("Bansho Masutani")
        .about("Score predicted haplotypes against the truth, allowing one phase switch.")
        .setting(clap::AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Debug mode"),
        )
        .arg(
            Arg::with_name("truth")
                .value_name("CORRECT_ANSWER")
                .required(true)
                .index(1)
                .help("Truth haplotypes. Two lines over ACGT-X."),
        )
        .arg(
            Arg::with_name("predicted")
                .value_name("USER_ANSWER")
                .required(true)
                .index(2)
                .help("Predicted haplotypes. Two lines over ACGT."),
        )
        .arg(
            Arg::with_name("no_switch")
                .long("no_switch")
                .help("Forbid the phase switch."),
        )
        .arg(
            Arg::with_name("band_width")
                .long("band_width")
                .takes_value(true)
                .help("Band width. Should be odd. Derived from the number of gaps and masks if not given."),
        )
        .arg(
            Arg::with_name("threads")
                .long("threads")
                .short("t")
                .takes_value(true)
                .default_value("1")
                .help("Number of threads"),
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
    let threads: usize = matches
        .value_of("threads")
        .unwrap_or("1")
        .parse()
        .context("--threads should be a number")?;
    if let Err(why) = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
    {
        debug!("{:?}", why);
    }
    let band_width = match matches.value_of("band_width") {
        Some(bw) => Some(
            bw.parse::<usize>()
                .context("--band_width should be a number")?,
        ),
        None => None,
    };
    let mode = if matches.is_present("no_switch") {
        Mode::NoSwitch
    } else {
        Mode::Switch
    };
    let config = EvalConfig::new(ScoringScheme::default(), mode, band_width);
    // Both arguments are required, so clap has already rejected a missing one.
    let truth = matches.value_of("truth").unwrap_or_default();
    let predicted = matches.value_of("predicted").unwrap_or_default();
    let truth = hapeval::io::read_truth(truth).context("read_file failed")?;
    let predicted = hapeval::io::read_predicted(predicted).context("read_file failed")?;
    debug!("Start");
    let report = hapeval::evaluate(&truth, &predicted, &config).context("invalid input")?;
    println!("{}", report);
    Ok(())
}
