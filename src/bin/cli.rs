//! This is the command line tool that loads a sequence of digits from a file
//! and predicts the next digit.

extern crate clap;
extern crate env_logger;
extern crate log;

use clap::{value_parser, Arg, ArgAction, Command};
use digitcast::report::Report;
use digitcast::utils::parsing::parse_digits;
use digitcast::utils::sample::random_digits;
use digitcast::utils::thresholds::MIN_ENSEMBLE_LEN;
use digitcast::{Context, Predictor};

use std::io::Read;
use std::process::exit;
use std::{fs, time::Instant};
use std::{fs::File, io::Write};

/// The length of the sample sequence that is used when no input is given.
const SAMPLE_LEN: usize = 500;

fn save_file(data: &[u8], path: &str) {
    let written = File::create(path).and_then(|mut f| f.write_all(data));
    if let Err(err) = written {
        log::error!("Unable to write {}: {}", path, err);
        exit(1);
    }
    log::info!("Wrote {}.", &path);
}

fn load_text(path: &str) -> String {
    let text = if path == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        fs::read_to_string(path)
    };
    match text {
        Ok(text) => text,
        Err(err) => {
            log::error!("Can't open the input file {}: {}", path, err);
            exit(1);
        }
    }
}

/// A scoped utility struct for measuring and reporting time.
struct Timer {
    start: std::time::Instant,
}

impl Timer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let now = Instant::now();
        if let Some(duration) = now.checked_duration_since(self.start) {
            log::info!(
                "Prediction completed in {:03} seconds",
                duration.as_secs_f32()
            );
        }
    }
}

fn main() {
    let matches = Command::new("CLI")
        .version("1.x")
        .arg(
            Arg::new("methods")
                .short('m')
                .long("methods")
                .help("Show the prediction of every model")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("random")
                .long("random")
                .value_name("N")
                .help("Predict a random sequence of N digits")
                .value_parser(value_parser!(usize))
                .conflicts_with("INPUT")
                .num_args(1),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("The seed of the random sequence")
                .value_parser(value_parser!(u64))
                .num_args(1),
        )
        .arg(
            Arg::new("temperature")
                .short('t')
                .long("temperature")
                .value_name("T")
                .help("The temperature of the final distribution")
                .value_parser(value_parser!(f64))
                .num_args(1),
        )
        .arg(
            Arg::new("cycle")
                .long("cycle")
                .value_name("LEN")
                .help("The cycle length of the positional model")
                .value_parser(value_parser!(usize))
                .num_args(1),
        )
        .arg(
            Arg::new("window")
                .long("window")
                .value_name("LEN")
                .help("The window of the change-point detector")
                .value_parser(value_parser!(usize))
                .num_args(1),
        )
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .value_name("SHIFT")
                .help("The mean shift that marks a change point")
                .value_parser(value_parser!(f64))
                .num_args(1),
        )
        .arg(
            Arg::new("top")
                .long("top")
                .value_name("K")
                .help("The number of ranked digits to show")
                .value_parser(value_parser!(usize))
                .num_args(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path of the report file")
                .num_args(1),
        )
        .arg(
            Arg::new("INPUT")
                .help("The file with the digits, or '-' for stdin")
                .index(1),
        )
        .get_matches();

    env_logger::builder().format_timestamp(None).init();

    let mut ctx = Context::default();
    if let Some(t) = matches.get_one::<f64>("temperature") {
        if *t <= 0.0 {
            log::error!("The temperature must be positive");
            exit(1);
        }
        ctx = ctx.with_temperature(*t);
    }
    if let Some(cycle) = matches.get_one::<usize>("cycle") {
        if *cycle == 0 {
            log::error!("The cycle length must be positive");
            exit(1);
        }
        ctx = ctx.with_cycle_length(*cycle);
    }
    let window = matches.get_one::<usize>("window").copied();
    let threshold = matches.get_one::<f64>("threshold").copied();
    if window.is_some() || threshold.is_some() {
        let window = window.unwrap_or(ctx.regime_window);
        if window == 0 {
            log::error!("The window must not be empty");
            exit(1);
        }
        ctx = ctx.with_regime(window, threshold.unwrap_or(ctx.regime_threshold));
    }
    if let Some(k) = matches.get_one::<usize>("top") {
        ctx = ctx.with_top_k(*k);
    }

    let data = match matches.get_one::<String>("INPUT") {
        Some(path) => parse_digits(&load_text(path)),
        None => {
            let len = matches.get_one::<usize>("random").copied();
            let seed = matches.get_one::<u64>("seed").copied().unwrap_or(0);
            log::info!("Using a random sample with seed {}", seed);
            random_digits(len.unwrap_or(SAMPLE_LEN), seed)
        }
    };
    log::info!("Loaded {} digits.", data.len());

    let timer = Timer::new();
    let mut predictor = Predictor::new(ctx);
    let result = match predictor.predict(&data) {
        Some(result) => result,
        None => {
            println!(
                "Not enough data yet: {} digits, need at least {}.",
                data.len(),
                MIN_ENSEMBLE_LEN
            );
            return;
        }
    };

    let mut report = Report::new(result);
    report.set_methods(matches.get_flag("methods"));
    let text = report.render();
    drop(timer);

    match matches.get_one::<String>("output") {
        Some(path) => save_file(text.as_bytes(), path),
        None => print!("{}", text),
    }
}
