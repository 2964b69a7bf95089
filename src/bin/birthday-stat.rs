use birthday_curve::driver::{self, DriverArgs};
use birthday_curve::errors::Result;
use birthday_curve::output::{self, Output};
use birthday_curve::simulation;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::error;
use std::process;

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Also estimate each probability by random sampling, with this many
    /// rounds per group size
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    iter: Option<u64>,
    /// Print the curve as JSON
    #[arg(long)]
    json: bool,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn stat(args: &Args, output: &Output) {
    println!("group sizes: {}", output::pretty_range(&output.range));
    println!("- days in a year: {}", output.days);
    println!("- points: {}", output.points.len());
    match output.first_above_threshold {
        Some(n) => println!("- P(n) reaches {} at n = {}", output.threshold, n),
        None => println!("- P(n) stays below {}", output.threshold),
    }
    println!();
    match args.iter {
        None => {
            println!("{:>5}  {:>8}", "n", "P(n)");
            for point in &output.points {
                println!(
                    "{:>5}  {:>8}",
                    point.n,
                    output::pretty_probability(point.probability)
                );
            }
        }
        Some(iter) => {
            println!("{:>5}  {:>8}  {:>9}", "n", "P(n)", "estimate");
            for point in &output.points {
                let estimate = simulation::estimate(point.n, iter, point.n);
                println!(
                    "{:>5}  {:>8}  {:>9}",
                    point.n,
                    output::pretty_probability(point.probability),
                    output::pretty_probability(estimate)
                );
            }
        }
    }
}

fn process(args: &Args) -> Result<()> {
    let output = driver::calc(&DriverArgs::default())?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }
    stat(args, &output);
    Ok(())
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    match process(&args) {
        Ok(()) => (),
        Err(e) => {
            error!(target: "birthday", "{e}");
            process::exit(1);
        }
    }
}
