use birthday_curve::driver::{self, DriverArgs};
use birthday_curve::errors::Result;
use birthday_curve::output::OError;
use birthday_curve::render;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::{error, info};
use std::{error, fs, io, process};

const DEFAULT_OUTFILE: &str = "birthday.xlsx";

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Output file (xlsx)
    #[arg(default_value = DEFAULT_OUTFILE)]
    outfile: String,
    /// Report errors as a JSON file
    #[arg(long)]
    error_file: Option<String>,
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn process(args: &Args) -> Result<()> {
    let output = driver::calc(&DriverArgs::default())?;
    render::render(&output, &args.outfile)?;
    info!(target: "birthday", "write: {}", args.outfile);
    Ok(())
}

fn store_error(error_file: &str, e: &dyn error::Error) -> Result<()> {
    let error = OError {
        error: format!("{e}"),
    };
    let file = fs::File::create(error_file)?;
    let writer = io::BufWriter::new(file);
    serde_json::to_writer(writer, &error)?;
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
            match args.error_file {
                Some(filename) => match store_error(&filename, &*e) {
                    Ok(()) => {
                        info!(target: "birthday", "error reported: {e}");
                    }
                    Err(e2) => {
                        error!(target: "birthday", "{e}");
                        error!(target: "birthday", "{e2}");
                    }
                },
                None => error!(target: "birthday", "{e}"),
            }
            process::exit(1);
        }
    }
}
