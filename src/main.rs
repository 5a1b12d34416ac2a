use std::process;

use auction_fill_logger::cli::Cli;
use clap::Parser;
use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let (csv_path, record) = Cli::parse().into_record();
    if let Err(err) = auction_fill_logger::append_to_csv(&csv_path, &record) {
        log::error!("{}", err);
        process::exit(1);
    }
}
