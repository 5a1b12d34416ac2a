use std::path::PathBuf;

use clap::Parser;

use crate::record::FillRecord;

/// Append one row of auction fill metrics to a CSV file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV file to append to. Created if missing; its directory must exist.
    pub csv_path: PathBuf,
    #[arg(allow_hyphen_values = true)]
    pub fill_amount: String,
    #[arg(allow_hyphen_values = true)]
    pub time_since_auction_start: String,
    #[arg(allow_hyphen_values = true)]
    pub now_minus_last_auction_start_time: String,
    #[arg(allow_hyphen_values = true)]
    pub expected_incentive_amount: String,
}

impl Cli {
    pub fn into_record(self) -> (PathBuf, FillRecord) {
        let record = FillRecord::new(
            self.fill_amount,
            self.time_since_auction_start,
            self.now_minus_last_auction_start_time,
            self.expected_incentive_amount,
        );
        (self.csv_path, record)
    }
}
