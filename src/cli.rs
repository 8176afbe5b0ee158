use clap::Parser;

/// Count the whole days strictly between two dates.
#[derive(Parser)]
#[command(
    name = "calendar-diff",
    version,
    about = "Count the days elapsed between two DD-MM-YYYY dates"
)]
pub struct Cli {
    /// The first date, in format dd-mm-yyyy.
    #[arg(long)]
    pub date1: String,

    /// The second date, in format dd-mm-yyyy.
    #[arg(long)]
    pub date2: String,

    /// Reject months outside 1-12 and days past the end of their month.
    #[arg(long)]
    pub strict: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
