use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "wunderscore")]
#[command(about = "Run wunderscore helpers from the command line; results are printed as JSON")]
pub struct CliConfig {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Deep-compare two JSON values
    Equal { left: String, right: String },

    /// Flatten a nested JSON array
    Flatten { array: String },

    /// Remove values from a JSON array, one occurrence each
    Subtract { base: String, remove: String },

    /// Integers from START to END inclusive (0 to START when END is omitted)
    Range {
        #[arg(allow_negative_numbers = true)]
        start: i64,
        #[arg(allow_negative_numbers = true)]
        end: Option<i64>,
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        step: i64,
    },

    Clamp {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(allow_negative_numbers = true)]
        low: f64,
        #[arg(allow_negative_numbers = true)]
        high: f64,
    },

    Normalize {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(allow_negative_numbers = true)]
        low: f64,
        #[arg(allow_negative_numbers = true)]
        high: f64,
    },

    /// Random number; integer between the bounds unless --float is given
    Rand {
        #[arg(long, allow_negative_numbers = true)]
        low: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        high: Option<f64>,
        #[arg(long)]
        float: bool,
    },

    /// Left-pad a value
    Lpad {
        value: String,
        #[arg(long)]
        width: Option<usize>,
        #[arg(long)]
        fill: Option<char>,
    },

    /// Break a number of seconds into years, days, hours, minutes and seconds
    Duration { seconds: u64 },

    /// Check whether a string looks like an email address
    Email { address: String },
}
