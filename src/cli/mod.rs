use clap::Parser;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "sll_demo")]
#[command(version, about = "Copies a singly linked list and prints both side by side", long_about = None)]
pub struct Cli {
    /// Comma-separated values of the original list
    #[arg(
        long,
        value_name = "LIST",
        value_delimiter = ',',
        default_value = "1,2,3,4,5",
        allow_negative_numbers = true
    )]
    pub values: Vec<i64>,

    /// Exit without waiting for Enter
    #[arg(short, long)]
    pub no_pause: bool,

    /// Set verbose level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Default log filter; `RUST_LOG` takes precedence when set.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
