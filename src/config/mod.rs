pub mod case_file;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "coercion-check")]
#[command(about = "Validate names and attendance pairs with strict coercion rules")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check a name. VALUE is a JSON literal, e.g. '"Frank"' or null
    Name {
        value: String,

        /// Print the reason when the value is rejected
        #[arg(long)]
        explain: bool,
    },

    /// Check an attended/length pair, e.g. 6 '"10"'
    Hours {
        #[arg(allow_hyphen_values = true)]
        attended: String,

        #[arg(allow_hyphen_values = true)]
        length: String,

        /// Print the reason when the pair is rejected
        #[arg(long)]
        explain: bool,
    },

    /// Run every case in a TOML case file
    Batch {
        /// Path to the case file; the bundled exercise cases run when omitted
        file: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
