use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "initmock", version, about = "INITMOCK CLI")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Env file holding the bot token (default: dev.env)
    #[arg(long, global = true, default_value = "dev.env")]
    pub env_file: String,

    /// With no subcommand, runs `generate` with defaults.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate a signed mock init data payload.
    Generate {
        /// Fixed auth_date in unix seconds (default: current time).
        #[arg(long)]
        auth_date: Option<i64>,

        /// JSON file with a custom user record.
        #[arg(long)]
        user: Option<String>,
    },

    /// Percent-decode a payload and print its fields.
    Inspect {
        /// The raw init data query string.
        init_data: String,
    },
}
