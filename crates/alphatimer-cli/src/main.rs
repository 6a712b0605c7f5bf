use clap::{Parser, Subcommand};

use alphatimer_core::Locale;

mod commands;
mod surface;

#[derive(Parser)]
#[command(name = "alphatimer", version, about = "AlphaTimer countdown card")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// UI language of the start control ("en" or "ja")
    #[arg(long, global = true, default_value = "en")]
    locale: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive countdown card (Enter starts, Ctrl-C quits)
    Run {
        /// Repaints per second for the bar animation
        #[arg(long, default_value_t = 20)]
        fps: u32,
    },
    /// Drive one full countdown headless, printing each tick
    Ticks {
        /// Print the typed event stream as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Print the idle view frame as JSON
    Frame,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so the card repaints on stdout stay intact.
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("alphatimer_cli={level},alphatimer_core={level}"))
        .with_writer(std::io::stderr)
        .init();

    let result = match Locale::from_tag(&cli.locale) {
        Ok(locale) => match cli.command {
            Commands::Run { fps } => commands::run::run(locale, fps).await,
            Commands::Ticks { json } => commands::ticks::run(locale, json).await,
            Commands::Frame => commands::frame::run(locale),
        },
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
