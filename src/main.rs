//! Simple CLI for the Wylie converter

use clap::{Parser, Subcommand};
use wylie::{Wylie, WylieOptions};

#[derive(Parser)]
#[command(name = "wylie")]
#[command(about = "Tibetan Unicode <-> EWTS (Extended Wylie) conversion", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert EWTS transliteration to Tibetan Unicode
    FromEwts {
        /// Text to convert (or read from stdin if not provided)
        text: Option<String>,
        #[command(flatten)]
        opts: OptionFlags,
    },
    /// Convert Tibetan Unicode to EWTS transliteration
    ToEwts {
        /// Text to convert (or read from stdin if not provided)
        text: Option<String>,
        /// Pass non-Tibetan content through instead of [escaping] it
        #[arg(long)]
        no_escape: bool,
        #[command(flatten)]
        opts: OptionFlags,
    },
}

#[derive(clap::Args)]
struct OptionFlags {
    /// Disable orthographic warnings entirely
    #[arg(long)]
    no_check: bool,
    /// Disable the stricter cross-stack checks
    #[arg(long)]
    loose: bool,
    /// Keep the input's spacing instead of collapsing it
    #[arg(long)]
    keep_spacing: bool,
}

impl OptionFlags {
    fn to_options(&self) -> WylieOptions {
        WylieOptions {
            check: !self.no_check,
            check_strict: !self.no_check && !self.loose,
            print_warnings: false,
            fix_spacing: !self.keep_spacing,
        }
    }
}

fn read_input(text: Option<String>) -> String {
    match text {
        Some(t) => t,
        None => {
            use std::io::Read;
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .expect("Failed to read from stdin");
            buffer
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::FromEwts { text, opts } => {
            let converter = Wylie::with_options(opts.to_options()).expect("valid options");
            converter.from_wylie(&read_input(text))
        }
        Commands::ToEwts {
            text,
            no_escape,
            opts,
        } => {
            let converter = Wylie::with_options(opts.to_options()).expect("valid options");
            converter.to_wylie(&read_input(text), !no_escape)
        }
    };

    println!("{}", result.output);
    for warning in &result.warnings {
        eprintln!("{}", warning);
    }
}
