use clap::{Parser, Subcommand};

/// Command-line interface definition for wh2csv
/// CLI application to turn work-hours spreadsheets into a normalized CSV
#[derive(Parser)]
#[command(
    name = "wh2csv",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert a work-hours spreadsheet into a CSV with the columns Datum, Start, Ende, Pause, Projekt, Beschreibung",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Only print errors and warnings
    #[arg(global = true, long, short = 'q')]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a spreadsheet (first worksheet) to CSV
    Convert {
        /// Spreadsheet to read (.xlsx, .xlsm, .xlsb, .xls, .ods)
        input: String,

        /// Output CSV path (default: <input>_converted.csv next to the input)
        output: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the spreadsheet headers and how they map to the output columns
    Columns {
        /// Spreadsheet to inspect
        input: String,
    },

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },
}
