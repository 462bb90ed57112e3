//! wh2csv main entrypoint.

use std::error::Error;
use wh2csv::run;
use wh2csv::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));

        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }

        std::process::exit(1);
    }
}
