//! fluenttc - query a TeamCity server from the command line
//!
//! ## Commands
//!
//! - `fluenttc locator` - Print the build locator for a set of filters
//! - `fluenttc builds` - List builds matching filters
//! - `fluenttc configs` - List build configurations
//! - `fluenttc completions` - Generate shell completions
//!
//! ## Quick Start
//!
//! ```bash
//! # Show the locator a query would send
//! fluenttc locator --build-config Tools_Compile --branch main --status failure
//!
//! # Last five running builds on a server, as guest
//! fluenttc builds --server https://teamcity.example.com --running --count 5
//!
//! # Use a configuration file with credentials
//! fluenttc --config fluenttc.yaml configs --project Tools
//! ```

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if std::env::var("FLUENTTC_VERBOSE").is_ok() {
                eprintln!("{:?}", e);
            }
            ExitCode::FAILURE
        }
    }
}
