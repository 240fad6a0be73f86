//! ventas2json CLI - convert a sales spreadsheet to JSON
//!
//! ```bash
//! ventas2json ventas.xlsx          # JSON array of records on stdout
//! RUST_LOG=info ventas2json ventas.xlsx   # progress on stderr
//! ```
//!
//! Exactly one argument is accepted and it is always taken as the path,
//! even when it starts with `-`. Conversion failures are reported as
//! `{"error": "..."}` on stdout with exit status 0. Only a wrong argument
//! count exits non-zero.

use clap::Parser;
use std::ffi::OsString;
use ventas2json::{convert, error_json, USAGE_ERROR};

#[derive(Parser)]
#[command(name = "ventas2json")]
#[command(about = "Convert a sales spreadsheet to JSON records", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Spreadsheet file (xlsx, xlsm, xlsb, xls, ods)
    path: OsString,
}

fn usage_error() -> ! {
    println!("{}", error_json(USAGE_ERROR));
    std::process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<OsString> = std::env::args_os().collect();
    if args.len() != 2 {
        usage_error();
    }

    // `--` makes clap take the single argument verbatim as the path
    let argv = [args[0].clone(), OsString::from("--"), args[1].clone()];
    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(e) => {
            log::debug!("argument error: {}", e);
            usage_error();
        }
    };

    println!("{}", convert(&cli.path));
}
