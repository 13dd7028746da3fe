use std::path::PathBuf;
use std::process;

use clap::Parser;
use handle_charsets::{Config, run};

/// Convert TRA files from Windows-specific encoding to UTF-8.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Source tra directory path
    #[arg(long, value_name = "DIR")]
    tra_path: PathBuf,

    /// Directory path for converted files
    #[arg(long, value_name = "DIR")]
    out_path: PathBuf,

    /// Reverse conversion
    #[arg(long)]
    from_utf8: bool,

    /// Generate separate console message files from setup.tra and
    /// install.tra. This will create setup-win32.tra, setup-unix.tra, etc
    /// for each OS with correct encoding.
    #[arg(long)]
    split_console: bool,
}

fn main() {
    let args = Args::parse();

    let config = Config {
        tra_path: args.tra_path,
        out_path: args.out_path,
        from_utf8: args.from_utf8,
        split_console: args.split_console,
    };

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
