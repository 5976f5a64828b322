use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(
    name = "mailwizard",
    version,
    about = "Pick a CSV list and an HTML template, set a subject, send"
)]
struct Args {
    /// Directory the file pickers open in (defaults to the home directory)
    #[arg(long, value_name = "DIR")]
    start_dir: Option<PathBuf>,

    /// Log file path
    #[arg(long, value_name = "PATH", default_value = "mailwizard.log")]
    log_file: PathBuf,

    /// Log at debug level (key events, ticks)
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // The TUI owns stdout, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("Mail Wizard starting up");

    match mailwizard::tui::run(args.start_dir) {
        Ok(session) => {
            println!("{}", session.summary());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Fatal: {}", e);
            print!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
