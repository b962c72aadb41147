use clap::Parser;
use package_sorter::config::cli::{run, CliArgs};
use package_sorter::utils::logger;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    let outcome = run(&args);
    if let Some(stdout) = &outcome.stdout {
        println!("{}", stdout);
    }
    if let Some(stderr) = &outcome.stderr {
        eprintln!("{}", stderr);
    }

    ExitCode::from(outcome.exit_code)
}
