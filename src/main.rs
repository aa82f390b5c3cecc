use std::process::ExitCode;

use gpl2clr::cli::{self, convert, Invocation};
use gpl2clr::output::Printer;

fn main() -> ExitCode {
    match cli::parse_args(std::env::args_os()) {
        Ok(Invocation::Help) => {
            print!("{}", cli::help_text());
            ExitCode::SUCCESS
        }
        Ok(Invocation::Version) => {
            print!("{}", cli::version_text());
            ExitCode::SUCCESS
        }
        Ok(Invocation::Convert(args)) => {
            let printer = Printer::new(args.verbose);
            convert::run(args, &printer);
            ExitCode::SUCCESS
        }
        Err(err) => {
            let printer = Printer::new(false);
            convert::report(&err, &printer);
            if err.is_argument_error() {
                eprintln!();
                eprint!("{}", cli::help_text());
            }
            ExitCode::FAILURE
        }
    }
}
