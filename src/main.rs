use std::process::ExitCode;

fn main() -> ExitCode {
    holdem_equity::cli::run()
}
