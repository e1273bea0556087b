mod cli;

use cli::Args;
use dpkg_diff::prelude::*;
use std::process;

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are reported through clap errors too
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    // Create adapters (Dependency Injection)
    let listing_reader = FileSystemReader::new();
    let version_comparator = DpkgVersionComparator::with_program(args.comparator);
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = DiffListingsUseCase::new(listing_reader, version_comparator, progress_reporter);

    let request = DiffRequest::new(args.old_listing, args.new_listing);
    let response = use_case.execute(request)?;

    let report = TextFormatter::new().format(&response.result);
    StdoutPresenter::new().present(&report)?;

    Ok(())
}
