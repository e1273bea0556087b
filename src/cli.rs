use clap::Parser;
use dpkg_diff::adapters::outbound::process::DEFAULT_COMPARATOR;
use std::path::PathBuf;

/// Compare two dpkg package listings
#[derive(Parser, Debug)]
#[command(name = "dpkg-diff")]
#[command(version)]
#[command(
    about = "Compare two `dpkg -l` listings and report removed, added, upgraded and downgraded packages",
    long_about = "Compare two `dpkg -l` listings and report removed, added, upgraded and downgraded packages.\n\n\
    Output lines:\n  \
    D <name> <version>          only in OLD\n  \
    A <name> <version>          only in NEW\n  \
    M^ <name> <from> -> <to>    upgraded\n  \
    Mv <name> <from> -> <to>    downgraded (or not comparable)\n\n\
    Only installed (`ii`) packages are compared; i386 packages are ignored."
)]
pub struct Args {
    /// Baseline listing (output of `dpkg -l` before the change)
    #[arg(value_name = "OLD")]
    pub old_listing: PathBuf,

    /// Listing to compare against the baseline
    #[arg(value_name = "NEW")]
    pub new_listing: PathBuf,

    /// Program used to order versions, invoked as
    /// `<PROGRAM> --compare-versions <from> lt <to>`
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_COMPARATOR)]
    pub comparator: String,

    /// Only print warnings and errors on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
