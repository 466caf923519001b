use clap::Parser;
use std::path::PathBuf;

/// Extracts channel variable names from a FreeSWITCH source tree
#[derive(Parser, Debug, Clone)]
#[command(
    name = "chanvars",
    about = "Extracts channel variable names from a FreeSWITCH source tree",
    version,
    long_about = "chanvars walks a FreeSWITCH checkout, finds every channel variable passed \
                  to the switch_channel get/set/var API, resolves #define constants, and writes \
                  the variables with their source locations as JSON.\n\n\
                  Examples:\n  \
                  chanvars --base /usr/src/freeswitch\n  \
                  chanvars --base /usr/src/freeswitch --dir libs/esl --out vars.json\n  \
                  chanvars --base /usr/src/freeswitch --exclude-src --dir src/mod\n  \
                  chanvars --base /usr/src/freeswitch --needs-review"
)]
pub struct CliArgs {
    #[arg(long, value_name = "PATH", help = "The base path to the FreeSWITCH project")]
    pub base: PathBuf,

    #[arg(
        long = "dir",
        value_name = "DIR",
        num_args = 1..,
        action = clap::ArgAction::Append,
        help = "Directories relative to the base path to traverse, in addition to 'src'"
    )]
    pub dirs: Vec<String>,

    #[arg(long, help = "Exclude the 'src' directory from traversal")]
    pub exclude_src: bool,

    #[arg(
        long,
        value_name = "FILE",
        help = "The file in which to save the output [default: variables.json, or $CHANVARS_OUT]"
    )]
    pub out: Option<PathBuf>,

    #[arg(long, help = "Print variables that need manual review")]
    pub needs_review: bool,

    #[arg(long, help = "Print how macro arguments were expanded to variable names")]
    pub show_replacements: bool,

    #[arg(long, help = "Pretty-print the JSON output")]
    pub pretty: bool,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}
