mod generate;

use clap::Parser;
use eyre::Result;
use generate::GenerateCommand;

use crate::reports::{Output, TerminalOutput};

/// Extension trait for exiting on token errors with the plain one-line message
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for propgen_spec::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                TerminalOutput.error(&e.to_string());
                log::debug!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "propgen")]
#[command(version)]
#[command(about = "Generate a JSX component with PropTypes and defaultProps")]
pub(crate) struct Cli {
    #[command(flatten)]
    generate: GenerateCommand,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        self.generate.run()
    }
}
