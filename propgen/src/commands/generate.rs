use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use propgen_codegen_js::files::DEFAULT_EXTENSION;
use propgen_core::WriteError;
use propgen_spec::ComponentSpec;

use super::UnwrapOrExit;
use crate::{
    ops::{GenerateOptions, generate},
    reports::{Output, Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Name of the component to create
    pub component_name: String,

    /// Props in the format name:type:required (e.g., myProp:string:true)
    #[arg(long, value_name = "TOKEN", num_args = 1..)]
    pub props: Vec<String>,

    /// Default props in the format name:value (e.g., myProp:defaultValue)
    #[arg(long, value_name = "TOKEN", num_args = 1..)]
    pub defaults: Vec<String>,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// File extension of the generated component
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub ext: String,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let spec =
            ComponentSpec::parse(&self.component_name, &self.props, &self.defaults).unwrap_or_exit();

        let opts = GenerateOptions {
            output_dir: &self.output,
            extension: &self.ext,
            dry_run: self.dry_run,
        };

        let mut out = TerminalOutput;
        match generate(&spec, opts) {
            Ok(report) => {
                report.render(&mut out);
                Ok(())
            }
            Err(err) => match err.downcast_ref::<WriteError>() {
                Some(write_err) => {
                    out.error(&write_err.to_string());
                    std::process::exit(1);
                }
                None => Err(err),
            },
        }
    }
}
