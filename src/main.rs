use clap::Parser;
use std::{path, process};

mod config;
mod error;
mod io;
mod parser;

pub use config::Config;

/// Converts a markdown file into HTML.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Arguments {
    /// The markdown file to read.
    pub(crate) input: path::PathBuf,
    /// The HTML file to write. Existing content is overwritten.
    pub(crate) output: path::PathBuf,
    /// Wrap text between backticks in <code> tags.
    #[arg(long)]
    pub(crate) code_spans: bool,
    /// Read the configuration from this file instead of the default location.
    #[arg(long)]
    pub(crate) config: Option<path::PathBuf>,
    /// Anything after the output path is ignored.
    #[arg(num_args = 1.., trailing_var_arg = true, hide = true)]
    pub(crate) extra: Vec<String>,
}

impl Arguments {
    /// Parses the command line. Help and version requests are printed and end the program,
    /// every other parsing failure is reported as a usage error.
    fn parse_or_usage<I, T>(args: I) -> error::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|e| match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => e.exit(),
            _ => {
                log::debug!("{e}");
                error::ConvertError::Usage
            }
        })
    }
}

/// Main function
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("{e}");
        process::exit(e.exit_code());
    }
}

fn run() -> error::Result<()> {
    let args = Arguments::parse_or_usage(std::env::args_os())?;
    if !args.extra.is_empty() {
        log::debug!("Ignoring extra arguments {:?}", args.extra);
    }

    // Read config file, overriding with command line flags.
    let config = config::load_configuration(&args);

    io::HtmlBuilder::new(&config).create_html(&args.input, &args.output)
}
