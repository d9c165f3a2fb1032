//! Command-line argument handling.

use std::path::PathBuf;

/// Where a narrative comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    pub fn display_name(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".into(),
            Input::File(p) => p.display().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub inputs: Vec<Input>,
    pub category: Option<String>,
    pub json: bool,
    pub config: Option<PathBuf>,
    pub help: bool,
}

pub const USAGE: &str = "\
triage: incident narrative triage

Usage: triage [options] <transcript>...

Arguments:
  <transcript>             Transcript file, or - for stdin (at most once)

Options:
  --category <label>       Use this category instead of running the classifier
  --json                   Print reports as JSON
  --config <path>          Load keyword tables from a JSON file (default: $TRIAGE_CONFIG)
  -h, --help               Show this help message";

pub fn parse<I, S>(argv: I) -> Result<Args, String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = Args::default();
    let mut iter = argv.into_iter().map(Into::into);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => args.help = true,
            "--json" => args.json = true,
            "--category" => {
                let value = iter.next().ok_or("--category needs a label")?;
                args.category = Some(value);
            }
            "--config" => {
                let value = iter.next().ok_or("--config needs a path")?;
                args.config = Some(PathBuf::from(value));
            }
            "-" if args.inputs.contains(&Input::Stdin) => {
                return Err("stdin (-) can only be read once".into());
            }
            "-" => args.inputs.push(Input::Stdin),
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option: {}. Use 'triage --help' for usage.", flag));
            }
            path => args.inputs.push(Input::File(PathBuf::from(path))),
        }
    }

    if !args.help && args.inputs.is_empty() {
        return Err("No transcript given. Use 'triage --help' for usage.".into());
    }
    Ok(args)
}
