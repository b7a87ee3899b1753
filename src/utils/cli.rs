//! Command-line argument parsing and help for the globber.
//!
//! When invoked with no args (globber), the TUI starts in the home directory.

use crate::config::Config;

/// Launch overrides applied to the navigation state before the first frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub path: Option<String>,
    pub quit_key: Option<char>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    RunApp(LaunchOptions),
    Version,
    Help,
    Init,
    Error(String),
}

/// Exit status for a malformed command line.
pub const USAGE_ERROR: i32 = 2;

impl CliAction {
    /// Status the process exits with when this action does not start the TUI.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CliAction::RunApp(_) => None,
            CliAction::Version | CliAction::Help | CliAction::Init => Some(0),
            CliAction::Error(_) => Some(USAGE_ERROR),
        }
    }
}

/// Parses the process arguments and performs the informational actions.
///
/// Returns `Some` when the TUI should start. Usage errors and a failed
/// `--init` end the process with a non-zero status.
pub fn handle_args() -> Option<LaunchOptions> {
    let action = parse_args(std::env::args().skip(1));
    let mut code = action.exit_code().unwrap_or(0);
    match action {
        CliAction::RunApp(opts) => return Some(opts),
        CliAction::Version => print_version(),
        CliAction::Help => print_help(),
        CliAction::Init => {
            if let Err(e) = Config::generate_default(&Config::default_path()) {
                eprintln!("Error: {}", e);
                code = 1;
            }
        }
        CliAction::Error(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!("Try --help for available options");
        }
    }
    if code != 0 {
        std::process::exit(code);
    }
    None
}

/// Parses arguments, not including the program name.
pub fn parse_args<I>(args: I) -> CliAction
where
    I: IntoIterator<Item = String>,
{
    let mut opts = LaunchOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => return CliAction::Version,
            "-h" | "--help" => return CliAction::Help,
            "--init" => return CliAction::Init,
            "-q" | "--quit-key" => {
                let Some(value) = args.next() else {
                    return CliAction::Error(format!("{} expects a character", arg));
                };
                match parse_quit_key(&value) {
                    Some(c) => opts.quit_key = Some(c),
                    None => {
                        return CliAction::Error(format!(
                            "quit key must be a single printable character, got '{}'",
                            value
                        ));
                    }
                }
            }
            a if a.starts_with('-') && a.len() > 1 => {
                return CliAction::Error(format!("Unknown argument: {}", a));
            }
            a if a.trim().is_empty() => {}
            a => {
                if opts.path.is_some() {
                    return CliAction::Error("only one PATH may be given".to_string());
                }
                opts.path = Some(a.to_string());
            }
        }
    }
    CliAction::RunApp(opts)
}

fn parse_quit_key(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_control() && !c.is_whitespace() => Some(c),
        _ => None,
    }
}

fn print_version() {
    println!("globber {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"globber - A keyboard-driven terminal directory browser with glob filtering

USAGE:
  globber [PATH] [-q CHAR]

PATH:
  Directory to open (defaults to the home directory)

OPTIONS:
  -q, --quit-key CHAR     Key that asks to quit (default: "$")
      --init              Generate a default configuration file
  -h, --help              Print help information
  -v, --version           Display the current installed version

KEYS:
  Up/Down                 Move the selection
  Left/Right              Move the selection by one column
  Enter                   Enter the selected folder or open the selected file
  Backspace               Delete the last character of the path
  any character           Type into the path; "path:pattern" filters by glob

ENVIRONMENT:
  GLOBBER_CONFIG          Override the default config path
  GLOBBER_LOG             Log filter (e.g. "debug"); enables file logging
  GLOBBER_LOG_FILE        Log file path (default: globber.log in the temp dir)
"#
    );
}
