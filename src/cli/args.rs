//! Command-line argument parsing for the CodeLingo CLI.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Forget the stored session and exit
    Logout,
    /// Run the TUI application (default)
    RunTui,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub command: CliCommand,
    /// `--api-url <url>` override
    pub api_url: Option<String>,
}

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: codelingo [OPTIONS]

Options:
      --api-url <URL>  Lessons API base URL (default http://localhost:8000)
      --logout         Forget the stored session and exit
  -V, --version        Print version
  -h, --help           Print help";

/// Parse command-line arguments.
///
/// Unknown flags are ignored. `--api-url` without a value is an error.
///
/// # Examples
///
/// ```
/// use codelingo::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["codelingo".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, String>
where
    I: Iterator<Item = String>,
{
    let mut parsed = CliArgs {
        command: CliCommand::RunTui,
        api_url: None,
    };
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliArgs { command: CliCommand::Version, ..parsed }),
            "--help" | "-h" => return Ok(CliArgs { command: CliCommand::Help, ..parsed }),
            "--logout" => parsed.command = CliCommand::Logout,
            "--api-url" => match args.next() {
                Some(url) if !url.starts_with('-') => parsed.api_url = Some(url),
                _ => return Err("--api-url requires a value".to_string()),
            },
            other => {
                if let Some(url) = other.strip_prefix("--api-url=") {
                    parsed.api_url = Some(url.to_string());
                }
            }
        }
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, String> {
        let mut all = vec!["codelingo".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]).unwrap().command, CliCommand::Version);
        assert_eq!(parse(&["-V"]).unwrap().command, CliCommand::Version);
    }

    #[test]
    fn test_parse_no_args() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.command, CliCommand::RunTui);
        assert!(args.api_url.is_none());
    }

    #[test]
    fn test_parse_api_url() {
        let args = parse(&["--api-url", "http://remote:9000"]).unwrap();
        assert_eq!(args.api_url.as_deref(), Some("http://remote:9000"));

        let args = parse(&["--api-url=http://other"]).unwrap();
        assert_eq!(args.api_url.as_deref(), Some("http://other"));
    }

    #[test]
    fn test_parse_api_url_missing_value() {
        assert!(parse(&["--api-url"]).is_err());
        assert!(parse(&["--api-url", "--logout"]).is_err());
    }

    #[test]
    fn test_parse_logout() {
        assert_eq!(parse(&["--logout"]).unwrap().command, CliCommand::Logout);
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["--unknown"]).unwrap().command, CliCommand::RunTui);
    }
}
