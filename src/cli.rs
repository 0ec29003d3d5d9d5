// appshots/src/cli.rs
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "appshots", version, about = "Resize screenshots and icons for App Store submission")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Hide the progress bar
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Every job reads and writes fixed paths below the working directory.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Cover-resize assets/ screenshots to all App Store sizes
    Screenshots,
    /// Derive iPad Pro 13" screenshots from app_store_screenshots/
    Ipad,
    /// Build the 1024x1024 opaque app icon
    Icon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommands_with_global_flags() {
        let cli = Cli::try_parse_from(["appshots", "ipad", "-v"]).unwrap();
        assert_eq!(cli.command, Commands::Ipad);
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn subcommands_take_no_arguments() {
        assert!(Cli::try_parse_from(["appshots", "icon", "extra.png"]).is_err());
        assert!(Cli::try_parse_from(["appshots"]).is_err());
    }
}
