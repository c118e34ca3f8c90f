//! Command-line arguments of the demo binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Run a scripted ride request against in-memory collaborators.
#[derive(Parser, Debug)]
#[command(name = "rideflow", version)]
#[command(about = "Drive the ride-request state container through a full session")]
pub struct Cli {
    /// Config file (default: <config dir>/rideflow/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Account to sign in with; created when it does not exist
    #[arg(long, default_value = "rider@example.com")]
    pub email: String,

    #[arg(long, default_value = "correct horse")]
    pub password: String,

    /// Name used when the account has to be created
    #[arg(long, default_value = "Demo Rider")]
    pub name: String,

    /// Dropoff by name (default: first configured dropoff)
    #[arg(long)]
    pub dropoff: Option<String>,

    /// Ride option id (default: first configured option)
    #[arg(long)]
    pub ride_option: Option<String>,

    /// Make the location lookup fail
    #[arg(long)]
    pub fail_location: bool,

    /// Make the ride service reject the request
    #[arg(long)]
    pub reject_rides: bool,

    /// Sign out at the end instead of keeping the session
    #[arg(long)]
    pub sign_out: bool,

    /// More logging (-v debug, -vv trace); overrides the configured level
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Effective default log filter given the configured one.
    pub fn log_level<'a>(&self, configured: &'a str) -> &'a str {
        match self.verbose {
            0 => configured,
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let cli = Cli::parse_from(["rideflow"]);
        assert_eq!(cli.email, "rider@example.com");
        assert!(cli.config.is_none());
        assert_eq!(cli.log_level("warn"), "warn");
    }

    #[test]
    fn verbosity_overrides_configured_level() {
        let cli = Cli::parse_from(["rideflow", "-vv", "--ride-option", "xl"]);
        assert_eq!(cli.log_level("info"), "trace");
        assert_eq!(cli.ride_option.as_deref(), Some("xl"));
    }
}
