use std::path::{Path, PathBuf};

mod check;
mod config;
mod play;
mod terminal;

use check::Check;
use clap::ArgAction;
use config::Config;
use lotto::{LottoNumber, Ticket};
use play::Play;

/// Parse a comma-separated six-number ticket from a CLI argument.
///
/// This is a CLI boundary function: whitespace around tokens is tolerated
/// here, unlike the strict draw parser.
fn parse_ticket(s: &str) -> Result<Ticket, String> {
    let numbers = s
        .split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<u8>()
                .map_err(|_| format!("invalid number '{token}'"))
                .and_then(|value| LottoNumber::new(value).map_err(|e| e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ticket::new(numbers).map_err(|e| e.to_string())
}

/// Load the game configuration, falling back to the defaults when the
/// file does not exist.
fn load_config(path: &Path) -> anyhow::Result<lotto::Config> {
    if path.exists() {
        lotto::Config::load(path).map_err(|e| anyhow::anyhow!("{e}"))
    } else {
        Ok(lotto::Config::default())
    }
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the game configuration file
    #[arg(short, long, default_value = "lotto.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command.run(&self.config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Play a round: buy tickets, enter the draw, see the results
    Play(Play),

    /// Classify explicit tickets against an explicit draw
    Check(Check),

    /// Show or modify game configuration
    Config(Config),
}

impl Command {
    fn run(self, config_path: &Path) -> anyhow::Result<()> {
        match self {
            Self::Play(command) => command.run(config_path)?,
            Self::Check(command) => command.run(config_path)?,
            Self::Config(command) => command.run(config_path)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ticket_accepts_six_distinct_numbers() {
        let ticket = parse_ticket("1,2,3,4,5,6").unwrap();
        assert_eq!(ticket.numbers().len(), 6);
    }

    #[test]
    fn parse_ticket_tolerates_whitespace() {
        let ticket = parse_ticket(" 1, 2,3 ,4, 5, 6 ").unwrap();
        assert_eq!(ticket.to_string(), "[1, 2, 3, 4, 5, 6]");
    }

    #[test]
    fn parse_ticket_rejects_bad_token() {
        let error = parse_ticket("1,2,3,4,5,x").unwrap_err();
        assert!(error.contains("invalid number 'x'"));
    }

    #[test]
    fn parse_ticket_rejects_out_of_range() {
        let error = parse_ticket("1,2,3,4,5,46").unwrap_err();
        assert!(error.contains("outside the valid range"));
    }

    #[test]
    fn parse_ticket_rejects_wrong_count_and_duplicates() {
        assert!(parse_ticket("1,2,3,4,5").is_err());
        assert!(parse_ticket("1,1,2,3,4,5").is_err());
    }

    #[test]
    fn load_config_defaults_when_file_is_absent() {
        let tmp = tempfile::tempdir().unwrap();
        let config = load_config(&tmp.path().join("lotto.toml")).unwrap();
        assert_eq!(config, lotto::Config::default());
    }

    #[test]
    fn load_config_reads_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("lotto.toml");

        let mut expected = lotto::Config::default();
        expected.set_ticket_price(2_500);
        expected.save(&path).unwrap();

        assert_eq!(load_config(&path).unwrap(), expected);
    }
}
