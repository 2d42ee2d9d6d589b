use std::path::Path;

use clap::Parser;
use lotto::Rank;
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
pub struct Config {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, Parser)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key to set
        key: String,

        /// Value to set
        value: String,
    },
}

impl Config {
    #[instrument]
    pub fn run(self, path: &Path) -> anyhow::Result<()> {
        match self.command {
            ConfigCommand::Show => {
                let config = super::load_config(path)?;

                println!("Configuration:");
                println!("  ticket_price: {}", config.ticket_price());
                println!("  payouts:");
                for rank in Rank::all() {
                    println!("    {rank}: {}", config.payouts().amount(rank));
                }
            }
            ConfigCommand::Set { key, value } => {
                let mut config = super::load_config(path)?;

                match key.as_str() {
                    "ticket_price" => {
                        let price = value
                            .parse::<u64>()
                            .map_err(|_| anyhow::anyhow!("Value must be a positive integer"))?;
                        if price == 0 {
                            anyhow::bail!("Value must be a positive integer");
                        }

                        config.set_ticket_price(price);
                        config.save(path).map_err(|e| anyhow::anyhow!("{e}"))?;

                        println!("{}", format!("Ticket price: {price}").success());
                    }
                    _ => {
                        return Err(anyhow::anyhow!(
                            "Unknown configuration key: '{key}'\nSupported keys: ticket_price",
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_writes_the_config_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("lotto.toml");

        let command = Config {
            command: ConfigCommand::Set {
                key: "ticket_price".to_string(),
                value: "2000".to_string(),
            },
        };
        command.run(&path).expect("set should succeed");

        let config = lotto::Config::load(&path).unwrap();
        assert_eq!(config.ticket_price(), 2_000);
    }

    #[test]
    fn set_rejects_unknown_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("lotto.toml");

        let command = Config {
            command: ConfigCommand::Set {
                key: "jackpot".to_string(),
                value: "1".to_string(),
            },
        };

        let error = command.run(&path).unwrap_err();
        assert!(error.to_string().contains("Unknown configuration key"));
    }

    #[test]
    fn set_rejects_non_numeric_price() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("lotto.toml");

        let command = Config {
            command: ConfigCommand::Set {
                key: "ticket_price".to_string(),
                value: "free".to_string(),
            },
        };

        assert!(command.run(&path).is_err());
    }

    #[test]
    fn show_succeeds_without_a_config_file() {
        let tmp = tempfile::tempdir().unwrap();

        let command = Config {
            command: ConfigCommand::Show,
        };

        command
            .run(&tmp.path().join("lotto.toml"))
            .expect("show should fall back to defaults");
    }
}
