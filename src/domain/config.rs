use std::path::Path;

use serde::{Deserialize, Serialize};

use super::rank::Rank;

/// Game configuration: ticket price and the payout table.
///
/// Payout amounts are a product detail of the surrounding game, not part
/// of the classification core: classification only names a [`Rank`], and
/// the payout lookup happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Price of a single ticket.
    ticket_price: u64,

    /// Prize money per rank.
    payouts: Payouts,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ticket_price: default_ticket_price(),
            payouts: Payouts::default(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content
    /// is invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML
    /// or if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the price of a single ticket.
    #[must_use]
    pub const fn ticket_price(&self) -> u64 {
        self.ticket_price
    }

    /// Returns the payout table.
    #[must_use]
    pub const fn payouts(&self) -> &Payouts {
        &self.payouts
    }

    /// Sets the price of a single ticket.
    pub const fn set_ticket_price(&mut self, price: u64) {
        self.ticket_price = price;
    }
}

/// Prize money awarded for each rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payouts {
    #[serde(default = "default_three")]
    three: u64,

    #[serde(default = "default_four")]
    four: u64,

    #[serde(default = "default_five")]
    five: u64,

    #[serde(default = "default_five_bonus")]
    five_bonus: u64,

    #[serde(default = "default_six")]
    six: u64,
}

impl Default for Payouts {
    fn default() -> Self {
        Self {
            three: default_three(),
            four: default_four(),
            five: default_five(),
            five_bonus: default_five_bonus(),
            six: default_six(),
        }
    }
}

impl Payouts {
    /// Returns the prize money for a rank.
    #[must_use]
    pub const fn amount(&self, rank: Rank) -> u64 {
        match rank {
            Rank::Three => self.three,
            Rank::Four => self.four,
            Rank::Five => self.five,
            Rank::FiveBonus => self.five_bonus,
            Rank::Six => self.six,
        }
    }
}

const fn default_ticket_price() -> u64 {
    1_000
}

const fn default_three() -> u64 {
    5_000
}

const fn default_four() -> u64 {
    50_000
}

const fn default_five() -> u64 {
    1_500_000
}

const fn default_five_bonus() -> u64 {
    30_000_000
}

const fn default_six() -> u64 {
    2_000_000_000
}

/// The serialized versions of the configuration.
/// This allows the on-disk format and the domain type to evolve
/// independently without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_ticket_price")]
        ticket_price: u64,

        #[serde(default)]
        payouts: Payouts,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                ticket_price,
                payouts,
            } => Self {
                ticket_price,
                payouts,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            ticket_price: config.ticket_price,
            payouts: config.payouts,
        }
    }
}
