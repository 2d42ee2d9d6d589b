use std::path::Path;

use clap::Parser;
use lotto::{Config, Draw, Rank, Statistics, Ticket};
use tracing::instrument;

use super::terminal::{Colorize, rule_width};

#[derive(Debug, Parser)]
#[command(about = "Classify tickets against a winning draw")]
pub struct Check {
    /// Winning numbers, e.g. '1,2,3,4,5,6'
    #[arg(long)]
    winning: String,

    /// Bonus number, e.g. '7'
    #[arg(long)]
    bonus: String,

    /// Ticket to classify (repeatable)
    #[arg(long = "ticket", required = true, value_parser = super::parse_ticket)]
    tickets: Vec<Ticket>,

    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Check {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, config_path: &Path) -> anyhow::Result<()> {
        let config = super::load_config(config_path)?;
        let draw = Draw::parse(&self.winning, &self.bonus)?;

        let results: Vec<Option<Rank>> =
            self.tickets.iter().map(|ticket| draw.classify(ticket)).collect();

        match self.output {
            OutputFormat::Json => Self::output_json(&draw, &self.tickets, &results, &config)?,
            OutputFormat::Table => Self::output_table(&self.tickets, &results, &config),
        }

        Ok(())
    }

    fn output_table(tickets: &[Ticket], results: &[Option<Rank>], config: &Config) {
        let payouts = config.payouts();

        for (ticket, result) in tickets.iter().zip(results) {
            match result {
                Some(rank) => println!(
                    "{ticket}  {}",
                    format!("{rank} ({})", payouts.amount(*rank)).success()
                ),
                None => println!("{ticket}  {}", "no prize".dim()),
            }
        }

        let stats = Statistics::tally(results.iter().copied());
        println!("{}", "─".repeat(rule_width()).dim());
        println!(
            "{} of {} tickets won, {} total",
            results.iter().flatten().count(),
            stats.tickets(),
            stats.winnings(payouts)
        );
    }

    fn output_json(
        draw: &Draw,
        tickets: &[Ticket],
        results: &[Option<Rank>],
        config: &Config,
    ) -> anyhow::Result<()> {
        use serde_json::json;

        let payouts = config.payouts();

        let entries: Vec<_> = tickets
            .iter()
            .zip(results)
            .map(|(ticket, result)| {
                json!({
                    "ticket": ticket.numbers().iter().map(|n| n.get()).collect::<Vec<_>>(),
                    "rank": result,
                    "payout": result.map(|rank| payouts.amount(rank)),
                })
            })
            .collect();

        let stats = Statistics::tally(results.iter().copied());
        let output = json!({
            "draw": {
                "numbers": draw.numbers().iter().map(|n| n.get()).collect::<Vec<_>>(),
                "bonus": draw.bonus().get(),
            },
            "results": entries,
            "summary": {
                "tickets": stats.tickets(),
                "winnings": stats.winnings(payouts),
            },
        });

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(winning: &str, bonus: &str, tickets: &[&str], output: OutputFormat) -> Check {
        Check {
            winning: winning.to_string(),
            bonus: bonus.to_string(),
            tickets: tickets
                .iter()
                .map(|raw| super::super::parse_ticket(raw).unwrap())
                .collect(),
            output,
        }
    }

    #[test]
    fn run_reports_table_output_for_valid_input() {
        let tmp = tempfile::tempdir().unwrap();
        let command = check(
            "1,2,3,4,5,6",
            "7",
            &["1,2,3,4,5,6", "10,11,12,13,14,15"],
            OutputFormat::Table,
        );

        command
            .run(&tmp.path().join("lotto.toml"))
            .expect("check should succeed");
    }

    #[test]
    fn run_reports_json_output_for_valid_input() {
        let tmp = tempfile::tempdir().unwrap();
        let command = check("1,2,3,4,5,6", "7", &["1,2,3,4,5,7"], OutputFormat::Json);

        command
            .run(&tmp.path().join("lotto.toml"))
            .expect("check should succeed");
    }

    #[test]
    fn run_fails_on_invalid_draw() {
        let tmp = tempfile::tempdir().unwrap();
        let command = check("1,2,3,4,5", "7", &["1,2,3,4,5,6"], OutputFormat::Table);

        assert!(command.run(&tmp.path().join("lotto.toml")).is_err());
    }
}
