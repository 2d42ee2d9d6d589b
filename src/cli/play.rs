use std::path::Path;

use clap::Parser;
use dialoguer::Input;
use lotto::{Config, Draw, LottoNumber, Rank, Statistics, Ticket, domain::number::PICK_SIZE};
use rand::seq::SliceRandom;
use tracing::instrument;

use super::terminal::{Colorize, rule_width};

/// Fixed marker prefixed to user-facing validation failures.
const ERROR_PREFIX: &str = "[ERROR] ";

#[derive(Debug, Parser)]
#[command(about = "Play a round: buy tickets, enter the draw, see the results")]
pub struct Play {
    /// Purchase amount; prompted for when omitted
    #[arg(long)]
    amount: Option<u64>,
}

impl Play {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, config_path: &Path) -> anyhow::Result<()> {
        let config = super::load_config(config_path)?;
        let price = config.ticket_price();

        let amount = match self.amount {
            Some(amount) => {
                validate_amount(amount, price).map_err(|message| anyhow::anyhow!(message))?;
                amount
            }
            None => prompt_amount(price)?,
        };

        let count = amount / price;
        let mut rng = rand::rng();
        let tickets: Vec<Ticket> = (0..count).map(|_| generate_ticket(&mut rng)).collect();

        println!("Bought {count} tickets.");
        for ticket in &tickets {
            println!("{ticket}");
        }
        println!();

        let draw = prompt_draw()?;

        let stats = Statistics::tally(tickets.iter().map(|ticket| draw.classify(ticket)));
        print_results(&stats, &config, amount);

        Ok(())
    }
}

/// Generate a ticket by shuffling the 1-45 pool and taking six.
///
/// Numbers are sorted ascending for display; the classification itself is
/// order-independent.
fn generate_ticket<R: rand::Rng + ?Sized>(rng: &mut R) -> Ticket {
    let mut pool: Vec<u8> = (LottoNumber::MIN..=LottoNumber::MAX).collect();
    pool.shuffle(rng);

    let mut picks = pool[..PICK_SIZE].to_vec();
    picks.sort_unstable();

    let numbers = picks
        .into_iter()
        .map(LottoNumber::new)
        .collect::<Result<Vec<_>, _>>()
        .expect("pool values are in range");
    Ticket::new(numbers).expect("pool values are distinct")
}

fn validate_amount(amount: u64, price: u64) -> Result<(), String> {
    if amount == 0 || amount % price != 0 {
        return Err(format!(
            "the purchase amount must be a positive multiple of {price}"
        ));
    }
    Ok(())
}

fn prompt_amount(price: u64) -> anyhow::Result<u64> {
    loop {
        let input: String = Input::new()
            .with_prompt("Purchase amount")
            .interact_text()?;
        match input.trim().parse::<u64>() {
            Ok(amount) => match validate_amount(amount, price) {
                Ok(()) => return Ok(amount),
                Err(message) => eprintln!("{ERROR_PREFIX}{message}"),
            },
            Err(_) => eprintln!("{ERROR_PREFIX}the purchase amount must be a number"),
        }
    }
}

/// Prompt for the winning numbers and the bonus number.
///
/// Validation failures are reported with the fixed error marker and the
/// offending input is prompted for again; the library itself never loops.
fn prompt_draw() -> anyhow::Result<Draw> {
    let numbers = loop {
        let input: String = Input::new()
            .with_prompt("Winning numbers (comma-separated)")
            .interact_text()?;
        match Draw::parse_numbers(input.trim()) {
            Ok(numbers) => break numbers,
            Err(e) => eprintln!("{ERROR_PREFIX}{e}"),
        }
    };

    loop {
        let input: String = Input::new().with_prompt("Bonus number").interact_text()?;
        match Draw::parse_bonus(input.trim(), &numbers) {
            Ok(bonus) => return Ok(Draw::new(numbers, bonus)?),
            Err(e) => eprintln!("{ERROR_PREFIX}{e}"),
        }
    }
}

fn print_results(stats: &Statistics, config: &Config, spent: u64) {
    let payouts = config.payouts();

    println!();
    println!("Winning statistics");
    println!("{}", "─".repeat(rule_width()).dim());
    for rank in Rank::all() {
        println!(
            "{rank} ({} won) - {} tickets",
            payouts.amount(rank),
            stats.count(rank)
        );
    }

    let rate = stats.yield_rate(payouts, spent);
    let summary = format!("Total yield: {rate:.1}%");
    if stats.winnings(payouts) >= spent {
        println!("{}", summary.success());
    } else {
        println!("{summary}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tickets_are_valid_and_sorted() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let ticket = generate_ticket(&mut rng);
            let numbers = ticket.numbers();
            assert_eq!(numbers.len(), PICK_SIZE);
            assert!(numbers.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn validate_amount_requires_positive_multiple_of_price() {
        assert!(validate_amount(8_000, 1_000).is_ok());
        assert!(validate_amount(0, 1_000).is_err());
        assert!(validate_amount(1_500, 1_000).is_err());
    }

    #[test]
    fn run_with_explicit_amount_rejects_non_multiples() {
        let tmp = tempfile::tempdir().unwrap();
        let play = Play {
            amount: Some(1_234),
        };

        assert!(play.run(&tmp.path().join("lotto.toml")).is_err());
    }
}
