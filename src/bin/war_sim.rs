use std::io::{stdin, stdout};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use war_sim::{Army, CLIArgs, Simulator};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CLIArgs::parse();
    println!("Welcome to the Medieval War Simulator!");
    if let Err(e) = run(&args) {
        match e.downcast_ref::<war_sim::Error>() {
            Some(parse_error) => println!("Error: {}", parse_error),
            None => println!("An unexpected error occurred: {:#}", e),
        }
        tracing::debug!("Simulation aborted: {:?}", e);
    }
}

fn run(args: &CLIArgs) -> Result<()> {
    let own_text = army_text(args.own.as_deref(), "Enter own platoons: ")?;
    let enemy_text = army_text(args.enemy.as_deref(), "Enter enemy platoons: ")?;

    let own_army = Army::parse(&own_text)?;
    let enemy_army = Army::parse(&enemy_text)?;
    tracing::debug!(
        "Parsed own army({}) and enemy army({}).",
        own_army,
        enemy_army
    );

    let simulator = Simulator::with_min_wins(args.min_wins);
    match simulator.find_winning_arrangement(&own_army, &enemy_army) {
        Some(winning_army) => {
            println!("One possible winning arrangement:");
            println!("{}", winning_army);
            if args.show_battles {
                let outcomes = Simulator::battle_outcomes(&winning_army, &enemy_army);
                for ((own, enemy), outcome) in winning_army
                    .units()
                    .iter()
                    .zip(enemy_army.units())
                    .zip(outcomes)
                {
                    println!("{} vs {}: {}", own, enemy, outcome);
                }
            }
        }
        None => println!("There is no chance of winning."),
    }

    Ok(())
}

fn army_text(given: Option<&str>, prompt: &str) -> Result<String> {
    match given {
        Some(text) => Ok(text.trim().to_string()),
        None => war_sim::prompt_line(prompt, &mut stdin().lock(), &mut stdout().lock())
            .with_context(|| format!("Failed to read army text for prompt({}).", prompt.trim())),
    }
}
