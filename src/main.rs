//! Runs the standard N-Queens scenario set and prints each outcome.
//!
//! Pass `--classic` to score every board against the fixed 8×8 constant and
//! use the coin-flip mutation gate in the tournament scenario.

use tracing::Level;
use u_nqueens::ga::{GaConfig, GaRunner, Mutation, Scoring};

struct Scenario {
    label: String,
    config: GaConfig,
}

fn scenarios(classic: bool) -> Vec<Scenario> {
    let scoring = if classic {
        Scoring::Reference
    } else {
        Scoring::Scaled
    };
    let gated = if classic {
        Mutation::FirstGeneCoinFlip
    } else {
        Mutation::gated()
    };

    let mut list: Vec<Scenario> = (0..10)
        .map(|seed| Scenario {
            label: format!("8 queens, roulette, seed {seed}"),
            config: GaConfig::baseline(8)
                .with_crossover_point(3)
                .with_population_size(150)
                .with_seed(seed),
        })
        .collect();

    list.push(Scenario {
        label: "5 queens, roulette".into(),
        config: GaConfig::baseline(5)
            .with_crossover_point(3)
            .with_population_size(50),
    });
    list.push(Scenario {
        label: "9 queens, roulette".into(),
        config: GaConfig::baseline(9)
            .with_crossover_point(5)
            .with_population_size(150),
    });
    list.push(Scenario {
        label: "5 queens, tournament k=2".into(),
        config: GaConfig::tournament(5, 2)
            .with_crossover_point(3)
            .with_population_size(150)
            .with_mutation(gated),
    });

    for scenario in &mut list {
        scenario.config.scoring = scoring;
    }
    list
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let classic = std::env::args().skip(1).any(|arg| arg == "--classic");

    for scenario in scenarios(classic) {
        let result = GaRunner::run(&scenario.config)?;
        println!("# {}", scenario.label);
        println!("{result}");
        println!();
    }

    Ok(())
}
