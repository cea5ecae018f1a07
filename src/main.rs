use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::fs;

use tessera_rs::tiles::{decide, RuleSetLoader};
use tessera_rs::EvaluationContext;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a rule file against a context snapshot
    Eval {
        /// Path to the rule file (YAML or JSON)
        #[arg(short, long)]
        rules: String,

        /// Path to the context JSON document
        #[arg(short, long)]
        context: String,

        /// Print the decision report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a rule file without evaluating it
    Check {
        /// Path to the rule file (YAML or JSON)
        #[arg(short, long)]
        rules: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Eval {
            rules,
            context,
            json,
        } => {
            let rules = RuleSetLoader::new().load(&rules)?;
            let ctx: EvaluationContext = serde_json::from_str(&fs::read_to_string(&context)?)?;
            log::info!(
                "evaluating rule set '{}' ({} tiles)",
                rules.name,
                rules.tiles.len()
            );

            let decisions = decide(&rules, &ctx);
            if json {
                println!("{}", serde_json::to_string_pretty(&decisions)?);
            } else {
                for d in &decisions {
                    let state = match (d.visible, d.enabled) {
                        (true, true) => "visible",
                        (true, false) => "visible (disabled)",
                        (false, _) => "hidden",
                    };
                    println!("{:<20} {:<20} {}", d.id, state, d.title);
                    if let Some(action) = &d.action {
                        println!("{:<20} {:<20} -> {}", "", "", action);
                    }
                    if let Some(fault) = &d.fault {
                        println!("{:<20} {:<20} !! {}", "", "", fault);
                    }
                }
            }
        }
        Commands::Check { rules } => {
            let path = rules;
            let rules = RuleSetLoader::new().load(&path)?;
            rules.validate()?;
            println!("{}: ok ({} tiles)", path, rules.tiles.len());
        }
    }

    Ok(())
}
