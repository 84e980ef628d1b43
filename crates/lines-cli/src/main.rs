use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

mod query;

#[derive(Parser)]
#[command(name = "lines-cli")]
#[command(about = "Evaluate planar line relationships from JSON queries")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Evaluate a JSON array of queries and print a JSON array of results
    Eval {
        /// Query file, or `-` for stdin
        #[arg(long, default_value = "-")]
        input: String,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
    /// Print library name and version as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Eval { input, pretty } => eval(input, pretty),
        Action::Report => report(),
    }
}

fn eval(input: String, pretty: bool) -> Result<()> {
    let queries = query::read_queries(&input)?;
    tracing::info!(input, queries = queries.len(), "eval");
    let outcomes = query::evaluate_batch(&queries);
    let failed = outcomes
        .iter()
        .filter(|o| matches!(o, query::Outcome::Error { .. }))
        .count();
    tracing::info!(ok = outcomes.len() - failed, failed, "eval_done");
    let text = if pretty {
        serde_json::to_string_pretty(&outcomes)?
    } else {
        serde_json::to_string(&outcomes)?
    };
    println!("{text}");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "name": "lines2d",
        "version": lines2d::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
