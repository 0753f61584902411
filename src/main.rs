use anyhow::Result;
use clap::Parser;
use proposal_crew::{cli, launch, telemetry};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("❌ An error occurred: {:#}", e);
        eprintln!("Please check your API keys and try again");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = cli::Args::parse();
    let company = args.company.clone();
    let print = args.print;
    let config = args.into_config()?;

    telemetry::init_tracing(config.verbose)?;

    let outcome = launch(&config, &company).await?;

    println!("✅ 提案已生成: {}", outcome.path.display());
    if print {
        println!("\n{}", outcome.document.body);
    }

    Ok(())
}
