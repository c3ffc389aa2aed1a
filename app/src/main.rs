mod caller;
mod config;
mod view;

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("app=info".parse().unwrap()),
        )
        .init();

    let config = config::Config::from_env();
    tracing::info!(
        "Starting airdrop view against {} for contract {}",
        config.endpoint_url,
        config.contract_address
    );

    let caller = Arc::new(caller::RpcDropCaller::new(&config)?);
    let (mut view, mut settlements) = view::AirdropView::new(caller);

    println!("{}", view.render());
    println!("(press Enter to launch, Ctrl-C to quit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(_) => {
                    view.on_trigger();
                    println!("{}", view.render());
                }
                None => break,
            },
            Some(outcome) = settlements.recv() => {
                view.on_settlement(outcome);
                println!("{}", view.render());
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received SIGINT, shutting down...");
                break;
            }
        }
    }

    tracing::info!("Airdrop view stopped.");
    Ok(())
}
