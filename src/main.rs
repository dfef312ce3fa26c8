use anyhow::Result;
use sic3scraper::{cli, config::OutputConfig};
use std::io;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    println!("{}", "=".repeat(60));
    println!("CONVERSOR SIC3PRO -> JSON");
    println!("{}", "=".repeat(60));
    println!();

    let config = OutputConfig::default();
    let mut stdin = io::stdin().lock();

    // Every outcome below is handled: the converter always exits 0.
    match cli::read_command(&mut stdin) {
        Ok(Some(command)) => {
            if let Err(e) = cli::run(command, &config) {
                error!("operation failed: {e:#}");
                println!("\nError: {e:#}");
            }
        }
        Ok(None) => println!("\nOpción no válida u operación cancelada"),
        Err(e) => {
            error!("could not read input: {e:#}");
            println!("\nError: {e:#}");
        }
    }

    println!("\n{}", "=".repeat(60));
    Ok(())
}
