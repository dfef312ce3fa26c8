// src/bin/generate_datasets.rs
//
// Non-interactive batch generator: writes every mock dataset plus the
// generation summary under data/datasets/. Exits 1 if anything fails.
use anyhow::Result;
use chrono::{DateTime, Local};
use sic3scraper::{config::OutputConfig, mock};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let now = Local::now();
    println!("{}", "=".repeat(60));
    println!("SISTEMA AUTOMATIZADO SIC3PRO - GENERADOR DE DATOS");
    println!("{}", "=".repeat(60));
    println!("Fecha: {}", now.format("%Y-%m-%d %H:%M:%S"));
    println!("{}", "=".repeat(60));

    if let Err(e) = generate(now) {
        error!("generation failed: {e:#}");
        std::process::exit(1);
    }
}

fn generate(now: DateTime<Local>) -> Result<()> {
    let config = OutputConfig::default();

    info!("generating datasets");
    let datasets = mock::generate(now);
    let summary = mock::save_all(&datasets, &config, now)?;

    let resumen = &datasets.termination.resumen;
    println!();
    println!("{}", "=".repeat(60));
    println!("PROCESO COMPLETADO EXITOSAMENTE");
    println!("{}", "=".repeat(60));
    println!("Terminaciones: {} items", resumen.total);
    println!("  Completados: {}", resumen.completados);
    println!("  En progreso: {}", resumen.en_progreso);
    println!("  Pendientes:  {}", resumen.pendientes);
    println!("  Retrasados:  {}", resumen.retrasados);
    println!("  Eficiencia:  {}", resumen.eficiencia);
    println!();
    println!("Alertas activas: {}", datasets.termination.alertas.len());
    for alerta in &datasets.termination.alertas {
        println!("  - {}", alerta.titulo);
    }
    println!();
    println!("Datos guardados en: {}", config.datasets_dir.display());
    println!("Última actualización: {}", summary.ultima_actualizacion);
    println!("{}", "=".repeat(60));
    Ok(())
}
