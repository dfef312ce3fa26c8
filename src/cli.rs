// src/cli.rs
use anyhow::{bail, Context, Result};
use chrono::Local;
use std::{
    fs,
    io::{BufRead, Write},
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use crate::{
    config::{OutputConfig, TEMP_DOWNLOAD_FILE},
    extract, fetch, mock, output,
};

/// Everything the interactive menu can ask for, as plain data. The menu
/// layer only translates keystrokes into one of these; all real work (and
/// all testing of it) happens against `run`.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ConvertFile { html_file: PathBuf },
    DownloadAndConvert { url: String },
    GenerateSample,
    GenerateAll,
}

const MENU: &str = "\
Opciones disponibles:
1. Convertir archivo HTML de SIC3PRO a JSON
2. Descargar datos desde URL de SIC3PRO
3. Generar datos de ejemplo
4. Generar todos los datasets de prueba";

/// Show the menu and read one command from `input`. `None` means the choice
/// was invalid or input ended; both are handled outcomes, not errors.
pub fn read_command(input: &mut impl BufRead) -> Result<Option<Command>> {
    println!("{MENU}");
    println!();

    let Some(choice) = prompt_line(input, "Selecciona una opción (1-4): ")? else {
        return Ok(None);
    };

    let command = match choice.as_str() {
        "1" => prompt_line(input, "Ruta del archivo HTML: ")?.map(|path| Command::ConvertFile {
            html_file: PathBuf::from(path),
        }),
        "2" => prompt_line(input, "URL del reporte SIC3PRO: ")?
            .map(|url| Command::DownloadAndConvert { url }),
        "3" => Some(Command::GenerateSample),
        "4" => Some(Command::GenerateAll),
        _ => None,
    };
    Ok(command)
}

fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    std::io::stdout().flush().ok();

    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading standard input")?;
    if read == 0 {
        // EOF: the user cancelled
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Execute one command against the given output configuration.
pub fn run(command: Command, config: &OutputConfig) -> Result<()> {
    match command {
        Command::ConvertFile { html_file } => {
            let tables = convert_report(&html_file, config.report_data_path())?;
            println!("Conversión exitosa: {tables} tablas convertidas");
        }
        Command::DownloadAndConvert { url } => {
            let client = fetch::build_client()?;
            let temp = PathBuf::from(TEMP_DOWNLOAD_FILE);
            fetch::download_report(&client, &url, &temp)?;

            let converted = convert_report(&temp, config.report_data_path());
            if let Err(e) = fs::remove_file(&temp) {
                warn!(path = %temp.display(), "could not remove temp download: {e}");
            }
            let tables = converted?;
            println!("Conversión exitosa: {tables} tablas convertidas");
        }
        Command::GenerateSample => {
            let data = mock::sample::build(Local::now());
            output::write_json(config.report_data_path(), &data)?;
            println!("Datos de ejemplo creados: {} items", data.items.len());
        }
        Command::GenerateAll => {
            let now = Local::now();
            let datasets = mock::generate(now);
            let summary = mock::save_all(&datasets, config, now)?;
            println!(
                "Procesamiento automático completado: {} archivos generados",
                summary.archivos_generados.len() + 1
            );
        }
    }
    Ok(())
}

/// Read `html_file`, extract every table and write the result to
/// `output_path`. Returns the number of retained tables.
pub fn convert_report(
    html_file: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<usize> {
    let html_file = html_file.as_ref();
    if !html_file.is_file() {
        bail!("el archivo no existe: {}", html_file.display());
    }
    let html = fs::read_to_string(html_file)
        .with_context(|| format!("could not read `{}`", html_file.display()))?;
    let source_name = html_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| html_file.display().to_string());

    info!(file = %html_file.display(), "converting report");
    let result = extract::extract_tables(&html, &source_name, Local::now());
    output::write_json(output_path, &result)?;
    info!(
        tables_found = result.metadata.tables_found,
        tables_kept = result.tables.len(),
        "conversion complete"
    );
    Ok(result.tables.len())
}
