use porosity_layers::table::display::{layer_tsv, LAYER_HEADER};
use porosity_layers::table::{DefectTableRow, TableLayout};
use porosity_layers::Inspector;
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut input: Option<PathBuf> = None;
    let mut layers = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--layers" => layers = true,
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            _ => return Err(usage()),
        }
    }
    let input = input.ok_or_else(usage)?;
    let name = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let report = Inspector::default()
        .inspect_file(&name, &input, &TableLayout::default())
        .map_err(|e| e.to_string())?;

    if layers {
        println!("{}", LAYER_HEADER.join("\t"));
        for summary in &report.layers {
            println!("{}", layer_tsv(summary));
        }
    } else {
        println!("{}", DefectTableRow::HEADER.join("\t"));
        for row in report.display_table() {
            println!("{}", row.to_tsv());
        }
    }
    Ok(())
}

fn usage() -> String {
    "Usage: defect_table <scan.csv> [--layers]".to_string()
}
