use porosity_layers::config::load_config;
use porosity_layers::inspection;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;

    let report = inspection::run(&config).map_err(|e| e.to_string())?;
    report
        .write_json(&config.output.report_json)
        .map_err(|e| e.to_string())?;

    for specimen in &report.specimens {
        println!(
            "{}: {} defects, {} layers pass, {} fail (count {}, diameter {})",
            specimen.name,
            specimen.defects.len(),
            specimen.tally.pass,
            specimen.tally.fail,
            specimen.tally.count_fail,
            specimen.tally.diameter_fail
        );
    }
    println!(
        "Saved inspection report to {} ({:.3} ms)",
        config.output.report_json.display(),
        report.timing.total_ms
    );
    Ok(())
}

fn usage() -> String {
    "Usage: porosity-layers <config.json>".to_string()
}
