//! IMGW Endpoint Settings
//!
//! Shows or updates the API URLs stored in the settings file.
//!
//! Each URL must be an absolute http(s) URL; an empty value resets that
//! dataset to the public IMGW default. If any value is invalid nothing is
//! written.
//!
//! Usage:
//!   cargo run --bin imgw_settings                                    # Show current settings
//!   cargo run --bin imgw_settings -- --meteorological https://...    # Update synop URL
//!   cargo run --bin imgw_settings -- --hydrological ""               # Reset hydro URL

use imgw_service::config::Settings;
use imgw_service::datasets::Dataset;
use std::env;

fn main() {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let args: Vec<String> = env::args().collect();
    let mut config_path: Option<String> = None;
    let mut updates: Vec<(Dataset, String)> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        let Some(value) = args.get(i + 1) else {
            eprintln!("Error: {} requires a value", args[i]);
            std::process::exit(1);
        };
        match args[i].as_str() {
            "--config" => config_path = Some(value.clone()),
            "--meteorological" => updates.push((Dataset::Meteorological, value.clone())),
            "--hydrological" => updates.push((Dataset::Hydrological, value.clone())),
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!(
                    "Usage: {} [--config PATH] [--meteorological URL] [--hydrological URL]",
                    args[0]
                );
                std::process::exit(1);
            }
        }
        i += 2;
    }

    let path = Settings::resolve_path(config_path.as_deref());
    let mut settings = match Settings::load_from_path(&path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", imgw_service::ingest::imgw::error_chain(&e));
            std::process::exit(1);
        }
    };

    if !updates.is_empty() {
        let errors: Vec<String> = updates
            .iter()
            .filter_map(|(dataset, url)| settings.update(*dataset, url).err())
            .map(|e| e.to_string())
            .collect();

        if !errors.is_empty() {
            for error in &errors {
                eprintln!("✗ {}", error);
            }
            eprintln!("\nSettings not saved.");
            std::process::exit(1);
        }

        if let Err(e) = settings.save(&path) {
            eprintln!("❌ {}", imgw_service::ingest::imgw::error_chain(&e));
            std::process::exit(1);
        }
        println!("✓ Settings saved to {}\n", path.display());
    }

    println!("Settings ({})", path.display());
    for dataset in Dataset::ALL {
        println!("   {:<24} {}", dataset.title(), settings.url(dataset));
    }
    match settings.http.timeout_secs {
        Some(secs) => println!("   {:<24} {}s", "HTTP timeout", secs),
        None => println!("   {:<24} client default", "HTTP timeout"),
    }
}
