//! IMGW Table Service - Main Entry Point
//!
//! Fetches the IMGW public synop and hydro tables and either:
//! 1. Prints one page of each requested dataset as a text table, or
//! 2. Serves paged tables as JSON over HTTP
//!
//! Every request re-fetches the upstream data; nothing is cached.
//!
//! Usage:
//!   cargo run --release                                   # Print page 1 of both tables
//!   cargo run --release -- --dataset hydro --page 2       # Print page 3 of the hydro table
//!   cargo run --release -- --endpoint 8080                # Serve JSON on port 8080
//!
//! Environment:
//!   IMGW_CONFIG                  - settings file (default: imgw.toml)
//!   IMGW_API_URL_METEOROLOGICAL  - overrides the synop endpoint
//!   IMGW_API_URL_HYDROLOGICAL    - overrides the hydro endpoint
//!   RUST_LOG                     - log filter (default: info)

use env_logger::Env;
use imgw_service::config::Settings;
use imgw_service::datasets::Dataset;
use imgw_service::endpoint;
use imgw_service::pager::PageRequest;
use imgw_service::render::render_text;
use imgw_service::table::DataTableService;
use std::env;

struct Args {
    config_path: Option<String>,
    dataset: Option<Dataset>,
    page: usize,
    endpoint_port: Option<u16>,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {} [--config PATH] [--dataset meteorological|hydrological] [--page N] [--endpoint PORT]",
        program
    )
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut parsed = Args {
        config_path: None,
        dataset: None,
        page: 0,
        endpoint_port: None,
    };

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args
            .get(i + 1)
            .ok_or_else(|| format!("{} requires a value", flag));

        match flag {
            "--config" => parsed.config_path = Some(value?.clone()),
            "--dataset" => parsed.dataset = Some(value?.parse()?),
            "--page" => {
                parsed.page = value?
                    .parse()
                    .map_err(|_| "--page requires a non-negative number".to_string())?
            }
            "--endpoint" => {
                parsed.endpoint_port = Some(
                    value?
                        .parse()
                        .map_err(|_| "--endpoint requires a port number".to_string())?,
                )
            }
            _ => return Err(format!("Unknown argument: {}", flag)),
        }
        i += 2;
    }

    Ok(parsed)
}

fn main() {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("imgw_service");

    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", usage(program));
            std::process::exit(1);
        }
    };

    let config_path = Settings::resolve_path(args.config_path.as_deref());
    let settings = match Settings::load(&config_path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("\n❌ Invalid settings: {}\n", imgw_service::ingest::imgw::error_chain(&e));
            std::process::exit(1);
        }
    };

    for dataset in Dataset::ALL {
        log::info!("{} endpoint: {}", dataset, settings.url(dataset));
    }

    let service = match DataTableService::from_settings(settings) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("\n❌ Failed to build HTTP client: {}\n", e);
            std::process::exit(1);
        }
    };

    if let Some(port) = args.endpoint_port {
        if let Err(e) = endpoint::start_endpoint_server(port, service) {
            eprintln!("❌ Endpoint server error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let datasets = match args.dataset {
        Some(dataset) => vec![dataset],
        None => Dataset::ALL.to_vec(),
    };

    for dataset in datasets {
        let view = service.list(dataset, PageRequest::new(args.page));
        println!("== {} ==", dataset);
        println!("{}", render_text(&view));
    }
}
