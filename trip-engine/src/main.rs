use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use trip_engine::dataset;
use trip_engine::domain::{AnswerSet, AreaId, Locale};
use trip_engine::facade::Engine;
use trip_engine::sampler::{FileNonceStore, SystemClock};

/// Where the daily nonce slot lives unless overridden.
const DEFAULT_NONCE_FILE: &str = ".trip-engine-nonce.json";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let nonce_file = std::env::var("TRIP_ENGINE_NONCE_FILE")
        .unwrap_or_else(|_| DEFAULT_NONCE_FILE.to_string());

    let engine = match Engine::new(
        dataset::default_tables(),
        SystemClock,
        FileNonceStore::new(nonce_file),
    ) {
        Ok(engine) => engine,
        Err(e) => {
            // Static configuration is wrong; abort loudly.
            eprintln!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let output = match args.as_slice() {
        ["direction", from, to] => run(engine.direction(from, to, Locale::En)),
        ["direction", from, to, "ja"] => run(engine.direction(from, to, Locale::Ja)),
        ["match", answers @ ..] => {
            let mut set = AnswerSet::new();
            for pair in answers {
                match pair.split_once('=') {
                    Some((question, option)) => set.set(question, option),
                    None => {
                        eprintln!("expected question=option, got {pair:?}");
                        return ExitCode::FAILURE;
                    }
                }
            }
            to_json(&engine.match_areas(&set))
        }
        ["compare", a, b] => run(engine.compare_areas(&AreaId::new(*a), &AreaId::new(*b))),
        ["right-now", location, situation, time_of_day] => {
            to_json(&engine.right_now(location, situation, time_of_day))
        }
        ["picks", area, mood, companion] => to_json(&engine.quick_picks(area, mood, companion)),
        _ => {
            eprintln!("Trip helper decision engine");
            eprintln!();
            eprintln!("Usage:");
            eprintln!("  trip-engine direction <from> <to> [ja]");
            eprintln!("  trip-engine match [question=option ...]");
            eprintln!("  trip-engine compare <area-a> <area-b>");
            eprintln!("  trip-engine right-now <location> <situation> <time-of-day>");
            eprintln!("  trip-engine picks <area> <mood> <companion>");
            return ExitCode::FAILURE;
        }
    };

    match output {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

/// Render an engine result as JSON, or its error as a message.
fn run<T: serde::Serialize, E: std::fmt::Display>(result: Result<T, E>) -> Result<String, String> {
    match result {
        Ok(value) => to_json(&value),
        Err(e) => Err(e.to_string()),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| e.to_string())
}
