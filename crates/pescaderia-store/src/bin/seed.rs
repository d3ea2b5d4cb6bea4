//! Seeds a data directory with the demo records and reports what's inside.
//!
//! ```text
//! cargo run --bin seed -- --data-dir ./data
//! ```
//!
//! Safe to run repeatedly: existing collection files are never touched.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pescaderia_store::{Store, StoreConfig, StoreResult};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let data_dir = match parse_args() {
        Ok(dir) => dir,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("usage: seed [--data-dir <path>]");
            return ExitCode::FAILURE;
        }
    };

    match run(data_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("seed failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args() -> Result<PathBuf, String> {
    let mut args = std::env::args().skip(1);
    let mut data_dir = PathBuf::from("./data");

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data-dir" => {
                data_dir = args
                    .next()
                    .map(PathBuf::from)
                    .ok_or("--data-dir needs a path".to_string())?;
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(data_dir)
}

fn run(data_dir: PathBuf) -> StoreResult<()> {
    let store = Store::open(StoreConfig::new(data_dir))?;

    let products = store.products().list()?;
    let customers = store.customers().list()?;
    let suppliers = store.suppliers().list()?;
    let sales = store.sales().list()?;

    info!(
        products = products.len(),
        customers = customers.len(),
        suppliers = suppliers.len(),
        sales = sales.len(),
        "store ready"
    );
    Ok(())
}
