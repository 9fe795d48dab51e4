use std::io::{self, BufWriter};
use std::process::ExitCode;
use std::sync::Arc;

use basic_data_analysis::cli::{Session, SessionConfig};
use basic_data_analysis::ingestion::{IngestionOptions, LogObserver};

fn main() -> ExitCode {
    env_logger::init();

    let config = SessionConfig {
        ingestion: IngestionOptions {
            observer: Some(Arc::new(LogObserver)),
            ..Default::default()
        },
        ..Default::default()
    };

    let stdin = io::stdin();
    let stdout = BufWriter::new(io::stdout());
    let mut session = Session::new(stdin.lock(), stdout, config);
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("terminal i/o failed: {e}");
            ExitCode::FAILURE
        }
    }
}
