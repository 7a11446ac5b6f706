use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::{Result, eyre::eyre};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "lootsplit=info";

/// Installs the global subscriber. A log file takes precedence; otherwise
/// logs go to stderr only when the terminal is not owned by the UI.
pub fn init(log_file: Option<&Path>, to_stderr: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match (log_file, to_stderr) {
        (Some(path), _) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        (None, true) => builder.with_writer(std::io::stderr).try_init(),
        (None, false) => return Ok(()),
    };
    installed.map_err(|err| eyre!("failed to install logger: {err}"))
}
