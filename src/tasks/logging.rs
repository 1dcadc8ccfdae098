use crate::FailResult;

use std::fmt;
use std::path::Path;
use std::time::Instant;

use ansi_term::Colour;
use log::{Level, LevelFilter};

/// Crates whose output is shown at `Trace` level under `--verbose`.
const OUR_CRATES: &[&str] = &[
    "orbis_tasks",
    "orbis_matrix",
    "orbis_conics",
    "orbis_coords",
];

/// Install the logger for the lifetime of the program.
///
/// Messages go to stderr (stdout is reserved for results), and additionally
/// to `log_file` if one is given.
pub(crate) fn init_global_logger(verbose: bool, log_file: Option<&Path>) -> FailResult<()>
{
    let start = Instant::now();
    let mut fern = fern::Dispatch::new()
        .format(move |out, message, record| {
            let t = start.elapsed();
            out.finish(format_args!("[{:>4}.{:03}s][{}][{}] {}",
                t.as_secs(),
                t.subsec_millis(),
                record.target(),
                ColorizedLevel(record.level()),
                message))
        })
        .level(LevelFilter::Info);

    if verbose {
        for &krate in OUR_CRATES {
            fern = fern.level_for(krate, LevelFilter::Trace);
        }
    }

    fern = fern.chain(std::io::stderr());
    if let Some(path) = log_file {
        fern = fern.chain(fern::log_file(path)?);
    }

    fern.apply().map_err(|e| format_err!("could not install the logger: {}", e))?;
    Ok(())
}

#[derive(Debug, Copy, Clone)]
pub struct ColorizedLevel(pub Level);
impl fmt::Display for ColorizedLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let style = match self.0 {
            Level::Error => Colour::Red.bold(),
            Level::Warn  => Colour::Red.normal(),
            Level::Info  => Colour::Cyan.bold(),
            Level::Debug => Colour::Yellow.dimmed(),
            Level::Trace => Colour::Cyan.normal(),
        };
        write!(f, "{}", style.paint(self.0.to_string()))
    }
}
