#![cfg(feature = "std")]

use std::env;
use std::sync::OnceLock;
use std::time::Instant;

use log::{Level, LevelFilter, Metadata, Record};

/// Records from other crates are shown only at this level or above.
const FOREIGN_LEVEL: Level = Level::Warn;

/// Writes `+secs.millis LEVEL target: message` lines to stderr, measured
/// from logger installation, so stdout stays free for match results.
struct DuelLogger {
    started: OnceLock<Instant>,
}

impl DuelLogger {
    fn elapsed_secs(&self) -> f64 {
        self.started.get_or_init(Instant::now).elapsed().as_secs_f64()
    }
}

fn is_own_target(target: &str) -> bool {
    target == env!("CARGO_CRATE_NAME")
        || target
            .strip_prefix(env!("CARGO_CRATE_NAME"))
            .is_some_and(|rest| rest.starts_with("::"))
}

fn passes(level: Level, target: &str, max: LevelFilter) -> bool {
    level <= max && (level <= FOREIGN_LEVEL || is_own_target(target))
}

impl log::Log for DuelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        passes(metadata.level(), metadata.target(), log::max_level())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let target = record
            .target()
            .strip_prefix(concat!(env!("CARGO_CRATE_NAME"), "::"))
            .unwrap_or(record.target());
        eprintln!(
            "+{:>9.3} {:<5} {}: {}",
            self.elapsed_secs(),
            record.level(),
            target,
            record.args()
        );
    }

    fn flush(&self) {}
}

static LOGGER: DuelLogger = DuelLogger {
    started: OnceLock::new(),
};

/// Install the stderr logger. The level comes from `DUEL_LOG` (`trace` to
/// `error`, or `off`) and falls back to `info`.
pub fn init_logging() {
    let level = env::var("DUEL_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    if log::set_logger(&LOGGER).is_ok() {
        LOGGER.started.get_or_init(Instant::now);
        log::set_max_level(level);
    }
}
