use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use anyhow::{Context, Result, anyhow};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};
use uuid::Uuid;

use crate::config::{LoggingConfig, LoggingRotation};

const LOG_FILE_PREFIX: &str = "unlocker.log";

/// Keeps the background log writer alive; dropping it flushes pending lines.
pub struct LoggingGuard {
    _worker_guard: WorkerGuard,
}

#[derive(Debug, Default)]
struct RetentionSweep {
    removed: usize,
    warnings: Vec<String>,
}

pub fn init_tracing(logging_config: &LoggingConfig) -> Result<LoggingGuard> {
    if logging_config.filter.trim().is_empty() {
        return Err(anyhow!("logging.filter cannot be empty"));
    }
    let env_filter = build_env_filter(&logging_config.filter)?;

    let log_dir = resolve_log_dir(&logging_config.dir)?;
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create logging directory {}", log_dir.display()))?;

    let sweep = sweep_expired_logs(
        &log_dir,
        LOG_FILE_PREFIX,
        logging_config.retention_days,
        SystemTime::now(),
    );

    let appender = match logging_config.rotation {
        LoggingRotation::Daily => rolling::daily(&log_dir, LOG_FILE_PREFIX),
        LoggingRotation::Hourly => rolling::hourly(&log_dir, LOG_FILE_PREFIX),
    };
    let (writer, worker_guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_current_span(true)
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(env_filter);

    let stderr_layer = logging_config.stderr_warn_enabled.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(LevelFilter::WARN)
    });

    tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    let run_id = Uuid::now_v7().to_string();
    tracing::info!(
        target: "logging",
        run_id = %run_id,
        dir = %log_dir.display(),
        filter = %logging_config.filter,
        rotation = ?logging_config.rotation,
        retention_days = logging_config.retention_days,
        expired_removed = sweep.removed,
        "logging_initialized"
    );
    for warning in sweep.warnings {
        tracing::warn!(target: "logging", warning = %warning, "logging_retention_warning");
    }

    Ok(LoggingGuard {
        _worker_guard: worker_guard,
    })
}

fn build_env_filter(filter: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(filter)
        .with_context(|| format!("failed to parse logging.filter '{}'", filter))
}

fn resolve_log_dir(dir: &Path) -> Result<PathBuf> {
    if dir.as_os_str().is_empty() {
        return Err(anyhow!("logging.dir cannot be empty"));
    }
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }

    Ok(std::env::current_dir()
        .context("failed to read current working directory for logging.dir resolution")?
        .join(dir))
}

/// Removes prefixed log files last modified before the retention window. Failures are
/// collected rather than raised so a stale file never blocks startup.
fn sweep_expired_logs(
    log_dir: &Path,
    prefix: &str,
    retention_days: usize,
    now: SystemTime,
) -> RetentionSweep {
    let retention = Duration::from_secs(retention_days.saturating_mul(24 * 60 * 60) as u64);
    let cutoff = now.checked_sub(retention).unwrap_or(SystemTime::UNIX_EPOCH);
    let mut sweep = RetentionSweep::default();

    let entries = match fs::read_dir(log_dir) {
        Ok(entries) => entries,
        Err(err) => {
            sweep
                .warnings
                .push(format!("failed to scan {}: {}", log_dir.display(), err));
            return sweep;
        }
    };

    for entry in entries.flatten() {
        if !entry.file_name().to_string_lossy().starts_with(prefix) {
            continue;
        }

        let path = entry.path();
        let modified = entry.metadata().and_then(|metadata| {
            if metadata.is_file() {
                metadata.modified().map(Some)
            } else {
                Ok(None)
            }
        });

        match modified {
            Ok(Some(modified)) if modified <= cutoff => match fs::remove_file(&path) {
                Ok(()) => sweep.removed += 1,
                Err(err) => sweep
                    .warnings
                    .push(format!("failed to remove {}: {}", path.display(), err)),
            },
            Ok(_) => {}
            Err(err) => sweep
                .warnings
                .push(format!("failed to stat {}: {}", path.display(), err)),
        }
    }

    sweep
}
