// Copyright 2025 Crrow
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    env,
    io::IsTerminal,
    sync::{Arc, Mutex, Once},
};

use bon::Builder;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, de};
use smart_default::SmartDefault;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, filter, layer::SubscriberExt, prelude::*};

/// Deserializes a string value, using `Default::default()` if the string is
/// empty.
///
/// Used for configuration fields where both a missing value and an empty
/// string mean "use the default".
///
/// # Errors
/// Returns an error if deserialization fails.
pub fn empty_string_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        Ok(T::default())
    } else {
        T::deserialize(de::value::StrDeserializer::new(&s)).map_err(|e: de::value::Error| {
            de::Error::custom(format!("invalid value, expect empty string, err: {e}"))
        })
    }
}

/// Configuration options for the logging system.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, SmartDefault, Builder)]
#[serde(default)]
pub struct LoggingOptions {
    /// Directory for log files.
    ///
    /// When non-empty, log files rotate hourly inside this directory. When
    /// empty, only stderr logging is used.
    #[default = ""]
    #[builder(default, into)]
    pub dir: String,

    /// Log level filter string, e.g. `"info"` or `"warn,themesmith_store=debug"`.
    /// If None, falls back to `RUST_LOG` and then to `warn`.
    pub level: Option<String>,

    /// Output format for log messages.
    #[serde(default, deserialize_with = "empty_string_as_default")]
    #[builder(default)]
    pub log_format: LogFormat,

    /// Maximum number of rotated log files to retain.
    #[default = 72]
    #[builder(default = 72)]
    pub max_log_files: usize,

    /// Whether to write logs to stderr. Stdout is reserved for command output.
    #[default = true]
    #[builder(default = true)]
    pub append_stderr: bool,
}

/// Available log output formats.
#[derive(
    Clone, Debug, Copy, PartialEq, Eq, Serialize, Deserialize, Default, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// One JSON object per event.
    Json,

    /// Human-readable text.
    #[default]
    Text,
}

/// Initialize logging for unit tests.
///
/// # Environment Variables
///
/// * `UNITTEST_LOG_DIR` - Directory for test logs (default:
///   "/tmp/__unittest_logs")
/// * `UNITTEST_LOG_LEVEL` - Log level filter (default: "debug")
///
/// Safe to call from many tests; only the first call initializes.
pub fn init_default_ut_logging() {
    static START: Once = Once::new();

    START.call_once(|| {
        let dir =
            env::var("UNITTEST_LOG_DIR").unwrap_or_else(|_| "/tmp/__unittest_logs".to_string());
        let level = env::var("UNITTEST_LOG_LEVEL").unwrap_or_else(|_| "debug".to_string());
        let opts = LoggingOptions {
            dir: dir.clone(),
            level: Some(level),
            append_stderr: false,
            ..Default::default()
        };
        let guards = init_global_logging("unittest", &opts);
        if let Ok(mut g) = GLOBAL_UT_LOG_GUARD.lock() {
            *g = Some(guards);
        }

        tracing::info!("logs dir = {}", dir);
    });
}

/// Keeps unit test worker guards alive for the whole test binary.
static GLOBAL_UT_LOG_GUARD: Lazy<Arc<Mutex<Option<Vec<WorkerGuard>>>>> =
    Lazy::new(|| Arc::new(Mutex::new(None)));

/// Used when neither `LoggingOptions::level` nor `RUST_LOG` is set.
const DEFAULT_LOG_TARGETS: &str = "warn";

/// Initialize logging.
///
/// Layers, depending on `opts`:
///
/// - **Stderr Layer**: if `append_stderr` is true
/// - **File Layer**: hourly rotated files in `dir`
/// - **Error File Layer**: error-only files in `dir`
///
/// The level filter is fixed for the life of the process.
///
/// Only the first call has any effect. An invalid level string falls back to
/// the default filter; a log directory that cannot be opened disables file
/// logging. Both are reported on stderr.
#[allow(clippy::print_stderr)]
pub fn init_global_logging(app_name: &str, opts: &LoggingOptions) -> Vec<WorkerGuard> {
    static START: Once = Once::new();
    let mut guards = vec![];

    START.call_once(|| {
        if let Err(e) = LogTracer::init() {
            eprintln!("{app_name}: log bridge unavailable: {e}");
        }

        let stderr_logging_layer = if opts.append_stderr {
            let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
            guards.push(guard);

            if opts.log_format == LogFormat::Json {
                Some(
                    tracing_subscriber::fmt::Layer::new()
                        .json()
                        .with_writer(writer)
                        .with_ansi(std::io::stderr().is_terminal())
                        .with_current_span(true)
                        .with_span_list(true)
                        .boxed(),
                )
            } else {
                Some(
                    tracing_subscriber::fmt::Layer::new()
                        .with_writer(writer)
                        .with_ansi(std::io::stderr().is_terminal())
                        .boxed(),
                )
            }
        } else {
            None
        };

        let file_logging_layer = rolling_appender(app_name, opts, app_name).map(|appender| {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            guards.push(guard);

            if opts.log_format == LogFormat::Json {
                tracing_subscriber::fmt::Layer::new()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_current_span(true)
                    .with_span_list(true)
                    .boxed()
            } else {
                tracing_subscriber::fmt::Layer::new()
                    .with_writer(writer)
                    .with_ansi(false)
                    .boxed()
            }
        });

        let err_prefix = format!("{app_name}-err");
        let err_file_logging_layer =
            rolling_appender(app_name, opts, &err_prefix).map(|appender| {
                let (writer, guard) = tracing_appender::non_blocking(appender);
                guards.push(guard);

                if opts.log_format == LogFormat::Json {
                    tracing_subscriber::fmt::Layer::new()
                        .json()
                        .with_writer(writer)
                        .with_ansi(false)
                        .with_filter(filter::LevelFilter::ERROR)
                        .boxed()
                } else {
                    tracing_subscriber::fmt::Layer::new()
                        .with_writer(writer)
                        .with_ansi(false)
                        .with_filter(filter::LevelFilter::ERROR)
                        .boxed()
                }
            });

        let filter = parse_targets(opts.level.as_deref()).unwrap_or_else(|e| {
            eprintln!("{app_name}: invalid log level ({e}), using {DEFAULT_LOG_TARGETS}");
            DEFAULT_LOG_TARGETS
                .parse::<filter::Targets>()
                .unwrap_or_default()
        });

        let subscriber = Registry::default()
            .with(filter)
            .with(stderr_logging_layer)
            .with(file_logging_layer)
            .with(err_file_logging_layer);

        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("{app_name}: global tracing subscriber already set: {e}");
        }
    });

    guards
}

/// Resolves the filter from the explicit level, then `RUST_LOG`, then the
/// default.
fn parse_targets(
    level: Option<&str>,
) -> Result<filter::Targets, tracing_subscriber::filter::ParseError> {
    level
        .map(str::to_owned)
        .or_else(|| env::var(EnvFilter::DEFAULT_ENV).ok())
        .as_deref()
        .unwrap_or(DEFAULT_LOG_TARGETS)
        .parse::<filter::Targets>()
}

#[allow(clippy::print_stderr)]
fn rolling_appender(
    app_name: &str,
    opts: &LoggingOptions,
    prefix: &str,
) -> Option<RollingFileAppender> {
    if opts.dir.is_empty() {
        return None;
    }
    RollingFileAppender::builder()
        .rotation(Rotation::HOURLY)
        .filename_prefix(prefix)
        .max_log_files(opts.max_log_files)
        .build(&opts.dir)
        .inspect_err(|e| {
            eprintln!(
                "{app_name}: file logging disabled, cannot open {}: {e}",
                opts.dir
            );
        })
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_stderr_text() {
        let opts = LoggingOptions::default();
        assert!(opts.dir.is_empty());
        assert!(opts.append_stderr);
        assert_eq!(opts.log_format, LogFormat::Text);
        assert_eq!(opts.max_log_files, 72);
    }

    #[test]
    fn empty_format_string_means_default() {
        let opts: LoggingOptions =
            serde_json::from_str(r#"{"log_format":"","level":"debug"}"#).unwrap();
        assert_eq!(opts.log_format, LogFormat::Text);
        assert_eq!(opts.level.as_deref(), Some("debug"));

        let opts: LoggingOptions = serde_json::from_str(r#"{"log_format":"json"}"#).unwrap();
        assert_eq!(opts.log_format, LogFormat::Json);
    }

    #[test]
    fn builder_matches_default() {
        assert_eq!(LoggingOptions::builder().build(), LoggingOptions::default());
        let opts = LoggingOptions::builder()
            .dir("/tmp/logs")
            .level("info".to_owned())
            .build();
        assert_eq!(opts.dir, "/tmp/logs");
    }

    #[test]
    fn explicit_level_is_parsed() {
        assert!(parse_targets(Some("info,themesmith_store=debug")).is_ok());
        assert!(parse_targets(Some("themesmith_store=loud")).is_err());
    }
}
