extern crate chrono;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[cfg_attr(test, macro_use)]
extern crate serde_json;

use chrono::Utc;
use env_logger::{Builder, Env};
use std::io::Write;

const TIME_FORMAT: &'static str = "%Y-%m-%dT%H:%M:%S%.3fZ";

#[derive(Serialize, Debug)]
struct LogLine {
    level: String,
    time: String,
    target: String,
    message: String,
    #[serde(flatten)]
    fields: Option<serde_json::Value>,
}

impl LogLine {
    fn new(level: &str, target: &str, message: &str, fields: Option<serde_json::Value>) -> LogLine {
        LogLine {
            level: level.to_string(),
            time: Utc::now().format(TIME_FORMAT).to_string(),
            target: target.to_string(),
            message: message.trim().to_string(),
            fields,
        }
    }
}

/// Writes a structured log record, one JSON object per line.
///
/// `jlog!(Info, "Server started")` produces
/// `{"level": "INFO", "target": "...", "message": "Server started"}`;
/// an optional trailing object is flattened into the record:
/// `jlog!(Warn, "Slow query", {"millis": elapsed})`.
#[macro_export]
macro_rules! jlog {
    ($level:path, $msg:expr) => {{
        $crate::log_record($level, module_path!(), $msg, None)
    }};
    ($level:path, $msg:expr, $fields:tt) => {{
        $crate::log_record($level, module_path!(), $msg, Some(json!($fields)))
    }};
    ($level:path, $target:expr, $msg:expr, $fields:tt) => {{
        $crate::log_record($level, $target, $msg, Some(json!($fields)))
    }};
}

pub fn log_record(level: log::Level, target: &str, msg: &str, fields: Option<serde_json::Value>) {
    let line = LogLine::new(&level.to_string(), target, msg, fields);
    match serde_json::to_string(&line) {
        Ok(s) => log!(target: target, level, "{}", s),
        Err(_) => log!(target: target, level, "{}", msg),
    }
}

fn already_json(msg: &str) -> bool {
    msg.starts_with('{') && msg.ends_with('}')
}

/// Installs an env_logger that emits every record as a JSON line. Records
/// produced by `jlog!` (or any other pre-serialized JSON message, such as the
/// access log) pass through untouched.
pub fn setup_logger() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let msg = format!("{}", record.args());
            if already_json(&msg) {
                writeln!(buf, "{}", msg)
            } else {
                let line = LogLine::new(
                    &record.level().to_string(),
                    record.target(),
                    &msg,
                    None,
                );
                match serde_json::to_string(&line) {
                    Ok(s) => writeln!(buf, "{}", s),
                    Err(e) => writeln!(buf, "Could not serialize log record: {:?}: {:?}", e, line),
                }
            }
        })
        .init();
}
