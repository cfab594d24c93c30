//! Pure view rendering for the panel.
//!
//! Each data shape gets a typed rendering function: parsed payloads in,
//! display strings out. Nothing here touches a terminal, which keeps every
//! display rule testable on its own.

use std::collections::BTreeMap;

use crate::model::{ExposedFunction, ServerStatusReport};

const SECS_PER_DAY: u64 = 86_400;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_MINUTE: u64 = 60;

/// The rendered status regions. `None` means a region has never
/// received data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusView {
    pub running_time: Option<String>,
    pub current_timestamp: Option<String>,
    pub load_avg: Option<String>,
    pub pending_requests_by_host: Option<String>,
    pub active_requests_by_host: Option<String>,
    pub active_requests: Option<String>,
    pub pending_requests: Option<String>,
}

impl StatusView {
    /// Fold a status report into the view. Absent report fields leave their
    /// region untouched, so a sparse report never clears data rendered from
    /// an earlier one.
    pub fn update(&mut self, report: &ServerStatusReport) {
        if let Some(running_time) = report.running_time {
            self.running_time = Some(running_time_message(running_time, report.cost));
        }
        if let Some(ref timestamp) = report.current_timestamp {
            self.current_timestamp = Some(timestamp.clone());
        }
        if let Some(ref load_avg) = report.load_avg {
            self.load_avg = Some(load_avg.join(", "));
        }
        if let Some(ref hosts) = report.pending_requests_by_host {
            self.pending_requests_by_host = Some(host_counts_line(hosts));
        }
        if let Some(ref hosts) = report.active_requests_by_host {
            self.active_requests_by_host = Some(host_counts_line(hosts));
        }
        if let Some(active) = report.active_requests {
            self.active_requests = Some(active.to_string());
        }
        if let Some(pending) = report.pending_requests {
            self.pending_requests = Some(pending.to_string());
        }
    }
}

/// "The web server has been running for D day(s), H hour(s), M minute(s),
/// and S second(s)." with each unit singular exactly when its value is 1.
/// When a cost estimate is present a per-month sentence is appended.
pub fn running_time_message(running_time: f64, cost: Option<f64>) -> String {
    let total = running_time.max(0.0) as u64;
    let days = total / SECS_PER_DAY;
    let hours = (total % SECS_PER_DAY) / SECS_PER_HOUR;
    let minutes = (total % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = total % SECS_PER_MINUTE;

    let mut message = format!(
        "The web server has been running for {}, {}, {}, and {}.",
        pluralize(days, "day"),
        pluralize(hours, "hour"),
        pluralize(minutes, "minute"),
        pluralize(seconds, "second"),
    );

    if let Some(cost) = cost {
        message.push_str(&format!(
            " At its current rate, the spider will cost about ${:.2} per month.",
            cost
        ));
    }

    message
}

fn pluralize(value: u64, unit: &str) -> String {
    if value == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", value, unit)
    }
}

/// Comma-joined "host: count" entries, host-sorted, keeping only hosts
/// whose count is a positive integer. Zero, negative, and non-numeric
/// counts are dropped.
pub fn host_counts_line(hosts: &BTreeMap<String, serde_json::Value>) -> String {
    hosts
        .iter()
        .filter_map(|(host, value)| {
            let count = value.as_i64()?;
            if count > 0 {
                Some(format!("{}: {}", host, count))
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Argument list cell of a function table: "None" when empty, otherwise one
/// item per argument in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentList {
    None,
    Items(Vec<String>),
}

impl ArgumentList {
    pub fn from_args(args: &[String]) -> Self {
        if args.is_empty() {
            ArgumentList::None
        } else {
            ArgumentList::Items(args.to_vec())
        }
    }

    pub fn lines(&self) -> Vec<String> {
        match self {
            ArgumentList::None => vec!["None".to_string()],
            ArgumentList::Items(items) => items.clone(),
        }
    }
}

/// One exposed function rendered for display: a heading plus labeled
/// interval, required, and optional rows.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionView {
    pub name: String,
    pub interval: String,
    pub required_arguments: ArgumentList,
    pub optional_arguments: ArgumentList,
}

impl FunctionView {
    pub fn from_function(function: &ExposedFunction) -> Self {
        Self {
            name: function.name.clone(),
            interval: format!("{} seconds", format_number(function.descriptor.interval)),
            required_arguments: ArgumentList::from_args(&function.descriptor.required_arguments),
            optional_arguments: ArgumentList::from_args(&function.descriptor.optional_arguments),
        }
    }
}

/// Whole-number intervals print without a trailing ".0".
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
