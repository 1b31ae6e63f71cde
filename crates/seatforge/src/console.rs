//! Colorful console output for session events.
//!
//! Provides a `tracing` layer that prints engine, roster and validator events
//! as one coloured line each. Enabled with the `console` feature.

use std::fmt;
use std::io::{self, Write};
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Levels enabled for each crate whose events the console formats.
pub const DEFAULT_DIRECTIVES: [&str; 3] = [
    "seatforge_engine=info",
    "seatforge_roster=info",
    "seatforge_core=warn",
];

/// Installs the console layer as the global subscriber.
///
/// Safe to call multiple times; only the first call has effect. `RUST_LOG`
/// is honoured, with [`DEFAULT_DIRECTIVES`] added on top.
pub fn init() {
    INIT.get_or_init(|| {
        let mut filter = EnvFilter::from_default_env();
        for directive in DEFAULT_DIRECTIVES {
            if let Ok(directive) = directive.parse() {
                filter = filter.add_directive(directive);
            }
        }

        // Another subscriber may already be installed by the host.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SessionConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats SeatForge events with colors.
pub struct SessionConsoleLayer;

impl<S: Subscriber> Layer<S> for SessionConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("seatforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(*metadata.level(), &visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout().lock(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    ticket: Option<u64>,
    students: Option<u64>,
    seats: Option<u64>,
    relations: Option<u64>,
    accepted: Option<u64>,
    findings: Option<u64>,
    bytes: Option<u64>,
    student: Option<String>,
    diagnostic: Option<String>,
    error: Option<String>,
    file: Option<String>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_str(field, &format!("{:?}", value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "ticket" => self.ticket = Some(value),
            "students" => self.students = Some(value),
            "seats" => self.seats = Some(value),
            "relations" => self.relations = Some(value),
            "accepted" => self.accepted = Some(value),
            "findings" => self.findings = Some(value),
            "bytes" => self.bytes = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let value = Some(value.trim_matches('"').to_string());
        match field.name() {
            "event" => self.event = value,
            "student" => self.student = value,
            "diagnostic" => self.diagnostic = value,
            "error" => self.error = value,
            "file" => self.file = value,
            _ => {}
        }
    }
}

fn format_event(level: Level, v: &EventVisitor) -> String {
    let body = match v.event.as_deref() {
        Some("roster_uploaded") | Some("roster_parsed") => {
            format!("roster loaded: {} students", count(v.students))
        }
        Some("seats_confirmed") => format!(
            "{} seats confirmed for {} students",
            count(v.seats),
            count(v.students)
        ),
        Some("layout_requested") => format!(
            "layout #{} requested ({} students, {} seats, {} relations)",
            ticket(v),
            count(v.students),
            count(v.seats),
            count(v.relations)
        ),
        Some("layout_applied") => {
            let findings = v.findings.unwrap_or(0);
            let findings = if findings == 0 {
                "clean".bright_green().to_string()
            } else {
                format!("{findings} findings").yellow().to_string()
            };
            format!(
                "layout #{} applied: {} placed, {}",
                ticket(v),
                count(v.accepted),
                findings
            )
        }
        Some("layout_dropped") => format!("layout #{} superseded, dropped", ticket(v)),
        Some("layout_rejected") => format!(
            "layout #{} rejected: {} findings",
            ticket(v),
            count(v.findings)
        ),
        Some("layout_request_failed") => format!(
            "layout #{} failed: {}",
            ticket(v),
            text(&v.error).bright_red()
        ),
        Some("layout_entry_rejected") => text(&v.diagnostic).to_string(),
        Some("student_unassigned") => format!("student {} has no seat", text(&v.student)),
        Some("chart_exported") => format!(
            "chart exported to {} ({} bytes)",
            text(&v.file).underline(),
            count(v.bytes)
        ),
        Some("export_failed") => format!("export failed: {}", text(&v.error).bright_red()),
        _ => return String::new(),
    };

    format!(
        "{} {} {} {}",
        timestamp().bright_black(),
        level_tag(level),
        "[Session]".bright_cyan(),
        body
    )
}

fn level_tag(level: Level) -> String {
    if level == Level::ERROR {
        "ERROR".bright_red().to_string()
    } else if level == Level::WARN {
        " WARN".yellow().to_string()
    } else if level == Level::INFO {
        " INFO".bright_green().to_string()
    } else {
        "DEBUG".bright_blue().to_string()
    }
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).bright_yellow().to_string()
}

fn ticket(v: &EventVisitor) -> u64 {
    v.ticket.unwrap_or(0)
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("?")
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}
