//! Failure reporting through the console output port.
//!
//! Renders a [`Fault`] as the block format console programs expect: a
//! summary line with the kind in angle brackets, the backtrace, any
//! attached context data, and one `[Inner Exception]` block per chained
//! cause, all framed by blank lines.

use std::sync::OnceLock;

use regex::Regex;

use crate::console::{Console, ConsoleError};
use crate::fault::Fault;

/// Matches messages that already end with summary punctuation (`:` or `-`,
/// plus optional trailing whitespace); those are emitted without the
/// default `": "` separator.
fn message_ending() -> &'static Regex {
    static ENDING: OnceLock<Regex> = OnceLock::new();
    ENDING.get_or_init(|| Regex::new(r"[:-]\s*$").expect("ending pattern is valid"))
}

/// Report a fault with the default `"Caught exception: "` summary prefix.
pub fn write_fault(console: &mut Console, fault: &Fault) -> Result<(), ConsoleError> {
    write_report(console, None, fault)
}

/// Report a fault with a caller-supplied summary message.
///
/// A whitespace-only message falls back to the default prefix. Unless the
/// message already ends with `:` or `-`, `": "` is appended before the
/// fault summary.
pub fn write_fault_with_message(
    console: &mut Console,
    message: &str,
    fault: &Fault,
) -> Result<(), ConsoleError> {
    write_report(console, Some(message), fault)
}

fn write_report(
    console: &mut Console,
    message: Option<&str>,
    fault: &Fault,
) -> Result<(), ConsoleError> {
    console.write("")?;

    match message {
        Some(message) if !message.trim().is_empty() => {
            if message_ending().is_match(message) {
                console.write(&format!("{message}{fault}"))?;
            } else {
                console.write(&format!("{message}: {fault}"))?;
            }
        }
        _ => console.write(&format!("Caught exception: {fault}"))?,
    }

    write_body(console, fault)?;

    for cause in fault.causes() {
        console.write("")?;
        console.write(&format!("[Inner Exception] {cause}"))?;
        write_body(console, cause)?;
    }

    console.write("")
}

/// The trace block and context data shared by the root fault and every
/// cause block.
fn write_body(console: &mut Console, fault: &Fault) -> Result<(), ConsoleError> {
    console.write(fault.trace().unwrap_or(""))?;

    if !fault.data().is_empty() {
        console.write("EXCEPTION DATA:")?;
        for (key, value) in fault.data() {
            console.write(&format!("    {key}: {value}"))?;
        }
    }

    Ok(())
}
