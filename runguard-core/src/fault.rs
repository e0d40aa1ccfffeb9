//! Captured failure records.
//!
//! A [`Fault`] is an owned snapshot of a failure: a short kind label, a
//! message, optional backtrace text, optional key/value context, and an
//! optional chained cause. The harness builds faults from panic payloads
//! and error values; the reporter only reads them.

use std::any::Any;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Fault ───────────────────────────────────────────────────────────────────

/// An owned, printable record of a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fault {
    kind: String,
    message: String,
    trace: Option<String>,
    data: Vec<(String, String)>,
    cause: Option<Box<Fault>>,
}

impl Fault {
    /// Create a fault with a kind label and message.
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            trace: None,
            data: Vec::new(),
            cause: None,
        }
    }

    /// Attach backtrace text.
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    /// Attach one key/value pair of context, keeping earlier pairs.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.push((key.into(), value.into()));
        self
    }

    /// Set the immediate cause, replacing any existing one.
    pub fn with_cause(mut self, cause: Fault) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Capture a fault from a panic payload.
    ///
    /// The message is recovered from the usual `&str`/`String` payloads; a
    /// backtrace is attached when the platform reports one as captured
    /// (honors `RUST_BACKTRACE`).
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        let mut fault = Fault::new("panic", message);
        if let Some(trace) = captured_backtrace() {
            fault = fault.with_trace(trace);
        }
        fault
    }

    /// Capture a fault from an error value, walking its `source()` chain
    /// into the cause chain.
    ///
    /// The root kind is the error's type name. Sources are type-erased, so
    /// their kinds are recovered best-effort from the `Debug` rendering;
    /// build faults with [`Fault::new`]/[`Fault::with_cause`] when exact
    /// labels matter.
    pub fn from_error<E: Error>(err: &E) -> Self {
        let root = Fault::new(short_type_name::<E>(), err.to_string());
        attach_sources(root, err.source())
    }

    /// The kind label, e.g. `"panic"` or an error type name.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Backtrace text, when one was captured or attached.
    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }

    /// Key/value context pairs, in attachment order.
    pub fn data(&self) -> &[(String, String)] {
        &self.data
    }

    /// The immediate cause, if any.
    pub fn cause(&self) -> Option<&Fault> {
        self.cause.as_deref()
    }

    /// Iterate the cause chain from the immediate cause inward.
    pub fn causes(&self) -> impl Iterator<Item = &Fault> {
        std::iter::successors(self.cause.as_deref(), |fault| fault.cause.as_deref())
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> {}", self.kind, self.message)
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_ref().map(|cause| cause.as_ref() as &(dyn Error + 'static))
    }
}

impl From<anyhow::Error> for Fault {
    fn from(err: anyhow::Error) -> Self {
        let mut links = err.chain();
        let root = match links.next() {
            Some(outer) => Fault::new(erased_kind(outer), outer.to_string()),
            None => Fault::new("Error", err.to_string()),
        };
        let chain: Vec<Fault> = links
            .map(|link| Fault::new(erased_kind(link), link.to_string()))
            .collect();
        nest(root, chain)
    }
}

// ─── Capture helpers ─────────────────────────────────────────────────────────

fn captured_backtrace() -> Option<String> {
    let backtrace = Backtrace::capture();
    match backtrace.status() {
        BacktraceStatus::Captured => Some(backtrace.to_string()),
        _ => None,
    }
}

fn attach_sources(root: Fault, mut source: Option<&(dyn Error + 'static)>) -> Fault {
    let mut chain = Vec::new();
    while let Some(cause) = source {
        chain.push(Fault::new(erased_kind(cause), cause.to_string()));
        source = cause.source();
    }
    nest(root, chain)
}

/// Fold a flat outermost-first chain into nested causes under `root`.
fn nest(root: Fault, chain: Vec<Fault>) -> Fault {
    let mut nested: Option<Fault> = None;
    for fault in chain.into_iter().rev() {
        nested = Some(match nested {
            Some(inner) => fault.with_cause(inner),
            None => fault,
        });
    }
    match nested {
        Some(cause) => root.with_cause(cause),
        None => root,
    }
}

/// Last path segment of a type name, generics stripped: `std::io::Error`
/// becomes `Error`.
fn short_type_name<T: ?Sized>() -> &'static str {
    let name = std::any::type_name::<T>();
    let base = name.split('<').next().unwrap_or(name);
    base.rsplit("::").next().unwrap_or(base)
}

/// Best-effort kind label for a type-erased error: the leading token of
/// its `Debug` rendering (a struct or enum-variant name for derived
/// impls), falling back to `"Error"` for quoted ad-hoc messages.
fn erased_kind(err: &dyn Error) -> String {
    let debug = format!("{err:?}");
    if debug.starts_with('"') {
        return "Error".to_string();
    }
    let token: String = debug
        .chars()
        .take_while(|c| !matches!(c, ' ' | '(' | '{'))
        .collect();
    if token.is_empty() {
        "Error".to_string()
    } else {
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("the disk is on fire")]
    struct DiskError;

    #[derive(Debug, Error)]
    #[error("could not load settings")]
    struct SettingsError {
        #[source]
        source: DiskError,
    }

    #[derive(Debug, Error)]
    #[error("startup aborted")]
    struct StartupError {
        #[source]
        source: SettingsError,
    }

    #[test]
    fn test_from_error_captures_type_name_and_message() {
        let fault = Fault::from_error(&DiskError);

        assert_eq!(fault.kind(), "DiskError");
        assert_eq!(fault.message(), "the disk is on fire");
        assert!(fault.cause().is_none());
    }

    #[test]
    fn test_from_error_walks_source_chain_outward_in() {
        let err = StartupError {
            source: SettingsError { source: DiskError },
        };
        let fault = Fault::from_error(&err);

        let causes: Vec<&Fault> = fault.causes().collect();
        assert_eq!(causes.len(), 2);
        assert_eq!(causes[0].message(), "could not load settings");
        assert_eq!(causes[1].message(), "the disk is on fire");
    }

    #[test]
    fn test_from_anyhow_walks_context_chain() {
        let err = anyhow::Error::from(DiskError).context("initializing storage");
        let fault = Fault::from(err);

        assert_eq!(fault.message(), "initializing storage");
        let causes: Vec<&Fault> = fault.causes().collect();
        assert_eq!(causes.len(), 1);
        assert_eq!(causes[0].kind(), "DiskError");
        assert_eq!(causes[0].message(), "the disk is on fire");
    }

    #[test]
    fn test_from_panic_recovers_str_payload() {
        let payload = std::panic::catch_unwind(|| panic!("boom")).unwrap_err();
        let fault = Fault::from_panic(payload);

        assert_eq!(fault.kind(), "panic");
        assert_eq!(fault.message(), "boom");
    }

    #[test]
    fn test_from_panic_recovers_formatted_payload() {
        let payload = std::panic::catch_unwind(|| panic!("count was {}", 3)).unwrap_err();
        let fault = Fault::from_panic(payload);

        assert_eq!(fault.message(), "count was 3");
    }

    #[test]
    fn test_from_panic_handles_opaque_payload() {
        let payload = std::panic::catch_unwind(|| std::panic::panic_any(17_u32)).unwrap_err();
        let fault = Fault::from_panic(payload);

        assert_eq!(fault.message(), "Unknown panic");
    }

    #[test]
    fn test_display_brackets_kind() {
        let fault = Fault::new("TimeoutError", "deadline exceeded");

        assert_eq!(fault.to_string(), "<TimeoutError> deadline exceeded");
    }

    #[test]
    fn test_fault_is_an_error_with_source() {
        let fault = Fault::new("Outer", "outer").with_cause(Fault::new("Inner", "inner"));

        let source = Error::source(&fault).expect("cause should surface as source");
        assert_eq!(source.to_string(), "<Inner> inner");
    }

    #[test]
    fn test_short_type_name_strips_path_and_generics() {
        assert_eq!(short_type_name::<std::io::Error>(), "Error");
        assert_eq!(short_type_name::<Vec<String>>(), "Vec");
        assert_eq!(short_type_name::<DiskError>(), "DiskError");
    }

    #[test]
    fn test_erased_kind_takes_leading_debug_token() {
        let err: Box<dyn Error> = Box::new(DiskError);
        assert_eq!(erased_kind(err.as_ref()), "DiskError");

        let parse = "zzz".parse::<i32>().unwrap_err();
        assert_eq!(erased_kind(&parse), "ParseIntError");
    }
}
