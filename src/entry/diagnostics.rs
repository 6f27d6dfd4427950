//! Stack snapshots and call-site identification.
//!
//! Both diagnostic entries are always [`Visibility::Restrict`](super::Visibility):
//!
//! - [`StackTrace`] is captured once, where the failure originates, and keeps
//!   at most [`MAX_STACK_FRAMES`] frames.
//! - [`ReverseTrace`] collects one `[file:line] function` hop per layer that
//!   creates or propagates an error, deepest first.
//!
//! File and line come from `#[track_caller]`. The function name comes from a
//! stack walk that skips frames belonging to this crate, the standard library
//! and the unwinder, plus any prefix registered with [`add_internal_prefix`].

use core::fmt;
use core::panic::Location;
use std::sync::{Arc, PoisonError, RwLock};

use super::ErrorVec;

/// Upper bound on the frames kept by a [`StackTrace`].
pub const MAX_STACK_FRAMES: usize = 64;

const UNKNOWN_FUNCTION: &str = "unknown";

const BUILTIN_INTERNAL_PREFIXES: [&str; 8] = [
    concat!(env!("CARGO_CRATE_NAME"), "::"),
    "backtrace::",
    "core::",
    "std::",
    "alloc::",
    "futures_core::",
    "pin_project_lite::",
    "tower::",
];

static INTERNAL_PREFIXES: RwLock<Vec<&'static str>> = RwLock::new(Vec::new());

/// Treats frames whose symbol starts with `prefix` as part of the error
/// machinery, e.g. an application's own error helpers.
///
/// Meant to be called during startup, next to kind registration.
pub fn add_internal_prefix(prefix: &'static str) {
    let mut prefixes = INTERNAL_PREFIXES.write().unwrap_or_else(PoisonError::into_inner);
    if !prefixes.contains(&prefix) {
        prefixes.push(prefix);
    }
}

fn is_internal(function: &str) -> bool {
    let name = function.trim_start_matches('<');
    if BUILTIN_INTERNAL_PREFIXES.iter().any(|prefix| name.starts_with(prefix)) {
        return true;
    }
    if function.contains(concat!(" as ", env!("CARGO_CRATE_NAME"), "::")) {
        return true;
    }

    INTERNAL_PREFIXES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

/// One resolved stack frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub function: String,
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.function)?;
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, "\n\tat {file}:{line}"),
            (Some(file), None) => write!(f, "\n\tat {file}"),
            _ => Ok(()),
        }
    }
}

/// Resolves up to `limit` frames, starting at the first frame outside the
/// internal prefixes. Unnamed frames are skipped.
fn external_frames(limit: usize) -> Vec<Frame> {
    let mut frames = Vec::new();
    let mut outside = false;

    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if frames.len() >= limit {
                return;
            }
            let Some(name) = symbol.name() else {
                return;
            };

            let function = format!("{name:#}");
            if !outside {
                if is_internal(&function) {
                    return;
                }
                outside = true;
            }

            frames.push(Frame {
                function,
                file: symbol.filename().map(|path| path.display().to_string()),
                line: symbol.lineno(),
            });
        });

        frames.len() < limit
    });

    frames
}

/// The call site that built an entry or error.
#[derive(Debug, Clone)]
pub struct Caller {
    function: Option<String>,
    location: &'static Location<'static>,
}

impl Caller {
    /// Pairs `location` with the first external function on the stack.
    pub fn locate(location: &'static Location<'static>) -> Self {
        let function = external_frames(1).into_iter().next().map(|frame| frame.function);
        Self { function, location }
    }

    fn with_function(location: &'static Location<'static>, function: Option<String>) -> Self {
        Self { function, location }
    }

    /// Qualified function name, `"unknown"` when symbols are unavailable.
    pub fn function(&self) -> &str {
        self.function.as_deref().unwrap_or(UNKNOWN_FUNCTION)
    }

    #[inline]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// `[file:line] function` line used by [`ReverseTrace`].
    pub fn hop(&self) -> String {
        format!("[{}:{}] {}", self.location.file(), self.location.line(), self.function())
    }

    /// Namespace for system scopes: the function name, or `file:line` when
    /// the function cannot be resolved.
    pub fn scope_key(&self) -> String {
        match &self.function {
            Some(function) => function.clone(),
            None => format!("{}:{}", self.location.file(), self.location.line()),
        }
    }
}

/// Frame listing captured where a failure originated. First capture wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackTrace {
    text: Arc<str>,
}

impl StackTrace {
    pub const KEY: &'static str = "stacktrace";

    /// Captures the current stack, starting at the caller of the error API.
    pub fn capture() -> Self {
        Self::from_frames(&external_frames(MAX_STACK_FRAMES))
    }

    fn from_frames(frames: &[Frame]) -> Self {
        let text = frames.iter().map(Frame::to_string).collect::<Vec<_>>().join("\n");
        Self { text: text.into() }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Breadcrumb of the call sites an error went through, deepest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseTrace {
    hops: ErrorVec<String>,
}

impl ReverseTrace {
    pub const KEY: &'static str = "reverse_trace";

    /// A single hop for `caller`.
    pub fn hop(caller: &Caller) -> Self {
        let mut hops = ErrorVec::new();
        hops.push(caller.hop());
        Self { hops }
    }

    /// A single hop for the code calling this function.
    #[track_caller]
    pub fn here() -> Self {
        Self::hop(&Caller::locate(Location::caller()))
    }

    pub fn from_hops<I, S>(hops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { hops: hops.into_iter().map(Into::into).collect() }
    }

    #[inline]
    pub fn hops(&self) -> &[String] {
        &self.hops
    }

    /// Appends the hops of a shallower trace.
    pub fn append(&mut self, other: ReverseTrace) {
        self.hops.extend(other.hops);
    }
}

/// Diagnostics attached by [`Error::new`](crate::Error::new): a stack trace and
/// the first reverse-trace hop, resolved from a single stack walk.
pub(crate) fn capture_origin(location: &'static Location<'static>) -> (StackTrace, ReverseTrace) {
    let frames = external_frames(MAX_STACK_FRAMES);
    let caller =
        Caller::with_function(location, frames.first().map(|frame| frame.function.clone()));
    (StackTrace::from_frames(&frames), ReverseTrace::hop(&caller))
}
