//! Caller resolution
//!
//! Formats stack frames as where-strings, `"<function>() - <file>(<line>)"`.
//! The short form keeps only the last path segment of the function and the
//! base name of the file, e.g. `"load_config() - config.rs(42)"`.
//!
//! Depth is counted from the caller of the public entry point: frames of the
//! stack walker and of this module are dropped before counting.

use std::ops::ControlFlow;
use std::panic::Location;
use std::path::Path;
use thiserror::Error;

const NOT_AVAILABLE: &str = "not available";
const MODULE_PREFIX: &str = concat!(module_path!(), "::");
const CONSTRUCTOR_PREFIX: &str = concat!(env!("CARGO_CRATE_NAME"), "::errors::");
const CLOSURE_SUFFIX: &str = "::{{closure}}";

/// Failure to walk the stack
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallerError {
    #[error("caller not available")]
    Unavailable,
}

/// A resolved frame
///
/// File and line are missing when the binary carries symbol names but no
/// line tables, as release builds without debuginfo do.
struct Frame {
    function: String,
    file: Option<String>,
    line: Option<u32>,
}

impl Frame {
    fn from_symbol(symbol: &backtrace::Symbol) -> Option<Self> {
        Some(Self {
            function: format!("{:#}", symbol.name()?),
            file: symbol.filename().map(|file| file.display().to_string()),
            line: symbol.lineno(),
        })
    }

    fn function_name(&self, short: bool) -> String {
        let mut name = self.function.as_str();
        while let Some(stripped) = name.strip_suffix(CLOSURE_SUFFIX) {
            name = stripped;
        }
        if short {
            name = name.rsplit("::").next().unwrap_or(name);
        }
        name.to_string()
    }

    fn where_string(&self, short: bool) -> String {
        let function = self.function_name(short);
        match (&self.file, self.line) {
            (Some(file), Some(line)) => format_where(&function, file, line, short),
            _ => format!("{function}() - {NOT_AVAILABLE}"),
        }
    }

    fn is_in(&self, file: &Path) -> bool {
        self.file
            .as_deref()
            .is_some_and(|own| Path::new(own).ends_with(file))
    }
}

fn format_where(function: &str, file: &str, line: u32, short: bool) -> String {
    let file = if short { base_name(file) } else { file };
    format!("{function}() - {file}({line})")
}

fn base_name(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}

/// Walk the current stack innermost first, resolving one frame at a time
/// until `visit` breaks. Symbols without a name are skipped.
fn walk_frames(mut visit: impl FnMut(Frame) -> ControlFlow<()>) {
    backtrace::trace(|raw| {
        let mut flow = ControlFlow::Continue(());
        backtrace::resolve_frame(raw, |symbol| {
            if flow.is_continue() {
                if let Some(frame) = Frame::from_symbol(symbol) {
                    flow = visit(frame);
                }
            }
        });
        flow.is_continue()
    });
}

/// Frames above the public entry point of this module
fn caller_frames() -> Result<Vec<Frame>, CallerError> {
    let mut frames = Vec::new();
    walk_frames(|frame| {
        frames.push(frame);
        ControlFlow::Continue(())
    });
    let mut frames = frames.into_iter();

    // Stack walker frames come first, then the frames of this module
    if !frames
        .by_ref()
        .any(|frame| frame.function.starts_with(MODULE_PREFIX))
    {
        return Err(CallerError::Unavailable);
    }

    Ok(frames
        .skip_while(|frame| frame.function.starts_with(MODULE_PREFIX))
        .collect())
}

/// Where-strings of up to `max_levels` callers, starting at the immediate
/// caller of this function
///
/// # Errors
///
/// Returns `CallerError::Unavailable` if the stack cannot be resolved.
#[inline(never)]
pub fn callers(max_levels: usize, short: bool) -> Result<Vec<String>, CallerError> {
    if max_levels == 0 {
        return Ok(Vec::new());
    }

    Ok(caller_frames()?
        .iter()
        .take(max_levels)
        .map(|frame| frame.where_string(short))
        .collect())
}

/// Where-string of the caller at position `skip`, counted from 1 for the
/// immediate caller of this function
///
/// Returns `"not available"` when `skip` is zero or deeper than the stack,
/// and `"not available, <reason>"` when the stack cannot be resolved.
#[inline(never)]
pub fn get_caller(skip: usize, short: bool) -> String {
    if skip == 0 {
        return NOT_AVAILABLE.to_string();
    }

    match caller_frames() {
        Ok(frames) => frames
            .get(skip - 1)
            .map(|frame| frame.where_string(short))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        Err(err) => format!("{NOT_AVAILABLE}, {err}"),
    }
}

/// Search for the frame owning a `#[track_caller]` location
///
/// A frame at the exact file and line ends the search. Otherwise the first
/// frame in the file wins, then the first frame above the error
/// constructors.
struct LocationSearch<'a> {
    file: &'a Path,
    line: u32,
    entered: bool,
    in_file: Option<Frame>,
    above_constructor: Option<Frame>,
}

impl<'a> LocationSearch<'a> {
    fn new(location: &'a Location<'a>) -> Self {
        Self {
            file: Path::new(location.file()),
            line: location.line(),
            entered: false,
            in_file: None,
            above_constructor: None,
        }
    }

    fn offer(&mut self, frame: Frame) -> ControlFlow<Frame> {
        let in_file = frame.is_in(self.file);
        if in_file && frame.line == Some(self.line) {
            return ControlFlow::Break(frame);
        }
        if frame.function.starts_with(MODULE_PREFIX) {
            self.entered = true;
            return ControlFlow::Continue(());
        }
        if !self.entered || frame.function.starts_with(CONSTRUCTOR_PREFIX) {
            return ControlFlow::Continue(());
        }

        if in_file {
            self.in_file.get_or_insert(frame);
        } else if self.above_constructor.is_none() {
            self.above_constructor = Some(frame);
        }
        ControlFlow::Continue(())
    }

    fn finish(self) -> Option<Frame> {
        self.in_file.or(self.above_constructor)
    }
}

/// Where-string for a location captured with `#[track_caller]`
///
/// File and line come from the location. The function is the one whose
/// frame sits at that location, or `"not available"` when no frame matches.
#[inline(never)]
pub fn where_for(location: &Location<'_>, short: bool) -> String {
    let mut search = LocationSearch::new(location);
    let mut found = None;
    walk_frames(|frame| match search.offer(frame) {
        ControlFlow::Break(frame) => {
            found = Some(frame);
            ControlFlow::Break(())
        }
        ControlFlow::Continue(()) => ControlFlow::Continue(()),
    });

    let function = found
        .or_else(|| search.finish())
        .map(|frame| frame.function_name(short))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    format_where(&function, location.file(), location.line(), short)
}
