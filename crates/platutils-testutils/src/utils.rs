//! Assertion helpers

use std::fmt::Debug;
use std::io::{self, BufRead, BufReader, Read};

pub use platutils_core::{compare_where, compare_where_list};

// Frames that belong to the test harness rather than the test
const HARNESS_FUNCTIONS: [&str; 2] = ["call_once", "__rust_begin_short_backtrace"];

/// Callers above the test harness
///
/// Drops the first frame run by the harness and everything below it.
pub fn remove_bottom<S: AsRef<str>>(callers: &[S]) -> Vec<String> {
    callers
        .iter()
        .map(|caller| caller.as_ref())
        .take_while(|caller| !is_harness_frame(caller))
        .map(str::to_string)
        .collect()
}

fn is_harness_frame(caller: &str) -> bool {
    let function = caller.split("() - ").next().unwrap_or(caller);
    let name = function.rsplit("::").next().unwrap_or(function);
    HARNESS_FUNCTIONS.contains(&name)
}

/// Compare two optional values by their debug text; two absent values are
/// equal
pub fn compare_items<A: Debug + ?Sized, B: Debug + ?Sized>(one: Option<&A>, two: Option<&B>) -> bool {
    match (one, two) {
        (None, None) => true,
        (Some(one), Some(two)) => format!("{one:?}") == format!("{two:?}"),
        _ => false,
    }
}

/// Whether `two` appears as a contiguous run inside `one`
///
/// With `anchored` the run must start at the first element. An empty `two`
/// is only contained in an empty `one`.
pub fn contains_string_array<A, B>(one: &[A], two: &[B], anchored: bool) -> bool
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    if two.is_empty() {
        return one.is_empty();
    }
    if two.len() > one.len() {
        return false;
    }

    let matches_at = |start: usize| {
        one[start..]
            .iter()
            .zip(two)
            .all(|(one, two)| one.as_ref() == two.as_ref())
    };

    if anchored {
        matches_at(0)
    } else {
        (0..=one.len() - two.len()).any(matches_at)
    }
}

/// Lines of a reader, without their line terminators
///
/// # Errors
///
/// Returns the reader's error, or `InvalidData` for text that is not UTF-8.
pub fn read_buf<R: Read>(reader: R) -> io::Result<Vec<String>> {
    BufReader::new(reader).lines().collect()
}

/// One `"<index> - <item>"` line per item
pub fn display_strings<S: AsRef<str>>(strings: &[S]) -> String {
    strings
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{} - {}", index, item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn set_env(name: &str, value: &str) {
    std::env::set_var(name, value);
    tracing::debug!("environmental variable: {name}, set to {value}");
}

pub fn unset_env(name: &str) {
    std::env::remove_var(name);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_frames() {
        assert!(is_harness_frame("call_once() - function.rs(250)"));
        assert!(is_harness_frame(
            "core::ops::function::FnOnce::call_once() - /rustc/library/core/src/ops/function.rs(250)"
        ));
        assert!(is_harness_frame(
            "test::__rust_begin_short_backtrace() - lib.rs(632)"
        ));
        assert!(!is_harness_frame("call_once_more() - a.rs(1)"));
    }

    #[test]
    fn test_contains_string_array_cases() {
        let abcd = ["a", "b", "c", "d"];
        let none: [&str; 0] = [];

        assert!(contains_string_array(&abcd, &["b", "c", "d"], false));
        assert!(contains_string_array(&abcd, &abcd, false));
        assert!(!contains_string_array(&abcd, &["b", "d"], false));
        assert!(contains_string_array(&abcd, &["a", "b"], false));
        assert!(!contains_string_array(&["a"], &none, false));
        assert!(contains_string_array(&none, &none, false));
        assert!(!contains_string_array(&["a"], &["a", "b"], false));
    }

    #[test]
    fn test_contains_string_array_anchored() {
        let abcd = ["a", "b", "c", "d"];
        assert!(contains_string_array(&abcd, &["a", "b"], true));
        assert!(!contains_string_array(&abcd, &["b", "c"], true));
        assert!(contains_string_array(&["a", "b", "a", "c"], &["a", "c"], false));
    }
}
