use platutils_core::{make_error, ErrorCode, Result};
use std::any::Any;

/// Index of the first occurrence of `needle` in `slice`
pub fn find_in_string_slice<S: AsRef<str>>(slice: &[S], needle: &str) -> Option<usize> {
    slice.iter().position(|item| item.as_ref() == needle)
}

/// Order-insensitive comparison of two string slices
///
/// Duplicates count, so `["a", "a"]` and `["a", "b"]` differ. The inputs are
/// not reordered.
pub fn compare_string_slices<A, B>(one: &[A], two: &[B]) -> bool
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    if one.len() != two.len() {
        return false;
    }

    let mut one: Vec<&str> = one.iter().map(AsRef::as_ref).collect();
    let mut two: Vec<&str> = two.iter().map(AsRef::as_ref).collect();
    one.sort_unstable();
    two.sort_unstable();
    one == two
}

/// The string held by a type-erased value
///
/// # Errors
///
/// Returns an `INVALID_INPUT` error unless the value is a `String` or a
/// `&'static str`.
pub fn cast_to_string(value: &dyn Any) -> Result<String> {
    if let Some(text) = value.downcast_ref::<String>() {
        return Ok(text.clone());
    }
    if let Some(text) = value.downcast_ref::<&str>() {
        return Ok((*text).to_string());
    }
    Err(make_error("", ErrorCode::INVALID_INPUT, "failed to cast to string"))
}
