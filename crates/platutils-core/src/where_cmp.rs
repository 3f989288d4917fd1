//! Location-insensitive where-string comparison
//!
//! Where-strings end in `(<line>)`. Tests record them with a `(NN)`
//! placeholder so they survive edits that move code around.

/// The part of a where-string before its last `(`
fn without_line(where_: &str) -> &str {
    where_
        .rfind('(')
        .map_or(where_, |index| &where_[..index])
}

/// Compare two where-strings, ignoring what follows the last `(`
pub fn compare_where(one: &str, two: &str) -> bool {
    without_line(one) == without_line(two)
}

/// Compare two lists of where-strings element by element
pub fn compare_where_list<A, B>(one: &[A], two: &[B]) -> bool
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    one.len() == two.len()
        && one
            .iter()
            .zip(two)
            .all(|(one, two)| compare_where(one.as_ref(), two.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_numbers_are_ignored() {
        assert!(compare_where(
            "test_make_error() - error_tests.rs(NN)",
            "test_make_error() - error_tests.rs(118)"
        ));
        assert!(compare_where("f() - a.rs(1)", "f() - a.rs(2)"));
    }

    #[test]
    fn test_different_prefixes_differ() {
        assert!(!compare_where("f() - a.rs(NN)", "g() - a.rs(NN)"));
        assert!(!compare_where("f() - a.rs(1)", "f() - b.rs(1)"));
    }

    #[test]
    fn test_without_parenthesis_compares_whole() {
        assert!(compare_where("not available", "not available"));
        assert!(!compare_where("not available", "available"));
        assert!(compare_where("", ""));
    }

    #[test]
    fn test_lists() {
        let recorded = ["a() - x.rs(NN)", "b() - y.rs(NN)"];
        let actual = vec![String::from("a() - x.rs(10)"), String::from("b() - y.rs(20)")];
        assert!(compare_where_list(&recorded, &actual));
        assert!(!compare_where_list(&recorded, &actual[..1]));
        assert!(!compare_where_list(&["a() - x.rs(1)"], &["c() - x.rs(1)"]));
        assert!(compare_where_list::<&str, &str>(&[], &[]));
    }
}
