//! Rendering of arbitrary values as error text
//!
//! [`error_text!`](crate::error_text) picks the most informative rendering a
//! value supports, resolved at compile time:
//!
//! 1. structured errors ([`Error`](crate::Error), [`Cause`](crate::Cause),
//!    `Option<Error>`, `Option<&Error>`) render their full report,
//! 2. any `std::error::Error` renders its `Display`,
//! 3. any other `Display` value renders itself,
//! 4. anything else renders its `Debug` dump.
//!
//! ```
//! use platutils_core::{error_text, Error};
//!
//! assert_eq!(error_text!(None::<Error>), "None");
//! assert_eq!(error_text!(""), "");
//! assert_eq!(error_text!(42), "42");
//! assert_eq!(error_text!(vec![1, 2]), "[1, 2]");
//! ```

/// Most informative rendering of a value
#[macro_export]
macro_rules! error_text {
    ($value:expr) => {{
        #[allow(unused_imports)]
        use $crate::errors::text::__private::{
            DebugText as _, DisplayText as _, StandardText as _, StructuredText as _,
        };
        (&&&&$crate::errors::text::__private::Inspected(&$value)).error_text()
    }};
}

#[doc(hidden)]
pub mod __private {
    use crate::errors::{Cause, Error};
    use std::error::Error as StdError;
    use std::fmt::{Debug, Display};

    /// Borrowed value under inspection; the number of references in front
    /// of it selects the rendering
    pub struct Inspected<'a, T: ?Sized>(pub &'a T);

    pub trait StructuredText {
        fn error_text(&self) -> String;
    }

    pub trait StandardText {
        fn error_text(&self) -> String;
    }

    pub trait DisplayText {
        fn error_text(&self) -> String;
    }

    pub trait DebugText {
        fn error_text(&self) -> String;
    }

    impl StructuredText for &&&Inspected<'_, Error> {
        fn error_text(&self) -> String {
            self.0.full_info()
        }
    }

    impl StructuredText for &&&Inspected<'_, &Error> {
        fn error_text(&self) -> String {
            self.0.full_info()
        }
    }

    impl StructuredText for &&&Inspected<'_, Cause> {
        fn error_text(&self) -> String {
            self.0.text()
        }
    }

    impl StructuredText for &&&Inspected<'_, Option<Error>> {
        fn error_text(&self) -> String {
            match self.0 {
                Some(err) => err.full_info(),
                None => String::from("None"),
            }
        }
    }

    impl StructuredText for &&&Inspected<'_, Option<&Error>> {
        fn error_text(&self) -> String {
            self.0.map_or_else(|| String::from("None"), Error::full_info)
        }
    }

    impl<T: StdError + ?Sized> StandardText for &&Inspected<'_, T> {
        fn error_text(&self) -> String {
            self.0.to_string()
        }
    }

    impl<T: Display + ?Sized> DisplayText for &Inspected<'_, T> {
        fn error_text(&self) -> String {
            self.0.to_string()
        }
    }

    impl<T: Debug + ?Sized> DebugText for Inspected<'_, T> {
        fn error_text(&self) -> String {
            format!("{:?}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::{make_error_at, Cause, Error, ErrorCode};
    use std::fmt;

    struct Label(&'static str);

    impl fmt::Display for Label {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "label {}", self.0)
        }
    }

    #[derive(Debug)]
    #[allow(dead_code)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_structured_renders_full_report() {
        let err = make_error_at("id", ErrorCode::BAD_REQUEST, "bad", "w").with_details("more");
        assert_eq!(crate::error_text!(err), "w id Bad Request bad\nmore");
        assert_eq!(crate::error_text!(&err), "w id Bad Request bad\nmore");
        assert_eq!(crate::error_text!(Some(&err)), "w id Bad Request bad\nmore");
        assert_eq!(crate::error_text!(Some(err)), "w id Bad Request bad\nmore");
    }

    #[test]
    fn test_borrowed_optional_error() {
        let err = make_error_at("id", ErrorCode::NOT_FOUND, "gone", "w");
        let found: Option<&Error> = Some(&err);
        assert_eq!(crate::error_text!(found), "w id Not Found gone");
        assert_eq!(crate::error_text!(None::<&Error>), "None");
    }

    #[test]
    fn test_cause_renders_its_text() {
        let cause = Cause::from(make_error_at("", ErrorCode::INTERNAL, "inner", "w"));
        assert_eq!(crate::error_text!(cause), "w Internal Server Error inner");
    }

    #[test]
    fn test_standard_error_renders_display() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "pipe closed");
        assert_eq!(crate::error_text!(err), "pipe closed");
    }

    #[test]
    fn test_display_then_debug_fallback() {
        assert_eq!(crate::error_text!(Label("x")), "label x");
        assert_eq!(crate::error_text!(Point { x: 1, y: 2 }), "Point { x: 1, y: 2 }");
    }

    #[test]
    fn test_absent_and_scalar_values() {
        assert_eq!(crate::error_text!(None::<Error>), "None");
        assert_eq!(crate::error_text!(""), "");
        assert_eq!(crate::error_text!(42), "42");
    }
}
