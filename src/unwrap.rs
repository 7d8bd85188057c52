use log::error;
use std::fmt::Debug;

/// Unwraps a `Result` or an `Option` that cannot fail unless there is a bug, logging where it
/// happened before panicking.
#[macro_export]
macro_rules! u(
    ($e:expr) => (
        $crate::unwrap::CustomUnwrap::custom_unwrap($e, module_path!(), file!(), line!(), column!())
    );
);

pub trait CustomUnwrap {
    type Type;
    fn custom_unwrap(self, module_path: &str, file: &str, line_number: u32, column: u32) -> Self::Type;
}

impl<T, E: Debug> CustomUnwrap for Result<T, E> {
    type Type = T;

    fn custom_unwrap(self, module_path: &str, file: &str, line_number: u32, column: u32) -> T {
        match self {
            Ok(x) => x,
            Err(e) => {
                error!(
                    "Unwrapping failed on Result::Err at {}:{},{} in {}: {:?}.",
                    file, line_number, column, module_path, e,
                );
                unreachable!();
            }
        }
    }
}

impl<T> CustomUnwrap for Option<T> {
    type Type = T;

    fn custom_unwrap(self, module_path: &str, file: &str, line_number: u32, column: u32) -> T {
        match self {
            Some(x) => x,
            None => {
                error!(
                    "Unwrapping failed on Option::None at {}:{},{} in {}.",
                    file, line_number, column, module_path,
                );
                unreachable!();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::u;

    #[test]
    fn test_unwrap_ok() {
        assert_eq!(u!(Ok::<u8, ()>(3)), 3);
        assert_eq!(u!(Some("x")), "x");
    }

    #[test]
    #[should_panic]
    fn test_unwrap_none() {
        let value: Option<u8> = None;
        u!(value);
    }
}
