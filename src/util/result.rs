use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps an [`Ok`] value, panicking with the message of the error itself otherwise. This is
    /// how the panicking counterparts of `try_` methods report their errors.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }
}
