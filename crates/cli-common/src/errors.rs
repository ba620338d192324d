use std::{fmt, process::ExitCode};

/// Errors displayed to the user when using the CLI
#[derive(Debug)]
pub enum DisplayedError {
    /// Errors the user can address by fixing their input or pointing at another node
    UserError(String, Box<dyn fmt::Debug>),
    /// Internal errors encountered when servicing user's request.
    InternalError(String, Box<dyn fmt::Debug>),
}

impl DisplayedError {
    /// Creates a user error that has no underlying cause.
    pub fn user(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        DisplayedError::UserError(msg.clone(), Box::new(msg))
    }

    /// Process exit code to report this error with.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DisplayedError::UserError(..) => ExitCode::from(2),
            DisplayedError::InternalError(..) => ExitCode::FAILURE,
        }
    }
}

#[inline]
pub fn user_error<E>(msg: impl Into<String>) -> impl FnOnce(E) -> DisplayedError
where
    E: fmt::Debug + 'static,
{
    move |e| DisplayedError::UserError(msg.into(), Box::new(e))
}

#[inline]
pub fn internal_error<E>(msg: impl Into<String>) -> impl FnOnce(E) -> DisplayedError
where
    E: fmt::Debug + 'static,
{
    move |e| DisplayedError::InternalError(msg.into(), Box::new(e))
}

pub trait DisplayableError {
    type Output;
    fn user_error(self, msg: impl Into<String>) -> Result<Self::Output, DisplayedError>;
    fn internal_error(self, msg: impl Into<String>) -> Result<Self::Output, DisplayedError>;
}

impl<T, E: fmt::Debug + 'static> DisplayableError for Result<T, E> {
    type Output = T;

    #[inline]
    fn user_error(self, msg: impl Into<String>) -> Result<Self::Output, DisplayedError> {
        self.map_err(user_error(msg))
    }

    #[inline]
    fn internal_error(self, msg: impl Into<String>) -> Result<Self::Output, DisplayedError> {
        self.map_err(internal_error(msg))
    }
}

impl fmt::Display for DisplayedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayedError::UserError(msg, e) => {
                f.write_fmt(format_args!("User error: {msg}: {e:?}"))
            }
            DisplayedError::InternalError(msg, e) => {
                f.write_fmt(format_args!("Internal error: {msg}: {e:?}"))
            }
        }
    }
}
