#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            code: self.code,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    AssertionFailed = 1,
    UnknownOperation = 2,
    ArgumentCount = 3,
    OutOfMemory = 7,
    InternalError = 51,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            ErrorCode::AssertionFailed => "ASSERTION FAILED",
            ErrorCode::UnknownOperation => "INVALID INSTRUCTION",
            ErrorCode::ArgumentCount => "INVALID NUMBER OF ARGUMENTS",
            ErrorCode::OutOfMemory => "OUT OF MEMORY",
            ErrorCode::InternalError => "INTERNAL ERROR",
        };
        if self.message.is_empty() {
            write!(f, "{}", code_str)
        } else {
            write!(f, "{}; {}", code_str, self.message)
        }
    }
}

impl std::error::Error for Error {}

/// ## Handler failure
///
/// An `Assertion` aborts the current instruction only; the dispatcher turns
/// it into an error event and the run loop may carry on. A `Fatal` is never
/// caught by the dispatcher and ends the caller's run loop.

#[derive(Debug, Clone, PartialEq)]
pub enum Fault {
    Assertion(Error),
    Fatal(Error),
}

impl Fault {
    pub fn is_assertion(&self) -> bool {
        matches!(self, Fault::Assertion(_))
    }

    pub fn error(&self) -> &Error {
        match self {
            Fault::Assertion(error) | Fault::Fatal(error) => error,
        }
    }
}

impl From<Error> for Fault {
    fn from(error: Error) -> Fault {
        Fault::Fatal(error)
    }
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.error())
    }
}
