use std::{fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum CliError {
    Harrier(harrier::Error),
    Io(io::Error),
    RoundTripMismatch(PathBuf),
    ChecksFailed(usize),
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<harrier::Error> for CliError {
    fn from(e: harrier::Error) -> Self {
        Self::Harrier(e)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::Harrier(e) => write!(f, "{}", e),
            CliError::Io(e) => write!(f, "io error: {}", e),
            CliError::RoundTripMismatch(p) => {
                write!(
                    f,
                    "{}: reparsing the serialized output changed the AST",
                    p.display()
                )
            }
            CliError::ChecksFailed(n) => write!(f, "{} file(s) failed", n),
        }
    }
}
