#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Write(ron::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "io error: {err}"),
            Error::Parse(err) => write!(f, "could not parse scenario: {err}"),
            Error::Write(err) => write!(f, "could not write ron: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse(err) => Some(err),
            Error::Write(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(value: std::io::Error) -> Self {
        Error::Io(value)
    }
}

impl From<ron::error::SpannedError> for Error {
    #[inline]
    fn from(value: ron::error::SpannedError) -> Self {
        Error::Parse(value)
    }
}

impl From<ron::Error> for Error {
    #[inline]
    fn from(value: ron::Error) -> Self {
        Error::Write(value)
    }
}
