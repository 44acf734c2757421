use std::error::Error;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, PartialEq, Eq)]
pub enum MoviesError {
    UnsupportedMethod(String),
    Schema(String),
}

impl Error for MoviesError {}

impl Display for MoviesError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            MoviesError::UnsupportedMethod(method) => {
                write!(f, "Unsupported method `{}`", method)
            }
            MoviesError::Schema(reason) => write!(f, "Post body schema does not compile: {}", reason),
        }
    }
}
