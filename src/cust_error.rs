//! This module contains all custom errors used in this library.

use std::error::Error;
use std::fmt;

#[derive(Debug, Eq, PartialEq)]
pub enum ProcessingError {
    /// The exhaustive search was refused because the graph exceeds the caller's node
    /// ceiling. Holds the node count and the ceiling.
    SizeLimit(usize, usize),
    InvalidSolution(String),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeLimit(nodes, limit) => {
                write!(f, "Refused exhaustive search: {} nodes exceed the limit of {}.", nodes, limit)
            },
            Self::InvalidSolution(msg) => write!(f, "Invalid solution: {}", msg),
        }
    }
}

impl Error for ProcessingError {}
