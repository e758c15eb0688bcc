// src/exit.rs
//! Process exit codes for `conceptgraph`.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum GraphExit {
    /// Command completed.
    Success = 0,
    /// I/O, parse, or config failure.
    Error = 1,
    /// Bad command-line input.
    InvalidInput = 2,
    /// The requested concept is not in the (filtered) graph, or nothing matched.
    NotFound = 3,
}

impl GraphExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for GraphExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
