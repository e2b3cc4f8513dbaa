use std::fmt;
use std::process::exit;

/// Four-state monitoring status with the conventional exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    // part of the convention, this check never degrades to it
    #[allow(dead_code)]
    Warning,
    Critical,
    Unknown,
}

impl Status {
    pub fn exit_code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// Writes the single status line to stdout and terminates the process
/// with the matching exit code.
pub fn report(status: Status, message: &str) -> ! {
    println!("{status}: {message}");
    exit(status.exit_code());
}
