use super::FALLBACK_EXIT_CODE;
use std::process::ExitStatus;

/// Maps the install script's status to the code the launcher exits with.
///
/// A normal exit yields the script's own code. On Unix, death by signal `N` yields `128 + N`.
/// Anything else yields [`FALLBACK_EXIT_CODE`].
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
    status
        .code()
        .or_else(|| os_specific::signal_exit_code(status))
        .unwrap_or(FALLBACK_EXIT_CODE)
}

#[cfg(unix)]
mod os_specific {
    use std::{os::unix::process::ExitStatusExt, process::ExitStatus};

    pub fn signal_exit_code(status: ExitStatus) -> Option<i32> {
        status.signal().map(|signal| 128 + signal)
    }
}

#[cfg(not(unix))]
mod os_specific {
    use std::process::ExitStatus;

    pub fn signal_exit_code(_status: ExitStatus) -> Option<i32> {
        None
    }
}
