use std::{
    ffi::{OsStr, OsString},
    path::Path,
};

/// Builds the shell line `<interpreter> '<script>' <args...>`.
///
/// `script` is quoted. `args` are joined with single spaces and inserted as-is, so the shell
/// that runs the line splits them again.
pub fn invocation_line<T: AsRef<OsStr>>(
    interpreter: &OsStr,
    script: &Path,
    args: &[T],
) -> OsString {
    let mut line = OsString::from(interpreter);
    line.push(" ");
    line.push(quote(script.as_os_str()));
    for arg in args {
        line.push(" ");
        line.push(arg);
    }
    line
}

fn quote(s: &OsStr) -> OsString {
    let mut quoted = OsString::from("'");
    for (i, part) in s.as_encoded_bytes().split(|&b| b == b'\'').enumerate() {
        if i > 0 {
            quoted.push(r"'\''");
        }
        // SAFETY: `part` is bounded by ASCII `'` bytes or the ends of `s`.
        quoted.push(unsafe { OsStr::from_encoded_bytes_unchecked(part) });
    }
    quoted.push("'");
    quoted
}
