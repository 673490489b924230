//! Pre-parse rewriting of legacy argument spellings.

use std::ffi::{OsStr, OsString};

/// Single-dash long option accepted for the designation filter.
pub const LEGACY_FILTER_FLAG: &str = "-ftr";

/// Options whose value is the next argument.
const VALUE_FLAGS: [&str; 13] = [
    "-o",
    "--output",
    "-t",
    "--point_type",
    "-p",
    "--plc",
    "-f",
    "--filter",
    "--config",
    "--templates-dir",
    "--log-level",
    "--log-format",
    "--log-file",
];

/// Rewrite `-ftr PATTERN` and `-ftr=PATTERN` to `--filter`.
///
/// A `-ftr` that is the value of another option is kept, as are arguments
/// after a bare `--`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    let mut is_value = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if std::mem::take(&mut is_value) {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            let arg = rewrite(&arg).unwrap_or(arg);
            is_value = arg.to_str().is_some_and(|text| VALUE_FLAGS.contains(&text));
            arg
        })
        .collect()
}

fn rewrite(arg: &OsStr) -> Option<OsString> {
    let text = arg.to_str()?;
    if text == LEGACY_FILTER_FLAG {
        return Some(OsString::from("--filter"));
    }
    text.strip_prefix(LEGACY_FILTER_FLAG)
        .and_then(|rest| rest.strip_prefix('='))
        .map(|value| OsString::from(format!("--filter={value}")))
}
