//! Single-dash multi-letter flag spellings.
//!
//! clap reads `-pdf` as `-p -d -f`, so these spellings are rewritten to their
//! long forms before parsing.

use std::ffi::OsString;

const LEGACY_FLAGS: [(&str, &str); 5] = [
    ("-pdf", "--generate-pdf"),
    ("-docx", "--generate-docx"),
    ("-clean", "--clean"),
    ("-view", "--view"),
    ("-zip", "--zip"),
];

/// Rewrite legacy spellings in an argv, leaving every other argument untouched.
pub fn normalize<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            let replacement = arg.to_str().and_then(|value| {
                LEGACY_FLAGS.iter().find(|(legacy, _)| *legacy == value).map(|(_, long)| *long)
            });
            match replacement {
                Some(long) => OsString::from(long),
                None => arg,
            }
        })
        .collect()
}
