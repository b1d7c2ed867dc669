//! This module holds the argument filtering applied before clang-tidy is invoked.
//!
//! An argument list is treated as two segments:
//!
//! - the prefix: the program name followed by the leading run of `-`-prefixed flags
//! - the candidates: everything from the first non-flag argument to the end
//!
//! Only the candidates are ever removed by the filters here. The prefix is passed
//! through untouched, so flags such as `-p=build` or `--fix` always reach clang-tidy.

// non-std crates
use regex::{escape, RegexBuilder};

/// Splits `args` into the prefix segment and the candidate segment (in that order).
///
/// The first element is the program name and always belongs to the prefix. Splitting
/// stops at the first argument that does not start with `-`; that argument and all
/// arguments after it (even flag-like ones) are returned as candidates.
///
/// Both vectors are always newly allocated, even when one of them is empty.
pub fn split_args(args: &[String]) -> (Vec<String>, Vec<String>) {
    for (index, arg) in args.iter().enumerate().skip(1) {
        if !arg.starts_with('-') {
            return (args[..index].to_vec(), args[index..].to_vec());
        }
    }
    (args.to_vec(), Vec::new())
}

/// Builds the pattern that matches `folder` as a whole path component.
///
/// The folder must be preceded by the start of the string or a path separator, and
/// followed by a path separator. Both `/` and `\` count as separators.
pub fn exclusion_pattern(folder: &str) -> String {
    format!(r"(\A|/|\\){}(/|\\)", escape(folder))
}

/// Builds the pattern that matches paths ending with the extension `ext`.
///
/// A single leading `.` in `ext` is optional. An empty extension only matches paths
/// that end with a bare `.`.
pub fn extension_pattern(ext: &str) -> String {
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    format!(r"\.{}\z", escape(ext))
}

/// Removes every candidate in `args` that `pattern` matches anywhere (ignoring case).
///
/// The returned list is the prefix segment followed by the surviving candidates in
/// their original order.
pub fn filter_files(pattern: &str, args: &[String]) -> Result<Vec<String>, regex::Error> {
    let exclude = RegexBuilder::new(pattern).case_insensitive(true).build()?;
    let (mut filtered, files) = split_args(args);
    for file in files {
        if exclude.is_match(&file) {
            log::debug!("Excluding {file}");
        } else {
            filtered.push(file);
        }
    }
    Ok(filtered)
}

/// Removes the candidates in `args` located under a folder named `folder`.
pub fn filter_files_by_folder(folder: &str, args: &[String]) -> Result<Vec<String>, regex::Error> {
    filter_files(&exclusion_pattern(folder), args)
}

/// Removes the candidates in `args` that have the file extension `ext`.
pub fn filter_files_by_ext(ext: &str, args: &[String]) -> Result<Vec<String>, regex::Error> {
    filter_files(&extension_pattern(ext), args)
}
