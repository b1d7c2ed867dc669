//! This module holds functionality specific to running clang-tidy with the filtered
//! arguments and parsing it's output.

use std::{
    env::current_dir,
    path::{Path, PathBuf},
    process::Command,
};

// non-std crates
use regex::Regex;
use semver::Version;
use which::{which, which_in};

// project-specific modules/crates
use crate::error::ShimError;
use crate::logger::{end_log_group, start_log_group};

/// Fetch the path to a clang tool by `name` (ie `"clang-tidy"`) and `version`.
///
/// The specified `version` can be either
///
/// - a blank string to use whatever is found in `$PATH`
/// - a full or partial semantic version specification
/// - a path to a directory containing the executable binary `name`d
///
/// If the executable is not found using the specified semantic `version`, then the tool
/// is sought only by it's `name`.
pub fn get_clang_tool_exe(name: &str, version: &str) -> Result<PathBuf, ShimError> {
    let not_found = |reason| ShimError::ToolNotFound {
        name: name.to_string(),
        reason,
    };
    if version.is_empty() {
        return which(name).map_err(|_| not_found("not installed or not in PATH"));
    }
    if let Ok(semver) = lenient_semver::parse_into::<Version>(version) {
        // On Windows, the major version is typically not appended to the executable's name.
        which(format!("{}-{}", name, semver.major))
            .or_else(|_| which(name))
            .map_err(|_| not_found("not installed or not in PATH"))
    } else {
        // `version` is not a semantic version; treat as path/to/bin
        which_in(name, Some(version), current_dir()?)
            .map_err(|_| not_found("not present in the given directory"))
    }
}

/// A structure that represents a single notification parsed from clang-tidy's stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TidyNotification {
    /// The file's path and name as clang-tidy reported it.
    pub filename: String,

    /// The line number from which the notification originated.
    pub line: u32,

    /// The column offset on the line from which the notification originated.
    pub cols: u32,

    /// The severity (ie error/warning/note) of the [`TidyNotification::diagnostic`]
    /// that caused the notification.
    pub severity: String,

    /// A helpful message explaining why the notification exists.
    pub rationale: String,

    /// The diagnostic name as used when configuring clang-tidy.
    pub diagnostic: String,

    /// A code block that points directly to the origin of the notification.
    pub suggestion: Vec<String>,
}

impl TidyNotification {
    /// Does this notification make the run fail?
    pub fn is_failure(&self) -> bool {
        self.severity == "warning" || self.severity == "error"
    }
}

/// Parses clang-tidy stdout.
pub fn parse_tidy_output(tidy_stdout: &[u8]) -> Result<Vec<TidyNotification>, regex::Error> {
    let note_header = Regex::new(r"^(.+):(\d+):(\d+):\s(\w+):(.*)\[([a-zA-Z\d\-\.]+)\]$")?;
    let mut notification = None;
    let mut result = Vec::new();
    for line in String::from_utf8_lossy(tidy_stdout).lines() {
        if let Some(captured) = note_header.captures(line) {
            if let Some(note) = notification.take() {
                result.push(note);
            }
            notification = Some(TidyNotification {
                filename: captured[1].replace('\\', "/"),
                line: captured[2].parse::<u32>().unwrap_or_default(),
                cols: captured[3].parse::<u32>().unwrap_or_default(),
                severity: String::from(&captured[4]),
                rationale: captured[5].trim().to_string(),
                diagnostic: String::from(&captured[6]),
                suggestion: Vec::new(),
            });
        } else if let Some(note) = &mut notification {
            // append lines of code that are part of
            // the previous line's notification
            note.suggestion.push(line.to_string());
        }
    }
    if let Some(note) = notification {
        result.push(note);
    }
    Ok(result)
}

/// Decides the exit status of a clang-tidy run.
///
/// clang-tidy exits successfully even when it emits warnings, so any warning or error
/// diagnostic turns a successful `code` into `1`. A missing `code` (the process was
/// terminated by a signal) is also reported as `1`.
pub fn exit_status(code: Option<i32>, notes: &[TidyNotification]) -> i32 {
    match code {
        Some(0) if notes.iter().any(TidyNotification::is_failure) => 1,
        Some(code) => code,
        None => 1,
    }
}

/// Run clang-tidy at `exe` with `args` (excluding the program name at `args[0]`).
///
/// The tool's output is echoed to this process' stdout/stderr, and the resulting
/// exit status is returned (see [`exit_status()`]).
pub fn run_clang_tidy(exe: &Path, args: &[String]) -> Result<i32, ShimError> {
    let mut cmd = Command::new(exe);
    cmd.args(args.iter().skip(1));
    log::info!(
        "Running \"{} {}\"",
        cmd.get_program().to_string_lossy(),
        cmd.get_args()
            .map(|x| x.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    );
    start_log_group("clang-tidy output");
    let output = cmd.output()?;
    print!("{}", String::from_utf8_lossy(&output.stdout));
    if !output.stderr.is_empty() {
        eprint!("{}", String::from_utf8_lossy(&output.stderr));
    }
    end_log_group();

    let notes = parse_tidy_output(&output.stdout)?;
    for note in &notes {
        log::debug!(
            "{}:{}:{} {} [{}]",
            note.filename,
            note.line,
            note.cols,
            note.severity,
            note.diagnostic
        );
    }
    let failures = notes.iter().filter(|n| n.is_failure()).count();
    if failures > 0 {
        log::info!("clang-tidy reported {failures} warning(s) or error(s)");
    }
    Ok(exit_status(output.status.code(), &notes))
}

#[cfg(test)]
mod test {
    use super::{exit_status, get_clang_tool_exe, parse_tidy_output};
    use crate::error::ShimError;

    const TIDY_STDOUT: &str = "\
tests/demo/demo.hpp:11:11: warning: use a trailing return type for this function [modernize-use-trailing-return-type]
    int main();
    ~~~ ^
    auto       -> int
C:\\src\\windows\\demo.cpp:3:1: error: unknown type name 'foo' [clang-diagnostic-error]
src/demo.cpp:7:5: note: expanded from macro 'BAR' [clang-diagnostic-note]
";

    #[test]
    fn parse_notifications() {
        let notes = parse_tidy_output(TIDY_STDOUT.as_bytes()).unwrap();
        assert_eq!(notes.len(), 3);

        assert_eq!(notes[0].filename, "tests/demo/demo.hpp");
        assert_eq!((notes[0].line, notes[0].cols), (11, 11));
        assert_eq!(notes[0].severity, "warning");
        assert_eq!(
            notes[0].rationale,
            "use a trailing return type for this function"
        );
        assert_eq!(notes[0].diagnostic, "modernize-use-trailing-return-type");
        assert_eq!(notes[0].suggestion.len(), 3);

        assert_eq!(notes[1].filename, "C:/src/windows/demo.cpp");
        assert_eq!(notes[1].severity, "error");
        assert!(notes[1].suggestion.is_empty());

        assert!(!notes[2].is_failure());
    }

    #[test]
    fn parse_nothing() {
        let notes = parse_tidy_output(b"").unwrap();
        assert!(notes.is_empty());
        let notes = parse_tidy_output(b"2 warnings generated.\n").unwrap();
        assert!(notes.is_empty());
    }

    #[test]
    fn status_from_tool_and_notes() {
        let notes = parse_tidy_output(TIDY_STDOUT.as_bytes()).unwrap();
        assert_eq!(exit_status(Some(0), &[]), 0);
        assert_eq!(exit_status(Some(0), &notes), 1);
        assert_eq!(exit_status(Some(0), &notes[2..]), 0);
        assert_eq!(exit_status(Some(3), &[]), 3);
        assert_eq!(exit_status(Some(3), &notes), 3);
        assert_eq!(exit_status(None, &[]), 1);
    }

    #[test]
    fn unknown_tool() {
        let tool_exe = get_clang_tool_exe("not-a-real-clang-tool", "");
        assert!(matches!(tool_exe, Err(ShimError::ToolNotFound { .. })));
        let tool_exe = get_clang_tool_exe("not-a-real-clang-tool", "16");
        assert!(matches!(tool_exe, Err(ShimError::ToolNotFound { .. })));
    }

    #[test]
    fn unknown_tool_dir() {
        let dir = tempfile::tempdir().unwrap();
        let bin_path = dir.path().to_str().unwrap();
        let tool_exe = get_clang_tool_exe("clang-tidy", bin_path);
        assert!(matches!(tool_exe, Err(ShimError::ToolNotFound { .. })));
    }
}
