//! A module to hold the file system checks done before clang-tidy runs.

use std::fs;
use std::path::{Path, PathBuf};

// non-std crates
use serde::Deserialize;

// project specific modules/crates
use crate::error::ShimError;

/// The name of the JSON compilation database that clang-tidy needs.
pub const DATABASE_NAME: &str = "compile_commands.json";

/// Used to deserialize a json compilation database's translation unit.
#[derive(Deserialize, Debug)]
pub struct CompilationUnit {
    /// The directory of the build environment
    pub directory: String,

    /// The file path of the translation unit.
    ///
    /// Sometimes, this is relative to the build [`CompilationUnit::directory`].
    pub file: String,
}

/// Finds the compilation database in `dir`.
///
/// Without the database, clang-tidy reports a lot of false positives, so a missing
/// database is returned as [`ShimError::MissingDatabase`].
pub fn find_compilation_database(dir: &Path) -> Result<PathBuf, ShimError> {
    let db_path = dir.join(DATABASE_NAME);
    if db_path.is_file() {
        Ok(db_path)
    } else {
        Err(ShimError::MissingDatabase {
            dir: dir.to_path_buf(),
        })
    }
}

/// Counts the translation units listed in the compilation database at `db_path`.
///
/// Returns [`None`] if the database could not be read or deserialized.
pub fn count_compilation_units(db_path: &Path) -> Option<usize> {
    let db_str = fs::read_to_string(db_path).ok()?;
    match serde_json::from_str::<Vec<CompilationUnit>>(&db_str) {
        Ok(units) => Some(units.len()),
        Err(e) => {
            log::debug!("Failed to parse {}: {e}", db_path.display());
            None
        }
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::tempdir;

    use super::{count_compilation_units, find_compilation_database, DATABASE_NAME};
    use crate::error::ShimError;

    #[test]
    fn database_found() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(DATABASE_NAME), "[]").unwrap();
        let db_path = find_compilation_database(dir.path()).unwrap();
        assert_eq!(db_path, dir.path().join(DATABASE_NAME));
        assert_eq!(count_compilation_units(&db_path), Some(0));
    }

    #[test]
    fn database_missing() {
        let dir = tempdir().unwrap();
        let err = find_compilation_database(dir.path()).unwrap_err();
        assert!(matches!(err, ShimError::MissingDatabase { dir: ref d } if d == dir.path()));
    }

    #[test]
    fn database_dir_is_not_a_file() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(DATABASE_NAME)).unwrap();
        assert!(find_compilation_database(dir.path()).is_err());
    }

    #[test]
    fn count_units() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join(DATABASE_NAME);
        fs::write(
            &db_path,
            r#"[
  {"directory": "/src/build", "command": "c++ -c ../a.cpp", "file": "../a.cpp"},
  {"directory": "/src/build", "arguments": ["c++", "-c", "b.cpp"], "file": "/src/b.cpp"}
]"#,
        )
        .unwrap();
        assert_eq!(count_compilation_units(&db_path), Some(2));
    }

    #[test]
    fn malformed_database() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join(DATABASE_NAME);
        fs::write(&db_path, "{not json").unwrap();
        assert_eq!(count_compilation_units(&db_path), None);
    }
}
