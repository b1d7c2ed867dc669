//! Host platform detection.
//!
//! Source trees keep platform specific implementations in folders named after the
//! platform (`linux/`, `windows/`). Only the folder of the *other* platform is excluded
//! from a clang-tidy run.

use std::env::consts::OS;

use crate::error::ShimError;

/// A host platform that has its own source folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Windows,
}

impl Platform {
    /// Maps an OS identifier (as in [`std::env::consts::OS`]) to a supported platform.
    pub fn from_os(os: &str) -> Result<Self, ShimError> {
        match os {
            "linux" => Ok(Platform::Linux),
            "windows" => Ok(Platform::Windows),
            _ => Err(ShimError::UnsupportedPlatform(os.to_string())),
        }
    }

    /// The platform this binary was compiled for.
    pub fn host() -> Result<Self, ShimError> {
        Self::from_os(OS)
    }

    /// The name of the source folder that does not belong to this platform.
    pub fn excluded_folder(&self) -> &'static str {
        match self {
            Platform::Linux => "windows",
            Platform::Windows => "linux",
        }
    }

    /// Remediation advice shown when the compilation database is missing.
    pub fn database_hint(&self) -> &'static str {
        match self {
            Platform::Linux => "Linux: Run CMake (with Make).",
            Platform::Windows => {
                "Windows: Run CMake with Ninja generator on a console with admin privileges."
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::Platform;
    use crate::error::ShimError;

    #[test]
    fn excludes_other_platform() {
        assert_eq!(Platform::from_os("linux").unwrap().excluded_folder(), "windows");
        assert_eq!(Platform::from_os("windows").unwrap().excluded_folder(), "linux");
    }

    #[test]
    fn unsupported_os() {
        let err = Platform::from_os("macos").unwrap_err();
        assert!(matches!(err, ShimError::UnsupportedPlatform(ref os) if os == "macos"));
        assert_eq!(err.to_string(), "not implemented for system: macos");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn host_is_linux() {
        assert_eq!(Platform::host().unwrap(), Platform::Linux);
    }
}
