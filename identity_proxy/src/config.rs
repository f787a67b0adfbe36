//!
//! The identity proxy payload generator config.
//!

use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::compiler::solc::SolcCompiler;
use crate::error::Error;
use crate::error::Result;

///
/// The identity proxy payload generator config.
///
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct Config {
    /// The compiler executable name or path.
    pub solc_executable: String,
    /// The safe-transfer library source path.
    pub library_path: PathBuf,
    /// The expected compiler version, checked against the source pragmas if set.
    pub solc_version: Option<semver::Version>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            solc_executable: SolcCompiler::DEFAULT_EXECUTABLE_NAME.to_owned(),
            library_path: PathBuf::from(Self::DEFAULT_LIBRARY_PATH),
            solc_version: None,
        }
    }
}

impl Config {
    /// The default safe-transfer library source path.
    pub const DEFAULT_LIBRARY_PATH: &'static str = "./contracts/libs/SafeERC20.sol";

    ///
    /// Reads the config from a JSON file.
    ///
    /// Missing fields take their default values.
    ///
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|error| Error::Config {
            message: format!("opening error: {error}"),
            path: path.to_owned(),
        })?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader).map_err(|error| Error::Config {
            message: format!("parsing error: {error}"),
            path: path.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use super::Config;

    fn write(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Always valid");
        file.write_all(content.as_bytes()).expect("Always valid");
        file
    }

    #[test]
    fn default() {
        let config = Config::default();
        assert_eq!(config.solc_executable, "solc");
        assert_eq!(
            config.library_path,
            PathBuf::from("./contracts/libs/SafeERC20.sol")
        );
        assert_eq!(config.solc_version, None);
    }

    #[test]
    fn from_path() {
        let file = write(
            r#"{
                "solc_executable": "/usr/local/bin/solc-0.5.17",
                "library_path": "/opt/contracts/SafeERC20.sol",
                "solc_version": "0.5.17"
            }"#,
        );
        let config = Config::from_path(file.path()).expect("Always valid");
        assert_eq!(config.solc_executable, "/usr/local/bin/solc-0.5.17");
        assert_eq!(
            config.library_path,
            PathBuf::from("/opt/contracts/SafeERC20.sol")
        );
        assert_eq!(config.solc_version, Some(semver::Version::new(0, 5, 17)));
    }

    #[test]
    fn from_path_partial() {
        let file = write(r#"{ "solc_version": "0.5.6" }"#);
        let config = Config::from_path(file.path()).expect("Always valid");
        assert_eq!(config.solc_executable, "solc");
        assert_eq!(config.solc_version, Some(semver::Version::new(0, 5, 6)));
    }

    #[test]
    fn error_missing() {
        let directory = tempfile::tempdir().expect("Always valid");
        let path = directory.path().join("missing.json");
        match Config::from_path(path.as_path()) {
            Err(crate::Error::Config { path: error_path, .. }) => assert_eq!(error_path, path),
            result => panic!("Unexpected result: {result:?}"),
        }
    }

    #[test]
    fn error_invalid() {
        let file = write(r#"{ "solc_version": "latest" }"#);
        assert!(matches!(
            Config::from_path(file.path()),
            Err(crate::Error::Config { .. })
        ));

        let file = write(r#"{ "optimizer_runs": 1000 }"#);
        assert!(matches!(
            Config::from_path(file.path()),
            Err(crate::Error::Config { .. })
        ));
    }
}
