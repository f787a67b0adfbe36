//!
//! The Solidity compiler.
//!

use std::io::Write;

use crate::compiler::standard_json::input::Input as StandardJsonInput;
use crate::compiler::standard_json::output::Output as StandardJsonOutput;
use crate::compiler::CompilerToolchain;

///
/// The Solidity compiler.
///
#[derive(Debug, Clone)]
pub struct SolcCompiler {
    /// The executable name.
    pub executable: String,
}

impl SolcCompiler {
    /// The default executable name.
    pub const DEFAULT_EXECUTABLE_NAME: &'static str = "solc";

    ///
    /// A shortcut constructor.
    ///
    /// The executable may be a name resolved via `${PATH}`, or a path. It is resolved on
    /// every call, so a missing executable is only reported when the compiler is needed.
    ///
    pub fn new(executable: String) -> Self {
        Self { executable }
    }

    ///
    /// Resolves the executable path.
    ///
    pub fn resolve(&self) -> anyhow::Result<std::path::PathBuf> {
        which::which(self.executable.as_str()).map_err(|error| {
            anyhow::anyhow!(
                "The `{}` executable not found in ${{PATH}}: {error}",
                self.executable
            )
        })
    }

    ///
    /// Parses the semantic version from the `--version` output.
    ///
    pub fn parse_version(stdout: &str) -> anyhow::Result<semver::Version> {
        let pattern = regex::Regex::new(r"Version: (\d+\.\d+\.\d+)").expect("Always valid");
        let version = pattern
            .captures(stdout)
            .and_then(|captures| captures.get(1))
            .ok_or_else(|| anyhow::anyhow!("Version not found in the output:\n{stdout}"))?;
        semver::Version::parse(version.as_str())
            .map_err(|error| anyhow::anyhow!("Version `{}` parsing error: {error}", version.as_str()))
    }
}

impl CompilerToolchain for SolcCompiler {
    fn standard_json(&self, input: &StandardJsonInput) -> anyhow::Result<StandardJsonOutput> {
        let mut command = std::process::Command::new(self.resolve()?);
        command.stdin(std::process::Stdio::piped());
        command.stdout(std::process::Stdio::piped());
        command.stderr(std::process::Stdio::piped());
        command.arg("--standard-json");

        let input_json = serde_json::to_vec(input).expect("Always valid");

        log::debug!(
            "Running `{} --standard-json` on {} source units",
            self.executable,
            input.sources.len()
        );
        let process = command.spawn().map_err(|error| {
            anyhow::anyhow!("{} subprocess spawning error: {:?}", self.executable, error)
        })?;
        process
            .stdin
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("{} stdin getting error", self.executable))?
            .write_all(input_json.as_slice())
            .map_err(|error| {
                anyhow::anyhow!("{} stdin writing error: {:?}", self.executable, error)
            })?;

        let output = process.wait_with_output().map_err(|error| {
            anyhow::anyhow!("{} subprocess output error: {:?}", self.executable, error)
        })?;
        if !output.status.success() {
            anyhow::bail!(
                "{} error: {}",
                self.executable,
                String::from_utf8_lossy(output.stderr.as_slice())
            );
        }

        let output: StandardJsonOutput = serde_json::from_slice(output.stdout.as_slice())
            .map_err(|error| {
                anyhow::anyhow!(
                    "{} subprocess output parsing error: {}\n{}",
                    self.executable,
                    error,
                    serde_json::from_slice::<serde_json::Value>(output.stdout.as_slice())
                        .map(|json| serde_json::to_string_pretty(&json).expect("Always valid"))
                        .unwrap_or_else(|_| String::from_utf8_lossy(output.stdout.as_slice())
                            .to_string()),
                )
            })?;

        Ok(output)
    }

    fn version(&self) -> anyhow::Result<semver::Version> {
        let output = std::process::Command::new(self.resolve()?)
            .arg("--version")
            .output()
            .map_err(|error| {
                anyhow::anyhow!("{} subprocess spawning error: {:?}", self.executable, error)
            })?;
        if !output.status.success() {
            anyhow::bail!(
                "{} version getting error: {}",
                self.executable,
                String::from_utf8_lossy(output.stderr.as_slice())
            );
        }

        Self::parse_version(String::from_utf8_lossy(output.stdout.as_slice()).as_ref())
    }
}
