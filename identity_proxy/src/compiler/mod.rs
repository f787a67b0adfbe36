//!
//! The contract compiler invocation and artifact extraction.
//!

pub mod solc;
pub mod standard_json;

use std::collections::BTreeMap;
use std::sync::Arc;

use itertools::Itertools;

use crate::artifact::CompiledArtifact;
use crate::error::Error;
use crate::error::Result;

use self::standard_json::input::settings::optimizer::Optimizer as StandardJsonInputOptimizer;
use self::standard_json::input::settings::selection::Selection as StandardJsonInputSelection;
use self::standard_json::input::Input as StandardJsonInput;
use self::standard_json::output::Output as StandardJsonOutput;

///
/// The compiler toolchain trait.
///
/// Submits the structured request and returns the structured response. The call may block.
///
pub trait CompilerToolchain: Send + Sync + 'static {
    ///
    /// Compiles the `--standard-json` input.
    ///
    fn standard_json(&self, input: &StandardJsonInput) -> anyhow::Result<StandardJsonOutput>;

    ///
    /// Returns the compiler version.
    ///
    fn version(&self) -> anyhow::Result<semver::Version>;
}

///
/// The compiler invoker.
///
/// Builds the request, runs the toolchain, and extracts the artifact of a single contract.
///
#[derive(Clone)]
pub struct CompilerInvoker {
    /// The compiler toolchain.
    toolchain: Arc<dyn CompilerToolchain>,
    /// The expected compiler version, checked against the source pragmas before compiling.
    expected_version: Option<semver::Version>,
}

impl std::fmt::Debug for CompilerInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompilerInvoker")
            .field("expected_version", &self.expected_version)
            .finish_non_exhaustive()
    }
}

impl CompilerInvoker {
    /// The optimizer runs.
    pub const OPTIMIZER_RUNS: usize = 200;

    /// The characters of the `pragma solidity` version operators.
    const PRAGMA_OPERATORS: [char; 5] = ['^', '~', '>', '<', '='];

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        toolchain: Arc<dyn CompilerToolchain>,
        expected_version: Option<semver::Version>,
    ) -> Self {
        Self {
            toolchain,
            expected_version,
        }
    }

    ///
    /// Builds the compiler request with full output selection and the optimizer enabled.
    ///
    pub fn request(sources: BTreeMap<String, String>) -> StandardJsonInput {
        StandardJsonInput::from_sources(
            sources,
            StandardJsonInputSelection::new_full(),
            StandardJsonInputOptimizer::new(true, Self::OPTIMIZER_RUNS),
        )
    }

    ///
    /// Extracts the artifact of the contract `name` defined in `file` from the compiler response.
    ///
    /// Any error-severity diagnostic fails the extraction. Warnings are logged.
    ///
    pub fn parse(output: &StandardJsonOutput, file: &str, name: &str) -> Result<CompiledArtifact> {
        let path = format!("{file}:{name}");

        for warning in output.warnings() {
            log::warn!("`{path}` compilation: {warning}");
        }

        let error_messages = output.error_messages();
        if !error_messages.is_empty() {
            return Err(Error::Compile {
                contract: path,
                messages: error_messages,
            });
        }

        let contract = output.get_contract(file, name).ok_or_else(|| {
            Error::compile(
                path.as_str(),
                format!(
                    "The contract not found in the output. Found contracts: [{}]",
                    output.contract_paths().join(", ")
                ),
            )
        })?;
        let evm = contract
            .evm
            .as_ref()
            .ok_or_else(|| Error::compile(path.as_str(), "EVM object of the contract not found"))?;
        let bytecode = evm
            .bytecode
            .as_ref()
            .ok_or_else(|| Error::compile(path.as_str(), "EVM bytecode of the contract not found"))?
            .decode()
            .map_err(|error| Error::compile(path.as_str(), error))?;
        let deployed_bytecode = evm
            .deployed_bytecode
            .as_ref()
            .map(|bytecode| bytecode.decode())
            .transpose()
            .map_err(|error| Error::compile(path.as_str(), error))?;

        log::debug!(
            "`{path}` compiled: {} bytes of deploy bytecode",
            bytecode.len()
        );
        Ok(CompiledArtifact::new(path, bytecode, deployed_bytecode))
    }

    ///
    /// Compiles the source units and returns the artifact of the contract `name` defined in `file`.
    ///
    pub fn compile(
        &self,
        sources: BTreeMap<String, String>,
        file: &str,
        name: &str,
    ) -> Result<CompiledArtifact> {
        self.check_expected_version(&sources, file, name)?;

        let input = Self::request(sources);
        let output = self.toolchain.standard_json(&input).map_err(|error| Error::Compile {
            contract: format!("{file}:{name}"),
            messages: error.chain().map(|cause| cause.to_string()).collect(),
        })?;
        Self::parse(&output, file, name)
    }

    ///
    /// Checks the source pragmas against the expected compiler version, if one is set.
    ///
    pub fn check_expected_version(
        &self,
        sources: &BTreeMap<String, String>,
        file: &str,
        name: &str,
    ) -> Result<()> {
        match self.expected_version.as_ref() {
            Some(version) => Self::check_pragmas(version, sources)
                .map_err(|error| Error::compile(format!("{file}:{name}"), error)),
            None => Ok(()),
        }
    }

    ///
    /// Checks the source pragmas against the version reported by the toolchain.
    ///
    pub fn check_toolchain_version(&self, sources: &BTreeMap<String, String>) -> Result<()> {
        let version = self
            .toolchain
            .version()
            .map_err(|error| Error::compile("*", error))?;
        Self::check_pragmas(&version, sources).map_err(|error| Error::compile("*", error))
    }

    ///
    /// Checks if `version` satisfies the `pragma solidity` requirement of every source.
    ///
    /// Sources without the pragma are compatible with any version.
    ///
    pub fn check_pragmas(
        version: &semver::Version,
        sources: &BTreeMap<String, String>,
    ) -> anyhow::Result<()> {
        for (path, source_code) in sources.iter() {
            let requirement = source_code.lines().find_map(Self::pragma_requirement);
            let requirement = match requirement {
                Some(requirement) => requirement,
                None => continue,
            };
            let requirement = semver::VersionReq::parse(requirement.as_str()).map_err(|error| {
                anyhow::anyhow!("Invalid pragma `{requirement}` in `{path}`: {error}")
            })?;
            if !requirement.matches(version) {
                anyhow::bail!(
                    "The compiler version {version} does not satisfy the pragma `{requirement}` in `{path}`"
                );
            }
        }
        Ok(())
    }

    ///
    /// Converts a `pragma solidity` line into a `semver` requirement.
    ///
    /// A bare version in a pragma is an exact match, while `semver` reads it as a caret
    /// requirement, so it is prefixed with `=`. Operators separated from their versions by
    /// whitespace are joined back.
    ///
    fn pragma_requirement(line: &str) -> Option<String> {
        let mut split = line.split_whitespace();
        let (Some("pragma"), Some("solidity")) = (split.next(), split.next()) else {
            return None;
        };

        let mut operator = String::new();
        let requirement = split
            .map(|token| token.trim_end_matches(';'))
            .filter_map(|token| {
                let version_start = token
                    .find(|character: char| !Self::PRAGMA_OPERATORS.contains(&character))
                    .unwrap_or(token.len());
                operator.push_str(&token[..version_start]);
                if version_start == token.len() {
                    return None;
                }
                if operator.is_empty() {
                    operator.push('=');
                }
                let comparator = format!("{operator}{}", &token[version_start..]);
                operator.clear();
                Some(comparator)
            })
            .join(",");
        Some(requirement)
    }
}
