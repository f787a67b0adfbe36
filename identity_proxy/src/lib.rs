//!
//! The identity proxy deployment payload generator.
//!

pub mod artifact;
pub mod compiler;
pub mod config;
pub mod error;
pub mod payload;
pub mod request;
pub mod slot;
pub mod source;
pub mod utils;

pub use self::artifact::CompiledArtifact;
pub use self::compiler::solc::SolcCompiler;
pub use self::compiler::CompilerInvoker;
pub use self::compiler::CompilerToolchain;
pub use self::config::Config;
pub use self::error::Error;
pub use self::error::Result;
pub use self::payload::DeploymentPayloadBuilder;
pub use self::payload::DeploymentTransactionPayload;
pub use self::request::privilege::PrivilegeEntry;
pub use self::request::DeploymentRequest;
pub use self::slot::hash::HashFunction;
pub use self::slot::hash::Keccak256;
pub use self::slot::StorageSlotDeriver;
pub use self::source::ContractSourceComposer;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::compiler::standard_json::input::Input as StandardJsonInput;
use crate::compiler::standard_json::output::Output as StandardJsonOutput;
use crate::source::emitter::Emitter;

///
/// The identity proxy deployer.
///
/// Runs the whole pipeline for one request at a time. Holds no per-request state, so a
/// single instance may be shared between threads.
///
#[derive(Debug, Clone)]
pub struct ProxyDeployer {
    /// The safe-transfer library source path.
    library_path: PathBuf,
    /// The storage slot deriver.
    deriver: StorageSlotDeriver,
    /// The contract source composer.
    composer: ContractSourceComposer,
    /// The compiler invoker.
    invoker: CompilerInvoker,
    /// The payload builder.
    builder: DeploymentPayloadBuilder,
}

impl ProxyDeployer {
    ///
    /// Creates the deployer running the `solc` executable from the config.
    ///
    /// The executable is resolved when compiling, after the library source is read.
    ///
    pub fn new(config: Config) -> Self {
        let solc = SolcCompiler::new(config.solc_executable.clone());
        Self::with_capabilities(config, Arc::new(Keccak256), Arc::new(solc))
    }

    ///
    /// Creates the deployer with the injected hash function and compiler toolchain.
    ///
    pub fn with_capabilities(
        config: Config,
        hash_function: Arc<dyn HashFunction>,
        toolchain: Arc<dyn CompilerToolchain>,
    ) -> Self {
        Self {
            library_path: config.library_path,
            deriver: StorageSlotDeriver::new(hash_function),
            composer: ContractSourceComposer,
            invoker: CompilerInvoker::new(toolchain, config.solc_version),
            builder: DeploymentPayloadBuilder,
        }
    }

    ///
    /// Derives the `(slot, level)` privilege writes in the request order.
    ///
    pub fn privilege_writes(
        &self,
        request: &DeploymentRequest,
    ) -> Vec<(web3::types::H256, web3::types::U256)> {
        let base_slot = slot::layout::privileges_slot();
        request
            .privileges
            .iter()
            .map(|entry| (self.deriver.derive(&entry.address, &base_slot), entry.level))
            .collect()
    }

    ///
    /// Reads the safe-transfer library source.
    ///
    pub fn read_library(&self) -> Result<String> {
        std::fs::read_to_string(self.library_path.as_path()).map_err(|error| Error::IO {
            error,
            path: self.library_path.clone(),
        })
    }

    ///
    /// Returns the source units submitted to the compiler: the composed proxy and the library.
    ///
    pub fn sources(&self, request: &DeploymentRequest) -> Result<BTreeMap<String, String>> {
        let library = self.read_library()?;

        let privilege_writes = self.privilege_writes(request);
        log::debug!("Derived {} privilege slots", privilege_writes.len());

        let source = self.composer.compose(request, privilege_writes.as_slice());
        log::debug!(
            "Composed `{}`: {} bytes",
            ContractSourceComposer::SOURCE_NAME,
            source.len()
        );
        log::trace!("{source}");

        Ok(BTreeMap::from([
            (ContractSourceComposer::SOURCE_NAME.to_owned(), source),
            (Emitter::LIBRARY_SOURCE_NAME.to_owned(), library),
        ]))
    }

    ///
    /// Builds the compiler request, for callers running the compiler on their own executor.
    ///
    /// The version check runs here if the expected compiler version is configured.
    ///
    pub fn prepare(&self, request: &DeploymentRequest) -> Result<StandardJsonInput> {
        let sources = self.sources(request)?;
        self.invoker.check_expected_version(
            &sources,
            ContractSourceComposer::SOURCE_NAME,
            ContractSourceComposer::CONTRACT_NAME,
        )?;
        Ok(CompilerInvoker::request(sources))
    }

    ///
    /// Builds the payload from the compiler response to a request from `prepare`.
    ///
    pub fn complete(&self, output: &StandardJsonOutput) -> Result<DeploymentTransactionPayload> {
        let artifact = CompilerInvoker::parse(
            output,
            ContractSourceComposer::SOURCE_NAME,
            ContractSourceComposer::CONTRACT_NAME,
        )?;
        self.builder.build(&artifact)
    }

    ///
    /// Generates the deployment transaction payload of the identity proxy.
    ///
    pub fn get_proxy_deploy_tx(
        &self,
        request: &DeploymentRequest,
    ) -> Result<DeploymentTransactionPayload> {
        let sources = self.sources(request)?;

        log::debug!(
            "Compiling `{}:{}`",
            ContractSourceComposer::SOURCE_NAME,
            ContractSourceComposer::CONTRACT_NAME
        );
        let artifact = self.invoker.compile(
            sources,
            ContractSourceComposer::SOURCE_NAME,
            ContractSourceComposer::CONTRACT_NAME,
        )?;

        let payload = self.builder.build(&artifact)?;
        log::debug!(
            "Built the deployment payload of {} bytes",
            artifact.bytecode.len()
        );
        Ok(payload)
    }
}

///
/// Generates the deployment transaction payload of the identity proxy with the default config.
///
pub fn get_proxy_deploy_tx(
    proxied_address: web3::types::Address,
    token_address: web3::types::Address,
    relayer_address: web3::types::Address,
    fee_amount: web3::types::U256,
    registry_address: web3::types::Address,
    privileges: Vec<PrivilegeEntry>,
) -> Result<DeploymentTransactionPayload> {
    let request = DeploymentRequest::new(
        proxied_address,
        token_address,
        relayer_address,
        fee_amount,
        registry_address,
        privileges,
    );
    ProxyDeployer::new(Config::default()).get_proxy_deploy_tx(&request)
}
