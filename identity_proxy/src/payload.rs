//!
//! The deployment transaction payload.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::artifact::CompiledArtifact;
use crate::error::Error;
use crate::error::Result;

///
/// The deployment transaction payload.
///
/// Serialized as `{ "data": "0x..." }`.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentTransactionPayload {
    /// The `0x`-prefixed hexadecimal creation data.
    pub data: String,
}

///
/// The deployment transaction payload builder.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct DeploymentPayloadBuilder;

impl DeploymentPayloadBuilder {
    ///
    /// Builds the payload from the deploy bytecode of the artifact.
    ///
    pub fn build(&self, artifact: &CompiledArtifact) -> Result<DeploymentTransactionPayload> {
        if artifact.bytecode.is_empty() {
            return Err(Error::EmptyArtifact {
                contract: artifact.contract.clone(),
            });
        }

        Ok(DeploymentTransactionPayload {
            data: format!("0x{}", hex::encode(artifact.bytecode.as_slice())),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::artifact::CompiledArtifact;

    use super::DeploymentPayloadBuilder;
    use super::DeploymentTransactionPayload;

    fn artifact(bytecode: Vec<u8>) -> CompiledArtifact {
        CompiledArtifact::new("Proxy.sol:IdentityProxy".to_owned(), bytecode, None)
    }

    fn is_well_formed(data: &str) -> bool {
        regex::Regex::new("^0x([0-9a-fA-F]{2})+$")
            .expect("Always valid")
            .is_match(data)
    }

    #[test]
    fn ok() {
        let payload = DeploymentPayloadBuilder
            .build(&artifact(vec![0x60, 0x80, 0x60, 0x40, 0x52]))
            .expect("Always valid");
        assert_eq!(
            payload,
            DeploymentTransactionPayload {
                data: "0x6080604052".to_owned()
            }
        );
    }

    #[test]
    fn leading_zero_bytes_kept() {
        let payload = DeploymentPayloadBuilder
            .build(&artifact(vec![0x00, 0x0f]))
            .expect("Always valid");
        assert_eq!(payload.data, "0x000f");
        assert!(is_well_formed(payload.data.as_str()));
    }

    #[test]
    fn well_formed() {
        for length in [1, 2, 31, 32, 1024] {
            let bytecode: Vec<u8> = (0..length).map(|index| (index % 256) as u8).collect();
            let payload = DeploymentPayloadBuilder
                .build(&artifact(bytecode.clone()))
                .expect("Always valid");
            assert!(is_well_formed(payload.data.as_str()));
            assert_eq!(payload.data, format!("0x{}", hex::encode(bytecode)));
        }
    }

    #[test]
    fn serialized() {
        let payload = DeploymentTransactionPayload {
            data: "0x6080".to_owned(),
        };
        assert_eq!(
            serde_json::to_value(&payload).expect("Always valid"),
            serde_json::json!({ "data": "0x6080" })
        );
    }

    #[test]
    fn error_empty() {
        let result = DeploymentPayloadBuilder.build(&artifact(vec![]));
        assert!(matches!(
            result,
            Err(crate::Error::EmptyArtifact { contract }) if contract == "Proxy.sol:IdentityProxy"
        ));
    }
}
