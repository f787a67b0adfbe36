//!
//! The identity proxy contract source composer.
//!

pub mod emitter;
pub mod instruction;
pub mod program;

use crate::request::DeploymentRequest;
use crate::slot::layout;

use self::emitter::Emitter;
use self::instruction::Instruction;
use self::instruction::Word;
use self::program::Program;

///
/// The identity proxy contract source composer.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct ContractSourceComposer;

impl ContractSourceComposer {
    /// The identity proxy contract name.
    pub const CONTRACT_NAME: &'static str = "IdentityProxy";

    /// The identity proxy source unit name.
    pub const SOURCE_NAME: &'static str = "Proxy.sol";

    /// The gas withheld from the delegated call for the proxy's own bookkeeping.
    pub const DELEGATE_GAS_RESERVE: u64 = 10_000;

    ///
    /// Builds the typed program from the request and the derived `(slot, level)` privilege writes.
    ///
    /// The privilege writes keep their order, so the last write to a slot wins.
    ///
    pub fn program(
        &self,
        request: &DeploymentRequest,
        privilege_writes: &[(web3::types::H256, web3::types::U256)],
    ) -> Program {
        let mut constructor = Vec::with_capacity(privilege_writes.len() + 2);
        for (slot, level) in privilege_writes.iter() {
            constructor.push(Instruction::storage_write(*slot, Word::Integer(*level)));
        }
        constructor.push(Instruction::storage_write(
            layout::registry_slot(),
            Word::Address(request.registry_address),
        ));
        constructor.push(Instruction::TokenTransfer {
            token: request.token_address,
            recipient: request.relayer_address,
            amount: request.fee_amount,
        });

        let fallback = vec![Instruction::DelegateForward {
            target: request.proxied_address,
            gas_reserve: Self::DELEGATE_GAS_RESERVE,
        }];

        Program::new(Self::CONTRACT_NAME.to_owned(), constructor, fallback)
    }

    ///
    /// Composes the complete contract source text.
    ///
    pub fn compose(
        &self,
        request: &DeploymentRequest,
        privilege_writes: &[(web3::types::H256, web3::types::U256)],
    ) -> String {
        Emitter::emit(&self.program(request, privilege_writes))
    }
}

#[cfg(test)]
mod tests;
