//!
//! The identity proxy contract source composer tests.
//!

use crate::request::privilege::PrivilegeEntry;
use crate::request::DeploymentRequest;
use crate::slot::StorageSlotDeriver;

use super::instruction::Instruction;
use super::instruction::Word;
use super::ContractSourceComposer;

fn address(value: u64) -> web3::types::Address {
    web3::types::Address::from_low_u64_be(value)
}

fn request(privileges: Vec<PrivilegeEntry>) -> DeploymentRequest {
    DeploymentRequest::new(
        address(0xa1),
        address(0xb2),
        address(0xc3),
        web3::types::U256::from(1000),
        address(0xd4),
        privileges,
    )
}

fn writes(request: &DeploymentRequest) -> Vec<(web3::types::H256, web3::types::U256)> {
    let deriver = StorageSlotDeriver::default();
    request
        .privileges
        .iter()
        .map(|entry| {
            (
                deriver.derive(&entry.address, &crate::slot::layout::privileges_slot()),
                entry.level,
            )
        })
        .collect()
}

const REGISTRY_WRITE: &str = "sstore(0x0000000000000000000000000000000000000000000000000000000000000001, 0x00000000000000000000000000000000000000d4)";

#[test]
fn scenario() {
    let request = request(vec![PrivilegeEntry::from((address(0xe5), 3))]);
    let source = ContractSourceComposer.compose(&request, writes(&request).as_slice());

    assert_eq!(source.matches("sstore(").count(), 2);
    assert_eq!(
        source
            .matches("sstore(0xa85314c48458d1c61ba494ca89d053620c27a8bbb40c8ddcf92a7b2592a12ac2, 3)")
            .count(),
        1
    );
    assert_eq!(source.matches(REGISTRY_WRITE).count(), 1);
    assert_eq!(source.matches("SafeERC20.transfer(").count(), 1);
    assert!(source.contains(
        "SafeERC20.transfer(address(0x00000000000000000000000000000000000000b2), address(0x00000000000000000000000000000000000000C3), uint256(1000));"
    ));
    assert!(source.contains("address to = address(0x00000000000000000000000000000000000000A1);"));
}

#[test]
fn last_write_wins() {
    let request = request(vec![
        PrivilegeEntry::from((address(0x0a), 5)),
        PrivilegeEntry::from((address(0x0a), 7)),
    ]);
    let source = ContractSourceComposer.compose(&request, writes(&request).as_slice());

    let slot = "0x3e9abaca0aad9ede81f4474766c846d8539f70688e1c8f521bbe1597874e3dc4";
    let first = source
        .find(format!("sstore({slot}, 5)").as_str())
        .expect("Always exists");
    let second = source
        .find(format!("sstore({slot}, 7)").as_str())
        .expect("Always exists");
    assert!(first < second);
    assert_eq!(source.matches(slot).count(), 2);
}

#[test]
fn registry_written_after_privileges() {
    let request = request(vec![PrivilegeEntry::from((address(0xe5), 3))]);
    let program = ContractSourceComposer.program(&request, writes(&request).as_slice());

    let writes: Vec<&Instruction> = program.storage_writes().collect();
    assert_eq!(writes.len(), 2);
    assert_eq!(
        writes[1],
        &Instruction::storage_write(
            web3::types::H256::from_low_u64_be(1),
            Word::Address(address(0xd4))
        )
    );
}

#[test]
fn empty_privileges() {
    let request = request(vec![]);
    let program = ContractSourceComposer.program(&request, &[]);
    assert_eq!(program.storage_writes().count(), 1);

    let source = ContractSourceComposer.compose(&request, &[]);
    assert_eq!(source.matches("sstore(").count(), 1);
    assert_eq!(source.matches(REGISTRY_WRITE).count(), 1);
}

#[test]
fn fee_settled_once_after_storage() {
    let request = request(vec![PrivilegeEntry::from((address(0xe5), 3))]);
    let program = ContractSourceComposer.program(&request, writes(&request).as_slice());

    let transfers: Vec<(usize, &Instruction)> = program
        .constructor
        .iter()
        .enumerate()
        .filter(|(_, instruction)| matches!(instruction, Instruction::TokenTransfer { .. }))
        .collect();
    assert_eq!(
        transfers,
        vec![(
            program.constructor.len() - 1,
            &Instruction::TokenTransfer {
                token: address(0xb2),
                recipient: address(0xc3),
                amount: web3::types::U256::from(1000),
            }
        )]
    );
}

#[test]
fn forwarding() {
    let program = ContractSourceComposer.program(&request(vec![]), &[]);
    assert_eq!(
        program.fallback,
        vec![Instruction::DelegateForward {
            target: address(0xa1),
            gas_reserve: 10_000,
        }]
    );

    let source = ContractSourceComposer.compose(&request(vec![]), &[]);
    let fallback = &source[source.find("function () external").expect("Always exists")..];
    let copy = fallback
        .find("calldatacopy(0, 0, calldatasize())")
        .expect("Always exists");
    let call = fallback
        .find("delegatecall(sub(gas(), 10000), to, 0, calldatasize(), 0, 0)")
        .expect("Always exists");
    let result = fallback
        .find("returndatacopy(0, 0, returndatasize())")
        .expect("Always exists");
    assert!(copy < call && call < result);
    assert!(fallback.contains("case 0 { revert(0, returndatasize()) }"));
    assert!(fallback.contains("default { return(0, returndatasize()) }"));
}

#[test]
fn no_other_entry_points() {
    let source = ContractSourceComposer.compose(&request(vec![]), &[]);
    assert_eq!(source.matches("function ").count(), 1);
    assert!(!source.contains(" public;"));
    assert!(!source.contains(" external;"));
}
