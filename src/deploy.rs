// ============================================================================
// DEPLOY - Despliegue del contrato + dos mints de prueba
// ============================================================================
// Secuencial: desplegar, confirmar, mint, confirmar, mint, confirmar.
// Cualquier fallo corta la secuencia y se devuelve al binario (exit 1).
// ============================================================================

use alloy_primitives::Address;

use crate::models::{ContractArtifact, TransactionReceipt};
use crate::services::{ContractFactory, WalletError, WalletProvider};
use crate::viewmodels::MINT_METHOD;

/// Mints de prueba tras desplegar
pub const SMOKE_TEST_MINTS: usize = 2;

/// Resultado del despliegue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    pub address: Address,
    pub deploy_hash: String,
    pub mint_receipts: Vec<TransactionReceipt>,
}

/// Código de salida del script: 0 si toda la secuencia se confirmó, 1 si no
pub fn exit_code<T, E>(result: &Result<T, E>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Desplegar `artifact` e invocar `tarotSpread()` dos veces
pub async fn run<P: WalletProvider>(
    provider: &P,
    artifact: &ContractArtifact,
    poll_interval_ms: u32,
) -> Result<DeployReport, WalletError> {
    let deployment = ContractFactory::new(artifact, provider).deploy().await?;
    let contract = deployment.deployed(poll_interval_ms).await?;
    log::info!("📜 [DEPLOY] Contract deployed to: {}", contract.address());

    let mut mint_receipts = Vec::with_capacity(SMOKE_TEST_MINTS);
    for round in 1..=SMOKE_TEST_MINTS {
        let transaction = contract.send(MINT_METHOD).await?;
        let receipt = transaction.wait(poll_interval_ms).await?;
        log::info!("🃏 [DEPLOY] Mint {}/{} confirmado: {}", round, SMOKE_TEST_MINTS, receipt.transaction_hash);
        mint_receipts.push(receipt);
    }

    Ok(DeployReport {
        address: contract.address(),
        deploy_hash: deployment.transaction.hash.clone(),
        mint_receipts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeProvider;
    use alloy_primitives::address;
    use futures::executor::block_on;
    use serde_json::{json, Value};

    const DEPLOYED: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");

    fn artifact() -> ContractArtifact {
        ContractArtifact::from_json(
            r#"{ "contractName": "NonFungibleTarot",
                 "abi": [{ "type": "function", "name": "tarotSpread", "inputs": [], "stateMutability": "nonpayable" }],
                 "bytecode": "0x608060405234801561001057600080fd5b50" }"#,
        )
        .unwrap()
    }

    fn receipt(hash: &str, contract: Option<Address>) -> Value {
        json!({ "transactionHash": hash, "blockNumber": "0x1", "status": "0x1", "contractAddress": contract })
    }

    #[test]
    fn test_deploy_then_mint_twice() {
        let provider = FakeProvider::new()
            .respond("eth_accounts", json!(["0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"]))
            .respond("eth_sendTransaction", json!("0xd1"))
            .respond("eth_sendTransaction", json!("0xm1"))
            .respond("eth_sendTransaction", json!("0xm2"))
            .respond("eth_getTransactionReceipt", receipt("0xd1", Some(DEPLOYED)))
            .respond("eth_getTransactionReceipt", receipt("0xm1", None))
            .respond("eth_getTransactionReceipt", receipt("0xm2", None));

        let result = block_on(run(&provider, &artifact(), 1));
        assert_eq!(exit_code(&result), 0);
        let report = result.unwrap();

        assert_eq!(report.address, DEPLOYED);
        assert_eq!(report.deploy_hash, "0xd1");
        let hashes: Vec<&str> = report.mint_receipts.iter().map(|r| r.transaction_hash.as_str()).collect();
        assert_eq!(hashes, vec!["0xm1", "0xm2"]);

        let sent = provider.params_of("eth_sendTransaction");
        assert_eq!(sent.len(), 3);
        assert!(sent[0][0].get("to").is_none());
        let to: Address = serde_json::from_value(sent[1][0]["to"].clone()).unwrap();
        assert_eq!(to, DEPLOYED);
    }

    #[test]
    fn test_failed_deploy_stops_before_minting() {
        let provider = FakeProvider::new()
            .respond("eth_accounts", json!(["0xf39f"]))
            .fail("eth_sendTransaction", WalletError::Rpc { code: -32000, message: "out of gas".into() });

        let result = block_on(run(&provider, &artifact(), 1));
        assert!(matches!(result, Err(WalletError::Rpc { code: -32000, .. })));
        assert_eq!(exit_code(&result), 1);
        assert_eq!(provider.calls_to("eth_sendTransaction"), 1);
        assert_eq!(provider.calls_to("eth_getTransactionReceipt"), 0);
    }

    #[test]
    fn test_second_mint_failure_is_fatal() {
        let provider = FakeProvider::new()
            .respond("eth_accounts", json!(["0xf39f"]))
            .respond("eth_sendTransaction", json!("0xd1"))
            .respond("eth_sendTransaction", json!("0xm1"))
            .respond("eth_sendTransaction", json!("0xm2"))
            .respond("eth_getTransactionReceipt", receipt("0xd1", Some(DEPLOYED)))
            .respond("eth_getTransactionReceipt", receipt("0xm1", None))
            .respond("eth_getTransactionReceipt", json!({ "transactionHash": "0xm2", "status": "0x0" }));

        let result = block_on(run(&provider, &artifact(), 1));
        assert_eq!(result, Err(WalletError::Reverted { hash: "0xm2".into() }));
        assert_eq!(exit_code(&result), 1);
    }

    #[test]
    fn test_abi_only_artifact_cannot_deploy() {
        let provider = FakeProvider::new().respond("eth_accounts", json!(["0xf39f"]));
        let artifact = ContractArtifact::non_fungible_tarot().unwrap();

        let result = block_on(run(&provider, &artifact, 1));
        assert_eq!(result, Err(WalletError::Abi(crate::models::AbiError::MissingBytecode)));
        assert_eq!(provider.total_calls(), 0);
    }
}
