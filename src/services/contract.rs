// ============================================================================
// CONTRACT - Handle de contrato sobre un WalletProvider
// ============================================================================
// Construye calldata desde el ABI y delega el envío y la espera al proveedor.
// Solo llamadas sin argumentos: es todo lo que expone NonFungibleTarot.
// ============================================================================

use alloy_primitives::Address;

use crate::models::{ContractArtifact, TransactionReceipt, TransactionRequest};
use crate::services::wallet_provider::{WalletError, WalletProvider};

/// Cuenta que firma: la primera autorizada por la wallet
async fn signer<P: WalletProvider>(provider: &P) -> Result<String, WalletError> {
    provider
        .accounts()
        .await?
        .into_iter()
        .next()
        .ok_or(WalletError::NoAccounts)
}

/// Contrato desplegado en una dirección conocida
pub struct Contract<'a, P> {
    address: Address,
    artifact: &'a ContractArtifact,
    provider: &'a P,
}

impl<'a, P: WalletProvider> Contract<'a, P> {
    pub fn new(address: Address, artifact: &'a ContractArtifact, provider: &'a P) -> Self {
        Self { address, artifact, provider }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Enviar una llamada mutante sin argumentos (p.ej. `tarotSpread()`)
    pub async fn send(&self, method: &str) -> Result<PendingTransaction<'a, P>, WalletError> {
        let data = self.artifact.encode_call(method)?;
        let from = signer(self.provider).await?;
        let request = TransactionRequest {
            from,
            to: Some(self.address),
            data,
        };
        let hash = self.provider.send_transaction(&request).await?;
        log::info!("📤 [CONTRACT] {}() enviada: {}", method, hash);
        Ok(PendingTransaction { hash, provider: self.provider })
    }
}

/// Transacción enviada, aún sin confirmar
pub struct PendingTransaction<'a, P> {
    pub hash: String,
    provider: &'a P,
}

impl<'a, P: WalletProvider> PendingTransaction<'a, P> {
    /// Esperar a que se mine; una transacción revertida es un error
    pub async fn wait(&self, poll_interval_ms: u32) -> Result<TransactionReceipt, WalletError> {
        let receipt = self.provider.wait_for_transaction(&self.hash, poll_interval_ms).await?;
        if !receipt.succeeded() {
            return Err(WalletError::Reverted { hash: self.hash.clone() });
        }
        log::info!(
            "⛏️ [CONTRACT] {} minada en bloque {}",
            self.hash,
            receipt.block_number.as_deref().unwrap_or("?")
        );
        Ok(receipt)
    }
}

/// Despliegue de un contrato nuevo desde su artifact
pub struct ContractFactory<'a, P> {
    artifact: &'a ContractArtifact,
    provider: &'a P,
}

impl<'a, P: WalletProvider> ContractFactory<'a, P> {
    pub fn new(artifact: &'a ContractArtifact, provider: &'a P) -> Self {
        Self { artifact, provider }
    }

    pub async fn deploy(&self) -> Result<PendingDeployment<'a, P>, WalletError> {
        let data = self.artifact.deploy_bytecode()?;
        let from = signer(self.provider).await?;
        let request = TransactionRequest { from, to: None, data };
        let hash = self.provider.send_transaction(&request).await?;
        log::info!("📤 [DEPLOY] {} enviado: {}", self.artifact.contract_name, hash);
        Ok(PendingDeployment {
            transaction: PendingTransaction { hash, provider: self.provider },
            artifact: self.artifact,
        })
    }
}

/// Despliegue enviado, aún sin dirección
pub struct PendingDeployment<'a, P> {
    pub transaction: PendingTransaction<'a, P>,
    artifact: &'a ContractArtifact,
}

impl<'a, P: WalletProvider> PendingDeployment<'a, P> {
    /// Esperar el receipt y devolver el contrato en su dirección nueva
    pub async fn deployed(&self, poll_interval_ms: u32) -> Result<Contract<'a, P>, WalletError> {
        let receipt = self.transaction.wait(poll_interval_ms).await?;
        let address = receipt
            .contract_address
            .ok_or_else(|| WalletError::MissingContractAddress { hash: self.transaction.hash.clone() })?;
        Ok(Contract::new(address, self.artifact, self.transaction.provider))
    }
}
