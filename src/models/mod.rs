// Modelos compartidos entre frontend y script de despliegue

pub mod artifact;
pub mod network;
pub mod transaction;

pub use artifact::{AbiError, AbiItem, AbiParam, ContractArtifact};
pub use network::same_chain;
pub use transaction::{TransactionReceipt, TransactionRequest};
