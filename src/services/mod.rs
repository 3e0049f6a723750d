pub mod contract;
pub mod ethereum_provider;
pub mod notifier;
#[cfg(not(target_arch = "wasm32"))]
pub mod rpc_provider;
pub mod wallet_provider;

pub use contract::{Contract, ContractFactory, PendingDeployment, PendingTransaction};
pub use ethereum_provider::EthereumProvider;
pub use notifier::{BrowserNotifier, Notifier};
#[cfg(not(target_arch = "wasm32"))]
pub use rpc_provider::RpcProvider;
pub use wallet_provider::{WalletError, WalletProvider, USER_REJECTED_CODE};
