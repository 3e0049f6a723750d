//! Despliega NonFungibleTarot en un nodo de desarrollo y mintea dos cartas.
//!
//! Sale con código 0 si todo se confirma, 1 si falla cualquier paso.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    cli::main()
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;

    use clap::Parser;
    use eyre::{Result, WrapErr};
    use tracing_subscriber::EnvFilter;

    use non_fungible_tarot::deploy;
    use non_fungible_tarot::models::ContractArtifact;
    use non_fungible_tarot::services::RpcProvider;

    /// Deploy NonFungibleTarot and mint two tarot spreads as a smoke test.
    #[derive(Parser, Debug)]
    #[command(name = "deploy", version, about)]
    struct Args {
        /// JSON-RPC endpoint of a node with unlocked accounts (Hardhat, Anvil)
        #[arg(long, env = "RPC_URL", default_value = "http://127.0.0.1:8545")]
        rpc_url: String,

        /// Hardhat artifact with `abi` and `bytecode`
        #[arg(
            long,
            env = "ARTIFACT_PATH",
            value_name = "PATH",
            default_value = "artifacts/contracts/NonFungibleTarot.sol/NonFungibleTarot.json"
        )]
        artifact: PathBuf,

        /// Delay between receipt polls
        #[arg(long, env = "POLL_INTERVAL_MS", default_value_t = 500)]
        poll_interval_ms: u32,
    }

    pub fn main() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();

        let result = run(Args::parse());
        if let Err(e) = &result {
            log::error!("❌ [DEPLOY] {:?}", e);
        }
        std::process::exit(deploy::exit_code(&result));
    }

    fn run(args: Args) -> Result<()> {
        let json = std::fs::read_to_string(&args.artifact)
            .wrap_err_with(|| format!("Failed to read artifact `{}`", args.artifact.display()))?;
        let artifact = ContractArtifact::from_json(&json)
            .wrap_err_with(|| format!("Failed to parse artifact `{}`", args.artifact.display()))?;

        let provider = RpcProvider::new(args.rpc_url);
        log::info!("🌐 [DEPLOY] Nodo: {}", provider.url());

        let report = futures::executor::block_on(deploy::run(&provider, &artifact, args.poll_interval_ms))
            .wrap_err("Deploy/mint sequence failed")?;

        println!("Contract deployed to: {}", report.address);
        for receipt in &report.mint_receipts {
            println!("{:#?}", receipt);
        }
        Ok(())
    }

}
