use std::env;
use std::fs;
use std::path::Path;

/// Variables que `AppConfig::from_env` lee con `option_env!`
const CONFIG_KEYS: &[&str] = &[
    "CONTRACT_ADDRESS",
    "EXPECTED_CHAIN_ID",
    "NETWORK_NAME",
    "EXPLORER_URL",
    "OPENSEA_LINK",
    "TWITTER_HANDLE",
    "RECEIPT_POLL_INTERVAL_MS",
];

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=abi/NonFungibleTarot.json");

    // Cargar .env si existe; el entorno real tiene prioridad
    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(e) => {
            println!("cargo:warning=Could not read .env: {}", e);
            return;
        }
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Ignoring unknown .env key {}", key);
            continue;
        }
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
