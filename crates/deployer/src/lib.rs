pub mod arguments;
pub mod chain;
pub mod deploy_service;
pub mod keychain;
pub mod traits;

use {
    crate::{chain::Onchain, deploy_service::DeployService, keychain::Keychain},
    alloy::primitives::Address,
    anyhow::Result,
    contracts::artifact::Artifact,
};

/// Deploys the configured contract and returns its on-chain address.
///
/// The signer is acquired first, then the artifact is resolved, and only
/// then is anything sent to the node, so configuration errors surface
/// without a network round trip.
pub async fn run(args: arguments::Arguments) -> Result<Address> {
    let keychain = Keychain::from_keys(&args.private_keys)?;
    let artifact = Artifact::resolve(&args.artifacts, &args.contract_name)?;
    let chain = Onchain::connect(&args.node_url, keychain.primary().clone());

    let service = DeployService::new(
        keychain,
        artifact,
        Box::new(chain.clone()),
        Box::new(chain.clone()),
    );
    let address = service.deploy().await?;

    let registry = contracts::Instance::new(address, chain.provider());
    Ok(*registry.address())
}
