//! The deployment flow: one signer, one contract, one creation transaction.

use {
    crate::{
        keychain::Keychain,
        traits::{ChainRead, ChainWrite},
    },
    alloy::primitives::Address,
    anyhow::{Context, Result},
    contracts::artifact::Artifact,
};

/// Orchestrates a single contract deployment.
pub struct DeployService {
    keychain: Keychain,
    artifact: Artifact,
    chain: Box<dyn ChainRead>,
    submitter: Box<dyn ChainWrite>,
}

impl DeployService {
    pub fn new(
        keychain: Keychain,
        artifact: Artifact,
        chain: Box<dyn ChainRead>,
        submitter: Box<dyn ChainWrite>,
    ) -> Self {
        Self {
            keychain,
            artifact,
            chain,
            submitter,
        }
    }

    /// Deploys the configured contract and returns the address it ended up
    /// at. The deployer account is logged before submission, the deployed
    /// address only after the creation transaction is confirmed.
    pub async fn deploy(&self) -> Result<Address> {
        let chain_id = self
            .chain
            .chain_id()
            .await
            .context("failed to connect to node")?;
        tracing::info!(chain_id, "connected to network");

        let deployer = self.keychain.address();
        tracing::info!(%deployer, "deploying contracts with account");

        let address = self
            .submitter
            .deploy_contract(self.artifact.bytecode.clone())
            .await
            .with_context(|| format!("failed to deploy {}", self.artifact.contract_name))?;
        tracing::info!(contract = %self.artifact.contract_name, %address, "contract deployed");

        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::traits::{MockChainRead, MockChainWrite},
        alloy::primitives::{address, bytes},
        mockall::predicate::eq,
    };

    const HARDHAT_CHAIN_ID: u64 = 31337;

    fn registry_artifact() -> Artifact {
        serde_json::from_value(serde_json::json!({
            "contractName": "AgentIDProviderNetwork",
            "abi": [],
            "bytecode": "0x6080604052600a600b",
        }))
        .unwrap()
    }

    fn keychain() -> Keychain {
        Keychain::from_keys(&[
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80".to_string(),
        ])
        .unwrap()
    }

    fn connected_chain() -> MockChainRead {
        let mut chain = MockChainRead::new();
        chain.expect_chain_id().returning(|| Ok(HARDHAT_CHAIN_ID));
        chain
    }

    #[tokio::test]
    async fn deploys_artifact_bytecode_once() {
        let mut submitter = MockChainWrite::new();
        submitter
            .expect_deploy_contract()
            .with(eq(bytes!("6080604052600a600b")))
            .times(1)
            .returning(|_| Ok(address!("0x5FbDB2315678afecb367f032d93F642f64180aa3")));

        let service = DeployService::new(
            keychain(),
            registry_artifact(),
            Box::new(connected_chain()),
            Box::new(submitter),
        );
        let deployed = service.deploy().await.unwrap();
        assert_eq!(
            deployed,
            address!("0x5FbDB2315678afecb367f032d93F642f64180aa3")
        );
    }

    #[tokio::test]
    async fn unreachable_node_fails_before_submission() {
        let mut chain = MockChainRead::new();
        chain
            .expect_chain_id()
            .returning(|| Err(anyhow::anyhow!("connection refused")));
        let mut submitter = MockChainWrite::new();
        submitter.expect_deploy_contract().times(0);

        let service = DeployService::new(
            keychain(),
            registry_artifact(),
            Box::new(chain),
            Box::new(submitter),
        );
        let err = service.deploy().await.unwrap_err();
        assert!(err.to_string().contains("failed to connect to node"));
    }

    #[tokio::test]
    async fn rejected_deployment_surfaces_error() {
        let mut submitter = MockChainWrite::new();
        submitter
            .expect_deploy_contract()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("deployment transaction reverted")));

        let service = DeployService::new(
            keychain(),
            registry_artifact(),
            Box::new(connected_chain()),
            Box::new(submitter),
        );
        let err = service.deploy().await.unwrap_err();
        assert!(
            err.to_string()
                .contains("failed to deploy AgentIDProviderNetwork")
        );
    }
}
