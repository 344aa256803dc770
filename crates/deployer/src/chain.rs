//! JSON-RPC implementation of the chain boundary.

use {
    crate::traits::{ChainRead, ChainWrite},
    alloy::{
        network::{EthereumWallet, TransactionBuilder},
        primitives::{Address, Bytes},
        providers::{DynProvider, Provider, ProviderBuilder},
        rpc::types::TransactionRequest,
        signers::local::PrivateKeySigner,
    },
    anyhow::{Context, Result, ensure},
    url::Url,
};

/// Chain access through a JSON-RPC node, with a wallet attached so
/// transactions are signed locally before submission.
#[derive(Clone)]
pub struct Onchain {
    provider: DynProvider,
}

impl Onchain {
    /// Connects to the node at `url`. Transactions are signed with `signer`.
    pub fn connect(url: &Url, signer: PrivateKeySigner) -> Self {
        let wallet = EthereumWallet::new(signer);
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(url.clone())
            .erased();
        Self { provider }
    }

    /// The underlying provider, for binding contract instances.
    pub fn provider(&self) -> DynProvider {
        self.provider.clone()
    }
}

#[async_trait::async_trait]
impl ChainRead for Onchain {
    async fn chain_id(&self) -> Result<u64> {
        self.provider
            .get_chain_id()
            .await
            .context("could not fetch current chain id")
    }
}

#[async_trait::async_trait]
impl ChainWrite for Onchain {
    async fn deploy_contract(&self, code: Bytes) -> Result<Address> {
        // A transaction without a `to` field creates a new contract. Gas,
        // fees and nonce are filled in by the provider.
        let tx = TransactionRequest::default().with_deploy_code(code);
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .context("failed to send deployment transaction")?;
        let receipt = pending
            .get_receipt()
            .await
            .context("failed to get deployment receipt")?;
        ensure!(
            receipt.status(),
            "deployment transaction reverted: {:?}",
            receipt.transaction_hash,
        );
        receipt
            .contract_address
            .context("deployment receipt carries no contract address")
    }
}
