//! Contract bindings and build-artifact handling for the Agent ID Provider
//! Network.

pub mod artifact;

use alloy::providers::DynProvider;

alloy::sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract AgentIDProviderNetwork {
        event DIDRegistered(address indexed owner, string did);

        function registerDID(string calldata did, string calldata document) external;
        function resolveDID(string calldata did) external view returns (string memory document);
    }
);

/// The deployed registry contract, bound to a provider.
pub type Instance = AgentIDProviderNetwork::AgentIDProviderNetworkInstance<DynProvider>;
