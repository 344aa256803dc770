use {
    alloy::{
        primitives::{Address, Signature},
        signers::{Signer, local::PrivateKeySigner},
    },
    anyhow::{Context, Result, ensure},
};

/// A keychain holding the private key signers the tool is allowed to use.
/// The first signer is the primary one: it signs and pays for the deployment
/// transaction, and its address is reported as the deployer.
#[derive(Debug, Clone)]
pub struct Keychain {
    signers: Vec<PrivateKeySigner>,
}

impl Keychain {
    /// Parses hex encoded private keys into a keychain. At least one key is
    /// required.
    pub fn from_keys(keys: &[String]) -> Result<Self> {
        ensure!(
            !keys.is_empty(),
            "no signer available, configure at least one private key"
        );
        let signers = keys
            .iter()
            .enumerate()
            .map(|(index, key)| {
                key.parse::<PrivateKeySigner>()
                    .with_context(|| format!("failed to parse private key {index}"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { signers })
    }

    /// The signer that deploys contracts.
    pub fn primary(&self) -> &PrivateKeySigner {
        &self.signers[0]
    }

    /// Address of the primary signer.
    pub fn address(&self) -> Address {
        self.primary().address()
    }

    /// Signs `message` with the primary key using EIP-191 personal message
    /// hashing.
    pub async fn sign_message(&self, message: &str) -> Result<Signature> {
        self.primary()
            .sign_message(message.as_bytes())
            .await
            .context("failed to sign message")
    }
}

/// Verifies an EIP-191 personal message signature against the expected
/// signer address.
pub fn verify_message(message: &str, signature: &Signature, signer: Address) -> bool {
    signature
        .recover_address_from_msg(message)
        .is_ok_and(|recovered| recovered == signer)
}

#[cfg(test)]
mod tests {
    use {super::*, alloy::primitives::address};

    // The first default hardhat development account.
    const DEPLOYER_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const DEPLOYER_ADDRESS: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    fn keychain() -> Keychain {
        Keychain::from_keys(&[DEPLOYER_KEY.to_string()]).unwrap()
    }

    #[test]
    fn empty_key_list_fails() {
        let err = Keychain::from_keys(&[]).unwrap_err();
        assert!(err.to_string().contains("no signer available"));
    }

    #[test]
    fn invalid_key_fails() {
        assert!(Keychain::from_keys(&["0xnot-a-key".to_string()]).is_err());
    }

    #[test]
    fn primary_is_first_signer() {
        let keychain = Keychain::from_keys(&[
            DEPLOYER_KEY.to_string(),
            "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d".to_string(),
        ])
        .unwrap();
        assert_eq!(keychain.address(), DEPLOYER_ADDRESS);
    }

    #[tokio::test]
    async fn signed_message_recovers_to_signer() {
        let signature = keychain().sign_message("aipn registration").await.unwrap();
        assert!(verify_message(
            "aipn registration",
            &signature,
            DEPLOYER_ADDRESS
        ));
    }

    #[tokio::test]
    async fn tampered_message_does_not_verify() {
        let signature = keychain().sign_message("aipn registration").await.unwrap();
        assert!(!verify_message("aipn update", &signature, DEPLOYER_ADDRESS));
        assert!(!verify_message(
            "aipn registration",
            &signature,
            Address::ZERO
        ));
    }
}
