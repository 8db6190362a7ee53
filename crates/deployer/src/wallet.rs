use {
    crate::arguments::AccountArguments,
    alloy::signers::local::{MnemonicBuilder, PrivateKeySigner, coins_bip39::English},
    anyhow::{Context, Result, bail},
};

/// Resolves the signing identity of the deployer from the configured key
/// material.
pub fn signer(account: &AccountArguments) -> Result<PrivateKeySigner> {
    match (&account.private_key, &account.mnemonic) {
        (Some(key), None) => key.parse().context("malformed private key"),
        (None, Some(phrase)) => MnemonicBuilder::<English>::default()
            .phrase(phrase)
            .index(account.account_index)
            .context("invalid account index")?
            .build()
            .context("failed to derive account from mnemonic"),
        (Some(_), Some(_)) => bail!("--private-key and --mnemonic are mutually exclusive"),
        (None, None) => bail!("no account configured, set --private-key or --mnemonic"),
    }
}

#[cfg(test)]
mod tests {
    use {super::*, alloy::primitives::address};

    // Well known development mnemonic used by anvil and hardhat.
    const TEST_MNEMONIC: &str = "test test test test test test test test test test test junk";

    fn account(
        private_key: Option<&str>,
        mnemonic: Option<&str>,
        account_index: u32,
    ) -> AccountArguments {
        AccountArguments {
            private_key: private_key.map(str::to_string),
            mnemonic: mnemonic.map(str::to_string),
            account_index,
        }
    }

    #[test]
    fn derives_first_account_of_test_mnemonic() {
        let signer = signer(&account(None, Some(TEST_MNEMONIC), 0)).unwrap();
        assert_eq!(
            signer.address(),
            address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let first = signer(&account(None, Some(TEST_MNEMONIC), 0)).unwrap();
        let second = signer(&account(None, Some(TEST_MNEMONIC), 0)).unwrap();
        assert_eq!(first.address(), second.address());
    }

    #[test]
    fn different_indices_derive_different_accounts() {
        let first = signer(&account(None, Some(TEST_MNEMONIC), 0)).unwrap();
        let second = signer(&account(None, Some(TEST_MNEMONIC), 1)).unwrap();
        assert_ne!(first.address(), second.address());
    }

    #[test]
    fn private_key_resolves_to_its_account() {
        // Private key of the first account of the test mnemonic.
        let signer = signer(&account(
            Some("0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"),
            None,
            0,
        ))
        .unwrap();
        assert_eq!(
            signer.address(),
            address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
        );
    }

    #[test]
    fn malformed_private_key_fails() {
        assert!(signer(&account(Some("0xnothex"), None, 0)).is_err());
    }

    #[test]
    fn missing_key_material_fails() {
        assert!(signer(&account(None, None, 0)).is_err());
    }
}
