#[cfg(any(test, feature = "test-util"))]
use alloy::providers::mock;
use {
    crate::AlloyProvider,
    alloy::{
        network::{EthereumWallet, TxSigner},
        primitives::Signature,
        providers::{Provider, ProviderBuilder},
        rpc::client::ClientBuilder,
    },
    anyhow::{Context, Result},
};

/// Creates a read-only provider for the given RPC endpoint.
pub fn provider(url: &str) -> Result<AlloyProvider> {
    let rpc = ClientBuilder::default().http(url.parse().context("invalid node URL")?);
    Ok(ProviderBuilder::new().connect_client(rpc).erased())
}

/// Creates a provider that signs and submits transactions with the given
/// signer.
pub fn provider_with_signer(
    url: &str,
    signer: Box<dyn TxSigner<Signature> + Send + Sync + 'static>,
) -> Result<AlloyProvider> {
    let rpc = ClientBuilder::default().http(url.parse().context("invalid node URL")?);
    let wallet = EthereumWallet::new(signer);

    Ok(ProviderBuilder::new()
        .wallet(wallet)
        .connect_client(rpc)
        .erased())
}

/// Provider that is not backed by any node. Useful for tests that only
/// assemble requests without sending them anywhere.
#[cfg(any(test, feature = "test-util"))]
pub fn dummy_provider() -> AlloyProvider {
    let asserter = mock::Asserter::new();
    ProviderBuilder::new()
        .connect_mocked_client(asserter)
        .erased()
}
