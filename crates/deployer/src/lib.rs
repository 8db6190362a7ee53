pub mod arguments;
pub mod wallet;

use {
    alloy::primitives::Address,
    anyhow::{Context, Result},
    arguments::Arguments,
    contracts::SBT,
    ethrpc::AlloyProvider,
};

/// Constructor parameters of the token contract.
#[derive(Clone, Debug)]
pub struct TokenParams {
    pub name: String,
    pub symbol: String,
    pub version: String,
}

/// The observable result of a deployment: who deployed and what got deployed.
#[derive(Clone, Copy, Debug)]
pub struct Deployment {
    pub deployer: Address,
    pub contract: Address,
}

/// Runs a single deployment: resolves the signing identity, submits the
/// contract creation transaction, waits for confirmation and reports both
/// addresses. Any error bubbles up to `main` where it terminates the process.
pub async fn run(args: Arguments) -> Result<Deployment> {
    let signer = wallet::signer(&args.account)?;
    let deployer = signer.address();
    let provider = ethrpc::provider_with_signer(args.node_url.as_str(), Box::new(signer))?;

    tracing::info!("Deploying contract with the account: {deployer}");

    let params = TokenParams {
        name: args.token_name,
        symbol: args.token_symbol,
        version: args.token_version,
    };
    let contract = deploy_token(&provider, &params).await?;

    tracing::info!("Contract deployed at: {contract}");
    Ok(Deployment { deployer, contract })
}

/// Submits the contract creation transaction and suspends until the network
/// confirms its inclusion. All token deployments share this routine and only
/// differ in the parameters passed in.
pub async fn deploy_token(provider: &AlloyProvider, params: &TokenParams) -> Result<Address> {
    let instance = SBT::Instance::deploy(
        provider.clone(),
        params.name.clone(),
        params.symbol.clone(),
        params.version.clone(),
    )
    .await
    .context("contract creation failed")?;
    Ok(*instance.address())
}
