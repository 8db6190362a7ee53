use {
    clap::Parser,
    std::fmt::{self, Display, Formatter},
    tracing::level_filters::LevelFilter,
    url::Url,
};

/// Command line arguments of the deployment runner. All constructor
/// parameters are required and validated before any network traffic happens.
#[derive(Parser)]
pub struct Arguments {
    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// The ERC-721 name the token contract is constructed with.
    #[clap(long, env, value_parser = non_empty)]
    pub token_name: String,

    /// The ERC-721 symbol the token contract is constructed with.
    #[clap(long, env, value_parser = non_empty)]
    pub token_symbol: String,

    /// The version string the token contract is constructed with.
    #[clap(long, env, value_parser = non_empty)]
    pub token_version: String,

    #[clap(flatten)]
    pub account: AccountArguments,

    #[clap(long, env, default_value = "warn,deployer=debug,deploy_contracts=debug")]
    pub log_filter: String,

    #[clap(long, env, default_value = "error")]
    pub log_stderr_threshold: LevelFilter,

    /// Output log events as JSON.
    #[clap(long, env)]
    pub use_json_logs: bool,
}

/// The key material the deployment transaction is signed with. Exactly one
/// source has to be configured so the deployer identity is always an explicit
/// choice instead of whatever account the environment happens to list first.
#[derive(Parser)]
pub struct AccountArguments {
    /// Hex encoded private key of the account submitting the deployment.
    #[clap(long, env, conflicts_with = "mnemonic")]
    pub private_key: Option<String>,

    /// BIP-39 mnemonic phrase of the account submitting the deployment.
    #[clap(long, env)]
    pub mnemonic: Option<String>,

    /// Derivation index into the mnemonic's account list.
    #[clap(long, env, default_value = "0", requires = "mnemonic")]
    pub account_index: u32,
}

fn non_empty(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err("value must not be empty".to_string());
    }
    Ok(value.to_string())
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            node_url,
            token_name,
            token_symbol,
            token_version,
            account,
            log_filter,
            log_stderr_threshold,
            use_json_logs,
        } = self;

        writeln!(f, "node_url: {node_url}")?;
        writeln!(f, "token_name: {token_name}")?;
        writeln!(f, "token_symbol: {token_symbol}")?;
        writeln!(f, "token_version: {token_version}")?;
        writeln!(
            f,
            "private_key: {}",
            account.private_key.as_deref().map(|_| "SECRET").unwrap_or("None"),
        )?;
        writeln!(
            f,
            "mnemonic: {}",
            account.mnemonic.as_deref().map(|_| "SECRET").unwrap_or("None"),
        )?;
        writeln!(f, "account_index: {}", account.account_index)?;
        writeln!(f, "log_filter: {log_filter}")?;
        writeln!(f, "log_stderr_threshold: {log_stderr_threshold}")?;
        writeln!(f, "use_json_logs: {use_json_logs}")?;
        Ok(())
    }
}
