pub mod alloy;

pub use self::alloy::{provider, provider_with_signer};
#[cfg(any(test, feature = "test-util"))]
pub use self::alloy::dummy_provider;

pub type AlloyProvider = ::alloy::providers::DynProvider;
