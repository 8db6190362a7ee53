//! Alloy bindings for the contracts this repository deploys. The bindings are
//! generated from the build artifacts checked in under `artifacts/`, so the
//! creation bytecode is available and the instance types know how to submit
//! a contract creation transaction.

mod macros;

crate::bindings!(SBT);

#[cfg(test)]
mod tests {
    use {super::*, alloy::sol_types::SolConstructor};

    #[test]
    fn deploy_calldata_is_bytecode_followed_by_constructor_args() {
        let builder = SBT::Instance::deploy_builder(
            ethrpc::dummy_provider(),
            "MyToken".to_string(),
            "MTK".to_string(),
            "1.0".to_string(),
        );

        let mut expected = SBT::SBT::BYTECODE.to_vec();
        expected.extend(
            SBT::SBT::constructorCall {
                name_: "MyToken".to_string(),
                symbol_: "MTK".to_string(),
                version_: "1.0".to_string(),
            }
            .abi_encode(),
        );
        assert_eq!(builder.calldata().to_vec(), expected);
    }

    #[test]
    fn creation_bytecode_is_not_empty() {
        assert!(!SBT::SBT::BYTECODE.is_empty());
    }
}
