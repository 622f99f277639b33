//! CLI subcommands

pub mod classify;
pub mod decode;
pub mod encode;

use abiwire_codec::AbiType;

use crate::CliError;

/// Parse a JSON list of parameter types
pub(crate) fn parse_types(json: &str) -> Result<Vec<AbiType>, CliError> {
    let types: Vec<AbiType> = serde_json::from_str(json)?;
    for ty in &types {
        ty.validate()?;
    }
    Ok(types)
}
