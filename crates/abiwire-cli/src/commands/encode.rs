//! Encode command

use abiwire_codec::{encode_function_call, encode_params};
use clap::Args;
use tracing::debug;

use super::parse_types;
use crate::{config::Config, json::values_from_json, output::Output, CliError};

/// Encode values into ABI call data
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// Parameter types as JSON, e.g. '[{"uint":32},"bool"]'
    #[arg(short, long)]
    types: String,
    /// Parameter values as a JSON array
    #[arg(short, long)]
    values: String,
    /// 4-byte function selector (hex) to prepend
    #[arg(short, long)]
    selector: Option<String>,
}

impl EncodeCommand {
    pub fn execute(self, config: &Config, json: bool) -> Result<(), CliError> {
        let types = parse_types(&self.types)?;
        let values = values_from_json(&types, &serde_json::from_str(&self.values)?)?;

        let data = match self.selector.as_deref() {
            Some(selector) => encode_function_call(parse_selector(selector)?, &types, &values)?,
            None => encode_params(&types, &values)?,
        };
        debug!("encoded {} parameters into {} bytes", types.len(), data.len());

        let hex = config.format_hex(&data);
        Output::new(json)
            .field("data", &hex)
            .field_u64("length", data.len() as u64)
            .message(&hex)
            .print();

        Ok(())
    }
}

fn parse_selector(selector: &str) -> Result<[u8; 4], CliError> {
    let digits = selector.strip_prefix("0x").unwrap_or(selector);
    let bytes = hex::decode(digits).map_err(|e| CliError::InvalidHex(e.to_string()))?;
    bytes
        .try_into()
        .map_err(|_| CliError::InvalidInput(format!("selector must be 4 bytes: {selector}")))
}
