//! Decode command

use abiwire_codec::{AbiError, AbiType, Decoder, Value};
use clap::Args;
use serde_json::json;

use super::parse_types;
use crate::{config::Config, json::value_to_json, output::Output, CliError};

/// Decode ABI data into values
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// Parameter types as JSON, e.g. '[{"uint":32},"bool"]'
    #[arg(short, long)]
    types: String,
    /// Encoded data (hex, optional 0x prefix)
    data: String,
    /// Fail on the first malformed parameter
    #[arg(long)]
    strict: bool,
}

impl DecodeCommand {
    pub fn execute(self, config: &Config, json: bool) -> Result<(), CliError> {
        let types = parse_types(&self.types)?;

        let mut settings = config.decoder.clone();
        settings.strict |= self.strict;
        let decoder = Decoder::new(settings);

        let results: Vec<Result<Value, AbiError>> = if decoder.config().strict {
            decoder
                .decode_strict(&types, &self.data)?
                .into_iter()
                .map(Ok)
                .collect()
        } else {
            decoder.decode_many(&types, &self.data)
        };

        let entries: Vec<_> = types
            .iter()
            .zip(&results)
            .map(|(ty, result)| entry_json(ty, result))
            .collect();
        let lines: Vec<_> = types
            .iter()
            .zip(&results)
            .enumerate()
            .map(|(i, (ty, result))| entry_line(i, ty, result))
            .collect();
        let failed = results.iter().filter(|r| r.is_err()).count();

        Output::new(json)
            .field_value("values", serde_json::Value::Array(entries))
            .field_u64("failed", failed as u64)
            .message(&lines.join("\n"))
            .print();

        Ok(())
    }
}

fn entry_json(ty: &AbiType, result: &Result<Value, AbiError>) -> serde_json::Value {
    match result {
        Ok(value) => json!({ "type": ty.to_string(), "value": value_to_json(value) }),
        Err(e) => json!({ "type": ty.to_string(), "error": e.to_string() }),
    }
}

fn entry_line(index: usize, ty: &AbiType, result: &Result<Value, AbiError>) -> String {
    match result {
        Ok(value) => format!("[{index}] {ty}: {}", value_to_json(value)),
        Err(e) => format!("[{index}] {ty}: error: {e}"),
    }
}
