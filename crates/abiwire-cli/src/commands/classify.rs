//! Classify command

use abiwire_codec::AbiType;
use clap::Args;

use crate::{config::Config, output::Output, CliError};

/// Show how a type is laid out in the head
#[derive(Debug, Args)]
pub struct ClassifyCommand {
    /// Type as JSON, e.g. '{"fixed_array":["string",2]}'
    #[arg(short, long = "type")]
    ty: String,
}

impl ClassifyCommand {
    pub fn execute(self, _config: &Config, json: bool) -> Result<(), CliError> {
        let ty: AbiType = serde_json::from_str(&self.ty)?;
        ty.validate()?;

        let dynamic = ty.is_dynamic();
        let head_width = ty.head_width();
        Output::new(json)
            .field("type", &ty.to_string())
            .field_bool("dynamic", dynamic)
            .field_u64("head_width", head_width as u64)
            .message(&format!(
                "Type: {}\nDynamic: {}\nHead width: {} bytes",
                ty, dynamic, head_width
            ))
            .print();

        Ok(())
    }
}
