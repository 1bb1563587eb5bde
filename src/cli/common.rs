//! Shared clap helper types for the CLI.

use cardstats::Variant;
use clap::ValueEnum;

/// Report presets accepted by `--variant`.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum VariantArg {
    Legacy,
    Curve,
    Full,
}

impl From<VariantArg> for Variant {
    fn from(value: VariantArg) -> Variant {
        match value {
            VariantArg::Legacy => Variant::Legacy,
            VariantArg::Curve => Variant::Curve,
            VariantArg::Full => Variant::Full,
        }
    }
}

/// Output formats accepted by `--format`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
