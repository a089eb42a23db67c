use clap::ValueEnum;
use sitepack_config::BuildMode;

/// Build mode selectable on the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    /// Readable filenames, inline source maps, no minification
    #[value(name = "development", alias = "dev")]
    Development,

    /// Content-hashed filenames, external source maps, minified output
    #[value(name = "production", alias = "prod")]
    Production,
}

impl From<ModeArg> for BuildMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Development => BuildMode::Development,
            ModeArg::Production => BuildMode::Production,
        }
    }
}

/// Serialization format for `sitepack plan`
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum PlanFormat {
    /// Pretty-printed JSON
    #[value(name = "json")]
    Json,

    /// TOML document
    #[value(name = "toml")]
    Toml,
}
