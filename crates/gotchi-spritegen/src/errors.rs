use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("Input file not found: {path}")]
    #[diagnostic(
        code(input::not_found),
        help("Make sure the path is correct and the gotchi JSON file exists")
    )]
    InputNotFound { path: PathBuf },

    #[error("Config file not found: {path}")]
    #[diagnostic(
        code(config::not_found),
        help("Create a config.json with an if_keys_and_values rule list, or pass --config-path")
    )]
    ConfigNotFound { path: PathBuf },

    #[error("Output directory creation failed: {path}")]
    #[diagnostic(
        code(fs::create_dir_failed),
        help("Check file permissions and available disk space")
    )]
    OutputDirCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO operation failed")]
    #[diagnostic(code(io::operation_failed))]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl CliError {
    pub fn input_not_found(path: PathBuf) -> Self {
        Self::InputNotFound { path }
    }

    pub fn config_not_found(path: PathBuf) -> Self {
        Self::ConfigNotFound { path }
    }

    pub fn output_dir_creation_failed(path: PathBuf, source: std::io::Error) -> Self {
        Self::OutputDirCreationFailed { path, source }
    }
}
