use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Usage: markdown2html <INPUT> <OUTPUT>")]
    Usage,
    #[error("Missing {}", .0.display())]
    MissingInput(std::path::PathBuf),
    #[error("Error: {0}")]
    InputRead(std::io::Error),
    #[error("Error: {0}")]
    OutputIo(std::io::Error),
    #[error("Failed to load config file, defaulting: {0}")]
    ConfigLoad(#[from] confy::ConfyError),
    #[error("Config file {} does not exist, defaulting.", .0.display())]
    ConfigMissing(std::path::PathBuf),
}

impl ConvertError {
    /// The process exit status this error should terminate the program with.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::Usage
            | ConvertError::MissingInput(_)
            | ConvertError::InputRead(_)
            | ConvertError::OutputIo(_)
            | ConvertError::ConfigLoad(_)
            | ConvertError::ConfigMissing(_) => 1,
        }
    }
}
