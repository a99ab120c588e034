use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModalCardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),

    #[error("Settings encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ModalCardError>;
