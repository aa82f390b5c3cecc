use miette::Diagnostic;
use thiserror::Error;

/// Main error type for gpl2clr operations
#[derive(Error, Diagnostic, Debug)]
pub enum ConvertError {
    #[error("invalid file {path}: {message}")]
    #[diagnostic(
        code(gpl2clr::invalid_file),
        help("check that the file exists and is UTF-8 text")
    )]
    InvalidFile {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("invalid format: {reason}")]
    #[diagnostic(
        code(gpl2clr::invalid_format),
        help("a GIMP palette starts with the line 'GIMP Palette'")
    )]
    InvalidFormat { reason: String },

    #[error("parsing error on line {line_number}: '{line}'")]
    #[diagnostic(
        code(gpl2clr::parse),
        help("colour lines look like '<red> <green> <blue> [name]'")
    )]
    Parsing { line_number: usize, line: String },

    #[error("cannot create files in {path}: {message}")]
    #[diagnostic(code(gpl2clr::file_creation))]
    FileCreation {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("failed to write {path}: {message}")]
    #[diagnostic(code(gpl2clr::file_writing))]
    FileWriting {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("failed to install {path}: {message}")]
    #[diagnostic(
        code(gpl2clr::install),
        help("the converted file was kept; copy it to ~/Library/Colors by hand")
    )]
    Install {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("missing required argument <GPL_FILE>")]
    #[diagnostic(code(gpl2clr::args))]
    MissingInput,

    #[error("unrecognized option '{0}'")]
    #[diagnostic(code(gpl2clr::args))]
    UnrecognizedOption(String),

    #[error("unexpected argument '{0}'")]
    #[diagnostic(code(gpl2clr::args))]
    UnexpectedArgument(String),

    #[error("{0}")]
    #[diagnostic(code(gpl2clr::args))]
    Argument(String),

    /// Fallback for I/O failures outside the conversion steps, such as
    /// flushing the final status output.
    #[error("unexpected error: {0}")]
    #[diagnostic(code(gpl2clr::io))]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Whether this error came from the command line rather than a conversion.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            ConvertError::MissingInput
                | ConvertError::UnrecognizedOption(_)
                | ConvertError::UnexpectedArgument(_)
                | ConvertError::Argument(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
