use {
    crate::header::FIELD_CAP,
    camino::Utf8PathBuf,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file not found: {0}")]
    FileNotFound(Utf8PathBuf),
    #[error("header ended before width and height were found")]
    TruncatedHeader,
    #[error("header field {field:?} is longer than {} digits", FIELD_CAP)]
    NumericOverflow { field: String },
    #[error("malformed header: {0}")]
    MalformedHeader(String),
    #[error("payload holds {actual} bytes, {wide}x{high} pixels need {expected}")]
    InsufficientPayload { wide: u32, high: u32, expected: usize, actual: usize },
    #[error("invalid image dimensions {wide}x{high}")]
    InvalidDimensions { wide: u32, high: u32 },
    #[error("png encoding failed")]
    Encoding(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for this kind of failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Io(_)                     => 1,
            Error::FileNotFound(_)           => 2,
            Error::TruncatedHeader           => 3,
            Error::NumericOverflow{..}       => 4,
            Error::MalformedHeader(_)        => 5,
            Error::InsufficientPayload{..}   => 6,
            Error::InvalidDimensions{..}     => 7,
            Error::Encoding(_)               => 8,
        }
    }
}

#[cfg(test)]
#[test]
fn exit_codes_are_distinct() {
    let errors = [
        Error::Io(std::io::ErrorKind::Other.into()),
        Error::FileNotFound("x.wxl".into()),
        Error::TruncatedHeader,
        Error::NumericOverflow{field: "12345".into()},
        Error::MalformedHeader("zero width".into()),
        Error::InsufficientPayload{wide: 1, high: 1, expected: 4, actual: 0},
        Error::InvalidDimensions{wide: 0, high: 1},
        Error::Encoding(image::ImageError::IoError(std::io::ErrorKind::Other.into())),
    ];
    let mut codes = errors.iter().map(Error::exit_code).collect::<Vec<_>>();
    assert!(codes.iter().all(|&c| c != 0));
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), errors.len());
}
