use std::fmt;

/// Errors raised while building a scene or its drawing surface.
///
/// Sampling and drawing never fail once construction has succeeded.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A canvas or raster was requested with a zero-sized dimension.
    InvalidDimensions { width: u32, height: u32 },
    /// A points buffer needs at least one column.
    EmptyPoints,
    /// Throttled frame rates must be positive and finite.
    InvalidFrameRate(f64),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDimensions { width, height } => {
                write!(f, "invalid canvas dimensions {width}x{height}")
            }
            Error::EmptyPoints => write!(f, "points buffer needs at least one column"),
            Error::InvalidFrameRate(rate) => write!(f, "invalid target frame rate {rate}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 240,
        };
        assert_eq!(err.to_string(), "invalid canvas dimensions 0x240");
        assert_eq!(
            Error::InvalidFrameRate(-1.0).to_string(),
            "invalid target frame rate -1"
        );
    }
}
