use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board dimensions must be positive")]
    InvalidDimensions,
    #[error("Board dimensions must be at least {minimum}")]
    DimensionsTooSmall { minimum: crate::Coord },
    #[error("Too many mines, at most {allowed} fit")]
    TooManyMines { allowed: crate::CellCount },
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Board was never started but has no mine generator")]
    MissingGenerator,
}

pub type Result<T> = core::result::Result<T, GameError>;
