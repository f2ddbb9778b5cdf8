use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("transform array must hold exactly 6 values, got {len}")]
    MalformedTransform { len: usize },

    #[error("transform is not invertible: determinant={determinant}")]
    SingularTransform { determinant: f64 },

    #[error("paired series length mismatch: x_len={x_len}, y_len={y_len}")]
    SeriesLengthMismatch { x_len: usize, y_len: usize },

    #[error("grid shape mismatch at row {row}: previous={previous}, current={current}")]
    GridShapeMismatch {
        row: usize,
        previous: usize,
        current: usize,
    },

    #[error("data group holds `{expected}` data, cannot accept `{found}`")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },
}
