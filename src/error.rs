use thiserror::Error;

/// Failures the numeric pipeline can report. All are synchronous and
/// non-recoverable within the call: the first failing stage aborts the rest.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CnnError {
    /// Operand shapes are incompatible for the requested operation.
    #[error("shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    /// A sliding-window operator's computed output size is non-positive,
    /// i.e. the window exceeds the (padded) input, or the stride is zero.
    #[error(
        "invalid output shape: input {input:?}, window {window_h}x{window_w}, \
         stride {stride}, padding {padding}"
    )]
    InvalidOutputShape {
        input: Vec<usize>,
        window_h: usize,
        window_w: usize,
        stride: usize,
        padding: usize,
    },

    /// An element accessor was used outside the tensor's bounds.
    #[error("index {index:?} out of range for tensor of shape {shape:?}")]
    IndexOutOfRange { index: Vec<usize>, shape: Vec<usize> },

    /// A zero-length tensor was fed to an operation requiring at least one
    /// element.
    #[error("empty input: {0} requires at least one element")]
    EmptyInput(&'static str),
}

pub type Result<T> = std::result::Result<T, CnnError>;
