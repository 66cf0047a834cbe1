//! Forward-pass inference for a minimal convolutional network over
//! single-channel 2-D images.
//!
//! The pipeline is strictly linear and stateless:
//!
//! `image → convolve → relu → max_pool → flatten → dense → softmax`
//!
//! Every stage is a pure function over [`Tensor`] values; the only aggregate
//! is [`SimpleCnn`], which owns the read-only kernel, weight and bias
//! tensors and composes the stages. Parameters are supplied from outside —
//! either as pre-built tensors or through an injected [`Initializer`] — so
//! deterministic fixtures can replace randomness in tests.
//!
//! ```
//! use cnn_rs::{NormalInit, SimpleCnn, Tensor};
//!
//! let mut init = NormalInit::seeded(42);
//! let cnn = SimpleCnn::with_initializer(&mut init).unwrap();
//! let image = Tensor::zeros(&[28, 28]);
//! let probs = cnn.forward(&image).unwrap();
//! assert_eq!(probs.shape(), &[10]);
//! ```
//!
//! No training, no dataset I/O, no multi-channel convolution: the scope is
//! a correct, composable reference pipeline, not a kernel library.

pub mod activation;
pub mod conv;
pub mod dense;
pub mod error;
pub mod init;
pub mod model;
pub mod pool;
pub mod tensor;

pub use activation::{relu, softmax};
pub use conv::convolve;
pub use dense::{dense, flatten};
pub use error::{CnnError, Result};
pub use init::{Initializer, NormalInit};
pub use model::SimpleCnn;
pub use pool::max_pool;
pub use tensor::Tensor;
