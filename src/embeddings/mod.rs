//! Local embedding generation

mod onnx;

pub use onnx::OnnxEmbedder;
