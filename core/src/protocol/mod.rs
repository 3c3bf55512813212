pub mod wire;

pub use wire::{RecognizeRequest, RecognizeResponse, Score};
