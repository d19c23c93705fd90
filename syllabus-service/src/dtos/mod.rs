pub mod generate;

pub use generate::{GenerateRequest, GenerateResponse};
