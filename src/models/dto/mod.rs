pub mod request;

pub use request::{LoginRequest, NewMaterial, NewQuestion};
