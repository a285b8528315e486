pub mod error;
pub mod listagem;
