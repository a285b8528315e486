pub mod memoria;
pub mod seed;

pub use memoria::{Repositorio, RepositorioMemoria};
