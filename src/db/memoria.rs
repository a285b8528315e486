// src/db/memoria.rs

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::common::listagem::Registro;

/// Abstração de persistência por trás das telas. Os serviços dependem
/// apenas deste trait; trocar a implementação em memória por um banco
/// real não toca handler nem serviço.
#[async_trait]
pub trait Repositorio<T: Registro>: Send + Sync {
    /// Sequência completa, na ordem de inserção.
    async fn listar(&self) -> Vec<T>;

    async fn buscar(&self, id: Uuid) -> Option<T>;

    /// Upsert: id existente é substituído na própria posição, id novo é
    /// acrescentado ao final da sequência.
    async fn salvar(&self, registro: T) -> T;

    async fn remover(&self, id: Uuid) -> Result<(), AppError>;
}

/// Implementação em memória, semeada uma vez na subida do processo.
/// Reiniciar o serviço descarta tudo, como o refresh das telas originais.
pub struct RepositorioMemoria<T> {
    registros: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for RepositorioMemoria<T> {
    fn clone(&self) -> Self {
        Self { registros: Arc::clone(&self.registros) }
    }
}

impl<T: Registro> RepositorioMemoria<T> {
    pub fn novo(iniciais: Vec<T>) -> Self {
        Self { registros: Arc::new(RwLock::new(iniciais)) }
    }
}

#[async_trait]
impl<T: Registro> Repositorio<T> for RepositorioMemoria<T> {
    async fn listar(&self) -> Vec<T> {
        self.registros.read().await.clone()
    }

    async fn buscar(&self, id: Uuid) -> Option<T> {
        self.registros.read().await.iter().find(|r| r.id() == id).cloned()
    }

    async fn salvar(&self, registro: T) -> T {
        let mut registros = self.registros.write().await;
        match registros.iter_mut().find(|r| r.id() == registro.id()) {
            Some(existente) => *existente = registro.clone(),
            None => registros.push(registro.clone()),
        }
        registro
    }

    async fn remover(&self, id: Uuid) -> Result<(), AppError> {
        let mut registros = self.registros.write().await;
        let antes = registros.len();
        registros.retain(|r| r.id() != id);
        if registros.len() == antes {
            return Err(AppError::RegistroNaoEncontrado);
        }
        Ok(())
    }
}
