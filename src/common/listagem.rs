// src/common/listagem.rs
//
// Camada genérica de listagem que todas as telas compartilham:
// critérios de filtro combinados com AND, badge de situação e
// habilitação de ações por linha derivada unicamente da situação.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Um registro exibível em listagem.
///
/// `campos_busca` devolve os campos designados para a busca textual
/// (normalmente código e nome; em alguns domínios também o documento).
pub trait Registro: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
    fn campos_busca(&self) -> Vec<String>;
}

/// Situação enumerada de um registro. Comanda o badge e a habilitação
/// das ações da linha.
pub trait Situacao: Copy + Eq {
    fn rotulo(&self) -> &'static str;
    fn cor_badge(&self) -> &'static str;

    /// Situação protegida bloqueia a exclusão do registro.
    fn protegida(&self) -> bool;

    /// Situação terminal bloqueia a alternância ativa/inativa.
    fn terminal(&self) -> bool;
}

/// Critério de texto livre: substring sem distinção de maiúsculas,
/// aplicado aos campos designados do registro. Termo ausente ou em
/// branco aceita qualquer registro (sentinela "todos").
pub fn aceita_texto<R: Registro>(registro: &R, termo: Option<&str>) -> bool {
    let Some(termo) = termo else { return true };
    if termo.trim().is_empty() {
        return true;
    }
    let agulha = termo.to_lowercase();
    registro
        .campos_busca()
        .iter()
        .any(|campo| campo.to_lowercase().contains(&agulha))
}

/// Critério de igualdade para enums de situação/categoria.
/// `None` é o sentinela "todos" e aceita qualquer valor.
pub fn aceita_valor<V: PartialEq>(valor: &V, criterio: Option<&V>) -> bool {
    criterio.is_none_or(|c| c == valor)
}

/// Habilitação das ações de uma linha da listagem, função pura da situação.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcoesLinha {
    pub visualizar: bool,
    pub editar: bool,
    pub alternar_situacao: bool,
    pub duplicar: bool,
    pub excluir: bool,
}

impl AcoesLinha {
    pub fn para<S: Situacao>(situacao: S) -> Self {
        Self {
            visualizar: true,
            editar: true,
            alternar_situacao: !situacao.terminal(),
            duplicar: true,
            excluir: !situacao.protegida(),
        }
    }
}

/// Modo de abertura de uma tela de detalhe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Modo {
    Visualizacao,
    Edicao,
    Novo,
}

/// Query string comum das telas de detalhe (`?edit=true` abre em edição).
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct DetalheQuery {
    pub edit: Option<bool>,
}

impl DetalheQuery {
    pub fn modo(&self) -> Modo {
        if self.edit.unwrap_or(false) {
            Modo::Edicao
        } else {
            Modo::Visualizacao
        }
    }
}

/// Registro aberto em uma tela de detalhe, com o modo e as ações permitidas.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Detalhe<T: ToSchema> {
    pub registro: T,
    pub modo: Modo,
    pub acoes: AcoesLinha,
}

/// Notificação transitória exibida pelo front após uma ação.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    #[schema(example = "Situação alterada com sucesso")]
    pub mensagem: String,
    pub tipo: TipoToast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TipoToast {
    Sucesso,
    Erro,
    Info,
}

impl Toast {
    pub fn sucesso(mensagem: impl Into<String>) -> Self {
        Self { mensagem: mensagem.into(), tipo: TipoToast::Sucesso }
    }

    pub fn info(mensagem: impl Into<String>) -> Self {
        Self { mensagem: mensagem.into(), tipo: TipoToast::Info }
    }
}

/// Resultado de uma ação de linha que devolve o registro atualizado
/// junto do toast de confirmação.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComToast<T: ToSchema> {
    pub registro: T,
    pub toast: Toast,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Exemplo {
        id: Uuid,
        codigo: String,
        nome: String,
    }

    impl Registro for Exemplo {
        fn id(&self) -> Uuid {
            self.id
        }
        fn campos_busca(&self) -> Vec<String> {
            vec![self.codigo.clone(), self.nome.clone()]
        }
    }

    fn exemplo(codigo: &str, nome: &str) -> Exemplo {
        Exemplo { id: Uuid::new_v4(), codigo: codigo.into(), nome: nome.into() }
    }

    #[test]
    fn busca_textual_ignora_maiusculas() {
        let r = exemplo("UNI-001", "Unidade Centro");
        assert!(aceita_texto(&r, Some("centro")));
        assert!(aceita_texto(&r, Some("CENTRO")));
        assert!(aceita_texto(&r, Some("uni-0")));
        assert!(!aceita_texto(&r, Some("zona sul")));
    }

    #[test]
    fn termo_vazio_aceita_tudo() {
        let r = exemplo("UNI-001", "Unidade Centro");
        assert!(aceita_texto(&r, None));
        assert!(aceita_texto(&r, Some("")));
        assert!(aceita_texto(&r, Some("   ")));
    }

    #[test]
    fn criterio_enum_com_sentinela_todos() {
        assert!(aceita_valor(&1, None));
        assert!(aceita_valor(&1, Some(&1)));
        assert!(!aceita_valor(&1, Some(&2)));
    }
}
