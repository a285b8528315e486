// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// As variantes cobrem exatamente os bloqueios que as telas aplicam:
// registro inexistente, exclusão de registro ativo, campo obrigatório
// em branco e ação disparada sem nenhum item selecionado.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Registro não encontrado")]
    RegistroNaoEncontrado,

    #[error("Registro ativo não pode ser excluído")]
    RegistroProtegido,

    #[error("A situação atual não permite esta ação")]
    SituacaoTerminal,

    #[error("Preencha todos os campos obrigatórios")]
    CamposObrigatorios,

    #[error("Selecione ao menos uma requisição")]
    NenhumItemSelecionado,

    // Variante genérica para qualquer outro erro inesperado
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::RegistroNaoEncontrado => {
                (StatusCode::NOT_FOUND, "Registro não encontrado.")
            }
            AppError::RegistroProtegido => (
                StatusCode::CONFLICT,
                "Registro ativo não pode ser excluído. Inative-o primeiro.",
            ),
            AppError::SituacaoTerminal => (
                StatusCode::CONFLICT,
                "A situação atual do registro não permite esta ação.",
            ),
            AppError::CamposObrigatorios => (
                StatusCode::BAD_REQUEST,
                "Preencha todos os campos obrigatórios.",
            ),
            AppError::NenhumItemSelecionado => (
                StatusCode::BAD_REQUEST,
                "Selecione ao menos uma requisição.",
            ),

            // Todo o resto vira 500. O `tracing` loga a mensagem detalhada
            // que o `thiserror` nos deu; o cliente recebe só o genérico.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
