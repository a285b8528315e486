// src/models/relatorio.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::common::listagem::Toast;

// --- Enums ---

/// Classificação de uma linha do log da execução.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TipoLog {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SituacaoExecucao {
    EmAndamento,
    Concluida,
    Cancelada,
    Falhou,
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinhaLog {
    pub horario: DateTime<Utc>,
    #[schema(example = "Resultados coletados")]
    pub mensagem: String,
    pub tipo: TipoLog,
}

/// Uma execução do fluxo "gerar relatório internet": a sequência fixa de
/// passos roda em ordem, cada passo acrescenta uma linha ao log, e o
/// cancelamento só é observado entre passos.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExecucaoRelatorio {
    pub id: Uuid,
    pub requisicoes: Vec<Uuid>,
    pub notificar_email: bool,
    pub situacao: SituacaoExecucao,
    pub logs: Vec<LinhaLog>,
    /// Preenchido apenas quando a execução termina com sucesso.
    pub toast: Option<Toast>,
}
