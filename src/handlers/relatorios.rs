// src/handlers/relatorios.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    common::error::AppError, common::listagem::Toast, config::AppState,
    models::relatorio::ExecucaoRelatorio,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IniciarRelatorioPayload {
    /// Requisições selecionadas na tela; vazio bloqueia o disparo.
    pub requisicoes: Vec<Uuid>,

    /// Com a notificação habilitada a execução registra 8 linhas de log;
    /// sem ela, 6.
    #[serde(default = "padrao_notificar")]
    #[schema(example = true)]
    pub notificar_email: bool,
}

fn padrao_notificar() -> bool {
    true
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelatorioIniciado {
    pub id: Uuid,
}

// POST /api/relatorios/internet
#[utoipa::path(
    post,
    path = "/api/relatorios/internet",
    tag = "Relatórios",
    request_body = IniciarRelatorioPayload,
    responses(
        (status = 202, description = "Execução disparada; acompanhe pelo id", body = RelatorioIniciado),
        (status = 400, description = "Nenhuma requisição selecionada")
    )
)]
pub async fn iniciar_relatorio(
    State(app_state): State<AppState>,
    Json(payload): Json<IniciarRelatorioPayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = app_state
        .relatorios
        .iniciar(payload.requisicoes, payload.notificar_email)
        .await?;
    Ok((StatusCode::ACCEPTED, Json(RelatorioIniciado { id })))
}

// GET /api/relatorios/internet/{id}
#[utoipa::path(
    get,
    path = "/api/relatorios/internet/{id}",
    tag = "Relatórios",
    params(("id" = Uuid, Path, description = "ID da execução")),
    responses(
        (status = 200, description = "Situação e log da execução", body = ExecucaoRelatorio),
        (status = 404, description = "Execução não encontrada")
    )
)]
pub async fn consultar_relatorio(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let execucao = app_state.relatorios.consultar(id).await?;
    Ok((StatusCode::OK, Json(execucao)))
}

// POST /api/relatorios/internet/{id}/cancelar
#[utoipa::path(
    post,
    path = "/api/relatorios/internet/{id}/cancelar",
    tag = "Relatórios",
    params(("id" = Uuid, Path, description = "ID da execução")),
    responses(
        (status = 200, description = "Cancelamento solicitado; vale a partir do próximo passo", body = Toast),
        (status = 404, description = "Execução não encontrada"),
        (status = 409, description = "Execução já terminada")
    )
)]
pub async fn cancelar_relatorio(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let toast = app_state.relatorios.cancelar(id).await?;
    Ok((StatusCode::OK, Json(toast)))
}
