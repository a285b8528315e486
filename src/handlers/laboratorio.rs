// src/handlers/laboratorio.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    common::listagem::{ComToast, Detalhe, DetalheQuery},
    config::AppState,
    models::laboratorio::{
        Amostra, FiltroAmostra, FiltroInterfaceamento, LogInterfaceamento,
    },
};

// GET /api/laboratorio/amostras
#[utoipa::path(
    get,
    path = "/api/laboratorio/amostras",
    tag = "Laboratório",
    params(FiltroAmostra),
    responses((status = 200, description = "Lista filtrada de amostras", body = Vec<Amostra>))
)]
pub async fn listar_amostras(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroAmostra>,
) -> Result<impl IntoResponse, AppError> {
    let registros = app_state
        .laboratorio
        .listar_amostras(filtro.busca.as_deref(), filtro.situacao)
        .await;
    Ok((StatusCode::OK, Json(registros)))
}

// GET /api/laboratorio/amostras/{id}
#[utoipa::path(
    get,
    path = "/api/laboratorio/amostras/{id}",
    tag = "Laboratório",
    params(("id" = Uuid, Path, description = "ID da amostra"), DetalheQuery),
    responses(
        (status = 200, description = "Detalhe da amostra", body = Detalhe<Amostra>),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn detalhar_amostra(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DetalheQuery>,
) -> Result<impl IntoResponse, AppError> {
    let detalhe = app_state
        .laboratorio
        .detalhar_amostra(id, query.modo())
        .await?;
    Ok((StatusCode::OK, Json(detalhe)))
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecebimentoPayload {
    /// Nome de quem recebeu o material. Obrigatório: em branco bloqueia
    /// a confirmação.
    #[schema(example = "Carlos Nunes")]
    pub responsavel: String,
}

// POST /api/laboratorio/amostras/{id}/recebimento
#[utoipa::path(
    post,
    path = "/api/laboratorio/amostras/{id}/recebimento",
    tag = "Laboratório",
    request_body = RecebimentoPayload,
    params(("id" = Uuid, Path, description = "ID da amostra")),
    responses(
        (status = 200, description = "Material recebido", body = ComToast<Amostra>),
        (status = 400, description = "Responsável em branco")
    )
)]
pub async fn receber_amostra(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RecebimentoPayload>,
) -> Result<impl IntoResponse, AppError> {
    let (registro, toast) = app_state
        .laboratorio
        .receber_amostra(id, &payload.responsavel)
        .await?;
    Ok((StatusCode::OK, Json(ComToast { registro, toast })))
}

// GET /api/laboratorio/interfaceamento
#[utoipa::path(
    get,
    path = "/api/laboratorio/interfaceamento",
    tag = "Laboratório",
    params(FiltroInterfaceamento),
    responses((status = 200, description = "Log de mensagens trocadas com os equipamentos", body = Vec<LogInterfaceamento>))
)]
pub async fn listar_interfaceamento(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroInterfaceamento>,
) -> Result<impl IntoResponse, AppError> {
    let registros = app_state
        .laboratorio
        .listar_interfaceamento(filtro.busca.as_deref(), filtro.situacao)
        .await;
    Ok((StatusCode::OK, Json(registros)))
}

// GET /api/laboratorio/interfaceamento/{id}
#[utoipa::path(
    get,
    path = "/api/laboratorio/interfaceamento/{id}",
    tag = "Laboratório",
    params(("id" = Uuid, Path, description = "ID da entrada de log")),
    responses(
        (status = 200, description = "Entrada com a mensagem bruta do instrumento, sem interpretação", body = LogInterfaceamento),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn detalhar_interfaceamento(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let registro = app_state.laboratorio.detalhar_log(id).await?;
    Ok((StatusCode::OK, Json(registro)))
}
