// src/handlers/atendimento.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    common::listagem::{Detalhe, DetalheQuery},
    config::AppState,
    models::atendimento::{BuscaPaciente, FiltroRequisicao, Paciente, Requisicao},
    models::cadastro::FiltroCadastro,
};

// GET /api/atendimento/pacientes
#[utoipa::path(
    get,
    path = "/api/atendimento/pacientes",
    tag = "Atendimento",
    params(FiltroCadastro),
    responses((status = 200, description = "Lista filtrada de pacientes", body = Vec<Paciente>))
)]
pub async fn listar_pacientes(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroCadastro>,
) -> Result<impl IntoResponse, AppError> {
    let registros = app_state
        .atendimento
        .listar_pacientes(filtro.busca.as_deref(), filtro.situacao)
        .await;
    Ok((StatusCode::OK, Json(registros)))
}

// GET /api/atendimento/pacientes/busca
#[utoipa::path(
    get,
    path = "/api/atendimento/pacientes/busca",
    tag = "Atendimento",
    params(BuscaPaciente),
    responses((
        status = 200,
        description = "Pacientes que casam com o termo; vazio para termos com menos de 2 caracteres",
        body = Vec<Paciente>
    ))
)]
pub async fn buscar_pacientes(
    State(app_state): State<AppState>,
    Query(busca): Query<BuscaPaciente>,
) -> Result<impl IntoResponse, AppError> {
    let registros = app_state.atendimento.buscar_pacientes(&busca.q).await;
    Ok((StatusCode::OK, Json(registros)))
}

// GET /api/atendimento/pacientes/{id}
#[utoipa::path(
    get,
    path = "/api/atendimento/pacientes/{id}",
    tag = "Atendimento",
    params(("id" = Uuid, Path, description = "ID do paciente"), DetalheQuery),
    responses(
        (status = 200, description = "Detalhe do paciente", body = Detalhe<Paciente>),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn detalhar_paciente(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DetalheQuery>,
) -> Result<impl IntoResponse, AppError> {
    let detalhe = app_state.atendimento.detalhar_paciente(id, query.modo()).await?;
    Ok((StatusCode::OK, Json(detalhe)))
}

// GET /api/atendimento/requisicoes
#[utoipa::path(
    get,
    path = "/api/atendimento/requisicoes",
    tag = "Atendimento",
    params(FiltroRequisicao),
    responses((status = 200, description = "Lista filtrada de requisições", body = Vec<Requisicao>))
)]
pub async fn listar_requisicoes(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroRequisicao>,
) -> Result<impl IntoResponse, AppError> {
    let registros = app_state.atendimento.listar_requisicoes(&filtro).await;
    Ok((StatusCode::OK, Json(registros)))
}

// GET /api/atendimento/requisicoes/{id}
#[utoipa::path(
    get,
    path = "/api/atendimento/requisicoes/{id}",
    tag = "Atendimento",
    params(("id" = Uuid, Path, description = "ID da requisição"), DetalheQuery),
    responses(
        (status = 200, description = "Detalhe da requisição", body = Detalhe<Requisicao>),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn detalhar_requisicao(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DetalheQuery>,
) -> Result<impl IntoResponse, AppError> {
    let detalhe = app_state
        .atendimento
        .detalhar_requisicao(id, query.modo())
        .await?;
    Ok((StatusCode::OK, Json(detalhe)))
}
