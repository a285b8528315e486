// src/handlers/financeiro.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    common::listagem::{Detalhe, DetalheQuery},
    config::AppState,
    models::financeiro::{
        Deposito, FiltroDeposito, FiltroTransacao, FiltroTransferencia, TipoOperacaoCartao,
        TransacaoCartao, Transferencia,
    },
};

// =============================================================================
//  TRANSAÇÕES DE CARTÃO
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransacaoCartaoPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "TXC-2024-0200")]
    pub codigo: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Cielo")]
    pub operadora: String,

    pub tipo_operacao: TipoOperacaoCartao,

    #[schema(example = "350.00")]
    pub valor_bruto: Decimal,

    /// Quando omitida, usa a taxa padrão do tipo de operação.
    #[schema(example = "3.49")]
    pub taxa_percentual: Option<Decimal>,

    #[schema(value_type = String, format = Date, example = "2024-02-01")]
    pub data: NaiveDate,
}

/// Entrada do cálculo reativo do formulário: valor bruto mais o tipo de
/// operação ou uma taxa explícita.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculoPayload {
    #[schema(example = "350.00")]
    pub valor_bruto: Decimal,
    pub tipo_operacao: Option<TipoOperacaoCartao>,
    #[schema(example = "3.49")]
    pub taxa_percentual: Option<Decimal>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculoResposta {
    #[schema(example = "3.49")]
    pub taxa_percentual: Decimal,
    #[schema(example = "337.78")]
    pub valor_liquido: Decimal,
}

// POST /api/financeiro/cartoes/calculo
#[utoipa::path(
    post,
    path = "/api/financeiro/cartoes/calculo",
    tag = "Financeiro",
    request_body = CalculoPayload,
    responses(
        (status = 200, description = "Taxa resolvida e valor líquido derivado", body = CalculoResposta),
        (status = 400, description = "Sem taxa e sem tipo de operação")
    )
)]
pub async fn calcular_cartao(
    State(app_state): State<AppState>,
    Json(payload): Json<CalculoPayload>,
) -> Result<impl IntoResponse, AppError> {
    let calculo = app_state.financeiro.calcular(
        payload.valor_bruto,
        payload.tipo_operacao,
        payload.taxa_percentual,
    )?;
    Ok((
        StatusCode::OK,
        Json(CalculoResposta {
            taxa_percentual: calculo.taxa_percentual,
            valor_liquido: calculo.valor_liquido,
        }),
    ))
}

// GET /api/financeiro/cartoes
#[utoipa::path(
    get,
    path = "/api/financeiro/cartoes",
    tag = "Financeiro",
    params(FiltroTransacao),
    responses((status = 200, description = "Lista filtrada de transações", body = Vec<TransacaoCartao>))
)]
pub async fn listar_transacoes(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroTransacao>,
) -> Result<impl IntoResponse, AppError> {
    let registros = app_state
        .financeiro
        .listar_transacoes(filtro.busca.as_deref(), filtro.situacao)
        .await;
    Ok((StatusCode::OK, Json(registros)))
}

// POST /api/financeiro/cartoes
#[utoipa::path(
    post,
    path = "/api/financeiro/cartoes",
    tag = "Financeiro",
    request_body = TransacaoCartaoPayload,
    responses(
        (status = 201, description = "Transação criada com líquido derivado no servidor", body = TransacaoCartao),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar_transacao(
    State(app_state): State<AppState>,
    Json(payload): Json<TransacaoCartaoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let transacao = app_state
        .financeiro
        .criar_transacao(
            &payload.codigo,
            &payload.operadora,
            payload.tipo_operacao,
            payload.valor_bruto,
            payload.taxa_percentual,
            payload.data,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(transacao)))
}

// GET /api/financeiro/cartoes/{id}
#[utoipa::path(
    get,
    path = "/api/financeiro/cartoes/{id}",
    tag = "Financeiro",
    params(("id" = Uuid, Path, description = "ID da transação"), DetalheQuery),
    responses(
        (status = 200, description = "Detalhe da transação", body = Detalhe<TransacaoCartao>),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn detalhar_transacao(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DetalheQuery>,
) -> Result<impl IntoResponse, AppError> {
    let detalhe = app_state
        .financeiro
        .detalhar_transacao(id, query.modo())
        .await?;
    Ok((StatusCode::OK, Json(detalhe)))
}

// =============================================================================
//  DEPÓSITOS
// =============================================================================

// GET /api/financeiro/depositos
#[utoipa::path(
    get,
    path = "/api/financeiro/depositos",
    tag = "Financeiro",
    params(FiltroDeposito),
    responses((status = 200, description = "Lista filtrada de depósitos", body = Vec<Deposito>))
)]
pub async fn listar_depositos(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroDeposito>,
) -> Result<impl IntoResponse, AppError> {
    let registros = app_state
        .financeiro
        .listar_depositos(filtro.busca.as_deref(), filtro.situacao)
        .await;
    Ok((StatusCode::OK, Json(registros)))
}

// GET /api/financeiro/depositos/{id}
#[utoipa::path(
    get,
    path = "/api/financeiro/depositos/{id}",
    tag = "Financeiro",
    params(("id" = Uuid, Path, description = "ID do depósito"), DetalheQuery),
    responses(
        (status = 200, description = "Detalhe do depósito", body = Detalhe<Deposito>),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn detalhar_deposito(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DetalheQuery>,
) -> Result<impl IntoResponse, AppError> {
    let detalhe = app_state
        .financeiro
        .detalhar_deposito(id, query.modo())
        .await?;
    Ok((StatusCode::OK, Json(detalhe)))
}

// =============================================================================
//  TRANSFERÊNCIAS
// =============================================================================

// GET /api/financeiro/transferencias
#[utoipa::path(
    get,
    path = "/api/financeiro/transferencias",
    tag = "Financeiro",
    params(FiltroTransferencia),
    responses((status = 200, description = "Lista filtrada de transferências", body = Vec<Transferencia>))
)]
pub async fn listar_transferencias(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroTransferencia>,
) -> Result<impl IntoResponse, AppError> {
    let registros = app_state
        .financeiro
        .listar_transferencias(filtro.busca.as_deref(), filtro.situacao)
        .await;
    Ok((StatusCode::OK, Json(registros)))
}

// GET /api/financeiro/transferencias/{id}
#[utoipa::path(
    get,
    path = "/api/financeiro/transferencias/{id}",
    tag = "Financeiro",
    params(("id" = Uuid, Path, description = "ID da transferência"), DetalheQuery),
    responses(
        (status = 200, description = "Detalhe da transferência", body = Detalhe<Transferencia>),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn detalhar_transferencia(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DetalheQuery>,
) -> Result<impl IntoResponse, AppError> {
    let detalhe = app_state
        .financeiro
        .detalhar_transferencia(id, query.modo())
        .await?;
    Ok((StatusCode::OK, Json(detalhe)))
}
