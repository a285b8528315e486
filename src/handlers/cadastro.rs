// src/handlers/cadastro.rs
//
// Telas de cadastro: clínicas, unidades, convênios, tabelas de preço e
// especialidades. Cada bloco é a mesma parametrização do
// CadastroService genérico sobre a entidade da tela.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    common::listagem::{ComToast, Detalhe, DetalheQuery, Toast},
    config::AppState,
    models::cadastro::{
        Clinica, Convenio, Especialidade, FiltroCadastro, SituacaoCadastro, TabelaPreco, Unidade,
    },
};

// =============================================================================
//  CLÍNICAS
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClinicaPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "CLI-004")]
    pub codigo: String,

    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    #[schema(example = "Clínica Boa Vista")]
    pub nome: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "45.678.901/0001-23")]
    pub cnpj: String,

    #[schema(example = "Sorocaba")]
    pub cidade: String,

    pub situacao: Option<SituacaoCadastro>,
}

impl ClinicaPayload {
    fn em_registro(self, id: Uuid) -> Clinica {
        Clinica {
            id,
            codigo: self.codigo,
            nome: self.nome,
            cnpj: self.cnpj,
            cidade: self.cidade,
            situacao: self.situacao.unwrap_or(SituacaoCadastro::Ativo),
        }
    }
}

// GET /api/cadastro/clinicas
#[utoipa::path(
    get,
    path = "/api/cadastro/clinicas",
    tag = "Cadastro",
    params(FiltroCadastro),
    responses((status = 200, description = "Lista filtrada de clínicas", body = Vec<Clinica>))
)]
pub async fn listar_clinicas(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroCadastro>,
) -> Result<impl IntoResponse, AppError> {
    let registros = app_state
        .clinicas
        .listar(filtro.busca.as_deref(), filtro.situacao)
        .await;
    Ok((StatusCode::OK, Json(registros)))
}

// GET /api/cadastro/clinicas/novo
#[utoipa::path(
    get,
    path = "/api/cadastro/clinicas/novo",
    tag = "Cadastro",
    responses((status = 200, description = "Formulário em branco de clínica", body = Detalhe<Clinica>))
)]
pub async fn novo_clinica(State(app_state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(app_state.clinicas.novo_formulario()))
}

// POST /api/cadastro/clinicas
#[utoipa::path(
    post,
    path = "/api/cadastro/clinicas",
    tag = "Cadastro",
    request_body = ClinicaPayload,
    responses(
        (status = 201, description = "Clínica criada", body = Clinica),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar_clinica(
    State(app_state): State<AppState>,
    Json(payload): Json<ClinicaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let registro = app_state.clinicas.criar(payload.em_registro(Uuid::new_v4())).await;
    Ok((StatusCode::CREATED, Json(registro)))
}

// GET /api/cadastro/clinicas/{id}
#[utoipa::path(
    get,
    path = "/api/cadastro/clinicas/{id}",
    tag = "Cadastro",
    params(("id" = Uuid, Path, description = "ID da clínica"), DetalheQuery),
    responses(
        (status = 200, description = "Detalhe da clínica", body = Detalhe<Clinica>),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn detalhar_clinica(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DetalheQuery>,
) -> Result<impl IntoResponse, AppError> {
    let detalhe = app_state.clinicas.detalhar(id, query.modo()).await?;
    Ok((StatusCode::OK, Json(detalhe)))
}

// PUT /api/cadastro/clinicas/{id}
#[utoipa::path(
    put,
    path = "/api/cadastro/clinicas/{id}",
    tag = "Cadastro",
    request_body = ClinicaPayload,
    params(("id" = Uuid, Path, description = "ID da clínica")),
    responses((status = 200, description = "Clínica atualizada", body = Clinica))
)]
pub async fn atualizar_clinica(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ClinicaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let registro = app_state.clinicas.atualizar(id, payload.em_registro(id)).await?;
    Ok((StatusCode::OK, Json(registro)))
}

// POST /api/cadastro/clinicas/{id}/alternar-situacao
#[utoipa::path(
    post,
    path = "/api/cadastro/clinicas/{id}/alternar-situacao",
    tag = "Cadastro",
    params(("id" = Uuid, Path, description = "ID da clínica")),
    responses((status = 200, description = "Situação alternada", body = ComToast<Clinica>))
)]
pub async fn alternar_situacao_clinica(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let (registro, toast) = app_state.clinicas.alternar_situacao(id).await?;
    Ok((StatusCode::OK, Json(ComToast { registro, toast })))
}

// POST /api/cadastro/clinicas/{id}/duplicar
#[utoipa::path(
    post,
    path = "/api/cadastro/clinicas/{id}/duplicar",
    tag = "Cadastro",
    params(("id" = Uuid, Path, description = "ID da clínica")),
    responses((status = 201, description = "Clínica duplicada", body = ComToast<Clinica>))
)]
pub async fn duplicar_clinica(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let (registro, toast) = app_state.clinicas.duplicar(id).await?;
    Ok((StatusCode::CREATED, Json(ComToast { registro, toast })))
}

// DELETE /api/cadastro/clinicas/{id}
#[utoipa::path(
    delete,
    path = "/api/cadastro/clinicas/{id}",
    tag = "Cadastro",
    params(("id" = Uuid, Path, description = "ID da clínica")),
    responses(
        (status = 200, description = "Clínica excluída", body = Toast),
        (status = 409, description = "Registro ativo não pode ser excluído")
    )
)]
pub async fn excluir_clinica(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let toast = app_state.clinicas.excluir(id).await?;
    Ok((StatusCode::OK, Json(toast)))
}

// =============================================================================
//  UNIDADES
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnidadePayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "UNI-005")]
    pub codigo: String,

    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    #[schema(example = "Unidade Zona Norte")]
    pub nome: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Laboratório São Lucas Ltda")]
    pub empresa: String,

    #[schema(example = "São Paulo")]
    pub cidade: String,

    pub situacao: Option<SituacaoCadastro>,
}

impl UnidadePayload {
    fn em_registro(self, id: Uuid) -> Unidade {
        Unidade {
            id,
            codigo: self.codigo,
            nome: self.nome,
            empresa: self.empresa,
            cidade: self.cidade,
            situacao: self.situacao.unwrap_or(SituacaoCadastro::Ativo),
        }
    }
}

// GET /api/cadastro/unidades
#[utoipa::path(
    get,
    path = "/api/cadastro/unidades",
    tag = "Cadastro",
    params(FiltroCadastro),
    responses((status = 200, description = "Lista filtrada de unidades", body = Vec<Unidade>))
)]
pub async fn listar_unidades(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroCadastro>,
) -> Result<impl IntoResponse, AppError> {
    let registros = app_state
        .unidades
        .listar(filtro.busca.as_deref(), filtro.situacao)
        .await;
    Ok((StatusCode::OK, Json(registros)))
}

// GET /api/cadastro/unidades/novo
#[utoipa::path(
    get,
    path = "/api/cadastro/unidades/novo",
    tag = "Cadastro",
    responses((status = 200, description = "Formulário em branco de unidade", body = Detalhe<Unidade>))
)]
pub async fn novo_unidade(State(app_state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(app_state.unidades.novo_formulario()))
}

// POST /api/cadastro/unidades
#[utoipa::path(
    post,
    path = "/api/cadastro/unidades",
    tag = "Cadastro",
    request_body = UnidadePayload,
    responses(
        (status = 201, description = "Unidade criada", body = Unidade),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar_unidade(
    State(app_state): State<AppState>,
    Json(payload): Json<UnidadePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let registro = app_state.unidades.criar(payload.em_registro(Uuid::new_v4())).await;
    Ok((StatusCode::CREATED, Json(registro)))
}

// GET /api/cadastro/unidades/{id}
#[utoipa::path(
    get,
    path = "/api/cadastro/unidades/{id}",
    tag = "Cadastro",
    params(("id" = Uuid, Path, description = "ID da unidade"), DetalheQuery),
    responses(
        (status = 200, description = "Detalhe da unidade", body = Detalhe<Unidade>),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn detalhar_unidade(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DetalheQuery>,
) -> Result<impl IntoResponse, AppError> {
    let detalhe = app_state.unidades.detalhar(id, query.modo()).await?;
    Ok((StatusCode::OK, Json(detalhe)))
}

// PUT /api/cadastro/unidades/{id}
#[utoipa::path(
    put,
    path = "/api/cadastro/unidades/{id}",
    tag = "Cadastro",
    request_body = UnidadePayload,
    params(("id" = Uuid, Path, description = "ID da unidade")),
    responses((status = 200, description = "Unidade atualizada", body = Unidade))
)]
pub async fn atualizar_unidade(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UnidadePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let registro = app_state.unidades.atualizar(id, payload.em_registro(id)).await?;
    Ok((StatusCode::OK, Json(registro)))
}

// POST /api/cadastro/unidades/{id}/alternar-situacao
#[utoipa::path(
    post,
    path = "/api/cadastro/unidades/{id}/alternar-situacao",
    tag = "Cadastro",
    params(("id" = Uuid, Path, description = "ID da unidade")),
    responses((status = 200, description = "Situação alternada", body = ComToast<Unidade>))
)]
pub async fn alternar_situacao_unidade(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let (registro, toast) = app_state.unidades.alternar_situacao(id).await?;
    Ok((StatusCode::OK, Json(ComToast { registro, toast })))
}

// POST /api/cadastro/unidades/{id}/duplicar
#[utoipa::path(
    post,
    path = "/api/cadastro/unidades/{id}/duplicar",
    tag = "Cadastro",
    params(("id" = Uuid, Path, description = "ID da unidade")),
    responses((status = 201, description = "Unidade duplicada", body = ComToast<Unidade>))
)]
pub async fn duplicar_unidade(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let (registro, toast) = app_state.unidades.duplicar(id).await?;
    Ok((StatusCode::CREATED, Json(ComToast { registro, toast })))
}

// DELETE /api/cadastro/unidades/{id}
#[utoipa::path(
    delete,
    path = "/api/cadastro/unidades/{id}",
    tag = "Cadastro",
    params(("id" = Uuid, Path, description = "ID da unidade")),
    responses(
        (status = 200, description = "Unidade excluída", body = Toast),
        (status = 409, description = "Registro ativo não pode ser excluído")
    )
)]
pub async fn excluir_unidade(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let toast = app_state.unidades.excluir(id).await?;
    Ok((StatusCode::OK, Json(toast)))
}

// =============================================================================
//  CONVÊNIOS
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConvenioPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "CON-005")]
    pub codigo: String,

    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    #[schema(example = "Amil")]
    pub nome: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "326305")]
    pub registro_ans: String,

    #[schema(example = "CBHPM 5ª")]
    pub tabela: String,

    pub situacao: Option<SituacaoCadastro>,
}

impl ConvenioPayload {
    fn em_registro(self, id: Uuid) -> Convenio {
        Convenio {
            id,
            codigo: self.codigo,
            nome: self.nome,
            registro_ans: self.registro_ans,
            tabela: self.tabela,
            situacao: self.situacao.unwrap_or(SituacaoCadastro::Ativo),
        }
    }
}

// GET /api/cadastro/convenios
#[utoipa::path(
    get,
    path = "/api/cadastro/convenios",
    tag = "Cadastro",
    params(FiltroCadastro),
    responses((status = 200, description = "Lista filtrada de convênios", body = Vec<Convenio>))
)]
pub async fn listar_convenios(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroCadastro>,
) -> Result<impl IntoResponse, AppError> {
    let registros = app_state
        .convenios
        .listar(filtro.busca.as_deref(), filtro.situacao)
        .await;
    Ok((StatusCode::OK, Json(registros)))
}

// GET /api/cadastro/convenios/novo
#[utoipa::path(
    get,
    path = "/api/cadastro/convenios/novo",
    tag = "Cadastro",
    responses((status = 200, description = "Formulário em branco de convênio", body = Detalhe<Convenio>))
)]
pub async fn novo_convenio(State(app_state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(app_state.convenios.novo_formulario()))
}

// POST /api/cadastro/convenios
#[utoipa::path(
    post,
    path = "/api/cadastro/convenios",
    tag = "Cadastro",
    request_body = ConvenioPayload,
    responses(
        (status = 201, description = "Convênio criado", body = Convenio),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar_convenio(
    State(app_state): State<AppState>,
    Json(payload): Json<ConvenioPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let registro = app_state.convenios.criar(payload.em_registro(Uuid::new_v4())).await;
    Ok((StatusCode::CREATED, Json(registro)))
}

// GET /api/cadastro/convenios/{id}
#[utoipa::path(
    get,
    path = "/api/cadastro/convenios/{id}",
    tag = "Cadastro",
    params(("id" = Uuid, Path, description = "ID do convênio"), DetalheQuery),
    responses(
        (status = 200, description = "Detalhe do convênio", body = Detalhe<Convenio>),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn detalhar_convenio(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DetalheQuery>,
) -> Result<impl IntoResponse, AppError> {
    let detalhe = app_state.convenios.detalhar(id, query.modo()).await?;
    Ok((StatusCode::OK, Json(detalhe)))
}

// PUT /api/cadastro/convenios/{id}
#[utoipa::path(
    put,
    path = "/api/cadastro/convenios/{id}",
    tag = "Cadastro",
    request_body = ConvenioPayload,
    params(("id" = Uuid, Path, description = "ID do convênio")),
    responses((status = 200, description = "Convênio atualizado", body = Convenio))
)]
pub async fn atualizar_convenio(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ConvenioPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let registro = app_state.convenios.atualizar(id, payload.em_registro(id)).await?;
    Ok((StatusCode::OK, Json(registro)))
}

// POST /api/cadastro/convenios/{id}/alternar-situacao
#[utoipa::path(
    post,
    path = "/api/cadastro/convenios/{id}/alternar-situacao",
    tag = "Cadastro",
    params(("id" = Uuid, Path, description = "ID do convênio")),
    responses((status = 200, description = "Situação alternada", body = ComToast<Convenio>))
)]
pub async fn alternar_situacao_convenio(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let (registro, toast) = app_state.convenios.alternar_situacao(id).await?;
    Ok((StatusCode::OK, Json(ComToast { registro, toast })))
}

// POST /api/cadastro/convenios/{id}/duplicar
#[utoipa::path(
    post,
    path = "/api/cadastro/convenios/{id}/duplicar",
    tag = "Cadastro",
    params(("id" = Uuid, Path, description = "ID do convênio")),
    responses((status = 201, description = "Convênio duplicado", body = ComToast<Convenio>))
)]
pub async fn duplicar_convenio(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let (registro, toast) = app_state.convenios.duplicar(id).await?;
    Ok((StatusCode::CREATED, Json(ComToast { registro, toast })))
}

// DELETE /api/cadastro/convenios/{id}
#[utoipa::path(
    delete,
    path = "/api/cadastro/convenios/{id}",
    tag = "Cadastro",
    params(("id" = Uuid, Path, description = "ID do convênio")),
    responses(
        (status = 200, description = "Convênio excluído", body = Toast),
        (status = 409, description = "Registro ativo não pode ser excluído")
    )
)]
pub async fn excluir_convenio(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let toast = app_state.convenios.excluir(id).await?;
    Ok((StatusCode::OK, Json(toast)))
}

// =============================================================================
//  TABELAS DE PREÇO
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TabelaPrecoPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "TAB-004")]
    pub codigo: String,

    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    #[schema(example = "CBHPM 6ª Edição")]
    pub nome: String,

    #[schema(example = "CH")]
    pub indice: String,

    #[schema(example = "2025")]
    pub vigencia: String,

    pub situacao: Option<SituacaoCadastro>,
}

impl TabelaPrecoPayload {
    fn em_registro(self, id: Uuid) -> TabelaPreco {
        TabelaPreco {
            id,
            codigo: self.codigo,
            nome: self.nome,
            indice: self.indice,
            vigencia: self.vigencia,
            situacao: self.situacao.unwrap_or(SituacaoCadastro::Ativo),
        }
    }
}

// GET /api/cadastro/tabelas-preco
#[utoipa::path(
    get,
    path = "/api/cadastro/tabelas-preco",
    tag = "Cadastro",
    params(FiltroCadastro),
    responses((status = 200, description = "Lista filtrada de tabelas de preço", body = Vec<TabelaPreco>))
)]
pub async fn listar_tabelas_preco(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroCadastro>,
) -> Result<impl IntoResponse, AppError> {
    let registros = app_state
        .tabelas_preco
        .listar(filtro.busca.as_deref(), filtro.situacao)
        .await;
    Ok((StatusCode::OK, Json(registros)))
}

// GET /api/cadastro/tabelas-preco/novo
#[utoipa::path(
    get,
    path = "/api/cadastro/tabelas-preco/novo",
    tag = "Cadastro",
    responses((status = 200, description = "Formulário em branco de tabela de preço", body = Detalhe<TabelaPreco>))
)]
pub async fn novo_tabela_preco(State(app_state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(app_state.tabelas_preco.novo_formulario()))
}

// POST /api/cadastro/tabelas-preco
#[utoipa::path(
    post,
    path = "/api/cadastro/tabelas-preco",
    tag = "Cadastro",
    request_body = TabelaPrecoPayload,
    responses(
        (status = 201, description = "Tabela de preço criada", body = TabelaPreco),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar_tabela_preco(
    State(app_state): State<AppState>,
    Json(payload): Json<TabelaPrecoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let registro = app_state
        .tabelas_preco
        .criar(payload.em_registro(Uuid::new_v4()))
        .await;
    Ok((StatusCode::CREATED, Json(registro)))
}

// GET /api/cadastro/tabelas-preco/{id}
#[utoipa::path(
    get,
    path = "/api/cadastro/tabelas-preco/{id}",
    tag = "Cadastro",
    params(("id" = Uuid, Path, description = "ID da tabela de preço"), DetalheQuery),
    responses(
        (status = 200, description = "Detalhe da tabela de preço", body = Detalhe<TabelaPreco>),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn detalhar_tabela_preco(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DetalheQuery>,
) -> Result<impl IntoResponse, AppError> {
    let detalhe = app_state.tabelas_preco.detalhar(id, query.modo()).await?;
    Ok((StatusCode::OK, Json(detalhe)))
}

// PUT /api/cadastro/tabelas-preco/{id}
#[utoipa::path(
    put,
    path = "/api/cadastro/tabelas-preco/{id}",
    tag = "Cadastro",
    request_body = TabelaPrecoPayload,
    params(("id" = Uuid, Path, description = "ID da tabela de preço")),
    responses((status = 200, description = "Tabela de preço atualizada", body = TabelaPreco))
)]
pub async fn atualizar_tabela_preco(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TabelaPrecoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let registro = app_state
        .tabelas_preco
        .atualizar(id, payload.em_registro(id))
        .await?;
    Ok((StatusCode::OK, Json(registro)))
}

// POST /api/cadastro/tabelas-preco/{id}/alternar-situacao
#[utoipa::path(
    post,
    path = "/api/cadastro/tabelas-preco/{id}/alternar-situacao",
    tag = "Cadastro",
    params(("id" = Uuid, Path, description = "ID da tabela de preço")),
    responses((status = 200, description = "Situação alternada", body = ComToast<TabelaPreco>))
)]
pub async fn alternar_situacao_tabela_preco(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let (registro, toast) = app_state.tabelas_preco.alternar_situacao(id).await?;
    Ok((StatusCode::OK, Json(ComToast { registro, toast })))
}

// POST /api/cadastro/tabelas-preco/{id}/duplicar
#[utoipa::path(
    post,
    path = "/api/cadastro/tabelas-preco/{id}/duplicar",
    tag = "Cadastro",
    params(("id" = Uuid, Path, description = "ID da tabela de preço")),
    responses((status = 201, description = "Tabela de preço duplicada", body = ComToast<TabelaPreco>))
)]
pub async fn duplicar_tabela_preco(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let (registro, toast) = app_state.tabelas_preco.duplicar(id).await?;
    Ok((StatusCode::CREATED, Json(ComToast { registro, toast })))
}

// DELETE /api/cadastro/tabelas-preco/{id}
#[utoipa::path(
    delete,
    path = "/api/cadastro/tabelas-preco/{id}",
    tag = "Cadastro",
    params(("id" = Uuid, Path, description = "ID da tabela de preço")),
    responses(
        (status = 200, description = "Tabela de preço excluída", body = Toast),
        (status = 409, description = "Registro ativo não pode ser excluído")
    )
)]
pub async fn excluir_tabela_preco(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let toast = app_state.tabelas_preco.excluir(id).await?;
    Ok((StatusCode::OK, Json(toast)))
}

// =============================================================================
//  ESPECIALIDADES
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EspecialidadePayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "ESP-005")]
    pub codigo: String,

    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    #[schema(example = "Microbiologia")]
    pub nome: String,

    #[schema(example = "CRBM")]
    pub conselho: String,

    pub situacao: Option<SituacaoCadastro>,
}

impl EspecialidadePayload {
    fn em_registro(self, id: Uuid) -> Especialidade {
        Especialidade {
            id,
            codigo: self.codigo,
            nome: self.nome,
            conselho: self.conselho,
            situacao: self.situacao.unwrap_or(SituacaoCadastro::Ativo),
        }
    }
}

// GET /api/cadastro/especialidades
#[utoipa::path(
    get,
    path = "/api/cadastro/especialidades",
    tag = "Cadastro",
    params(FiltroCadastro),
    responses((status = 200, description = "Lista filtrada de especialidades", body = Vec<Especialidade>))
)]
pub async fn listar_especialidades(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroCadastro>,
) -> Result<impl IntoResponse, AppError> {
    let registros = app_state
        .especialidades
        .listar(filtro.busca.as_deref(), filtro.situacao)
        .await;
    Ok((StatusCode::OK, Json(registros)))
}

// GET /api/cadastro/especialidades/novo
#[utoipa::path(
    get,
    path = "/api/cadastro/especialidades/novo",
    tag = "Cadastro",
    responses((status = 200, description = "Formulário em branco de especialidade", body = Detalhe<Especialidade>))
)]
pub async fn novo_especialidade(State(app_state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(app_state.especialidades.novo_formulario()))
}

// POST /api/cadastro/especialidades
#[utoipa::path(
    post,
    path = "/api/cadastro/especialidades",
    tag = "Cadastro",
    request_body = EspecialidadePayload,
    responses(
        (status = 201, description = "Especialidade criada", body = Especialidade),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar_especialidade(
    State(app_state): State<AppState>,
    Json(payload): Json<EspecialidadePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let registro = app_state
        .especialidades
        .criar(payload.em_registro(Uuid::new_v4()))
        .await;
    Ok((StatusCode::CREATED, Json(registro)))
}

// GET /api/cadastro/especialidades/{id}
#[utoipa::path(
    get,
    path = "/api/cadastro/especialidades/{id}",
    tag = "Cadastro",
    params(("id" = Uuid, Path, description = "ID da especialidade"), DetalheQuery),
    responses(
        (status = 200, description = "Detalhe da especialidade", body = Detalhe<Especialidade>),
        (status = 404, description = "Registro não encontrado")
    )
)]
pub async fn detalhar_especialidade(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DetalheQuery>,
) -> Result<impl IntoResponse, AppError> {
    let detalhe = app_state.especialidades.detalhar(id, query.modo()).await?;
    Ok((StatusCode::OK, Json(detalhe)))
}

// PUT /api/cadastro/especialidades/{id}
#[utoipa::path(
    put,
    path = "/api/cadastro/especialidades/{id}",
    tag = "Cadastro",
    request_body = EspecialidadePayload,
    params(("id" = Uuid, Path, description = "ID da especialidade")),
    responses((status = 200, description = "Especialidade atualizada", body = Especialidade))
)]
pub async fn atualizar_especialidade(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EspecialidadePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let registro = app_state
        .especialidades
        .atualizar(id, payload.em_registro(id))
        .await?;
    Ok((StatusCode::OK, Json(registro)))
}

// POST /api/cadastro/especialidades/{id}/alternar-situacao
#[utoipa::path(
    post,
    path = "/api/cadastro/especialidades/{id}/alternar-situacao",
    tag = "Cadastro",
    params(("id" = Uuid, Path, description = "ID da especialidade")),
    responses((status = 200, description = "Situação alternada", body = ComToast<Especialidade>))
)]
pub async fn alternar_situacao_especialidade(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let (registro, toast) = app_state.especialidades.alternar_situacao(id).await?;
    Ok((StatusCode::OK, Json(ComToast { registro, toast })))
}

// POST /api/cadastro/especialidades/{id}/duplicar
#[utoipa::path(
    post,
    path = "/api/cadastro/especialidades/{id}/duplicar",
    tag = "Cadastro",
    params(("id" = Uuid, Path, description = "ID da especialidade")),
    responses((status = 201, description = "Especialidade duplicada", body = ComToast<Especialidade>))
)]
pub async fn duplicar_especialidade(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let (registro, toast) = app_state.especialidades.duplicar(id).await?;
    Ok((StatusCode::CREATED, Json(ComToast { registro, toast })))
}

// DELETE /api/cadastro/especialidades/{id}
#[utoipa::path(
    delete,
    path = "/api/cadastro/especialidades/{id}",
    tag = "Cadastro",
    params(("id" = Uuid, Path, description = "ID da especialidade")),
    responses(
        (status = 200, description = "Especialidade excluída", body = Toast),
        (status = 409, description = "Registro ativo não pode ser excluído")
    )
)]
pub async fn excluir_especialidade(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let toast = app_state.especialidades.excluir(id).await?;
    Ok((StatusCode::OK, Json(toast)))
}
