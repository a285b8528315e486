// src/lib.rs

use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod services;

use crate::config::AppState;

/// Monta o router completo da aplicação. Separado do `main` para que os
/// testes de integração montem o mesmo app contra um estado recém-semeado.
pub fn app(app_state: AppState) -> Router {
    // Rotas de cadastro: as cinco telas seguem o mesmo contrato
    let cadastro_routes = Router::new()
        .route(
            "/clinicas",
            get(handlers::cadastro::listar_clinicas).post(handlers::cadastro::criar_clinica),
        )
        .route("/clinicas/novo", get(handlers::cadastro::novo_clinica))
        .route(
            "/clinicas/{id}",
            get(handlers::cadastro::detalhar_clinica)
                .put(handlers::cadastro::atualizar_clinica)
                .delete(handlers::cadastro::excluir_clinica),
        )
        .route(
            "/clinicas/{id}/alternar-situacao",
            post(handlers::cadastro::alternar_situacao_clinica),
        )
        .route(
            "/clinicas/{id}/duplicar",
            post(handlers::cadastro::duplicar_clinica),
        )
        .route(
            "/unidades",
            get(handlers::cadastro::listar_unidades).post(handlers::cadastro::criar_unidade),
        )
        .route("/unidades/novo", get(handlers::cadastro::novo_unidade))
        .route(
            "/unidades/{id}",
            get(handlers::cadastro::detalhar_unidade)
                .put(handlers::cadastro::atualizar_unidade)
                .delete(handlers::cadastro::excluir_unidade),
        )
        .route(
            "/unidades/{id}/alternar-situacao",
            post(handlers::cadastro::alternar_situacao_unidade),
        )
        .route(
            "/unidades/{id}/duplicar",
            post(handlers::cadastro::duplicar_unidade),
        )
        .route(
            "/convenios",
            get(handlers::cadastro::listar_convenios).post(handlers::cadastro::criar_convenio),
        )
        .route("/convenios/novo", get(handlers::cadastro::novo_convenio))
        .route(
            "/convenios/{id}",
            get(handlers::cadastro::detalhar_convenio)
                .put(handlers::cadastro::atualizar_convenio)
                .delete(handlers::cadastro::excluir_convenio),
        )
        .route(
            "/convenios/{id}/alternar-situacao",
            post(handlers::cadastro::alternar_situacao_convenio),
        )
        .route(
            "/convenios/{id}/duplicar",
            post(handlers::cadastro::duplicar_convenio),
        )
        .route(
            "/tabelas-preco",
            get(handlers::cadastro::listar_tabelas_preco)
                .post(handlers::cadastro::criar_tabela_preco),
        )
        .route(
            "/tabelas-preco/novo",
            get(handlers::cadastro::novo_tabela_preco),
        )
        .route(
            "/tabelas-preco/{id}",
            get(handlers::cadastro::detalhar_tabela_preco)
                .put(handlers::cadastro::atualizar_tabela_preco)
                .delete(handlers::cadastro::excluir_tabela_preco),
        )
        .route(
            "/tabelas-preco/{id}/alternar-situacao",
            post(handlers::cadastro::alternar_situacao_tabela_preco),
        )
        .route(
            "/tabelas-preco/{id}/duplicar",
            post(handlers::cadastro::duplicar_tabela_preco),
        )
        .route(
            "/especialidades",
            get(handlers::cadastro::listar_especialidades)
                .post(handlers::cadastro::criar_especialidade),
        )
        .route(
            "/especialidades/novo",
            get(handlers::cadastro::novo_especialidade),
        )
        .route(
            "/especialidades/{id}",
            get(handlers::cadastro::detalhar_especialidade)
                .put(handlers::cadastro::atualizar_especialidade)
                .delete(handlers::cadastro::excluir_especialidade),
        )
        .route(
            "/especialidades/{id}/alternar-situacao",
            post(handlers::cadastro::alternar_situacao_especialidade),
        )
        .route(
            "/especialidades/{id}/duplicar",
            post(handlers::cadastro::duplicar_especialidade),
        );

    let atendimento_routes = Router::new()
        .route("/pacientes", get(handlers::atendimento::listar_pacientes))
        .route(
            "/pacientes/busca",
            get(handlers::atendimento::buscar_pacientes),
        )
        .route(
            "/pacientes/{id}",
            get(handlers::atendimento::detalhar_paciente),
        )
        .route(
            "/requisicoes",
            get(handlers::atendimento::listar_requisicoes),
        )
        .route(
            "/requisicoes/{id}",
            get(handlers::atendimento::detalhar_requisicao),
        );

    let financeiro_routes = Router::new()
        .route(
            "/cartoes",
            get(handlers::financeiro::listar_transacoes)
                .post(handlers::financeiro::criar_transacao),
        )
        .route(
            "/cartoes/calculo",
            post(handlers::financeiro::calcular_cartao),
        )
        .route(
            "/cartoes/{id}",
            get(handlers::financeiro::detalhar_transacao),
        )
        .route("/depositos", get(handlers::financeiro::listar_depositos))
        .route(
            "/depositos/{id}",
            get(handlers::financeiro::detalhar_deposito),
        )
        .route(
            "/transferencias",
            get(handlers::financeiro::listar_transferencias),
        )
        .route(
            "/transferencias/{id}",
            get(handlers::financeiro::detalhar_transferencia),
        );

    let laboratorio_routes = Router::new()
        .route("/amostras", get(handlers::laboratorio::listar_amostras))
        .route(
            "/amostras/{id}",
            get(handlers::laboratorio::detalhar_amostra),
        )
        .route(
            "/amostras/{id}/recebimento",
            post(handlers::laboratorio::receber_amostra),
        )
        .route(
            "/interfaceamento",
            get(handlers::laboratorio::listar_interfaceamento),
        )
        .route(
            "/interfaceamento/{id}",
            get(handlers::laboratorio::detalhar_interfaceamento),
        );

    let relatorio_routes = Router::new()
        .route("/internet", post(handlers::relatorios::iniciar_relatorio))
        .route(
            "/internet/{id}",
            get(handlers::relatorios::consultar_relatorio),
        )
        .route(
            "/internet/{id}/cancelar",
            post(handlers::relatorios::cancelar_relatorio),
        );

    // Combina tudo no router principal
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/cadastro", cadastro_routes)
        .nest("/api/atendimento", atendimento_routes)
        .nest("/api/financeiro", financeiro_routes)
        .nest("/api/laboratorio", laboratorio_routes)
        .nest("/api/relatorios", relatorio_routes)
        .with_state(app_state)
}
