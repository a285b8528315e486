// src/config.rs

use std::env;
use std::sync::Arc;

use crate::{
    db::{seed, RepositorioMemoria},
    services::{
        AtendimentoService, CadastroService, FinanceiroService, LaboratorioService,
        RelatorioService,
    },
};
use crate::models::cadastro::{Clinica, Convenio, Especialidade, TabelaPreco, Unidade};

#[derive(Clone)]
pub struct AppState {
    pub clinicas: CadastroService<Clinica>,
    pub unidades: CadastroService<Unidade>,
    pub convenios: CadastroService<Convenio>,
    pub tabelas_preco: CadastroService<TabelaPreco>,
    pub especialidades: CadastroService<Especialidade>,
    pub atendimento: AtendimentoService,
    pub financeiro: FinanceiroService,
    pub laboratorio: LaboratorioService,
    pub relatorios: RelatorioService,
}

impl AppState {
    /// Monta o gráfico de dependências: repositórios em memória semeados
    /// com os dados de demonstração, injetados nos serviços. Trocar a
    /// implementação do repositório é a única mudança necessária para
    /// acoplar um banco real.
    pub fn new() -> Self {
        let state = Self {
            clinicas: CadastroService::new(Arc::new(RepositorioMemoria::novo(seed::clinicas()))),
            unidades: CadastroService::new(Arc::new(RepositorioMemoria::novo(seed::unidades()))),
            convenios: CadastroService::new(Arc::new(RepositorioMemoria::novo(seed::convenios()))),
            tabelas_preco: CadastroService::new(Arc::new(RepositorioMemoria::novo(
                seed::tabelas_preco(),
            ))),
            especialidades: CadastroService::new(Arc::new(RepositorioMemoria::novo(
                seed::especialidades(),
            ))),
            atendimento: AtendimentoService::new(
                Arc::new(RepositorioMemoria::novo(seed::pacientes())),
                Arc::new(RepositorioMemoria::novo(seed::requisicoes())),
            ),
            financeiro: FinanceiroService::new(
                Arc::new(RepositorioMemoria::novo(seed::transacoes_cartao())),
                Arc::new(RepositorioMemoria::novo(seed::depositos())),
                Arc::new(RepositorioMemoria::novo(seed::transferencias())),
            ),
            laboratorio: LaboratorioService::new(
                Arc::new(RepositorioMemoria::novo(seed::amostras())),
                Arc::new(RepositorioMemoria::novo(seed::logs_interfaceamento())),
            ),
            relatorios: RelatorioService::new(),
        };
        tracing::info!("✅ Repositórios em memória semeados com os dados de demonstração");
        state
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Endereço de escuta, com padrão local quando a variável não existe.
pub fn endereco_escuta() -> String {
    env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}
