// src/docs.rs

use utoipa::OpenApi;

use crate::common::listagem::{AcoesLinha, ComToast, Detalhe, Modo, TipoToast, Toast};
use crate::handlers;
use crate::models::atendimento::{Paciente, Requisicao, SituacaoAtendimento};
use crate::models::cadastro::{
    Clinica, Convenio, Especialidade, SituacaoCadastro, TabelaPreco, Unidade,
};
use crate::models::financeiro::{
    Deposito, SituacaoDeposito, SituacaoTransacao, SituacaoTransferencia, TipoOperacaoCartao,
    TransacaoCartao, Transferencia,
};
use crate::models::laboratorio::{
    Amostra, DirecaoMensagem, LogInterfaceamento, SituacaoAmostra, SituacaoInterfaceamento,
};
use crate::models::relatorio::{ExecucaoRelatorio, LinhaLog, SituacaoExecucao, TipoLog};

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Cadastro: Clínicas ---
        handlers::cadastro::listar_clinicas,
        handlers::cadastro::novo_clinica,
        handlers::cadastro::criar_clinica,
        handlers::cadastro::detalhar_clinica,
        handlers::cadastro::atualizar_clinica,
        handlers::cadastro::alternar_situacao_clinica,
        handlers::cadastro::duplicar_clinica,
        handlers::cadastro::excluir_clinica,

        // --- Cadastro: Unidades ---
        handlers::cadastro::listar_unidades,
        handlers::cadastro::novo_unidade,
        handlers::cadastro::criar_unidade,
        handlers::cadastro::detalhar_unidade,
        handlers::cadastro::atualizar_unidade,
        handlers::cadastro::alternar_situacao_unidade,
        handlers::cadastro::duplicar_unidade,
        handlers::cadastro::excluir_unidade,

        // --- Cadastro: Convênios ---
        handlers::cadastro::listar_convenios,
        handlers::cadastro::novo_convenio,
        handlers::cadastro::criar_convenio,
        handlers::cadastro::detalhar_convenio,
        handlers::cadastro::atualizar_convenio,
        handlers::cadastro::alternar_situacao_convenio,
        handlers::cadastro::duplicar_convenio,
        handlers::cadastro::excluir_convenio,

        // --- Cadastro: Tabelas de preço ---
        handlers::cadastro::listar_tabelas_preco,
        handlers::cadastro::novo_tabela_preco,
        handlers::cadastro::criar_tabela_preco,
        handlers::cadastro::detalhar_tabela_preco,
        handlers::cadastro::atualizar_tabela_preco,
        handlers::cadastro::alternar_situacao_tabela_preco,
        handlers::cadastro::duplicar_tabela_preco,
        handlers::cadastro::excluir_tabela_preco,

        // --- Cadastro: Especialidades ---
        handlers::cadastro::listar_especialidades,
        handlers::cadastro::novo_especialidade,
        handlers::cadastro::criar_especialidade,
        handlers::cadastro::detalhar_especialidade,
        handlers::cadastro::atualizar_especialidade,
        handlers::cadastro::alternar_situacao_especialidade,
        handlers::cadastro::duplicar_especialidade,
        handlers::cadastro::excluir_especialidade,

        // --- Atendimento ---
        handlers::atendimento::listar_pacientes,
        handlers::atendimento::buscar_pacientes,
        handlers::atendimento::detalhar_paciente,
        handlers::atendimento::listar_requisicoes,
        handlers::atendimento::detalhar_requisicao,

        // --- Financeiro ---
        handlers::financeiro::calcular_cartao,
        handlers::financeiro::listar_transacoes,
        handlers::financeiro::criar_transacao,
        handlers::financeiro::detalhar_transacao,
        handlers::financeiro::listar_depositos,
        handlers::financeiro::detalhar_deposito,
        handlers::financeiro::listar_transferencias,
        handlers::financeiro::detalhar_transferencia,

        // --- Laboratório ---
        handlers::laboratorio::listar_amostras,
        handlers::laboratorio::detalhar_amostra,
        handlers::laboratorio::receber_amostra,
        handlers::laboratorio::listar_interfaceamento,
        handlers::laboratorio::detalhar_interfaceamento,

        // --- Relatórios ---
        handlers::relatorios::iniciar_relatorio,
        handlers::relatorios::consultar_relatorio,
        handlers::relatorios::cancelar_relatorio,
    ),
    components(
        schemas(
            // Camada de listagem
            AcoesLinha,
            Modo,
            Toast,
            TipoToast,

            // Cadastro
            SituacaoCadastro,
            Clinica,
            Unidade,
            Convenio,
            TabelaPreco,
            Especialidade,
            Detalhe<Clinica>,
            Detalhe<Unidade>,
            Detalhe<Convenio>,
            Detalhe<TabelaPreco>,
            Detalhe<Especialidade>,
            ComToast<Clinica>,
            ComToast<Unidade>,
            ComToast<Convenio>,
            ComToast<TabelaPreco>,
            ComToast<Especialidade>,

            // Atendimento
            SituacaoAtendimento,
            Paciente,
            Requisicao,
            Detalhe<Paciente>,
            Detalhe<Requisicao>,

            // Financeiro
            TipoOperacaoCartao,
            SituacaoTransacao,
            SituacaoDeposito,
            SituacaoTransferencia,
            TransacaoCartao,
            Deposito,
            Transferencia,
            Detalhe<TransacaoCartao>,
            Detalhe<Deposito>,
            Detalhe<Transferencia>,

            // Laboratório
            SituacaoAmostra,
            SituacaoInterfaceamento,
            DirecaoMensagem,
            Amostra,
            LogInterfaceamento,
            Detalhe<Amostra>,
            ComToast<Amostra>,

            // Relatórios
            TipoLog,
            SituacaoExecucao,
            LinhaLog,
            ExecucaoRelatorio,
        )
    ),
    tags(
        (name = "Cadastro", description = "Telas de cadastro: clínicas, unidades, convênios, tabelas de preço e especialidades"),
        (name = "Atendimento", description = "Intake de pacientes e requisições"),
        (name = "Financeiro", description = "Transações de cartão, depósitos e transferências"),
        (name = "Laboratório", description = "Rastreio de amostras e log de interfaceamento"),
        (name = "Relatórios", description = "Fluxo simulado de geração do relatório internet"),
    ),
    info(
        title = "LIS Backend",
        description = "Serviço de apoio às telas do sistema de laboratório/clínica. Todos os dados são de demonstração, mantidos em memória e reiniciados a cada subida do processo.",
    )
)]
pub struct ApiDoc;
