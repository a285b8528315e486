// src/services/atendimento_service.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    common::error::AppError,
    common::listagem::{aceita_texto, aceita_valor, AcoesLinha, Detalhe, Modo},
    db::Repositorio,
    models::atendimento::{FiltroRequisicao, Paciente, Requisicao, SituacaoAtendimento},
    models::cadastro::SituacaoCadastro,
};

/// O dropdown de busca de pacientes só consulta a partir deste tamanho.
const TAMANHO_MINIMO_BUSCA: usize = 2;

#[derive(Clone)]
pub struct AtendimentoService {
    pacientes: Arc<dyn Repositorio<Paciente>>,
    requisicoes: Arc<dyn Repositorio<Requisicao>>,
}

impl AtendimentoService {
    pub fn new(
        pacientes: Arc<dyn Repositorio<Paciente>>,
        requisicoes: Arc<dyn Repositorio<Requisicao>>,
    ) -> Self {
        Self { pacientes, requisicoes }
    }

    pub async fn listar_pacientes(
        &self,
        busca: Option<&str>,
        situacao: Option<SituacaoCadastro>,
    ) -> Vec<Paciente> {
        self.pacientes
            .listar()
            .await
            .into_iter()
            .filter(|p| aceita_texto(p, busca))
            .filter(|p| aceita_valor(&p.situacao, situacao.as_ref()))
            .collect()
    }

    /// Busca do dropdown de intake: termos com menos de 2 caracteres não
    /// consultam nada e devolvem lista vazia.
    pub async fn buscar_pacientes(&self, termo: &str) -> Vec<Paciente> {
        if termo.trim().chars().count() < TAMANHO_MINIMO_BUSCA {
            return Vec::new();
        }
        self.listar_pacientes(Some(termo), None).await
    }

    pub async fn detalhar_paciente(&self, id: Uuid, modo: Modo) -> Result<Detalhe<Paciente>, AppError> {
        let registro = self
            .pacientes
            .buscar(id)
            .await
            .ok_or(AppError::RegistroNaoEncontrado)?;
        let acoes = AcoesLinha::para(registro.situacao);
        Ok(Detalhe { registro, modo, acoes })
    }

    pub async fn listar_requisicoes(&self, filtro: &FiltroRequisicao) -> Vec<Requisicao> {
        // O atalho "somente pendentes" da tela prevalece sobre o combo
        // de situação.
        let situacao = if filtro.somente_pendentes.unwrap_or(false) {
            Some(SituacaoAtendimento::Pendente)
        } else {
            filtro.situacao
        };

        self.requisicoes
            .listar()
            .await
            .into_iter()
            .filter(|r| aceita_texto(r, filtro.busca.as_deref()))
            .filter(|r| aceita_valor(&r.situacao, situacao.as_ref()))
            .collect()
    }

    pub async fn detalhar_requisicao(
        &self,
        id: Uuid,
        modo: Modo,
    ) -> Result<Detalhe<Requisicao>, AppError> {
        let registro = self
            .requisicoes
            .buscar(id)
            .await
            .ok_or(AppError::RegistroNaoEncontrado)?;
        let acoes = AcoesLinha::para(registro.situacao);
        Ok(Detalhe { registro, modo, acoes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{seed, RepositorioMemoria};

    fn servico() -> AtendimentoService {
        AtendimentoService::new(
            Arc::new(RepositorioMemoria::novo(seed::pacientes())),
            Arc::new(RepositorioMemoria::novo(seed::requisicoes())),
        )
    }

    #[tokio::test]
    async fn busca_maria_devolve_exatamente_pac001() {
        let servico = servico();
        let resultado = servico.buscar_pacientes("Maria").await;
        assert_eq!(resultado.len(), 1);
        assert_eq!(resultado[0].codigo, "PAC001");
        assert_eq!(resultado[0].nome, "Maria Santos Silva");
    }

    #[tokio::test]
    async fn termo_com_menos_de_dois_caracteres_nao_consulta() {
        let servico = servico();
        assert!(servico.buscar_pacientes("M").await.is_empty());
        assert!(servico.buscar_pacientes(" ").await.is_empty());
        assert!(servico.buscar_pacientes("").await.is_empty());
    }

    #[tokio::test]
    async fn busca_casa_tambem_contra_o_documento_com_pontuacao() {
        let servico = servico();
        let resultado = servico.buscar_pacientes("123.456").await;
        assert_eq!(resultado.len(), 1);
        assert_eq!(resultado[0].codigo, "PAC001");

        // Sem normalização de pontuação: o mesmo número sem pontos não casa.
        assert!(servico.buscar_pacientes("12345678900").await.is_empty());
    }

    #[tokio::test]
    async fn somente_pendentes_devolve_apenas_a_req_2024_002() {
        let servico = servico();
        let filtro = FiltroRequisicao {
            busca: None,
            situacao: None,
            somente_pendentes: Some(true),
        };
        let resultado = servico.listar_requisicoes(&filtro).await;
        assert_eq!(resultado.len(), 1);
        assert_eq!(resultado[0].codigo, "REQ-2024-002");
        assert_eq!(resultado[0].situacao, SituacaoAtendimento::Pendente);
    }

    #[tokio::test]
    async fn sem_criterios_a_lista_volta_completa_e_na_ordem() {
        let servico = servico();
        let filtro = FiltroRequisicao { busca: None, situacao: None, somente_pendentes: None };
        let codigos: Vec<String> = servico
            .listar_requisicoes(&filtro)
            .await
            .into_iter()
            .map(|r| r.codigo)
            .collect();
        assert_eq!(
            codigos,
            vec![
                "REQ-2024-001",
                "REQ-2024-002",
                "REQ-2024-003",
                "REQ-2024-004",
                "REQ-2024-005",
                "REQ-2024-006"
            ]
        );
    }

    #[tokio::test]
    async fn requisicoes_nao_permitem_alternar_nem_excluir() {
        let servico = servico();
        let filtro = FiltroRequisicao { busca: None, situacao: None, somente_pendentes: None };
        let id = servico.listar_requisicoes(&filtro).await[0].id;
        let detalhe = servico.detalhar_requisicao(id, Modo::Visualizacao).await.unwrap();
        assert!(!detalhe.acoes.excluir);
        assert!(!detalhe.acoes.alternar_situacao);
        assert!(detalhe.acoes.visualizar && detalhe.acoes.editar);
    }
}
