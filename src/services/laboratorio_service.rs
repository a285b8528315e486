// src/services/laboratorio_service.rs

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    common::listagem::{aceita_texto, aceita_valor, AcoesLinha, Detalhe, Modo, Toast},
    db::Repositorio,
    models::laboratorio::{
        Amostra, LogInterfaceamento, SituacaoAmostra, SituacaoInterfaceamento,
    },
};

#[derive(Clone)]
pub struct LaboratorioService {
    amostras: Arc<dyn Repositorio<Amostra>>,
    logs: Arc<dyn Repositorio<LogInterfaceamento>>,
}

impl LaboratorioService {
    pub fn new(
        amostras: Arc<dyn Repositorio<Amostra>>,
        logs: Arc<dyn Repositorio<LogInterfaceamento>>,
    ) -> Self {
        Self { amostras, logs }
    }

    pub async fn listar_amostras(
        &self,
        busca: Option<&str>,
        situacao: Option<SituacaoAmostra>,
    ) -> Vec<Amostra> {
        self.amostras
            .listar()
            .await
            .into_iter()
            .filter(|a| aceita_texto(a, busca))
            .filter(|a| aceita_valor(&a.situacao, situacao.as_ref()))
            .collect()
    }

    pub async fn detalhar_amostra(&self, id: Uuid, modo: Modo) -> Result<Detalhe<Amostra>, AppError> {
        let registro = self
            .amostras
            .buscar(id)
            .await
            .ok_or(AppError::RegistroNaoEncontrado)?;
        let acoes = AcoesLinha::para(registro.situacao);
        Ok(Detalhe { registro, modo, acoes })
    }

    /// Recebimento de material: o nome do responsável é obrigatório e a
    /// confirmação fica retida enquanto ele estiver em branco.
    pub async fn receber_amostra(
        &self,
        id: Uuid,
        responsavel: &str,
    ) -> Result<(Amostra, Toast), AppError> {
        if responsavel.trim().is_empty() {
            return Err(AppError::CamposObrigatorios);
        }

        let mut amostra = self
            .amostras
            .buscar(id)
            .await
            .ok_or(AppError::RegistroNaoEncontrado)?;

        amostra.situacao = SituacaoAmostra::Recebida;
        amostra.recebida_por = Some(responsavel.trim().to_string());
        amostra.recebida_em = Some(Utc::now());
        let amostra = self.amostras.salvar(amostra).await;

        let toast = Toast::sucesso(format!(
            "Material {} recebido por {}",
            amostra.codigo_barras,
            responsavel.trim()
        ));
        Ok((amostra, toast))
    }

    pub async fn listar_interfaceamento(
        &self,
        busca: Option<&str>,
        situacao: Option<SituacaoInterfaceamento>,
    ) -> Vec<LogInterfaceamento> {
        self.logs
            .listar()
            .await
            .into_iter()
            .filter(|l| aceita_texto(l, busca))
            .filter(|l| aceita_valor(&l.situacao, situacao.as_ref()))
            .collect()
    }

    /// Detalhe do log: devolve a mensagem bruta tal e qual, para o botão
    /// de copiar da tela. O conteúdo nunca é interpretado.
    pub async fn detalhar_log(&self, id: Uuid) -> Result<LogInterfaceamento, AppError> {
        self.logs
            .buscar(id)
            .await
            .ok_or(AppError::RegistroNaoEncontrado)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{seed, RepositorioMemoria};

    fn servico() -> LaboratorioService {
        LaboratorioService::new(
            Arc::new(RepositorioMemoria::novo(seed::amostras())),
            Arc::new(RepositorioMemoria::novo(seed::logs_interfaceamento())),
        )
    }

    #[tokio::test]
    async fn recebimento_exige_responsavel_preenchido() {
        let servico = servico();
        let id = servico.listar_amostras(None, None).await[0].id;

        let erro = servico.receber_amostra(id, "   ").await;
        assert!(matches!(erro, Err(AppError::CamposObrigatorios)));

        let (amostra, toast) = servico.receber_amostra(id, "Carlos Nunes").await.unwrap();
        assert_eq!(amostra.situacao, SituacaoAmostra::Recebida);
        assert_eq!(amostra.recebida_por.as_deref(), Some("Carlos Nunes"));
        assert!(amostra.recebida_em.is_some());
        assert!(toast.mensagem.contains("Carlos Nunes"));
    }

    #[tokio::test]
    async fn mensagem_do_interfaceamento_volta_sem_alteracao() {
        let servico = servico();
        let logs = servico.listar_interfaceamento(Some("cobas"), None).await;
        assert_eq!(logs.len(), 1);

        let detalhe = servico.detalhar_log(logs[0].id).await.unwrap();
        // Texto opaco: prefixos de tipo de registro e pipes preservados.
        assert!(detalhe.mensagem_bruta.starts_with("H|\\^&|||COBAS-C311^Roche"));
        assert!(detalhe.mensagem_bruta.lines().count() >= 5);
        assert!(detalhe.mensagem_bruta.contains("R|1|^^^GLI|98|mg/dL"));
    }

    #[tokio::test]
    async fn filtro_por_situacao_de_amostra() {
        let servico = servico();
        let liberadas = servico
            .listar_amostras(None, Some(SituacaoAmostra::Liberada))
            .await;
        assert_eq!(liberadas.len(), 1);
        assert_eq!(liberadas[0].codigo_barras, "AMO-2024-0104");
    }
}
