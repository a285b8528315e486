// src/services/cadastro_service.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    common::error::AppError,
    common::listagem::{aceita_texto, aceita_valor, AcoesLinha, Detalhe, Modo, Situacao, Toast},
    db::Repositorio,
    models::cadastro::{Cadastravel, SituacaoCadastro},
};

/// Serviço genérico das telas de cadastro. Cada entidade (clínica,
/// unidade, convênio, tabela de preço, especialidade) é uma
/// parametrização deste mesmo contrato: listar com filtros, detalhar,
/// salvar, alternar situação, duplicar e excluir.
pub struct CadastroService<T: Cadastravel> {
    repo: Arc<dyn Repositorio<T>>,
}

impl<T: Cadastravel> Clone for CadastroService<T> {
    fn clone(&self) -> Self {
        Self { repo: Arc::clone(&self.repo) }
    }
}

impl<T: Cadastravel + utoipa::ToSchema> CadastroService<T> {
    pub fn new(repo: Arc<dyn Repositorio<T>>) -> Self {
        Self { repo }
    }

    /// Aplica os critérios ativos com AND, preservando a ordem original.
    pub async fn listar(
        &self,
        busca: Option<&str>,
        situacao: Option<SituacaoCadastro>,
    ) -> Vec<T> {
        self.repo
            .listar()
            .await
            .into_iter()
            .filter(|r| aceita_texto(r, busca))
            .filter(|r| aceita_valor(&r.situacao(), situacao.as_ref()))
            .collect()
    }

    /// Modelo em branco da tela "novo". Nada é gravado até o salvar.
    pub fn novo_formulario(&self) -> Detalhe<T>
    where
        T: Default,
    {
        let registro = T::default();
        let acoes = AcoesLinha::para(registro.situacao());
        Detalhe { registro, modo: Modo::Novo, acoes }
    }

    pub async fn detalhar(&self, id: Uuid, modo: Modo) -> Result<Detalhe<T>, AppError> {
        let registro = self
            .repo
            .buscar(id)
            .await
            .ok_or(AppError::RegistroNaoEncontrado)?;
        let acoes = AcoesLinha::para(registro.situacao());
        Ok(Detalhe { registro, modo, acoes })
    }

    pub async fn criar(&self, registro: T) -> T {
        self.repo.salvar(registro).await
    }

    pub async fn atualizar(&self, id: Uuid, registro: T) -> Result<T, AppError> {
        if self.repo.buscar(id).await.is_none() {
            return Err(AppError::RegistroNaoEncontrado);
        }
        Ok(self.repo.salvar(registro).await)
    }

    /// Alterna entre ativo e inativo e devolve o toast de confirmação.
    pub async fn alternar_situacao(&self, id: Uuid) -> Result<(T, Toast), AppError> {
        let mut registro = self
            .repo
            .buscar(id)
            .await
            .ok_or(AppError::RegistroNaoEncontrado)?;
        if registro.situacao().terminal() {
            return Err(AppError::SituacaoTerminal);
        }

        let nova = registro.situacao().alternada();
        *registro.situacao_mut() = nova;
        let registro = self.repo.salvar(registro).await;

        let toast = Toast::sucesso(format!(
            "Situação de \"{}\" alterada para {}",
            registro.nome(),
            nova.rotulo()
        ));
        Ok((registro, toast))
    }

    /// Clona o registro com nova identidade e nome decorado; a cópia é
    /// anexada ao final da sequência e vive até o processo reiniciar.
    pub async fn duplicar(&self, id: Uuid) -> Result<(T, Toast), AppError> {
        let original = self
            .repo
            .buscar(id)
            .await
            .ok_or(AppError::RegistroNaoEncontrado)?;

        let mut copia = original.clone();
        *copia.id_mut() = Uuid::new_v4();
        *copia.nome_mut() = format!("{} (cópia)", original.nome());
        let copia = self.repo.salvar(copia).await;

        let toast = Toast::sucesso(format!("Registro duplicado como \"{}\"", copia.nome()));
        Ok((copia, toast))
    }

    /// A exclusão só é permitida para registros inativos; a tela exibe o
    /// botão desabilitado no caso protegido e aqui devolvemos 409.
    pub async fn excluir(&self, id: Uuid) -> Result<Toast, AppError> {
        let registro = self
            .repo
            .buscar(id)
            .await
            .ok_or(AppError::RegistroNaoEncontrado)?;
        if registro.situacao().protegida() {
            return Err(AppError::RegistroProtegido);
        }

        self.repo.remover(id).await?;
        Ok(Toast::sucesso(format!("\"{}\" excluído", registro.nome())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{seed, RepositorioMemoria};
    use crate::models::cadastro::Unidade;

    fn servico() -> CadastroService<Unidade> {
        CadastroService::new(Arc::new(RepositorioMemoria::novo(seed::unidades())))
    }

    #[tokio::test]
    async fn sem_criterios_devolve_a_sequencia_original_na_ordem() {
        let servico = servico();
        let todas = servico.listar(None, None).await;
        let codigos: Vec<&str> = todas.iter().map(|u| u.codigo.as_str()).collect();
        assert_eq!(codigos, vec!["UNI-001", "UNI-002", "UNI-003", "UNI-004"]);
    }

    #[tokio::test]
    async fn busca_livre_casa_substring_sem_distincao_de_maiusculas() {
        let servico = servico();

        let resultado = servico.listar(Some("PAULISTA"), None).await;
        assert_eq!(resultado.len(), 1);
        assert_eq!(resultado[0].codigo, "UNI-002");

        // Também casa contra o campo empresa.
        let resultado = servico.listar(Some("vida plena"), None).await;
        assert_eq!(resultado.len(), 1);
        assert_eq!(resultado[0].codigo, "UNI-003");

        let resultado = servico.listar(Some("inexistente"), None).await;
        assert!(resultado.is_empty());
    }

    #[tokio::test]
    async fn criterios_combinam_com_and() {
        let servico = servico();
        let resultado = servico
            .listar(Some("unidade"), Some(SituacaoCadastro::Inativo))
            .await;
        assert_eq!(resultado.len(), 1);
        assert_eq!(resultado[0].codigo, "UNI-004");
    }

    #[tokio::test]
    async fn alternar_duas_vezes_volta_a_situacao_original() {
        let servico = servico();
        let id = servico.listar(None, None).await[0].id;

        let (depois, _) = servico.alternar_situacao(id).await.unwrap();
        assert_eq!(depois.situacao, SituacaoCadastro::Inativo);

        let (de_volta, _) = servico.alternar_situacao(id).await.unwrap();
        assert_eq!(de_volta.situacao, SituacaoCadastro::Ativo);
    }

    #[tokio::test]
    async fn excluir_registro_ativo_e_bloqueado() {
        let servico = servico();
        let ativo = servico.listar(None, Some(SituacaoCadastro::Ativo)).await[0].id;
        assert!(matches!(
            servico.excluir(ativo).await,
            Err(AppError::RegistroProtegido)
        ));

        let inativo = servico.listar(None, Some(SituacaoCadastro::Inativo)).await[0].id;
        assert!(servico.excluir(inativo).await.is_ok());
        assert_eq!(servico.listar(None, None).await.len(), 3);
    }

    #[tokio::test]
    async fn duplicar_anexa_copia_com_nome_decorado_no_final() {
        let servico = servico();
        let original = servico.listar(None, None).await[0].clone();

        let (copia, _) = servico.duplicar(original.id).await.unwrap();
        assert_ne!(copia.id, original.id);
        assert_eq!(copia.nome, "Unidade Centro (cópia)");

        let todas = servico.listar(None, None).await;
        assert_eq!(todas.len(), 5);
        assert_eq!(todas.last().map(|u| u.id), Some(copia.id));
    }

    #[tokio::test]
    async fn novo_formulario_vem_vazio_e_nao_toca_o_repositorio() {
        let servico = servico();
        let detalhe = servico.novo_formulario();
        assert_eq!(detalhe.modo, Modo::Novo);
        assert!(detalhe.registro.nome.is_empty());
        assert_eq!(detalhe.registro.situacao, SituacaoCadastro::Ativo);

        assert_eq!(servico.listar(None, None).await.len(), 4);
    }

    #[tokio::test]
    async fn acoes_da_linha_sao_funcao_pura_da_situacao() {
        let servico = servico();
        let ativo = servico.listar(None, Some(SituacaoCadastro::Ativo)).await[0].id;
        let detalhe = servico.detalhar(ativo, Modo::Visualizacao).await.unwrap();
        assert!(!detalhe.acoes.excluir);
        assert!(detalhe.acoes.alternar_situacao);

        let inativo = servico.listar(None, Some(SituacaoCadastro::Inativo)).await[0].id;
        let detalhe = servico.detalhar(inativo, Modo::Edicao).await.unwrap();
        assert!(detalhe.acoes.excluir);
        assert_eq!(detalhe.modo, Modo::Edicao);
    }
}
