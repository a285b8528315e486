// src/services/financeiro_service.rs

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    common::listagem::{aceita_texto, aceita_valor, AcoesLinha, Detalhe, Modo},
    db::Repositorio,
    models::financeiro::{
        valor_liquido, Deposito, SituacaoDeposito, SituacaoTransacao, SituacaoTransferencia,
        TipoOperacaoCartao, TransacaoCartao, Transferencia,
    },
};

/// Resultado da derivação reativa do formulário de cartão.
pub struct CalculoCartao {
    pub taxa_percentual: Decimal,
    pub valor_liquido: Decimal,
}

#[derive(Clone)]
pub struct FinanceiroService {
    cartoes: Arc<dyn Repositorio<TransacaoCartao>>,
    depositos: Arc<dyn Repositorio<Deposito>>,
    transferencias: Arc<dyn Repositorio<Transferencia>>,
}

impl FinanceiroService {
    pub fn new(
        cartoes: Arc<dyn Repositorio<TransacaoCartao>>,
        depositos: Arc<dyn Repositorio<Deposito>>,
        transferencias: Arc<dyn Repositorio<Transferencia>>,
    ) -> Self {
        Self { cartoes, depositos, transferencias }
    }

    // =========================================================================
    //  CARTÕES
    // =========================================================================

    /// Resolve a taxa (informada, ou padrão do tipo de operação) e deriva
    /// o valor líquido. Sem taxa e sem tipo não há o que calcular.
    pub fn calcular(
        &self,
        valor_bruto: Decimal,
        tipo_operacao: Option<TipoOperacaoCartao>,
        taxa_percentual: Option<Decimal>,
    ) -> Result<CalculoCartao, AppError> {
        let taxa = taxa_percentual
            .or_else(|| tipo_operacao.map(TipoOperacaoCartao::taxa_padrao))
            .ok_or(AppError::CamposObrigatorios)?;

        Ok(CalculoCartao { taxa_percentual: taxa, valor_liquido: valor_liquido(valor_bruto, taxa) })
    }

    /// Cria a transação derivando taxa e líquido no servidor, para que o
    /// registro gravado nunca divirja da fórmula.
    #[allow(clippy::too_many_arguments)]
    pub async fn criar_transacao(
        &self,
        codigo: &str,
        operadora: &str,
        tipo_operacao: TipoOperacaoCartao,
        valor_bruto: Decimal,
        taxa_percentual: Option<Decimal>,
        data: NaiveDate,
    ) -> Result<TransacaoCartao, AppError> {
        let calculo = self.calcular(valor_bruto, Some(tipo_operacao), taxa_percentual)?;

        let transacao = TransacaoCartao {
            id: Uuid::new_v4(),
            codigo: codigo.to_string(),
            operadora: operadora.to_string(),
            tipo_operacao,
            valor_bruto,
            taxa_percentual: calculo.taxa_percentual,
            valor_liquido: calculo.valor_liquido,
            data,
            situacao: SituacaoTransacao::Prevista,
        };
        Ok(self.cartoes.salvar(transacao).await)
    }

    pub async fn listar_transacoes(
        &self,
        busca: Option<&str>,
        situacao: Option<SituacaoTransacao>,
    ) -> Vec<TransacaoCartao> {
        self.cartoes
            .listar()
            .await
            .into_iter()
            .filter(|t| aceita_texto(t, busca))
            .filter(|t| aceita_valor(&t.situacao, situacao.as_ref()))
            .collect()
    }

    pub async fn detalhar_transacao(
        &self,
        id: Uuid,
        modo: Modo,
    ) -> Result<Detalhe<TransacaoCartao>, AppError> {
        let registro = self
            .cartoes
            .buscar(id)
            .await
            .ok_or(AppError::RegistroNaoEncontrado)?;
        let acoes = AcoesLinha::para(registro.situacao);
        Ok(Detalhe { registro, modo, acoes })
    }

    // =========================================================================
    //  DEPÓSITOS
    // =========================================================================

    pub async fn listar_depositos(
        &self,
        busca: Option<&str>,
        situacao: Option<SituacaoDeposito>,
    ) -> Vec<Deposito> {
        self.depositos
            .listar()
            .await
            .into_iter()
            .filter(|d| aceita_texto(d, busca))
            .filter(|d| aceita_valor(&d.situacao, situacao.as_ref()))
            .collect()
    }

    pub async fn detalhar_deposito(&self, id: Uuid, modo: Modo) -> Result<Detalhe<Deposito>, AppError> {
        let registro = self
            .depositos
            .buscar(id)
            .await
            .ok_or(AppError::RegistroNaoEncontrado)?;
        let acoes = AcoesLinha::para(registro.situacao);
        Ok(Detalhe { registro, modo, acoes })
    }

    // =========================================================================
    //  TRANSFERÊNCIAS
    // =========================================================================

    pub async fn listar_transferencias(
        &self,
        busca: Option<&str>,
        situacao: Option<SituacaoTransferencia>,
    ) -> Vec<Transferencia> {
        self.transferencias
            .listar()
            .await
            .into_iter()
            .filter(|t| aceita_texto(t, busca))
            .filter(|t| aceita_valor(&t.situacao, situacao.as_ref()))
            .collect()
    }

    pub async fn detalhar_transferencia(
        &self,
        id: Uuid,
        modo: Modo,
    ) -> Result<Detalhe<Transferencia>, AppError> {
        let registro = self
            .transferencias
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

    fn servico() -> FinanceiroService {
        FinanceiroService::new(
            Arc::new(RepositorioMemoria::novo(seed::transacoes_cartao())),
            Arc::new(RepositorioMemoria::novo(seed::depositos())),
            Arc::new(RepositorioMemoria::novo(seed::transferencias())),
        )
    }

    #[tokio::test]
    async fn escolher_o_tipo_de_operacao_preenche_a_taxa_padrao() {
        let servico = servico();
        let calculo = servico
            .calcular(Decimal::new(10000, 2), Some(TipoOperacaoCartao::Debito), None)
            .unwrap();
        assert_eq!(calculo.taxa_percentual, Decimal::new(199, 2));
        assert_eq!(calculo.valor_liquido, Decimal::new(9801, 2));
    }

    #[tokio::test]
    async fn taxa_informada_prevalece_sobre_a_padrao() {
        let servico = servico();
        let calculo = servico
            .calcular(
                Decimal::new(20000, 2),
                Some(TipoOperacaoCartao::CreditoAVista),
                Some(Decimal::new(500, 2)), // 5.00%
            )
            .unwrap();
        assert_eq!(calculo.taxa_percentual, Decimal::new(500, 2));
        assert_eq!(calculo.valor_liquido, Decimal::new(19000, 2));
    }

    #[tokio::test]
    async fn sem_taxa_e_sem_tipo_o_calculo_e_bloqueado() {
        let servico = servico();
        let erro = servico.calcular(Decimal::new(10000, 2), None, None);
        assert!(matches!(erro, Err(AppError::CamposObrigatorios)));
    }

    #[tokio::test]
    async fn criar_transacao_deriva_o_liquido_no_servidor() {
        let servico = servico();
        let transacao = servico
            .criar_transacao(
                "TXC-2024-0200",
                "Rede",
                TipoOperacaoCartao::CreditoAVista,
                Decimal::new(35000, 2),
                None,
                NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(transacao.taxa_percentual, Decimal::new(349, 2));
        // 350.00 - 3.49% = 337.785 -> 337.78 em duas casas
        assert_eq!(transacao.valor_liquido, Decimal::new(33778, 2));
        assert_eq!(transacao.situacao, SituacaoTransacao::Prevista);

        // Ficou no final da sequência em memória.
        let todas = servico.listar_transacoes(None, None).await;
        assert_eq!(todas.last().map(|t| t.codigo.clone()).unwrap(), "TXC-2024-0200");
    }

    #[tokio::test]
    async fn filtro_de_situacao_sobre_depositos() {
        let servico = servico();
        let confirmados = servico
            .listar_depositos(None, Some(SituacaoDeposito::Confirmado))
            .await;
        assert_eq!(confirmados.len(), 1);
        assert_eq!(confirmados[0].codigo, "DEP-2024-0034");
    }
}
