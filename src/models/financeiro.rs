// src/models/financeiro.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::common::listagem::{Registro, Situacao};

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TipoOperacaoCartao {
    Debito,
    CreditoAVista,
    CreditoParcelado,
    Pix,
}

impl TipoOperacaoCartao {
    /// Taxa padrão da operadora, preenchida automaticamente quando o
    /// usuário escolhe o tipo de operação no formulário.
    pub fn taxa_padrao(self) -> Decimal {
        match self {
            TipoOperacaoCartao::Debito => Decimal::new(199, 2),           // 1.99%
            TipoOperacaoCartao::CreditoAVista => Decimal::new(349, 2),    // 3.49%
            TipoOperacaoCartao::CreditoParcelado => Decimal::new(459, 2), // 4.59%
            TipoOperacaoCartao::Pix => Decimal::new(99, 2),               // 0.99%
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SituacaoTransacao {
    Prevista,
    Conciliada,
    Divergente,
    Cancelada,
}

impl Situacao for SituacaoTransacao {
    fn rotulo(&self) -> &'static str {
        match self {
            SituacaoTransacao::Prevista => "Prevista",
            SituacaoTransacao::Conciliada => "Conciliada",
            SituacaoTransacao::Divergente => "Divergente",
            SituacaoTransacao::Cancelada => "Cancelada",
        }
    }

    fn cor_badge(&self) -> &'static str {
        match self {
            SituacaoTransacao::Prevista => "blue",
            SituacaoTransacao::Conciliada => "green",
            SituacaoTransacao::Divergente => "orange",
            SituacaoTransacao::Cancelada => "red",
        }
    }

    fn protegida(&self) -> bool {
        true
    }

    fn terminal(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SituacaoDeposito {
    Pendente,
    Confirmado,
    Estornado,
}

impl Situacao for SituacaoDeposito {
    fn rotulo(&self) -> &'static str {
        match self {
            SituacaoDeposito::Pendente => "Pendente",
            SituacaoDeposito::Confirmado => "Confirmado",
            SituacaoDeposito::Estornado => "Estornado",
        }
    }

    fn cor_badge(&self) -> &'static str {
        match self {
            SituacaoDeposito::Pendente => "yellow",
            SituacaoDeposito::Confirmado => "green",
            SituacaoDeposito::Estornado => "red",
        }
    }

    fn protegida(&self) -> bool {
        true
    }

    fn terminal(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SituacaoTransferencia {
    Agendada,
    Efetivada,
    Cancelada,
}

impl Situacao for SituacaoTransferencia {
    fn rotulo(&self) -> &'static str {
        match self {
            SituacaoTransferencia::Agendada => "Agendada",
            SituacaoTransferencia::Efetivada => "Efetivada",
            SituacaoTransferencia::Cancelada => "Cancelada",
        }
    }

    fn cor_badge(&self) -> &'static str {
        match self {
            SituacaoTransferencia::Agendada => "blue",
            SituacaoTransferencia::Efetivada => "green",
            SituacaoTransferencia::Cancelada => "red",
        }
    }

    fn protegida(&self) -> bool {
        true
    }

    fn terminal(&self) -> bool {
        true
    }
}

// --- Derivação pura ---

/// Valor líquido de uma transação de cartão: `bruto - bruto * taxa / 100`,
/// arredondado para duas casas decimais. Recalculada a cada mudança de
/// valor bruto ou taxa no formulário.
pub fn valor_liquido(bruto: Decimal, taxa_percentual: Decimal) -> Decimal {
    (bruto - bruto * taxa_percentual / Decimal::ONE_HUNDRED).round_dp(2)
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransacaoCartao {
    pub id: Uuid,
    #[schema(example = "TXC-2024-0101")]
    pub codigo: String,
    #[schema(example = "Cielo")]
    pub operadora: String,
    pub tipo_operacao: TipoOperacaoCartao,
    #[schema(example = "350.00")]
    pub valor_bruto: Decimal,
    #[schema(example = "3.49")]
    pub taxa_percentual: Decimal,
    #[schema(example = "337.78")]
    pub valor_liquido: Decimal,
    #[schema(value_type = String, format = Date, example = "2024-01-15")]
    pub data: NaiveDate,
    pub situacao: SituacaoTransacao,
}

impl Registro for TransacaoCartao {
    fn id(&self) -> Uuid {
        self.id
    }
    fn campos_busca(&self) -> Vec<String> {
        vec![self.codigo.clone(), self.operadora.clone()]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Deposito {
    pub id: Uuid,
    #[schema(example = "DEP-2024-0034")]
    pub codigo: String,
    #[schema(example = "Banco do Brasil")]
    pub banco: String,
    #[schema(example = "12.345-6")]
    pub conta: String,
    #[schema(example = "1500.00")]
    pub valor: Decimal,
    #[schema(value_type = String, format = Date, example = "2024-01-16")]
    pub data: NaiveDate,
    pub situacao: SituacaoDeposito,
}

impl Registro for Deposito {
    fn id(&self) -> Uuid {
        self.id
    }
    fn campos_busca(&self) -> Vec<String> {
        vec![self.codigo.clone(), self.banco.clone(), self.conta.clone()]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transferencia {
    pub id: Uuid,
    #[schema(example = "TRF-2024-0012")]
    pub codigo: String,
    #[schema(example = "Conta Principal")]
    pub conta_origem: String,
    #[schema(example = "Conta Filial Centro")]
    pub conta_destino: String,
    #[schema(example = "820.00")]
    pub valor: Decimal,
    #[schema(value_type = String, format = Date, example = "2024-01-18")]
    pub data: NaiveDate,
    pub situacao: SituacaoTransferencia,
}

impl Registro for Transferencia {
    fn id(&self) -> Uuid {
        self.id
    }
    fn campos_busca(&self) -> Vec<String> {
        vec![self.codigo.clone(), self.conta_origem.clone(), self.conta_destino.clone()]
    }
}

// --- Queries ---

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct FiltroTransacao {
    pub busca: Option<String>,
    pub situacao: Option<SituacaoTransacao>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct FiltroDeposito {
    pub busca: Option<String>,
    pub situacao: Option<SituacaoDeposito>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct FiltroTransferencia {
    pub busca: Option<String>,
    pub situacao: Option<SituacaoTransferencia>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valor_liquido_desconta_a_taxa_sobre_o_bruto() {
        // 350.00 com 3.49% -> 350 - 12.215 = 337.785 -> 337.78 (2 casas)
        let liquido = valor_liquido(Decimal::new(35000, 2), Decimal::new(349, 2));
        assert_eq!(liquido, Decimal::new(33778, 2));

        // 100.00 com 1.99% -> 98.01
        let liquido = valor_liquido(Decimal::new(10000, 2), Decimal::new(199, 2));
        assert_eq!(liquido, Decimal::new(9801, 2));
    }

    #[test]
    fn taxa_zero_mantem_o_bruto() {
        let bruto = Decimal::new(12345, 2);
        assert_eq!(valor_liquido(bruto, Decimal::ZERO), bruto);
    }

    #[test]
    fn tabelas_de_rotulo_e_badge_das_situacoes_financeiras() {
        let transacoes = [
            (SituacaoTransacao::Prevista, "Prevista", "blue"),
            (SituacaoTransacao::Conciliada, "Conciliada", "green"),
            (SituacaoTransacao::Divergente, "Divergente", "orange"),
            (SituacaoTransacao::Cancelada, "Cancelada", "red"),
        ];
        for (situacao, rotulo, cor) in transacoes {
            assert_eq!(situacao.rotulo(), rotulo);
            assert_eq!(situacao.cor_badge(), cor);
        }

        let depositos = [
            (SituacaoDeposito::Pendente, "Pendente", "yellow"),
            (SituacaoDeposito::Confirmado, "Confirmado", "green"),
            (SituacaoDeposito::Estornado, "Estornado", "red"),
        ];
        for (situacao, rotulo, cor) in depositos {
            assert_eq!(situacao.rotulo(), rotulo);
            assert_eq!(situacao.cor_badge(), cor);
        }

        let transferencias = [
            (SituacaoTransferencia::Agendada, "Agendada", "blue"),
            (SituacaoTransferencia::Efetivada, "Efetivada", "green"),
            (SituacaoTransferencia::Cancelada, "Cancelada", "red"),
        ];
        for (situacao, rotulo, cor) in transferencias {
            assert_eq!(situacao.rotulo(), rotulo);
            assert_eq!(situacao.cor_badge(), cor);
        }
    }

    #[test]
    fn cada_tipo_de_operacao_tem_taxa_padrao_fixa() {
        assert_eq!(TipoOperacaoCartao::Debito.taxa_padrao(), Decimal::new(199, 2));
        assert_eq!(TipoOperacaoCartao::CreditoAVista.taxa_padrao(), Decimal::new(349, 2));
        assert_eq!(TipoOperacaoCartao::CreditoParcelado.taxa_padrao(), Decimal::new(459, 2));
        assert_eq!(TipoOperacaoCartao::Pix.taxa_padrao(), Decimal::new(99, 2));
    }
}
