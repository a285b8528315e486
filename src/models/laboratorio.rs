// src/models/laboratorio.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::common::listagem::{Registro, Situacao};

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SituacaoAmostra {
    Coletada,
    EmTransito,
    Recebida,
    EmAnalise,
    Liberada,
}

impl Situacao for SituacaoAmostra {
    fn rotulo(&self) -> &'static str {
        match self {
            SituacaoAmostra::Coletada => "Coletada",
            SituacaoAmostra::EmTransito => "Em trânsito",
            SituacaoAmostra::Recebida => "Recebida",
            SituacaoAmostra::EmAnalise => "Em análise",
            SituacaoAmostra::Liberada => "Liberada",
        }
    }

    fn cor_badge(&self) -> &'static str {
        match self {
            SituacaoAmostra::Coletada => "blue",
            SituacaoAmostra::EmTransito => "yellow",
            SituacaoAmostra::Recebida => "teal",
            SituacaoAmostra::EmAnalise => "indigo",
            SituacaoAmostra::Liberada => "green",
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
pub enum DirecaoMensagem {
    Enviado,
    Recebido,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SituacaoInterfaceamento {
    Processado,
    Erro,
    Aguardando,
}

impl Situacao for SituacaoInterfaceamento {
    fn rotulo(&self) -> &'static str {
        match self {
            SituacaoInterfaceamento::Processado => "Processado",
            SituacaoInterfaceamento::Erro => "Erro",
            SituacaoInterfaceamento::Aguardando => "Aguardando",
        }
    }

    fn cor_badge(&self) -> &'static str {
        match self {
            SituacaoInterfaceamento::Processado => "green",
            SituacaoInterfaceamento::Erro => "red",
            SituacaoInterfaceamento::Aguardando => "yellow",
        }
    }

    fn protegida(&self) -> bool {
        true
    }

    fn terminal(&self) -> bool {
        true
    }
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Amostra {
    pub id: Uuid,
    #[schema(example = "AMO-2024-0101")]
    pub codigo_barras: String,
    #[schema(example = "Soro")]
    pub material: String,
    #[schema(example = "Maria Santos Silva")]
    pub paciente: String,
    #[schema(example = "Bioquímica")]
    pub setor: String,
    pub situacao: SituacaoAmostra,
    /// Responsável informado no recebimento do material.
    pub recebida_por: Option<String>,
    pub recebida_em: Option<DateTime<Utc>>,
}

impl Registro for Amostra {
    fn id(&self) -> Uuid {
        self.id
    }
    fn campos_busca(&self) -> Vec<String> {
        vec![self.codigo_barras.clone(), self.paciente.clone(), self.material.clone()]
    }
}

/// Entrada do log de interfaceamento com equipamentos. A mensagem bruta
/// é texto opaco no formato do instrumento (segmentos separados por pipe
/// com prefixo de tipo de registro); nunca é interpretada aqui.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogInterfaceamento {
    pub id: Uuid,
    #[schema(example = "COBAS C311")]
    pub equipamento: String,
    pub direcao: DirecaoMensagem,
    pub horario: DateTime<Utc>,
    pub situacao: SituacaoInterfaceamento,
    pub mensagem_bruta: String,
}

impl Registro for LogInterfaceamento {
    fn id(&self) -> Uuid {
        self.id
    }
    fn campos_busca(&self) -> Vec<String> {
        vec![self.equipamento.clone()]
    }
}

// --- Queries ---

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct FiltroAmostra {
    pub busca: Option<String>,
    pub situacao: Option<SituacaoAmostra>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct FiltroInterfaceamento {
    pub busca: Option<String>,
    pub situacao: Option<SituacaoInterfaceamento>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabela_de_rotulo_e_badge_da_situacao_de_amostra() {
        let tabela = [
            (SituacaoAmostra::Coletada, "Coletada", "blue"),
            (SituacaoAmostra::EmTransito, "Em trânsito", "yellow"),
            (SituacaoAmostra::Recebida, "Recebida", "teal"),
            (SituacaoAmostra::EmAnalise, "Em análise", "indigo"),
            (SituacaoAmostra::Liberada, "Liberada", "green"),
        ];
        for (situacao, rotulo, cor) in tabela {
            assert_eq!(situacao.rotulo(), rotulo);
            assert_eq!(situacao.cor_badge(), cor);
        }
    }

    #[test]
    fn tabela_de_rotulo_e_badge_do_interfaceamento() {
        let tabela = [
            (SituacaoInterfaceamento::Processado, "Processado", "green"),
            (SituacaoInterfaceamento::Erro, "Erro", "red"),
            (SituacaoInterfaceamento::Aguardando, "Aguardando", "yellow"),
        ];
        for (situacao, rotulo, cor) in tabela {
            assert_eq!(situacao.rotulo(), rotulo);
            assert_eq!(situacao.cor_badge(), cor);
        }
    }
}
