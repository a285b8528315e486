// src/models/atendimento.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::common::listagem::{Registro, Situacao};
use crate::models::cadastro::SituacaoCadastro;

// --- Enums ---

/// Situação de uma requisição de atendimento. São estados de ciclo de
/// vida, não alternáveis e protegidos contra exclusão pela tela.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SituacaoAtendimento {
    Aberto,
    Pendente,
    Cancelado,
    Executado,
    Liberado,
    Impresso,
    Entregue,
    Repeticao,
}

impl Situacao for SituacaoAtendimento {
    fn rotulo(&self) -> &'static str {
        match self {
            SituacaoAtendimento::Aberto => "Aberto",
            SituacaoAtendimento::Pendente => "Pendente",
            SituacaoAtendimento::Cancelado => "Cancelado",
            SituacaoAtendimento::Executado => "Executado",
            SituacaoAtendimento::Liberado => "Liberado",
            SituacaoAtendimento::Impresso => "Impresso",
            SituacaoAtendimento::Entregue => "Entregue",
            SituacaoAtendimento::Repeticao => "Repetição",
        }
    }

    fn cor_badge(&self) -> &'static str {
        match self {
            SituacaoAtendimento::Aberto => "blue",
            SituacaoAtendimento::Pendente => "yellow",
            SituacaoAtendimento::Cancelado => "red",
            SituacaoAtendimento::Executado => "indigo",
            SituacaoAtendimento::Liberado => "green",
            SituacaoAtendimento::Impresso => "gray",
            SituacaoAtendimento::Entregue => "teal",
            SituacaoAtendimento::Repeticao => "orange",
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
pub struct Paciente {
    pub id: Uuid,
    #[schema(example = "PAC001")]
    pub codigo: String,
    #[schema(example = "Maria Santos Silva")]
    pub nome: String,
    /// CPF com pontuação, comparado literalmente na busca.
    #[schema(example = "123.456.789-00")]
    pub documento: String,
    #[schema(value_type = String, format = Date, example = "1985-03-12")]
    pub nascimento: NaiveDate,
    /// Convênio do paciente, apenas como texto de exibição.
    #[schema(example = "Unimed")]
    pub convenio: String,
    pub situacao: SituacaoCadastro,
}

impl Registro for Paciente {
    fn id(&self) -> Uuid {
        self.id
    }
    fn campos_busca(&self) -> Vec<String> {
        vec![self.codigo.clone(), self.nome.clone(), self.documento.clone()]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Requisicao {
    pub id: Uuid,
    #[schema(example = "REQ-2024-002")]
    pub codigo: String,
    #[schema(example = "Maria Santos Silva")]
    pub paciente: String,
    #[schema(example = "Unimed")]
    pub convenio: String,
    #[schema(value_type = String, format = Date, example = "2024-01-15")]
    pub data: NaiveDate,
    #[schema(example = "185.50")]
    pub valor: Decimal,
    pub situacao: SituacaoAtendimento,
}

impl Registro for Requisicao {
    fn id(&self) -> Uuid {
        self.id
    }
    fn campos_busca(&self) -> Vec<String> {
        vec![self.codigo.clone(), self.paciente.clone()]
    }
}

// --- Queries ---

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct FiltroRequisicao {
    /// Busca livre sobre código e nome do paciente.
    pub busca: Option<String>,
    pub situacao: Option<SituacaoAtendimento>,
    /// Atalho da tela de atendimento: quando verdadeiro, lista apenas
    /// requisições pendentes, ignorando o critério de situação.
    pub somente_pendentes: Option<bool>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct BuscaPaciente {
    /// Termo de busca. O dropdown só consulta a partir de 2 caracteres.
    pub q: String,
}
