// src/models/cadastro.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::common::listagem::{Registro, Situacao};

// --- Enums ---

/// Situação binária das entidades de cadastro. Registros ativos são
/// protegidos contra exclusão; a alternância sempre é permitida.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SituacaoCadastro {
    Ativo,
    Inativo,
}

impl SituacaoCadastro {
    pub fn alternada(self) -> Self {
        match self {
            SituacaoCadastro::Ativo => SituacaoCadastro::Inativo,
            SituacaoCadastro::Inativo => SituacaoCadastro::Ativo,
        }
    }
}

impl Situacao for SituacaoCadastro {
    fn rotulo(&self) -> &'static str {
        match self {
            SituacaoCadastro::Ativo => "Ativo",
            SituacaoCadastro::Inativo => "Inativo",
        }
    }

    fn cor_badge(&self) -> &'static str {
        match self {
            SituacaoCadastro::Ativo => "green",
            SituacaoCadastro::Inativo => "gray",
        }
    }

    fn protegida(&self) -> bool {
        matches!(self, SituacaoCadastro::Ativo)
    }

    fn terminal(&self) -> bool {
        false
    }
}

/// Entidade de cadastro genérica: tem situação binária, nome editável e
/// identidade substituível (usada pela ação de duplicar).
pub trait Cadastravel: Registro {
    fn situacao(&self) -> SituacaoCadastro;
    fn situacao_mut(&mut self) -> &mut SituacaoCadastro;
    fn nome(&self) -> &str;
    fn nome_mut(&mut self) -> &mut String;
    fn id_mut(&mut self) -> &mut Uuid;
}

/// Query string comum das listagens de cadastro.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct FiltroCadastro {
    /// Busca livre sobre código e nome.
    pub busca: Option<String>,
    /// `None` equivale a "todos".
    pub situacao: Option<SituacaoCadastro>,
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Clinica {
    pub id: Uuid,
    #[schema(example = "CLI-001")]
    pub codigo: String,
    #[schema(example = "Clínica São Lucas")]
    pub nome: String,
    #[schema(example = "12.345.678/0001-90")]
    pub cnpj: String,
    #[schema(example = "São Paulo")]
    pub cidade: String,
    pub situacao: SituacaoCadastro,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Unidade {
    pub id: Uuid,
    #[schema(example = "UNI-001")]
    pub codigo: String,
    #[schema(example = "Unidade Centro")]
    pub nome: String,
    /// Empresa controladora, apenas como texto de exibição.
    #[schema(example = "Laboratório São Lucas Ltda")]
    pub empresa: String,
    pub cidade: String,
    pub situacao: SituacaoCadastro,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Convenio {
    pub id: Uuid,
    #[schema(example = "CON-001")]
    pub codigo: String,
    #[schema(example = "Unimed")]
    pub nome: String,
    #[schema(example = "331234")]
    pub registro_ans: String,
    /// Tabela de preço vinculada, apenas como texto de exibição.
    #[schema(example = "AMB 92")]
    pub tabela: String,
    pub situacao: SituacaoCadastro,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TabelaPreco {
    pub id: Uuid,
    #[schema(example = "TAB-001")]
    pub codigo: String,
    #[schema(example = "AMB 92")]
    pub nome: String,
    #[schema(example = "CH")]
    pub indice: String,
    #[schema(example = "2024")]
    pub vigencia: String,
    pub situacao: SituacaoCadastro,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Especialidade {
    pub id: Uuid,
    #[schema(example = "ESP-001")]
    pub codigo: String,
    #[schema(example = "Patologia Clínica")]
    pub nome: String,
    #[schema(example = "CRM")]
    pub conselho: String,
    pub situacao: SituacaoCadastro,
}

// As implementações abaixo são o que cada tela de cadastro declara
// sobre si mesma: quais campos entram na busca livre e onde vive a
// situação. O resto do comportamento vem do CadastroService genérico.

macro_rules! impl_cadastravel {
    ($tipo:ty, [$($campo:ident),+]) => {
        impl Registro for $tipo {
            fn id(&self) -> Uuid {
                self.id
            }
            fn campos_busca(&self) -> Vec<String> {
                vec![$(self.$campo.clone()),+]
            }
        }

        impl Cadastravel for $tipo {
            fn situacao(&self) -> SituacaoCadastro {
                self.situacao
            }
            fn situacao_mut(&mut self) -> &mut SituacaoCadastro {
                &mut self.situacao
            }
            fn nome(&self) -> &str {
                &self.nome
            }
            fn nome_mut(&mut self) -> &mut String {
                &mut self.nome
            }
            fn id_mut(&mut self) -> &mut Uuid {
                &mut self.id
            }
        }
    };
}

impl_cadastravel!(Clinica, [codigo, nome, cnpj]);
impl_cadastravel!(Unidade, [codigo, nome, empresa]);
impl_cadastravel!(Convenio, [codigo, nome]);
impl_cadastravel!(TabelaPreco, [codigo, nome]);
impl_cadastravel!(Especialidade, [codigo, nome]);

// Modelo em branco da tela "novo": campos vazios, situação Ativo e uma
// identidade já sorteada para o salvar subsequente.

macro_rules! impl_formulario_vazio {
    ($tipo:ty, [$($campo:ident),+]) => {
        impl Default for $tipo {
            fn default() -> Self {
                Self {
                    id: Uuid::new_v4(),
                    $($campo: String::new(),)+
                    situacao: SituacaoCadastro::Ativo,
                }
            }
        }
    };
}

impl_formulario_vazio!(Clinica, [codigo, nome, cnpj, cidade]);
impl_formulario_vazio!(Unidade, [codigo, nome, empresa, cidade]);
impl_formulario_vazio!(Convenio, [codigo, nome, registro_ans, tabela]);
impl_formulario_vazio!(TabelaPreco, [codigo, nome, indice, vigencia]);
impl_formulario_vazio!(Especialidade, [codigo, nome, conselho]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabela_de_rotulo_e_badge_da_situacao_de_cadastro() {
        assert_eq!(SituacaoCadastro::Ativo.rotulo(), "Ativo");
        assert_eq!(SituacaoCadastro::Ativo.cor_badge(), "green");
        assert_eq!(SituacaoCadastro::Inativo.rotulo(), "Inativo");
        assert_eq!(SituacaoCadastro::Inativo.cor_badge(), "gray");
    }

    #[test]
    fn apenas_o_ativo_e_protegido_e_nenhum_lado_e_terminal() {
        assert!(SituacaoCadastro::Ativo.protegida());
        assert!(!SituacaoCadastro::Inativo.protegida());
        assert!(!SituacaoCadastro::Ativo.terminal());
        assert!(!SituacaoCadastro::Inativo.terminal());

        // Alternar duas vezes é identidade.
        assert_eq!(SituacaoCadastro::Ativo.alternada().alternada(), SituacaoCadastro::Ativo);
    }
}
