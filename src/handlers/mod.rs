pub mod atendimento;
pub mod cadastro;
pub mod financeiro;
pub mod laboratorio;
pub mod relatorios;
