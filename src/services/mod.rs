pub mod atendimento_service;
pub mod cadastro_service;
pub mod financeiro_service;
pub mod laboratorio_service;
pub mod relatorio_service;

pub use atendimento_service::AtendimentoService;
pub use cadastro_service::CadastroService;
pub use financeiro_service::FinanceiroService;
pub use laboratorio_service::LaboratorioService;
pub use relatorio_service::RelatorioService;
