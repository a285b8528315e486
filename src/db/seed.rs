// src/db/seed.rs
//
// Dados de demonstração carregados na subida do processo. São os mesmos
// conjuntos exibidos pelas telas: cinco pacientes, seis requisições
// (uma única pendente), os cadastros e os movimentos financeiros.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::atendimento::{Paciente, Requisicao, SituacaoAtendimento};
use crate::models::cadastro::{
    Clinica, Convenio, Especialidade, SituacaoCadastro, TabelaPreco, Unidade,
};
use crate::models::financeiro::{
    valor_liquido, Deposito, SituacaoDeposito, SituacaoTransacao, SituacaoTransferencia,
    TipoOperacaoCartao, TransacaoCartao, Transferencia,
};
use crate::models::laboratorio::{
    Amostra, DirecaoMensagem, LogInterfaceamento, SituacaoAmostra, SituacaoInterfaceamento,
};

fn data(ano: i32, mes: u32, dia: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(ano, mes, dia).expect("data de seed inválida")
}

fn reais(centavos: i64) -> Decimal {
    Decimal::new(centavos, 2)
}

pub fn clinicas() -> Vec<Clinica> {
    let nova = |codigo: &str, nome: &str, cnpj: &str, cidade: &str, situacao| Clinica {
        id: Uuid::new_v4(),
        codigo: codigo.into(),
        nome: nome.into(),
        cnpj: cnpj.into(),
        cidade: cidade.into(),
        situacao,
    };
    vec![
        nova("CLI-001", "Clínica São Lucas", "12.345.678/0001-90", "São Paulo", SituacaoCadastro::Ativo),
        nova("CLI-002", "Clínica Vida Plena", "23.456.789/0001-01", "Campinas", SituacaoCadastro::Ativo),
        nova("CLI-003", "Clínica Santa Helena", "34.567.890/0001-12", "Santos", SituacaoCadastro::Inativo),
    ]
}

pub fn unidades() -> Vec<Unidade> {
    let nova = |codigo: &str, nome: &str, empresa: &str, cidade: &str, situacao| Unidade {
        id: Uuid::new_v4(),
        codigo: codigo.into(),
        nome: nome.into(),
        empresa: empresa.into(),
        cidade: cidade.into(),
        situacao,
    };
    vec![
        nova("UNI-001", "Unidade Centro", "Laboratório São Lucas Ltda", "São Paulo", SituacaoCadastro::Ativo),
        nova("UNI-002", "Unidade Paulista", "Laboratório São Lucas Ltda", "São Paulo", SituacaoCadastro::Ativo),
        nova("UNI-003", "Unidade Campinas", "Vida Plena Diagnósticos SA", "Campinas", SituacaoCadastro::Ativo),
        nova("UNI-004", "Unidade Litoral", "Santa Helena Análises ME", "Santos", SituacaoCadastro::Inativo),
    ]
}

pub fn convenios() -> Vec<Convenio> {
    let novo = |codigo: &str, nome: &str, ans: &str, tabela: &str, situacao| Convenio {
        id: Uuid::new_v4(),
        codigo: codigo.into(),
        nome: nome.into(),
        registro_ans: ans.into(),
        tabela: tabela.into(),
        situacao,
    };
    vec![
        novo("CON-001", "Unimed", "331234", "AMB 92", SituacaoCadastro::Ativo),
        novo("CON-002", "Bradesco Saúde", "005711", "CBHPM 5ª", SituacaoCadastro::Ativo),
        novo("CON-003", "SulAmérica", "006246", "CBHPM 5ª", SituacaoCadastro::Ativo),
        novo("CON-004", "Golden Cross", "403911", "AMB 92", SituacaoCadastro::Inativo),
    ]
}

pub fn tabelas_preco() -> Vec<TabelaPreco> {
    let nova = |codigo: &str, nome: &str, indice: &str, vigencia: &str, situacao| TabelaPreco {
        id: Uuid::new_v4(),
        codigo: codigo.into(),
        nome: nome.into(),
        indice: indice.into(),
        vigencia: vigencia.into(),
        situacao,
    };
    vec![
        nova("TAB-001", "AMB 92", "CH", "2024", SituacaoCadastro::Ativo),
        nova("TAB-002", "CBHPM 5ª Edição", "CH", "2024", SituacaoCadastro::Ativo),
        nova("TAB-003", "Particular", "R$", "2023", SituacaoCadastro::Inativo),
    ]
}

pub fn especialidades() -> Vec<Especialidade> {
    let nova = |codigo: &str, nome: &str, conselho: &str, situacao| Especialidade {
        id: Uuid::new_v4(),
        codigo: codigo.into(),
        nome: nome.into(),
        conselho: conselho.into(),
        situacao,
    };
    vec![
        nova("ESP-001", "Patologia Clínica", "CRM", SituacaoCadastro::Ativo),
        nova("ESP-002", "Hematologia", "CRM", SituacaoCadastro::Ativo),
        nova("ESP-003", "Citologia", "CRBM", SituacaoCadastro::Ativo),
        nova("ESP-004", "Toxicologia", "CRF", SituacaoCadastro::Inativo),
    ]
}

pub fn pacientes() -> Vec<Paciente> {
    let novo = |codigo: &str, nome: &str, documento: &str, nascimento, convenio: &str| Paciente {
        id: Uuid::new_v4(),
        codigo: codigo.into(),
        nome: nome.into(),
        documento: documento.into(),
        nascimento,
        convenio: convenio.into(),
        situacao: SituacaoCadastro::Ativo,
    };
    vec![
        novo("PAC001", "Maria Santos Silva", "123.456.789-00", data(1985, 3, 12), "Unimed"),
        novo("PAC002", "João Pereira Costa", "234.567.890-11", data(1978, 11, 2), "Bradesco Saúde"),
        novo("PAC003", "Ana Clara Oliveira", "345.678.901-22", data(1992, 7, 25), "SulAmérica"),
        novo("PAC004", "Carlos Eduardo Lima", "456.789.012-33", data(1960, 1, 30), "Unimed"),
        novo("PAC005", "Fernanda Souza Rocha", "567.890.123-44", data(2001, 9, 8), "Particular"),
    ]
}

pub fn requisicoes() -> Vec<Requisicao> {
    let nova = |codigo: &str, paciente: &str, convenio: &str, dia: u32, valor, situacao| Requisicao {
        id: Uuid::new_v4(),
        codigo: codigo.into(),
        paciente: paciente.into(),
        convenio: convenio.into(),
        data: data(2024, 1, dia),
        valor,
        situacao,
    };
    vec![
        nova("REQ-2024-001", "Maria Santos Silva", "Unimed", 10, reais(18550), SituacaoAtendimento::Aberto),
        nova("REQ-2024-002", "João Pereira Costa", "Bradesco Saúde", 11, reais(9200), SituacaoAtendimento::Pendente),
        nova("REQ-2024-003", "Ana Clara Oliveira", "SulAmérica", 12, reais(31075), SituacaoAtendimento::Executado),
        nova("REQ-2024-004", "Carlos Eduardo Lima", "Unimed", 12, reais(12800), SituacaoAtendimento::Liberado),
        nova("REQ-2024-005", "Fernanda Souza Rocha", "Particular", 14, reais(6430), SituacaoAtendimento::Entregue),
        nova("REQ-2024-006", "Maria Santos Silva", "Unimed", 15, reais(22000), SituacaoAtendimento::Cancelado),
    ]
}

pub fn transacoes_cartao() -> Vec<TransacaoCartao> {
    let nova = |codigo: &str, operadora: &str, tipo: TipoOperacaoCartao, bruto, dia, situacao| {
        let taxa = tipo.taxa_padrao();
        TransacaoCartao {
            id: Uuid::new_v4(),
            codigo: codigo.into(),
            operadora: operadora.into(),
            tipo_operacao: tipo,
            valor_bruto: bruto,
            taxa_percentual: taxa,
            valor_liquido: valor_liquido(bruto, taxa),
            data: data(2024, 1, dia),
            situacao,
        }
    };
    vec![
        nova("TXC-2024-0101", "Cielo", TipoOperacaoCartao::CreditoAVista, reais(35000), 15, SituacaoTransacao::Prevista),
        nova("TXC-2024-0102", "Rede", TipoOperacaoCartao::Debito, reais(18550), 15, SituacaoTransacao::Conciliada),
        nova("TXC-2024-0103", "Stone", TipoOperacaoCartao::CreditoParcelado, reais(92000), 16, SituacaoTransacao::Divergente),
        nova("TXC-2024-0104", "Cielo", TipoOperacaoCartao::Pix, reais(6430), 17, SituacaoTransacao::Conciliada),
    ]
}

pub fn depositos() -> Vec<Deposito> {
    let novo = |codigo: &str, banco: &str, conta: &str, valor, dia, situacao| Deposito {
        id: Uuid::new_v4(),
        codigo: codigo.into(),
        banco: banco.into(),
        conta: conta.into(),
        valor,
        data: data(2024, 1, dia),
        situacao,
    };
    vec![
        novo("DEP-2024-0034", "Banco do Brasil", "12.345-6", reais(150000), 16, SituacaoDeposito::Confirmado),
        novo("DEP-2024-0035", "Itaú", "98.765-4", reais(84020), 17, SituacaoDeposito::Pendente),
        novo("DEP-2024-0036", "Banco do Brasil", "12.345-6", reais(23900), 18, SituacaoDeposito::Estornado),
    ]
}

pub fn transferencias() -> Vec<Transferencia> {
    let nova = |codigo: &str, origem: &str, destino: &str, valor, dia, situacao| Transferencia {
        id: Uuid::new_v4(),
        codigo: codigo.into(),
        conta_origem: origem.into(),
        conta_destino: destino.into(),
        valor,
        data: data(2024, 1, dia),
        situacao,
    };
    vec![
        nova("TRF-2024-0012", "Conta Principal", "Conta Filial Centro", reais(82000), 18, SituacaoTransferencia::Efetivada),
        nova("TRF-2024-0013", "Conta Principal", "Conta Filial Campinas", reais(45000), 19, SituacaoTransferencia::Agendada),
        nova("TRF-2024-0014", "Conta Filial Centro", "Conta Principal", reais(12075), 19, SituacaoTransferencia::Cancelada),
    ]
}

pub fn amostras() -> Vec<Amostra> {
    let nova = |codigo: &str, material: &str, paciente: &str, setor: &str, situacao| Amostra {
        id: Uuid::new_v4(),
        codigo_barras: codigo.into(),
        material: material.into(),
        paciente: paciente.into(),
        setor: setor.into(),
        situacao,
        recebida_por: None,
        recebida_em: None,
    };
    vec![
        nova("AMO-2024-0101", "Soro", "Maria Santos Silva", "Bioquímica", SituacaoAmostra::EmAnalise),
        nova("AMO-2024-0102", "Sangue total", "João Pereira Costa", "Hematologia", SituacaoAmostra::EmTransito),
        nova("AMO-2024-0103", "Urina", "Ana Clara Oliveira", "Uroanálise", SituacaoAmostra::Coletada),
        nova("AMO-2024-0104", "Soro", "Carlos Eduardo Lima", "Imunologia", SituacaoAmostra::Liberada),
    ]
}

pub fn logs_interfaceamento() -> Vec<LogInterfaceamento> {
    // Mensagem no formato do instrumento, exibida e copiada tal e qual.
    let mensagem_resultado = [
        "H|\\^&|||COBAS-C311^Roche|||||||P|1|20240115103000",
        "P|1||PAC001||Santos Silva^Maria||19850312|F",
        "O|1|AMO-2024-0101||^^^GLI^Glicose|R|20240115100000",
        "R|1|^^^GLI|98|mg/dL||N||F||tecnico1|20240115102500",
        "L|1|N",
    ]
    .join("\n");

    let mensagem_pedido = [
        "H|\\^&|||LIS^Central|||||||P|1|20240115094500",
        "P|1||PAC002||Pereira Costa^Joao||19781102|M",
        "O|1|AMO-2024-0102||^^^HMG^Hemograma|R|20240115094500",
        "L|1|N",
    ]
    .join("\n");

    let mensagem_erro = [
        "H|\\^&|||SYSMEX-XN1000^Sysmex|||||||P|1|20240115110200",
        "P|1||DESCONHECIDO||||",
        "L|1|E",
    ]
    .join("\n");

    vec![
        LogInterfaceamento {
            id: Uuid::new_v4(),
            equipamento: "COBAS C311".into(),
            direcao: DirecaoMensagem::Recebido,
            horario: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).single().expect("horário de seed inválido"),
            situacao: SituacaoInterfaceamento::Processado,
            mensagem_bruta: mensagem_resultado,
        },
        LogInterfaceamento {
            id: Uuid::new_v4(),
            equipamento: "SYSMEX XN-1000".into(),
            direcao: DirecaoMensagem::Enviado,
            horario: Utc.with_ymd_and_hms(2024, 1, 15, 9, 45, 0).single().expect("horário de seed inválido"),
            situacao: SituacaoInterfaceamento::Aguardando,
            mensagem_bruta: mensagem_pedido,
        },
        LogInterfaceamento {
            id: Uuid::new_v4(),
            equipamento: "SYSMEX XN-1000".into(),
            direcao: DirecaoMensagem::Recebido,
            horario: Utc.with_ymd_and_hms(2024, 1, 15, 11, 2, 0).single().expect("horário de seed inválido"),
            situacao: SituacaoInterfaceamento::Erro,
            mensagem_bruta: mensagem_erro,
        },
    ]
}
