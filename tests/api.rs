// tests/api.rs
//
// Testes de integração sobre o router completo, com o estado recém-
// semeado a cada teste. As requisições passam pelo mesmo caminho do
// servidor real (extração, validação, serviço, serialização).

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use lis_backend::config::AppState;

fn app() -> Router {
    lis_backend::app(AppState::new())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let resposta = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    corpo(resposta).await
}

async fn enviar(app: &Router, metodo: &str, uri: &str, payload: Value) -> (StatusCode, Value) {
    let resposta = app
        .clone()
        .oneshot(
            Request::builder()
                .method(metodo)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    corpo(resposta).await
}

async fn corpo(resposta: axum::response::Response) -> (StatusCode, Value) {
    let status = resposta.status();
    let bytes = resposta.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, json)
}

// =============================================================================
//  SAÚDE E DOCUMENTAÇÃO
// =============================================================================

#[tokio::test]
async fn health_responde_ok() {
    let (status, corpo) = get(&app(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(corpo, Value::String("OK".into()));
}

#[tokio::test]
async fn openapi_json_esta_publicado() {
    let (status, corpo) = get(&app(), "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(corpo["paths"]["/api/cadastro/clinicas"].is_object());
}

// =============================================================================
//  CADASTRO
// =============================================================================

#[tokio::test]
async fn listagem_de_unidades_sem_filtro_devolve_a_semente_inteira() {
    let (status, corpo) = get(&app(), "/api/cadastro/unidades").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(corpo.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn filtros_de_busca_e_situacao_combinam_com_and() {
    let app = app();

    let (_, corpo) = get(&app, "/api/cadastro/unidades?busca=litoral").await;
    let registros = corpo.as_array().unwrap();
    assert_eq!(registros.len(), 1);
    assert_eq!(registros[0]["codigo"], "UNI-004");

    // O mesmo termo com a situação oposta não sobra nada.
    let (_, corpo) = get(&app, "/api/cadastro/unidades?busca=litoral&situacao=ativo").await;
    assert!(corpo.as_array().unwrap().is_empty());

    let (_, corpo) = get(&app, "/api/cadastro/unidades?situacao=inativo").await;
    assert_eq!(corpo.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn detalhe_abre_em_visualizacao_e_em_edicao() {
    let app = app();
    let (_, lista) = get(&app, "/api/cadastro/unidades").await;
    let id = lista[0]["id"].as_str().unwrap().to_string();

    let (status, detalhe) = get(&app, &format!("/api/cadastro/unidades/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detalhe["modo"], "visualizacao");

    let (_, detalhe) = get(&app, &format!("/api/cadastro/unidades/{id}?edit=true")).await;
    assert_eq!(detalhe["modo"], "edicao");

    // Registro ativo: excluir bloqueado, alternância liberada.
    assert_eq!(detalhe["acoes"]["excluir"], false);
    assert_eq!(detalhe["acoes"]["alternarSituacao"], true);
}

#[tokio::test]
async fn formulario_novo_vem_em_branco_no_modo_novo() {
    let (status, detalhe) = get(&app(), "/api/cadastro/clinicas/novo").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detalhe["modo"], "novo");
    assert_eq!(detalhe["registro"]["nome"], "");
    assert_eq!(detalhe["registro"]["situacao"], "ativo");
}

#[tokio::test]
async fn detalhe_de_id_desconhecido_devolve_404() {
    let (status, _) = get(
        &app(),
        "/api/cadastro/clinicas/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn criacao_valida_o_payload() {
    let app = app();

    let (status, criada) = enviar(
        &app,
        "POST",
        "/api/cadastro/clinicas",
        json!({
            "codigo": "CLI-009",
            "nome": "Clínica Boa Vista",
            "cnpj": "45.678.901/0001-23",
            "cidade": "Sorocaba"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(criada["situacao"], "ativo");

    // Nome com um caractere só reprova na validação.
    let (status, _) = enviar(
        &app,
        "POST",
        "/api/cadastro/clinicas",
        json!({"codigo": "CLI-010", "nome": "X", "cnpj": "1", "cidade": ""}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn alternar_situacao_devolve_o_registro_e_o_toast() {
    let app = app();
    let (_, lista) = get(&app, "/api/cadastro/unidades").await;
    let id = lista[0]["id"].as_str().unwrap().to_string();
    assert_eq!(lista[0]["situacao"], "ativo");

    let (status, corpo) = enviar(
        &app,
        "POST",
        &format!("/api/cadastro/unidades/{id}/alternar-situacao"),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(corpo["registro"]["situacao"], "inativo");
    assert_eq!(corpo["toast"]["tipo"], "sucesso");
}

#[tokio::test]
async fn exclusao_respeita_a_protecao_por_situacao() {
    let app = app();
    let (_, lista) = get(&app, "/api/cadastro/unidades").await;
    let ativa = lista[0]["id"].as_str().unwrap().to_string();
    let inativa = lista
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["situacao"] == "inativo")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let (status, _) = enviar(
        &app,
        "DELETE",
        &format!("/api/cadastro/unidades/{ativa}"),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, toast) = enviar(
        &app,
        "DELETE",
        &format!("/api/cadastro/unidades/{inativa}"),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toast["tipo"], "sucesso");

    let (_, lista) = get(&app, "/api/cadastro/unidades").await;
    assert_eq!(lista.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn duplicar_gera_copia_nova_no_fim_da_lista() {
    let app = app();
    let (_, lista) = get(&app, "/api/cadastro/unidades").await;
    let original = &lista[0];
    let id = original["id"].as_str().unwrap().to_string();

    let (status, corpo) = enviar(
        &app,
        "POST",
        &format!("/api/cadastro/unidades/{id}/duplicar"),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let copia = &corpo["registro"];
    assert_ne!(copia["id"], original["id"]);
    assert_eq!(
        copia["nome"],
        format!("{} (cópia)", original["nome"].as_str().unwrap())
    );

    let (_, lista) = get(&app, "/api/cadastro/unidades").await;
    let registros = lista.as_array().unwrap();
    assert_eq!(registros.len(), 5);
    assert_eq!(registros.last().unwrap()["id"], copia["id"]);
}

// =============================================================================
//  ATENDIMENTO
// =============================================================================

#[tokio::test]
async fn busca_de_pacientes_respeita_o_minimo_de_dois_caracteres() {
    let app = app();

    let (status, corpo) = get(&app, "/api/atendimento/pacientes/busca?q=m").await;
    assert_eq!(status, StatusCode::OK);
    assert!(corpo.as_array().unwrap().is_empty());

    let (_, corpo) = get(&app, "/api/atendimento/pacientes/busca?q=maria").await;
    let registros = corpo.as_array().unwrap();
    assert_eq!(registros.len(), 1);
    assert_eq!(registros[0]["codigo"], "PAC001");

    // Documento casa com a pontuação literal.
    let (_, corpo) = get(&app, "/api/atendimento/pacientes/busca?q=123.456").await;
    assert_eq!(corpo.as_array().unwrap().len(), 1);
    let (_, corpo) = get(&app, "/api/atendimento/pacientes/busca?q=12345678900").await;
    assert!(corpo.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn atalho_somente_pendentes_ignora_o_criterio_de_situacao() {
    let app = app();

    let (_, corpo) = get(&app, "/api/atendimento/requisicoes").await;
    assert_eq!(corpo.as_array().unwrap().len(), 6);

    let (_, corpo) = get(
        &app,
        "/api/atendimento/requisicoes?somente_pendentes=true&situacao=aberto",
    )
    .await;
    let registros = corpo.as_array().unwrap();
    assert_eq!(registros.len(), 1);
    assert_eq!(registros[0]["codigo"], "REQ-2024-002");
    assert_eq!(registros[0]["situacao"], "pendente");
}

#[tokio::test]
async fn requisicao_tem_todas_as_acoes_de_linha_bloqueadas_menos_leitura() {
    let app = app();
    let (_, lista) = get(&app, "/api/atendimento/requisicoes").await;
    let id = lista[0]["id"].as_str().unwrap().to_string();

    let (_, detalhe) = get(&app, &format!("/api/atendimento/requisicoes/{id}")).await;
    assert_eq!(detalhe["acoes"]["visualizar"], true);
    assert_eq!(detalhe["acoes"]["excluir"], false);
    assert_eq!(detalhe["acoes"]["alternarSituacao"], false);
}

// =============================================================================
//  FINANCEIRO
// =============================================================================

#[tokio::test]
async fn calculo_de_cartao_usa_taxa_padrao_do_tipo() {
    let (status, corpo) = enviar(
        &app(),
        "POST",
        "/api/financeiro/cartoes/calculo",
        json!({"valorBruto": 350.00, "tipoOperacao": "credito_a_vista"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(corpo["taxaPercentual"], json!(3.49));
    assert_eq!(corpo["valorLiquido"], json!(337.78));
}

#[tokio::test]
async fn taxa_informada_prevalece_sobre_o_tipo() {
    let (_, corpo) = enviar(
        &app(),
        "POST",
        "/api/financeiro/cartoes/calculo",
        json!({"valorBruto": 100.00, "tipoOperacao": "pix", "taxaPercentual": 10.0}),
    )
    .await;
    assert_eq!(corpo["taxaPercentual"], json!(10.0));
    assert_eq!(corpo["valorLiquido"], json!(90.0));
}

#[tokio::test]
async fn calculo_sem_tipo_e_sem_taxa_e_rejeitado() {
    let (status, _) = enviar(
        &app(),
        "POST",
        "/api/financeiro/cartoes/calculo",
        json!({"valorBruto": 350.00}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn transacao_criada_deriva_o_liquido_no_servidor() {
    let app = app();
    let (status, criada) = enviar(
        &app,
        "POST",
        "/api/financeiro/cartoes",
        json!({
            "codigo": "TXC-2024-0200",
            "operadora": "Cielo",
            "tipoOperacao": "debito",
            "valorBruto": 200.00,
            "data": "2024-02-01"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(criada["situacao"], "prevista");
    // 200.00 a 1.99% de taxa.
    assert_eq!(criada["valorLiquido"], json!(196.02));

    let (_, lista) = get(&app, "/api/financeiro/cartoes?busca=TXC-2024-0200").await;
    assert_eq!(lista.as_array().unwrap().len(), 1);
}

// =============================================================================
//  LABORATÓRIO
// =============================================================================

#[tokio::test]
async fn recebimento_exige_responsavel_preenchido() {
    let app = app();
    let (_, lista) = get(&app, "/api/laboratorio/amostras").await;
    let id = lista[0]["id"].as_str().unwrap().to_string();

    let (status, _) = enviar(
        &app,
        "POST",
        &format!("/api/laboratorio/amostras/{id}/recebimento"),
        json!({"responsavel": "   "}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, corpo) = enviar(
        &app,
        "POST",
        &format!("/api/laboratorio/amostras/{id}/recebimento"),
        json!({"responsavel": "Carlos Nunes"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(corpo["registro"]["situacao"], "recebida");
    assert_eq!(corpo["registro"]["recebidaPor"], "Carlos Nunes");
    assert!(corpo["registro"]["recebidaEm"].is_string());
    assert_eq!(corpo["toast"]["tipo"], "sucesso");
}

#[tokio::test]
async fn log_de_interfaceamento_devolve_a_mensagem_bruta() {
    let app = app();
    let (_, lista) = get(&app, "/api/laboratorio/interfaceamento").await;
    let entrada = &lista[0];
    let id = entrada["id"].as_str().unwrap().to_string();

    let (status, detalhe) = get(&app, &format!("/api/laboratorio/interfaceamento/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    // Sem interpretação: a mensagem volta idêntica à listada.
    assert_eq!(detalhe["mensagemBruta"], entrada["mensagemBruta"]);
    assert!(detalhe["mensagemBruta"].as_str().unwrap().starts_with("H|"));
}

// =============================================================================
//  RELATÓRIOS
// =============================================================================

#[tokio::test(start_paused = true)]
async fn fluxo_do_relatorio_internet_de_ponta_a_ponta() {
    let app = app();

    let (status, _) = enviar(
        &app,
        "POST",
        "/api/relatorios/internet",
        json!({"requisicoes": []}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, corpo) = enviar(
        &app,
        "POST",
        "/api/relatorios/internet",
        json!({"requisicoes": [uuid::Uuid::new_v4()], "notificarEmail": true}),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    let id = corpo["id"].as_str().unwrap().to_string();

    // O relógio pausado avança sozinho; a sequência inteira dura menos
    // de dez segundos.
    tokio::time::sleep(Duration::from_secs(10)).await;

    let (status, execucao) = get(&app, &format!("/api/relatorios/internet/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(execucao["situacao"], "concluida");
    assert_eq!(execucao["logs"].as_array().unwrap().len(), 8);
    assert_eq!(execucao["toast"]["mensagem"], "Relatório gerado com sucesso");

    // Terminou: não há mais o que cancelar.
    let (status, _) = enviar(
        &app,
        "POST",
        &format!("/api/relatorios/internet/{id}/cancelar"),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test(start_paused = true)]
async fn cancelamento_interrompe_a_execucao_antes_do_fim() {
    let app = app();

    let (_, corpo) = enviar(
        &app,
        "POST",
        "/api/relatorios/internet",
        json!({"requisicoes": [uuid::Uuid::new_v4()]}),
    )
    .await;
    let id = corpo["id"].as_str().unwrap().to_string();

    let (status, toast) = enviar(
        &app,
        "POST",
        &format!("/api/relatorios/internet/{id}/cancelar"),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toast["tipo"], "info");

    tokio::time::sleep(Duration::from_secs(10)).await;

    let (_, execucao) = get(&app, &format!("/api/relatorios/internet/{id}")).await;
    assert_eq!(execucao["situacao"], "cancelada");
    let logs = execucao["logs"].as_array().unwrap();
    assert!(logs.len() < 6);
    assert_eq!(logs.last().unwrap()["tipo"], "error");
}

#[tokio::test]
async fn consulta_de_execucao_desconhecida_devolve_404() {
    let (status, _) = get(
        &app(),
        "/api/relatorios/internet/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
