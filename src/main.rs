//src/main.rs

use tokio::net::TcpListener;

use lis_backend::config::{self, AppState};

#[tokio::main]
async fn main() {
    // Carrega o .env quando existir; em produção as variáveis vêm do ambiente.
    dotenvy::dotenv().ok();

    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // Todo o estado vive em memória; nada aqui pode falhar além de OOM,
    // então a construção é síncrona e direta.
    let app_state = AppState::new();

    let app = lis_backend::app(app_state);

    // Inicia o servidor
    let addr = config::endereco_escuta();
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!(
        "🚀 Servidor escutando em {}",
        listener
            .local_addr()
            .expect("Falha ao ler o endereço local")
    );
    tracing::info!("📖 Documentação disponível em http://{}/docs", addr);
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
