// src/services/relatorio_service.rs

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    common::listagem::Toast,
    models::relatorio::{ExecucaoRelatorio, LinhaLog, SituacaoExecucao, TipoLog},
};

/// Um passo nomeado do fluxo: pausa de duração fixa seguida da linha de
/// log correspondente. Unidade assíncrona que pode falhar quando um
/// backend real for acoplado; hoje todos os passos são roteirizados
/// para ter sucesso.
struct Passo {
    mensagem: &'static str,
    tipo: TipoLog,
    duracao: Duration,
}

impl Passo {
    async fn executar(&self) -> anyhow::Result<()> {
        tokio::time::sleep(self.duracao).await;
        Ok(())
    }
}

/// Sequência fixa do "gerar relatório internet": 6 linhas de log, ou 8
/// com a notificação por e-mail habilitada.
fn passos(notificar_email: bool) -> Vec<Passo> {
    let passo = |mensagem, tipo, ms| Passo { mensagem, tipo, duracao: Duration::from_millis(ms) };

    let mut sequencia = vec![
        passo("Iniciando geração do relatório para a internet", TipoLog::Info, 300),
        passo("Coletando resultados liberados das requisições selecionadas", TipoLog::Info, 900),
        passo("Resultados coletados", TipoLog::Success, 400),
        passo("Gerando arquivo do laudo", TipoLog::Info, 1100),
        passo("Laudo gerado", TipoLog::Success, 400),
    ];
    if notificar_email {
        sequencia.push(passo("Enviando notificação por e-mail ao paciente", TipoLog::Info, 800));
        sequencia.push(passo("Notificação enviada", TipoLog::Success, 300));
    }
    sequencia.push(passo("Publicação na internet concluída", TipoLog::Success, 600));
    sequencia
}

/// Executor do fluxo simulado. Cada execução roda em uma task própria;
/// o cancelamento é observado apenas entre passos, nunca no meio de um.
#[derive(Clone)]
pub struct RelatorioService {
    execucoes: Arc<RwLock<HashMap<Uuid, ExecucaoRelatorio>>>,
    cancelamentos: Arc<RwLock<HashMap<Uuid, Arc<AtomicBool>>>>,
    tarefas: Arc<Mutex<HashMap<Uuid, JoinHandle<()>>>>,
}

impl RelatorioService {
    pub fn new() -> Self {
        Self {
            execucoes: Arc::new(RwLock::new(HashMap::new())),
            cancelamentos: Arc::new(RwLock::new(HashMap::new())),
            tarefas: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Dispara uma execução. A tela bloqueia o botão sem requisições
    /// selecionadas; aqui o mesmo bloqueio vira erro de negócio.
    pub async fn iniciar(
        &self,
        requisicoes: Vec<Uuid>,
        notificar_email: bool,
    ) -> Result<Uuid, AppError> {
        if requisicoes.is_empty() {
            return Err(AppError::NenhumItemSelecionado);
        }

        let id = Uuid::new_v4();
        let execucao = ExecucaoRelatorio {
            id,
            requisicoes,
            notificar_email,
            situacao: SituacaoExecucao::EmAndamento,
            logs: Vec::new(),
            toast: None,
        };

        let cancelado = Arc::new(AtomicBool::new(false));
        self.execucoes.write().await.insert(id, execucao);
        self.cancelamentos.write().await.insert(id, Arc::clone(&cancelado));

        tracing::info!("Execução {} do relatório internet iniciada", id);
        let execucoes = Arc::clone(&self.execucoes);
        let cancelamentos = Arc::clone(&self.cancelamentos);
        let tarefas = Arc::clone(&self.tarefas);
        let tarefa = tokio::spawn(Self::executar(
            execucoes,
            cancelamentos,
            tarefas,
            cancelado,
            id,
            notificar_email,
        ));
        self.tarefas.lock().await.insert(id, tarefa);

        Ok(id)
    }

    async fn executar(
        execucoes: Arc<RwLock<HashMap<Uuid, ExecucaoRelatorio>>>,
        cancelamentos: Arc<RwLock<HashMap<Uuid, Arc<AtomicBool>>>>,
        tarefas: Arc<Mutex<HashMap<Uuid, JoinHandle<()>>>>,
        cancelado: Arc<AtomicBool>,
        id: Uuid,
        notificar_email: bool,
    ) {
        for passo in passos(notificar_email) {
            if cancelado.load(Ordering::SeqCst) {
                Self::registrar(
                    &execucoes,
                    id,
                    "Geração cancelada pelo usuário",
                    TipoLog::Error,
                    SituacaoExecucao::Cancelada,
                    None,
                )
                .await;
                tracing::info!("Execução {} cancelada", id);
                Self::limpar(&cancelamentos, &tarefas, id).await;
                return;
            }

            match passo.executar().await {
                Ok(()) => {
                    Self::registrar(&execucoes, id, passo.mensagem, passo.tipo, SituacaoExecucao::EmAndamento, None)
                        .await;
                    tracing::info!("Execução {}: {}", id, passo.mensagem);
                }
                Err(erro) => {
                    tracing::error!("Execução {} falhou no passo \"{}\": {}", id, passo.mensagem, erro);
                    Self::registrar(
                        &execucoes,
                        id,
                        "Falha ao gerar o relatório",
                        TipoLog::Error,
                        SituacaoExecucao::Falhou,
                        None,
                    )
                    .await;
                    Self::limpar(&cancelamentos, &tarefas, id).await;
                    return;
                }
            }
        }

        Self::marcar(
            &execucoes,
            id,
            SituacaoExecucao::Concluida,
            Some(Toast::sucesso("Relatório gerado com sucesso")),
        )
        .await;
        tracing::info!("Execução {} concluída", id);
        Self::limpar(&cancelamentos, &tarefas, id).await;
    }

    /// Execução terminada continua consultável, mas o flag de
    /// cancelamento e o handle da task não têm mais serventia.
    async fn limpar(
        cancelamentos: &RwLock<HashMap<Uuid, Arc<AtomicBool>>>,
        tarefas: &Mutex<HashMap<Uuid, JoinHandle<()>>>,
        id: Uuid,
    ) {
        cancelamentos.write().await.remove(&id);
        tarefas.lock().await.remove(&id);
    }

    async fn registrar(
        execucoes: &RwLock<HashMap<Uuid, ExecucaoRelatorio>>,
        id: Uuid,
        mensagem: &str,
        tipo: TipoLog,
        situacao: SituacaoExecucao,
        toast: Option<Toast>,
    ) {
        let mut execucoes = execucoes.write().await;
        if let Some(execucao) = execucoes.get_mut(&id) {
            execucao.logs.push(LinhaLog {
                horario: Utc::now(),
                mensagem: mensagem.to_string(),
                tipo,
            });
            execucao.situacao = situacao;
            if toast.is_some() {
                execucao.toast = toast;
            }
        }
    }

    async fn marcar(
        execucoes: &RwLock<HashMap<Uuid, ExecucaoRelatorio>>,
        id: Uuid,
        situacao: SituacaoExecucao,
        toast: Option<Toast>,
    ) {
        let mut execucoes = execucoes.write().await;
        if let Some(execucao) = execucoes.get_mut(&id) {
            execucao.situacao = situacao;
            if toast.is_some() {
                execucao.toast = toast;
            }
        }
    }

    pub async fn consultar(&self, id: Uuid) -> Result<ExecucaoRelatorio, AppError> {
        self.execucoes
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(AppError::RegistroNaoEncontrado)
    }

    /// Solicita o cancelamento; a execução para antes do próximo passo.
    /// Execução já terminada não tem mais o que cancelar.
    pub async fn cancelar(&self, id: Uuid) -> Result<Toast, AppError> {
        let situacao = self
            .execucoes
            .read()
            .await
            .get(&id)
            .map(|e| e.situacao)
            .ok_or(AppError::RegistroNaoEncontrado)?;
        if situacao != SituacaoExecucao::EmAndamento {
            return Err(AppError::SituacaoTerminal);
        }

        if let Some(flag) = self.cancelamentos.read().await.get(&id) {
            flag.store(true, Ordering::SeqCst);
        }
        Ok(Toast::info("Cancelamento solicitado"))
    }

    /// Aguarda a task da execução terminar. Usado pelos testes e por
    /// quem precisar de conclusão síncrona; execução já terminada não
    /// tem mais task e devolve na hora.
    pub async fn aguardar(&self, id: Uuid) -> Result<(), AppError> {
        let tarefa = self.tarefas.lock().await.remove(&id);
        match tarefa {
            Some(tarefa) => tarefa
                .await
                .map_err(|erro| AppError::InternalServerError(anyhow::Error::new(erro))),
            None => {
                if self.execucoes.read().await.contains_key(&id) {
                    Ok(())
                } else {
                    Err(AppError::RegistroNaoEncontrado)
                }
            }
        }
    }
}

impl Default for RelatorioService {
    fn default() -> Self {
        Self::new()
    }
}
