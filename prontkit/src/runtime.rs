//! Runtime wiring: catalog tools bound to one shared backend client.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use pclient::{ClientConfig, ClientError, ProntClient};
use pcommon::SessionId;
use ptooling::{
    DefaultToolRuntime, Tool, ToolCall, ToolDefinition, ToolError, ToolExecutionContext,
    ToolExecutionResult, ToolFuture, ToolOutcome, ToolRegistry, ToolRuntime, ToolRuntimeHooks,
    parse_args,
};
use serde_json::Value;

use crate::{
    AGENDAR_CONSULTA, BUSCAR_PACIENTE, CONSULTAR_AGENDAMENTOS, LISTAR_ANIVERSARIANTES, ProntTools,
    REGISTRAR_PRESENCA, pront_catalog,
};

/// Session used by [`ProntRuntime::dispatch`] when the host supplies none.
pub const DEFAULT_SESSION: &str = "pront";

/// One catalog entry bound to the adapter of the same name.
pub struct CatalogTool {
    definition: ToolDefinition,
    tools: Arc<ProntTools>,
}

impl CatalogTool {
    pub fn new(definition: ToolDefinition, tools: Arc<ProntTools>) -> Self {
        Self { definition, tools }
    }

    async fn answer(&self, args_json: &str) -> Result<ToolOutcome, ToolError> {
        let tools = &self.tools;
        let outcome = match self.definition.name.as_str() {
            BUSCAR_PACIENTE => tools.buscar_paciente(parse_args(args_json)?).await,
            AGENDAR_CONSULTA => tools.agendar_consulta(parse_args(args_json)?).await,
            CONSULTAR_AGENDAMENTOS => tools.consultar_agendamentos(parse_args(args_json)?).await,
            REGISTRAR_PRESENCA => tools.registrar_presenca(parse_args(args_json)?).await,
            LISTAR_ANIVERSARIANTES => tools.listar_aniversariantes(parse_args(args_json)?).await,
            other => return Err(ToolError::not_found(other)),
        };

        Ok(outcome)
    }
}

impl Tool for CatalogTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    fn invoke<'a>(
        &'a self,
        args_json: &'a str,
        _context: &'a ToolExecutionContext,
    ) -> ToolFuture<'a, Result<ToolOutcome, ToolError>> {
        Box::pin(self.answer(args_json))
    }
}

/// Registers the five adapters in catalog order.
pub fn build_tool_registry(tools: ProntTools) -> ToolRegistry {
    let tools = Arc::new(tools);

    pront_catalog()
        .into_iter()
        .map(|definition| CatalogTool::new(definition, Arc::clone(&tools)))
        .collect()
}

#[derive(Clone)]
pub struct ProntRuntime {
    tools: ProntTools,
    runtime: DefaultToolRuntime,
    session_id: SessionId,
    next_call: Arc<AtomicU64>,
}

impl ProntRuntime {
    pub fn new(client: Arc<ProntClient>) -> Self {
        let tools = ProntTools::new(client);
        let registry = build_tool_registry(tools.clone());

        Self {
            tools,
            runtime: DefaultToolRuntime::new(Arc::new(registry)),
            session_id: SessionId::from(DEFAULT_SESSION),
            next_call: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ToolRuntimeHooks>) -> Self {
        self.runtime = self.runtime.with_hooks(hooks);
        self
    }

    pub fn with_session(mut self, session_id: impl Into<SessionId>) -> Self {
        self.session_id = session_id.into();
        self
    }

    pub fn client(&self) -> &ProntClient {
        self.tools.client()
    }

    pub fn tools(&self) -> &ProntTools {
        &self.tools
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.runtime.registry().definitions()
    }

    pub fn function_specs(&self) -> Vec<Value> {
        self.definitions()
            .iter()
            .map(ToolDefinition::function_spec)
            .collect()
    }

    /// Runs one model-issued call. Every failure comes back as result text.
    pub async fn execute(
        &self,
        tool_call: ToolCall,
        context: ToolExecutionContext,
    ) -> ToolExecutionResult {
        self.runtime.execute(tool_call, context).await
    }

    pub async fn dispatch(&self, tool_name: &str, args_json: &str) -> String {
        let call_id = format!("call-{}", self.next_call.fetch_add(1, Ordering::Relaxed));
        let context = ToolExecutionContext::new(self.session_id.clone());

        self.execute(ToolCall::new(call_id, tool_name, args_json), context)
            .await
            .into_text()
    }
}

impl std::fmt::Debug for ProntRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProntRuntime")
            .field("tools", &self.tools)
            .field("session_id", &self.session_id)
            .finish()
    }
}

pub fn build_runtime(config: ClientConfig) -> Result<ProntRuntime, ClientError> {
    let client = ProntClient::from_config(config)?;
    Ok(ProntRuntime::new(Arc::new(client)))
}

/// Like [`build_runtime`], with tracing and metrics on both the client and the tools.
pub fn build_observed_runtime(config: ClientConfig) -> Result<ProntRuntime, ClientError> {
    let client = ProntClient::from_config(config)?
        .with_hooks(Arc::new(pobserve::standard_client_hooks()));

    Ok(ProntRuntime::new(Arc::new(client)).with_hooks(Arc::new(pobserve::standard_tool_hooks())))
}

pub fn build_runtime_from_env() -> Result<ProntRuntime, ClientError> {
    build_runtime(ClientConfig::from_env()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TOOL_NAMES;

    fn offline_runtime() -> ProntRuntime {
        let config = ClientConfig::new("http://127.0.0.1:9", "test-key").expect("config");
        build_runtime(config).expect("runtime should build")
    }

    #[test]
    fn registry_follows_catalog_order() {
        let runtime = offline_runtime();
        let names: Vec<String> = runtime
            .definitions()
            .into_iter()
            .map(|definition| definition.name)
            .collect();

        assert_eq!(names, TOOL_NAMES.map(str::to_string));
        assert_eq!(runtime.function_specs().len(), 5);
    }

    #[tokio::test]
    async fn unknown_tool_comes_back_as_failure_text() {
        let text = offline_runtime()
            .dispatch("cancelar_consulta_pront", "{}")
            .await;

        assert_eq!(text, "❌ Ferramenta desconhecida: cancelar_consulta_pront");
    }

    #[tokio::test]
    async fn malformed_arguments_come_back_as_failure_text() {
        let text = offline_runtime().dispatch(AGENDAR_CONSULTA, "{not json").await;

        assert!(text.starts_with("❌ Argumentos inválidos para agendar_consulta_pront:"));
    }

    #[test]
    fn missing_api_key_builds_no_runtime() {
        let error = ClientConfig::resolve_with(None, None, |_| None)
            .and_then(build_runtime)
            .expect_err("api key is required");

        assert!(error.is_fatal());
    }
}
