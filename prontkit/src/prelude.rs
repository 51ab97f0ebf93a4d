//! Common imports for most Pront tool hosts.

pub use crate::{
    AgendarConsultaArgs, BuscarPacienteArgs, ClientConfig, ClientError, ConsultarAgendamentosArgs,
    ListarAniversariantesArgs, ProntClient, ProntRuntime, ProntTools, RegistrarPresencaArgs,
    ToolCall, ToolDefinition, ToolExecutionContext, ToolExecutionResult, ToolOutcome,
    build_observed_runtime, build_runtime, build_runtime_from_env, pront_catalog,
};
