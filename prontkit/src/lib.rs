//! Unified facade over the Pront workspace crates.
//!
//! This crate is the single dependency for hosts that expose the Pront
//! clinical-records capabilities to a function-calling model. It re-exports
//! the workspace crates, owns the five-tool catalog and its adapters, and
//! wires them into a runtime that always answers with text.
//!
//! ```rust,no_run
//! use prontkit::{ClientConfig, build_runtime};
//!
//! # async fn run() -> Result<(), prontkit::ClientError> {
//! let runtime = build_runtime(ClientConfig::resolve(None, None)?)?;
//! let text = runtime
//!     .dispatch("buscar_paciente_pront", r#"{"numero": 42}"#)
//!     .await;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

mod adapters;
mod catalog;

pub mod format;
pub mod prelude;
pub mod runtime;

pub use pclient;
pub use pcommon;
pub use pobserve;
pub use ptooling;

pub use adapters::{
    AgendarConsultaArgs, BuscarPacienteArgs, ConsultarAgendamentosArgs,
    ListarAniversariantesArgs, ProntTools, RegistrarPresencaArgs,
};
pub use catalog::{
    AGENDAR_CONSULTA, BUSCAR_PACIENTE, CONSULTAR_AGENDAMENTOS, LISTAR_ANIVERSARIANTES,
    REGISTRAR_PRESENCA, TOOL_NAMES, catalog_entry, pront_catalog,
};
pub use pclient::{
    AppointmentStatus, AttendanceKind, ClientConfig, ClientError, ClientErrorKind, Envelope,
    ProntClient, ProntHttpTransport, ProntTransport,
};
pub use pcommon::{BoxFuture, SessionId};
pub use ptooling::{
    FAILURE_MARKER, ToolCall, ToolDefinition, ToolError, ToolErrorKind, ToolExecutionContext,
    ToolExecutionResult, ToolOutcome, ToolParameter,
};
pub use runtime::{
    CatalogTool, DEFAULT_SESSION, ProntRuntime, build_observed_runtime, build_runtime,
    build_runtime_from_env, build_tool_registry,
};
