//! Tool runtime trait and the registry-backed executor.
//!
//! Execution never fails: a call the runtime cannot route or decode is
//! answered with failure text, so the model always gets something to read.

use std::sync::Arc;
use std::time::Instant;

use crate::{
    NoopToolRuntimeHooks, ToolCall, ToolError, ToolExecutionContext, ToolExecutionResult,
    ToolFuture, ToolOutcome, ToolRegistry, ToolRuntimeHooks,
};

pub trait ToolRuntime: Send + Sync {
    fn execute<'a>(
        &'a self,
        tool_call: ToolCall,
        context: ToolExecutionContext,
    ) -> ToolFuture<'a, ToolExecutionResult>;
}

#[derive(Clone)]
pub struct DefaultToolRuntime {
    registry: Arc<ToolRegistry>,
    hooks: Arc<dyn ToolRuntimeHooks>,
}

impl DefaultToolRuntime {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            hooks: Arc::new(NoopToolRuntimeHooks),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ToolRuntimeHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    async fn run(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
    ) -> Result<ToolOutcome, ToolError> {
        let tool = self
            .registry
            .get(&tool_call.name)
            .ok_or_else(|| ToolError::not_found(tool_call.name.clone()))?;

        tool.invoke(&tool_call.arguments, context)
            .await
            .map_err(|error| error.for_tool(tool_call.name.clone()))
    }
}

impl ToolRuntime for DefaultToolRuntime {
    fn execute<'a>(
        &'a self,
        tool_call: ToolCall,
        context: ToolExecutionContext,
    ) -> ToolFuture<'a, ToolExecutionResult> {
        Box::pin(async move {
            self.hooks.on_execution_start(&tool_call, &context);
            let started = Instant::now();

            match self.run(&tool_call, &context).await {
                Ok(outcome) => {
                    let result = ToolExecutionResult::answering(&tool_call, outcome);
                    self.hooks
                        .on_execution_finish(&tool_call, &context, &result, started.elapsed());
                    result
                }
                Err(error) => {
                    self.hooks
                        .on_execution_rejected(&tool_call, &context, &error, started.elapsed());
                    let outcome = ToolOutcome::rejected(&tool_call.name, &error);
                    ToolExecutionResult::answering(&tool_call, outcome)
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use serde::Deserialize;

    use super::*;
    use crate::{Tool, ToolDefinition, ToolParameter, parse_args};

    #[derive(Deserialize)]
    struct LookupArgs {
        numero: i64,
    }

    /// Answers like a patient lookup: numbers above 100 are unknown.
    struct LookupTool {
        definition: ToolDefinition,
    }

    impl LookupTool {
        fn new() -> Self {
            Self {
                definition: ToolDefinition::new("lookup", "Looks a patient up")
                    .with_parameter(ToolParameter::integer("numero", "Record number").required()),
            }
        }
    }

    impl Tool for LookupTool {
        fn definition(&self) -> &ToolDefinition {
            &self.definition
        }

        fn invoke<'a>(
            &'a self,
            args_json: &'a str,
            context: &'a ToolExecutionContext,
        ) -> ToolFuture<'a, Result<ToolOutcome, ToolError>> {
            Box::pin(async move {
                let args: LookupArgs = parse_args(args_json)?;
                Ok(if args.numero > 100 {
                    ToolOutcome::failure(format!("Paciente {} não encontrado", args.numero))
                } else {
                    ToolOutcome::success(format!("{}: paciente {}", context.session_id, args.numero))
                })
            })
        }
    }

    #[derive(Default)]
    struct RecordingHooks {
        events: Mutex<Vec<String>>,
    }

    impl RecordingHooks {
        fn push(&self, event: String) {
            self.events.lock().expect("events lock").push(event);
        }

        fn events(&self) -> Vec<String> {
            self.events.lock().expect("events lock").clone()
        }
    }

    impl ToolRuntimeHooks for RecordingHooks {
        fn on_execution_start(&self, tool_call: &ToolCall, _context: &ToolExecutionContext) {
            self.push(format!("start:{}", tool_call.id));
        }

        fn on_execution_finish(
            &self,
            tool_call: &ToolCall,
            _context: &ToolExecutionContext,
            result: &ToolExecutionResult,
            _elapsed: Duration,
        ) {
            self.push(format!("finish:{}:{}", tool_call.id, result.is_success()));
        }

        fn on_execution_rejected(
            &self,
            tool_call: &ToolCall,
            _context: &ToolExecutionContext,
            error: &ToolError,
            _elapsed: Duration,
        ) {
            self.push(format!("rejected:{}:{:?}", tool_call.id, error.kind));
        }
    }

    fn runtime(hooks: Arc<RecordingHooks>) -> DefaultToolRuntime {
        let registry: ToolRegistry = [LookupTool::new()].into_iter().collect();
        DefaultToolRuntime::new(Arc::new(registry)).with_hooks(hooks)
    }

    #[tokio::test]
    async fn registered_tool_answers_the_call() {
        let runtime = runtime(Arc::default());

        let result = runtime
            .execute(
                ToolCall::new("call_1", "lookup", r#"{"numero": 42}"#),
                ToolExecutionContext::new("session-1"),
            )
            .await;

        assert_eq!(result.tool_call_id, "call_1");
        assert_eq!(result.outcome, ToolOutcome::success("session-1: paciente 42"));
    }

    #[tokio::test]
    async fn tool_reported_failures_are_answers() {
        let hooks = Arc::new(RecordingHooks::default());
        let runtime = runtime(hooks.clone());

        let result = runtime
            .execute(
                ToolCall::new("call_2", "lookup", r#"{"numero": 501}"#),
                ToolExecutionContext::new("session-2"),
            )
            .await;

        assert_eq!(result.into_text(), "❌ Paciente 501 não encontrado");
        assert_eq!(hooks.events(), vec!["start:call_2", "finish:call_2:false"]);
    }

    #[tokio::test]
    async fn unknown_tool_is_rejected_with_text() {
        let hooks = Arc::new(RecordingHooks::default());
        let runtime = runtime(hooks.clone());

        let result = runtime
            .execute(
                ToolCall::new("call_3", "cancelar", "{}"),
                ToolExecutionContext::new("session-3"),
            )
            .await;

        assert_eq!(result.tool_call_id, "call_3");
        assert_eq!(result.into_text(), "❌ Ferramenta desconhecida: cancelar");
        assert_eq!(hooks.events(), vec!["start:call_3", "rejected:call_3:NotFound"]);
    }

    #[tokio::test]
    async fn undecodable_arguments_are_rejected_with_text() {
        let hooks = Arc::new(RecordingHooks::default());
        let runtime = runtime(hooks.clone());

        let result = runtime
            .execute(
                ToolCall::new("call_4", "lookup", r#"{"numero": "quarenta"}"#),
                ToolExecutionContext::new("session-4"),
            )
            .await;

        assert!(!result.is_success());
        assert!(
            result
                .into_text()
                .starts_with("❌ Argumentos inválidos para lookup:")
        );
        assert_eq!(
            hooks.events(),
            vec!["start:call_4", "rejected:call_4:InvalidArguments"]
        );
    }

    #[test]
    fn registry_keeps_catalog_order_and_replaces_in_place() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());

        registry.register(LookupTool::new());
        registry.register(LookupTool {
            definition: ToolDefinition::new("birthdays", "Lists birthdays"),
        });
        registry.register(LookupTool::new());

        let names: Vec<String> = registry
            .definitions()
            .into_iter()
            .map(|definition| definition.name)
            .collect();
        assert_eq!(names, vec!["lookup", "birthdays"]);
        assert_eq!(registry.len(), 2);
        assert!(registry.get("birthdays").is_some());
        assert!(registry.get("cancelar").is_none());
        assert_eq!(
            registry.definitions()[0].required_parameters(),
            vec!["numero"]
        );
    }
}
