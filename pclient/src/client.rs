//! Pront backend client: one method per backend capability.
//!
//! Methods return the decoded JSON body untouched. Interpreting the
//! `success` flag is left to callers, see [`Envelope`](crate::Envelope).

use std::sync::Arc;
use std::time::Instant;

use serde_json::{Map, Value, json};

use crate::{
    Action, AppointmentFilter, AppointmentRequest, AttendanceRequest, BackendRequest,
    BirthdayFilter, ClientConfig, ClientError, ClientOperationHooks, HttpMethod, NoopClientHooks,
    PatientQuery, ProntHttpTransport, ProntTransport, present,
};

#[derive(Clone)]
pub struct ProntClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn ProntTransport>,
    hooks: Arc<dyn ClientOperationHooks>,
}

impl ProntClient {
    pub fn new(config: ClientConfig, transport: Arc<dyn ProntTransport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
            hooks: Arc::new(NoopClientHooks),
        }
    }

    /// Builds a client over the default reqwest transport.
    pub fn from_config(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = Arc::new(ProntHttpTransport::from_base_url(config.base_url.clone())?);
        Ok(Self::new(config, transport))
    }

    /// Resolves configuration from the environment. Fails without an API key.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_config(ClientConfig::from_env()?)
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ClientOperationHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn health_check(&self) -> Result<Value, ClientError> {
        let request = BackendRequest::new(HttpMethod::Get, Action::Health, self.config.health_timeout);
        self.dispatch(request).await
    }

    pub async fn buscar_paciente(&self, query: &PatientQuery) -> Result<Value, ClientError> {
        query.validate()?;

        let request = self
            .request(HttpMethod::Get, Action::Patient)
            .with_optional_query("cpf", query.normalized_cpf())
            .with_optional_query("nome", query.nome())
            .with_optional_query("numero", query.numero());

        self.dispatch(request).await
    }

    pub async fn cadastrar_paciente(
        &self,
        dados_paciente: Map<String, Value>,
    ) -> Result<Value, ClientError> {
        let request = self
            .request(HttpMethod::Post, Action::Patient)
            .with_body(Value::Object(dados_paciente));

        self.dispatch(request).await
    }

    pub async fn atualizar_paciente(
        &self,
        numero: i64,
        dados: Map<String, Value>,
    ) -> Result<Value, ClientError> {
        let request = self
            .request(HttpMethod::Put, Action::Patient)
            .with_query("numero", numero.to_string())
            .with_body(Value::Object(dados));

        self.dispatch(request).await
    }

    pub async fn agendar_consulta(
        &self,
        appointment: &AppointmentRequest,
    ) -> Result<Value, ClientError> {
        let request = self
            .request(HttpMethod::Post, Action::Schedule)
            .with_body(json!({
                "paciente_numero": appointment.paciente_numero,
                "data": appointment.data,
                "horario": appointment.horario,
                "profissional": appointment.profissional,
                "observacao": appointment.observacao,
                "status": "agendado",
            }));

        self.dispatch(request).await
    }

    pub async fn listar_agendamentos(
        &self,
        filter: &AppointmentFilter,
    ) -> Result<Value, ClientError> {
        let request = self
            .request(HttpMethod::Get, Action::Appointments)
            .with_optional_query("paciente_numero", filter.paciente_numero())
            .with_optional_query("data", filter.data())
            .with_optional_query("status", filter.status);

        self.dispatch(request).await
    }

    /// Without an explicit `horario` the current local time is sent.
    pub async fn registrar_presenca(
        &self,
        attendance: &AttendanceRequest,
    ) -> Result<Value, ClientError> {
        let horario = present(attendance.horario.as_deref())
            .map(ToString::to_string)
            .unwrap_or_else(current_time);

        let request = self
            .request(HttpMethod::Post, Action::RegisterAttendance)
            .with_body(json!({
                "paciente_numero": attendance.paciente_numero,
                "data": attendance.data,
                "horario": horario,
                "tipo_atendimento": attendance.tipo_atendimento,
                "observacao": attendance.observacao,
            }));

        self.dispatch(request).await
    }

    pub async fn listar_aniversariantes(
        &self,
        filter: &BirthdayFilter,
    ) -> Result<Value, ClientError> {
        filter.validate()?;

        let request = self
            .request(HttpMethod::Get, Action::Birthdays)
            .with_optional_query("mes", filter.mes())
            .with_optional_query("dia", filter.dia());

        self.dispatch(request).await
    }

    fn request(&self, method: HttpMethod, action: Action) -> BackendRequest {
        BackendRequest::new(method, action, self.config.request_timeout)
    }

    async fn dispatch(&self, request: BackendRequest) -> Result<Value, ClientError> {
        let (action, method) = (request.action, request.method);
        self.hooks.on_request_start(action, method);
        let started = Instant::now();

        let result = self
            .transport
            .send(request, self.config.api_key.expose())
            .await;

        let elapsed = started.elapsed();
        match &result {
            Ok(_) => self.hooks.on_request_success(action, method, elapsed),
            Err(error) => self.hooks.on_request_failure(action, method, error, elapsed),
        }

        result
    }
}

impl std::fmt::Debug for ProntClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProntClient")
            .field("config", &self.config)
            .field("transport", &self.transport)
            .finish()
    }
}

pub(crate) fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
