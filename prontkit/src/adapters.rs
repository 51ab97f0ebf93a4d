//! Adapter functions behind the five catalog tools.
//!
//! Each adapter takes the typed arguments of its tool, calls the backend
//! through [`ProntClient`] and always answers with text. Failures of any kind
//! come back as text starting with [`FAILURE_MARKER`](crate::FAILURE_MARKER).

use std::sync::Arc;

use pclient::{
    AppointmentFilter, AppointmentRecord, AppointmentRequest, AppointmentStatus, AttendanceKind,
    AttendanceRequest, BirthdayEntry, BirthdayFilter, ClientError, CreatedRecord, Envelope,
    PatientQuery, PatientRecord, ProntClient, UNKNOWN_BACKEND_ERROR, present,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ToolOutcome;
use crate::format::{self, AppointmentConfirmation, AttendanceConfirmation};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BuscarPacienteArgs {
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub numero: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AgendarConsultaArgs {
    pub paciente_numero: i64,
    pub data: String,
    pub horario: String,
    #[serde(default)]
    pub profissional: Option<String>,
    #[serde(default)]
    pub observacao: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConsultarAgendamentosArgs {
    #[serde(default)]
    pub paciente_numero: Option<i64>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub status: Option<AppointmentStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistrarPresencaArgs {
    pub paciente_numero: i64,
    pub data: String,
    #[serde(default)]
    pub horario: Option<String>,
    #[serde(default)]
    pub tipo_atendimento: AttendanceKind,
    #[serde(default)]
    pub observacao: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListarAniversariantesArgs {
    #[serde(default)]
    pub mes: Option<u32>,
    #[serde(default)]
    pub dia: Option<u32>,
}

/// Failure prefixes of one capability: backend-reported vs everything else.
struct FailureText {
    backend: &'static str,
    other: &'static str,
}

const BUSCAR_FAILURE: FailureText = FailureText {
    backend: "Erro",
    other: "Erro ao buscar paciente",
};
const AGENDAR_FAILURE: FailureText = FailureText {
    backend: "Erro ao agendar",
    other: "Erro ao agendar consulta",
};
const CONSULTAR_FAILURE: FailureText = FailureText {
    backend: "Erro",
    other: "Erro ao consultar agendamentos",
};
const PRESENCA_FAILURE: FailureText = FailureText {
    backend: "Erro ao registrar presença",
    other: "Erro ao registrar presença",
};
const ANIVERSARIANTES_FAILURE: FailureText = FailureText {
    backend: "Erro",
    other: "Erro ao listar aniversariantes",
};

/// Decodes a client response and renders it, mapping every failure to text.
fn settle<T, F>(
    response: Result<Value, ClientError>,
    failure: &FailureText,
    render: F,
) -> ToolOutcome
where
    T: DeserializeOwned + Default,
    F: FnOnce(T) -> ToolOutcome,
{
    match response.and_then(Envelope::<T>::decode) {
        Ok(Envelope::Success(data)) => render(data),
        Ok(Envelope::Failure(message)) => ToolOutcome::failure(format!(
            "{}: {}",
            failure.backend,
            message.as_deref().unwrap_or(UNKNOWN_BACKEND_ERROR)
        )),
        Err(error) => ToolOutcome::failure(format!("{}: {}", failure.other, error.message)),
    }
}

#[derive(Debug, Clone)]
pub struct ProntTools {
    client: Arc<ProntClient>,
}

impl ProntTools {
    pub fn new(client: Arc<ProntClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ProntClient {
        &self.client
    }

    pub async fn buscar_paciente_pront(&self, args: BuscarPacienteArgs) -> String {
        self.buscar_paciente(args).await.into_text()
    }

    pub async fn agendar_consulta_pront(&self, args: AgendarConsultaArgs) -> String {
        self.agendar_consulta(args).await.into_text()
    }

    pub async fn consultar_agendamentos_pront(&self, args: ConsultarAgendamentosArgs) -> String {
        self.consultar_agendamentos(args).await.into_text()
    }

    pub async fn registrar_presenca_pront(&self, args: RegistrarPresencaArgs) -> String {
        self.registrar_presenca(args).await.into_text()
    }

    pub async fn listar_aniversariantes_pront(&self, args: ListarAniversariantesArgs) -> String {
        self.listar_aniversariantes(args).await.into_text()
    }

    pub async fn buscar_paciente(&self, args: BuscarPacienteArgs) -> ToolOutcome {
        let query = PatientQuery {
            cpf: args.cpf,
            nome: args.nome,
            numero: args.numero,
        };
        let response = self.client.buscar_paciente(&query).await;

        settle(response, &BUSCAR_FAILURE, |patients: Vec<PatientRecord>| {
            if patients.is_empty() {
                ToolOutcome::failure(format::NO_PATIENTS)
            } else {
                ToolOutcome::success(format::patient_list(&patients))
            }
        })
    }

    pub async fn agendar_consulta(&self, args: AgendarConsultaArgs) -> ToolOutcome {
        let horario = format::normalize_horario(&args.horario);
        let mut request =
            AppointmentRequest::new(args.paciente_numero, args.data.clone(), horario.clone());
        request.profissional = args.profissional.clone();
        request.observacao = args.observacao.clone();

        let response = self.client.agendar_consulta(&request).await;

        settle(response, &AGENDAR_FAILURE, |created: CreatedRecord| {
            ToolOutcome::success(format::appointment_confirmation(&AppointmentConfirmation {
                id: created.id.as_ref(),
                paciente_numero: args.paciente_numero,
                data: &args.data,
                horario: &horario,
                profissional: args.profissional.as_deref(),
                observacao: args.observacao.as_deref(),
            }))
        })
    }

    pub async fn consultar_agendamentos(&self, args: ConsultarAgendamentosArgs) -> ToolOutcome {
        let filter = AppointmentFilter {
            paciente_numero: args.paciente_numero,
            data: args.data,
            status: args.status,
        };
        let response = self.client.listar_agendamentos(&filter).await;

        settle(
            response,
            &CONSULTAR_FAILURE,
            |appointments: Vec<AppointmentRecord>| {
                if appointments.is_empty() {
                    ToolOutcome::success(format::NO_APPOINTMENTS)
                } else {
                    ToolOutcome::success(format::appointment_list(&appointments))
                }
            },
        )
    }

    pub async fn registrar_presenca(&self, args: RegistrarPresencaArgs) -> ToolOutcome {
        // Left unset, the client stamps the current time.
        let horario = present(args.horario.as_deref()).map(format::normalize_horario);

        let mut request = AttendanceRequest::new(args.paciente_numero, args.data.clone())
            .with_tipo(args.tipo_atendimento);
        request.horario = horario.clone();
        request.observacao = args.observacao.clone();

        let response = self.client.registrar_presenca(&request).await;

        settle(response, &PRESENCA_FAILURE, |created: CreatedRecord| {
            ToolOutcome::success(format::attendance_confirmation(&AttendanceConfirmation {
                id: created.id.as_ref(),
                paciente_numero: args.paciente_numero,
                data: &args.data,
                horario: horario.as_deref(),
                tipo_atendimento: args.tipo_atendimento,
                observacao: args.observacao.as_deref(),
            }))
        })
    }

    pub async fn listar_aniversariantes(&self, args: ListarAniversariantesArgs) -> ToolOutcome {
        let filter = BirthdayFilter {
            mes: args.mes,
            dia: args.dia,
        };
        let response = self.client.listar_aniversariantes(&filter).await;

        settle(
            response,
            &ANIVERSARIANTES_FAILURE,
            |entries: Vec<BirthdayEntry>| {
                if entries.is_empty() {
                    ToolOutcome::success(format::no_birthdays(filter.mes(), filter.dia()))
                } else {
                    ToolOutcome::success(format::birthday_list(&entries))
                }
            },
        )
    }
}
