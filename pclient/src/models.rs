//! Backend record views and typed request inputs.
//!
//! Field names follow the backend's JSON contract. Records are read-only
//! views decoded from the `data` member of a response envelope.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

use crate::ClientError;

/// Number or numeric string, as the backend sends identifiers and counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Text(String),
}

pub type RecordId = Scalar;

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Guardian {
    pub nome: String,
    #[serde(default)]
    pub cpf: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PatientRecord {
    pub numero: RecordId,
    pub nome: String,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub data_nascimento: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub responsaveis: Vec<Guardian>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppointmentRecord {
    pub id: RecordId,
    pub paciente_numero: RecordId,
    pub paciente_nome: String,
    pub data: String,
    pub horario: String,
    pub status: String,
    #[serde(default)]
    pub profissional: Option<String>,
    #[serde(default)]
    pub observacao: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BirthdayEntry {
    pub nome: String,
    pub numero: RecordId,
    pub data_nascimento: String,
    pub idade: Scalar,
    #[serde(default)]
    pub telefone: Option<String>,
}

/// Confirmation payload returned by write operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreatedRecord {
    #[serde(default)]
    pub id: Option<RecordId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Agendado,
    Confirmado,
    Realizado,
    Cancelado,
}

impl AppointmentStatus {
    pub const ALL: [Self; 4] = [
        Self::Agendado,
        Self::Confirmado,
        Self::Realizado,
        Self::Cancelado,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Agendado => "agendado",
            Self::Confirmado => "confirmado",
            Self::Realizado => "realizado",
            Self::Cancelado => "cancelado",
        }
    }
}

impl Display for AppointmentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttendanceKind {
    #[default]
    Presencial,
    Online,
    Telemedicina,
}

impl AttendanceKind {
    pub const ALL: [Self; 3] = [Self::Presencial, Self::Online, Self::Telemedicina];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Presencial => "PRESENCIAL",
            Self::Online => "ONLINE",
            Self::Telemedicina => "TELEMEDICINA",
        }
    }
}

impl Display for AttendanceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Patient lookup criteria. At least one field must be present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientQuery {
    pub cpf: Option<String>,
    pub nome: Option<String>,
    pub numero: Option<i64>,
}

impl PatientQuery {
    pub fn by_cpf(cpf: impl Into<String>) -> Self {
        Self {
            cpf: Some(cpf.into()),
            ..Self::default()
        }
    }

    pub fn by_nome(nome: impl Into<String>) -> Self {
        Self {
            nome: Some(nome.into()),
            ..Self::default()
        }
    }

    pub fn by_numero(numero: i64) -> Self {
        Self {
            numero: Some(numero),
            ..Self::default()
        }
    }

    /// CPF with the `.` and `-` separators removed.
    pub fn normalized_cpf(&self) -> Option<String> {
        present(self.cpf.as_deref()).map(|cpf| cpf.replace(['.', '-'], ""))
    }

    pub fn nome(&self) -> Option<&str> {
        present(self.nome.as_deref())
    }

    pub fn numero(&self) -> Option<i64> {
        nonzero(self.numero)
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.normalized_cpf().is_none() && self.nome().is_none() && self.numero().is_none() {
            return Err(ClientError::validation(
                "Informe pelo menos um parâmetro: cpf, nome ou numero",
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRequest {
    pub paciente_numero: i64,
    pub data: String,
    pub horario: String,
    pub profissional: Option<String>,
    pub observacao: Option<String>,
}

impl AppointmentRequest {
    pub fn new(paciente_numero: i64, data: impl Into<String>, horario: impl Into<String>) -> Self {
        Self {
            paciente_numero,
            data: data.into(),
            horario: horario.into(),
            profissional: None,
            observacao: None,
        }
    }

    pub fn with_profissional(mut self, profissional: impl Into<String>) -> Self {
        self.profissional = Some(profissional.into());
        self
    }

    pub fn with_observacao(mut self, observacao: impl Into<String>) -> Self {
        self.observacao = Some(observacao.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentFilter {
    pub paciente_numero: Option<i64>,
    pub data: Option<String>,
    pub status: Option<AppointmentStatus>,
}

impl AppointmentFilter {
    pub fn paciente_numero(&self) -> Option<i64> {
        nonzero(self.paciente_numero)
    }

    pub fn data(&self) -> Option<&str> {
        present(self.data.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRequest {
    pub paciente_numero: i64,
    pub data: String,
    pub horario: Option<String>,
    pub tipo_atendimento: AttendanceKind,
    pub observacao: Option<String>,
}

impl AttendanceRequest {
    pub fn new(paciente_numero: i64, data: impl Into<String>) -> Self {
        Self {
            paciente_numero,
            data: data.into(),
            horario: None,
            tipo_atendimento: AttendanceKind::default(),
            observacao: None,
        }
    }

    pub fn with_horario(mut self, horario: impl Into<String>) -> Self {
        self.horario = Some(horario.into());
        self
    }

    pub fn with_tipo(mut self, tipo_atendimento: AttendanceKind) -> Self {
        self.tipo_atendimento = tipo_atendimento;
        self
    }

    pub fn with_observacao(mut self, observacao: impl Into<String>) -> Self {
        self.observacao = Some(observacao.into());
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BirthdayFilter {
    pub mes: Option<u32>,
    pub dia: Option<u32>,
}

impl BirthdayFilter {
    /// Month to filter on; zero means the backend's current month.
    pub fn mes(&self) -> Option<u32> {
        nonzero(self.mes)
    }

    pub fn dia(&self) -> Option<u32> {
        nonzero(self.dia)
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if let Some(mes) = self.mes() {
            if !(1..=12).contains(&mes) {
                return Err(ClientError::validation(format!(
                    "mes deve estar entre 1 e 12 (recebido {mes})"
                )));
            }
        }

        if let Some(dia) = self.dia() {
            if !(1..=31).contains(&dia) {
                return Err(ClientError::validation(format!(
                    "dia deve estar entre 1 e 31 (recebido {dia})"
                )));
            }
        }

        Ok(())
    }
}

/// Empty optional text counts as absent. Whitespace is kept as given.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// Zero in an optional numeric input counts as absent.
pub fn nonzero<N>(value: Option<N>) -> Option<N>
where
    N: Copy + Default + PartialEq,
{
    value.filter(|value| *value != N::default())
}
