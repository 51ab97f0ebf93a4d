//! Text templates for adapter results.
//!
//! Lists print one block per record, each closed by a `---` line, under a
//! header that counts every returned record even when the list is cut.

use pclient::{
    AppointmentRecord, AttendanceKind, BirthdayEntry, PatientRecord, RecordId, present,
};

pub const MAX_PATIENTS: usize = 5;
pub const MAX_APPOINTMENTS: usize = 10;
pub const MAX_BIRTHDAYS: usize = 20;

pub const NO_PATIENTS: &str = "Nenhum paciente encontrado com esses critérios.";
pub const NO_APPOINTMENTS: &str = "📅 Nenhum agendamento encontrado com esses filtros.";
pub const MISSING_ID: &str = "não informado";
pub const CURRENT_TIME_LABEL: &str = "Horário atual";

const BLOCK_END: &str = "\n---\n\n";

const MONTHS: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTHS.get(index).copied()
}

/// Expands `HH:MM` to `HH:MM:SS`; any other shape is passed through.
pub fn normalize_horario(horario: &str) -> String {
    if horario.chars().count() == 5 {
        format!("{horario}:00")
    } else {
        horario.to_string()
    }
}

fn short_horario(horario: &str) -> &str {
    match horario.char_indices().nth(5) {
        Some((end, _)) => &horario[..end],
        None => horario,
    }
}

fn line(out: &mut String, label: &str, value: impl std::fmt::Display) {
    out.push_str(&format!("{label} {value}\n"));
}

pub fn patient_list(patients: &[PatientRecord]) -> String {
    let mut out = format!("✅ {} paciente(s) encontrado(s):\n\n", patients.len());

    for patient in patients.iter().take(MAX_PATIENTS) {
        line(&mut out, "📋 **Prontuário:**", &patient.numero);
        line(&mut out, "👤 **Nome:**", &patient.nome);
        if let Some(cpf) = present(patient.cpf.as_deref()) {
            line(&mut out, "🆔 **CPF:**", cpf);
        }
        if let Some(birth) = present(patient.data_nascimento.as_deref()) {
            line(&mut out, "🎂 **Data Nasc:**", birth);
        }
        if let Some(phone) = present(patient.telefone.as_deref()) {
            line(&mut out, "📞 **Telefone:**", phone);
        }
        if !patient.responsaveis.is_empty() {
            out.push_str("👨‍👩‍👧 **Responsáveis:**\n");
            for guardian in &patient.responsaveis {
                match present(guardian.cpf.as_deref()) {
                    Some(cpf) => out.push_str(&format!("   - {} (CPF: {cpf})\n", guardian.nome)),
                    None => out.push_str(&format!("   - {}\n", guardian.nome)),
                }
            }
        }
        out.push_str(BLOCK_END);
    }

    out.trim().to_string()
}

pub fn appointment_list(appointments: &[AppointmentRecord]) -> String {
    let mut out = format!(
        "📅 **{} agendamento(s) encontrado(s):**\n\n",
        appointments.len()
    );

    for appointment in appointments.iter().take(MAX_APPOINTMENTS) {
        line(&mut out, "🆔 **ID:**", &appointment.id);
        out.push_str(&format!(
            "👤 **Paciente:** {} (Nº {})\n",
            appointment.paciente_nome, appointment.paciente_numero
        ));
        line(&mut out, "📅 **Data:**", &appointment.data);
        line(&mut out, "⏰ **Horário:**", &appointment.horario);
        line(&mut out, "📊 **Status:**", &appointment.status);
        if let Some(professional) = present(appointment.profissional.as_deref()) {
            line(&mut out, "👨‍⚕️ **Profissional:**", professional);
        }
        if let Some(note) = present(appointment.observacao.as_deref()) {
            line(&mut out, "📝 **Obs:**", note);
        }
        out.push_str(BLOCK_END);
    }

    out.trim().to_string()
}

pub fn birthday_list(entries: &[BirthdayEntry]) -> String {
    let mut out = format!("🎂 **{} aniversariante(s):**\n\n", entries.len());

    for entry in entries.iter().take(MAX_BIRTHDAYS) {
        out.push_str(&format!("👤 **{}** (Nº {})\n", entry.nome, entry.numero));
        line(&mut out, "🎂 **Aniversário:**", &entry.data_nascimento);
        out.push_str(&format!("🎈 **Idade:** {} anos\n", entry.idade));
        if let Some(phone) = present(entry.telefone.as_deref()) {
            line(&mut out, "📞 **Telefone:**", phone);
        }
        out.push_str(BLOCK_END);
    }

    out.trim().to_string()
}

pub fn no_birthdays(mes: Option<u32>, dia: Option<u32>) -> String {
    let month = mes.and_then(month_name).unwrap_or("atual");
    match dia {
        Some(dia) => format!("🎂 Nenhum aniversariante encontrado em {month} do dia {dia}."),
        None => format!("🎂 Nenhum aniversariante encontrado em {month}."),
    }
}

pub struct AppointmentConfirmation<'a> {
    pub id: Option<&'a RecordId>,
    pub paciente_numero: i64,
    pub data: &'a str,
    pub horario: &'a str,
    pub profissional: Option<&'a str>,
    pub observacao: Option<&'a str>,
}

pub fn appointment_confirmation(confirmation: &AppointmentConfirmation<'_>) -> String {
    let mut out = String::from("✅ **Consulta agendada com sucesso!**\n\n");
    line(&mut out, "📋 **ID do Agendamento:**", display_id(confirmation.id));
    line(&mut out, "👤 **Paciente (Prontuário):**", confirmation.paciente_numero);
    line(&mut out, "📅 **Data:**", confirmation.data);
    line(&mut out, "⏰ **Horário:**", short_horario(confirmation.horario));
    if let Some(professional) = present(confirmation.profissional) {
        line(&mut out, "👨‍⚕️ **Profissional:**", professional);
    }
    if let Some(note) = present(confirmation.observacao) {
        line(&mut out, "📝 **Observação:**", note);
    }
    out
}

pub struct AttendanceConfirmation<'a> {
    pub id: Option<&'a RecordId>,
    pub paciente_numero: i64,
    pub data: &'a str,
    pub horario: Option<&'a str>,
    pub tipo_atendimento: AttendanceKind,
    pub observacao: Option<&'a str>,
}

pub fn attendance_confirmation(confirmation: &AttendanceConfirmation<'_>) -> String {
    let mut out = String::from("✅ **Presença registrada com sucesso!**\n\n");
    line(&mut out, "🆔 **ID da Presença:**", display_id(confirmation.id));
    line(&mut out, "👤 **Paciente (Prontuário):**", confirmation.paciente_numero);
    line(&mut out, "📅 **Data:**", confirmation.data);
    line(
        &mut out,
        "⏰ **Horário:**",
        present(confirmation.horario).unwrap_or(CURRENT_TIME_LABEL),
    );
    line(&mut out, "📍 **Tipo:**", confirmation.tipo_atendimento);
    if let Some(note) = present(confirmation.observacao) {
        line(&mut out, "📝 **Observação:**", note);
    }
    out
}

fn display_id(id: Option<&RecordId>) -> String {
    id.map(ToString::to_string)
        .unwrap_or_else(|| MISSING_ID.to_string())
}
