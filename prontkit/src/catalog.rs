//! Capability catalog advertised to function-calling models.
//!
//! ```rust
//! use prontkit::{BUSCAR_PACIENTE, pront_catalog};
//!
//! let catalog = pront_catalog();
//! assert_eq!(catalog.len(), 5);
//! assert_eq!(catalog[0].name, BUSCAR_PACIENTE);
//! assert!(catalog[0].required_parameters().is_empty());
//! ```

use pclient::{AppointmentStatus, AttendanceKind};
use ptooling::{ToolDefinition, ToolParameter};

pub const BUSCAR_PACIENTE: &str = "buscar_paciente_pront";
pub const AGENDAR_CONSULTA: &str = "agendar_consulta_pront";
pub const CONSULTAR_AGENDAMENTOS: &str = "consultar_agendamentos_pront";
pub const REGISTRAR_PRESENCA: &str = "registrar_presenca_pront";
pub const LISTAR_ANIVERSARIANTES: &str = "listar_aniversariantes_pront";

/// Tool names in catalog order.
pub const TOOL_NAMES: [&str; 5] = [
    BUSCAR_PACIENTE,
    AGENDAR_CONSULTA,
    CONSULTAR_AGENDAMENTOS,
    REGISTRAR_PRESENCA,
    LISTAR_ANIVERSARIANTES,
];

pub fn pront_catalog() -> Vec<ToolDefinition> {
    vec![
        buscar_paciente(),
        agendar_consulta(),
        consultar_agendamentos(),
        registrar_presenca(),
        listar_aniversariantes(),
    ]
}

/// Looks up one catalog entry by tool name.
pub fn catalog_entry(name: &str) -> Option<ToolDefinition> {
    pront_catalog()
        .into_iter()
        .find(|definition| definition.name == name)
}

fn buscar_paciente() -> ToolDefinition {
    // None of the three is required on its own, but the call needs at least one.
    ToolDefinition::new(
        BUSCAR_PACIENTE,
        "Busca informações de um paciente no sistema Pront por CPF, nome ou número do prontuário",
    )
    .with_parameter(ToolParameter::string(
        "cpf",
        "CPF do paciente (com ou sem formatação)",
    ))
    .with_parameter(ToolParameter::string(
        "nome",
        "Nome do paciente (busca parcial)",
    ))
    .with_parameter(ToolParameter::integer("numero", "Número do prontuário"))
}

fn agendar_consulta() -> ToolDefinition {
    ToolDefinition::new(
        AGENDAR_CONSULTA,
        "Agenda uma consulta ou atendimento para um paciente no sistema Pront",
    )
    .with_parameter(
        ToolParameter::integer("paciente_numero", "Número do prontuário do paciente").required(),
    )
    .with_parameter(
        ToolParameter::string(
            "data",
            "Data do agendamento no formato YYYY-MM-DD (ex: 2025-01-15)",
        )
        .required(),
    )
    .with_parameter(
        ToolParameter::string("horario", "Horário no formato HH:MM (ex: 14:30)").required(),
    )
    .with_parameter(ToolParameter::string(
        "profissional",
        "Nome do profissional que fará o atendimento (opcional)",
    ))
    .with_parameter(ToolParameter::string(
        "observacao",
        "Observações sobre o agendamento (opcional)",
    ))
}

fn consultar_agendamentos() -> ToolDefinition {
    ToolDefinition::new(
        CONSULTAR_AGENDAMENTOS,
        "Consulta agendamentos do sistema Pront. Pode filtrar por paciente, data ou status",
    )
    .with_parameter(ToolParameter::integer(
        "paciente_numero",
        "Número do prontuário para filtrar (opcional)",
    ))
    .with_parameter(ToolParameter::string(
        "data",
        "Data para filtrar no formato YYYY-MM-DD (opcional)",
    ))
    .with_parameter(
        ToolParameter::string(
            "status",
            "Status dos agendamentos para filtrar (opcional)",
        )
        .with_enum(AppointmentStatus::ALL.map(AppointmentStatus::as_str)),
    )
}

fn registrar_presenca() -> ToolDefinition {
    ToolDefinition::new(
        REGISTRAR_PRESENCA,
        "Registra a presença de um paciente em um atendimento no sistema Pront",
    )
    .with_parameter(
        ToolParameter::integer("paciente_numero", "Número do prontuário do paciente").required(),
    )
    .with_parameter(
        ToolParameter::string("data", "Data do atendimento no formato YYYY-MM-DD").required(),
    )
    .with_parameter(ToolParameter::string(
        "horario",
        "Horário no formato HH:MM (opcional, usa horário atual se não fornecido)",
    ))
    .with_parameter(
        ToolParameter::string(
            "tipo_atendimento",
            "Tipo de atendimento (opcional, padrão: PRESENCIAL)",
        )
        .with_enum(AttendanceKind::ALL.map(AttendanceKind::as_str)),
    )
    .with_parameter(ToolParameter::string(
        "observacao",
        "Observações sobre o atendimento (opcional)",
    ))
}

fn listar_aniversariantes() -> ToolDefinition {
    ToolDefinition::new(
        LISTAR_ANIVERSARIANTES,
        "Lista aniversariantes do mês no sistema Pront. Útil para enviar mensagens de parabéns",
    )
    .with_parameter(
        ToolParameter::integer(
            "mes",
            "Mês para consultar (1-12). Se não fornecido, usa mês atual",
        )
        .with_range(1, 12),
    )
    .with_parameter(
        ToolParameter::integer("dia", "Dia específico do mês (1-31) (opcional)")
            .with_range(1, 31),
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn catalog_lists_tools_in_fixed_order() {
        let names: Vec<String> = pront_catalog()
            .into_iter()
            .map(|definition| definition.name)
            .collect();

        assert_eq!(names, TOOL_NAMES.map(str::to_string));
    }

    #[test]
    fn required_parameters_match_capabilities() {
        let required = |name: &str| {
            catalog_entry(name)
                .expect("catalog entry")
                .required_parameters()
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        };

        assert!(required(BUSCAR_PACIENTE).is_empty());
        assert_eq!(
            required(AGENDAR_CONSULTA),
            vec!["paciente_numero", "data", "horario"]
        );
        assert!(required(CONSULTAR_AGENDAMENTOS).is_empty());
        assert_eq!(required(REGISTRAR_PRESENCA), vec!["paciente_numero", "data"]);
        assert!(required(LISTAR_ANIVERSARIANTES).is_empty());
    }

    #[test]
    fn enums_and_ranges_render_into_the_schema() {
        let agendamentos = catalog_entry(CONSULTAR_AGENDAMENTOS).expect("entry");
        assert_eq!(
            agendamentos.input_schema()["properties"]["status"]["enum"],
            json!(["agendado", "confirmado", "realizado", "cancelado"])
        );

        let presenca = catalog_entry(REGISTRAR_PRESENCA).expect("entry");
        assert_eq!(
            presenca.input_schema()["properties"]["tipo_atendimento"]["enum"],
            json!(["PRESENCIAL", "ONLINE", "TELEMEDICINA"])
        );

        let aniversariantes = catalog_entry(LISTAR_ANIVERSARIANTES).expect("entry");
        let schema = aniversariantes.input_schema();
        assert_eq!(schema["properties"]["mes"]["minimum"], 1);
        assert_eq!(schema["properties"]["mes"]["maximum"], 12);
        assert_eq!(schema["properties"]["dia"]["maximum"], 31);
    }

    #[test]
    fn function_spec_wraps_schema_for_function_calling() {
        let spec = catalog_entry(BUSCAR_PACIENTE)
            .expect("entry")
            .function_spec();

        assert_eq!(spec["type"], "function");
        assert_eq!(spec["function"]["name"], BUSCAR_PACIENTE);
        assert_eq!(spec["function"]["parameters"]["properties"]["numero"]["type"], "integer");
    }

    #[test]
    fn unknown_names_have_no_entry() {
        assert!(catalog_entry("cadastrar_paciente_pront").is_none());
    }
}
