//! HTTP client for the Pront clinical-records backend.
//!
//! Every capability is a method on [`ProntClient`] that builds one request
//! against `<base_url>/fluxi_api.php`, sends it through a [`ProntTransport`]
//! and hands back the decoded JSON body. Response envelopes are interpreted
//! by [`Envelope`].
//!
//! ```rust,no_run
//! use pclient::{ClientConfig, Envelope, PatientQuery, PatientRecord, ProntClient};
//!
//! # async fn run() -> Result<(), pclient::ClientError> {
//! let config = ClientConfig::resolve(None, Some("my-key".to_string()))?;
//! let client = ProntClient::from_config(config)?;
//!
//! let raw = client.buscar_paciente(&PatientQuery::by_cpf("123.456.789-00")).await?;
//! let patients = Envelope::<Vec<PatientRecord>>::decode(raw)?.into_result()?;
//! println!("{} patient(s)", patients.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod envelope;
mod error;
mod hooks;
mod models;
mod request;
mod secret;
mod transport;

pub mod prelude;

pub use client::ProntClient;
pub use config::{
    API_KEY_ENV, BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL, DEFAULT_HEALTH_TIMEOUT,
    DEFAULT_REQUEST_TIMEOUT,
};
pub use envelope::{Envelope, UNKNOWN_BACKEND_ERROR};
pub use error::{ClientError, ClientErrorKind};
pub use hooks::{ClientOperationHooks, NoopClientHooks};
pub use models::{
    AppointmentFilter, AppointmentRecord, AppointmentRequest, AppointmentStatus, AttendanceKind,
    AttendanceRequest, BirthdayEntry, BirthdayFilter, CreatedRecord, Guardian, PatientQuery,
    PatientRecord, RecordId, Scalar, nonzero, present,
};
pub use request::{Action, BackendRequest, ENDPOINT_PATH, HttpMethod};
pub use secret::SecretString;
pub use transport::{API_KEY_HEADER, ProntHttpTransport, ProntTransport};

pub type ClientFuture<'a, T> = pcommon::BoxFuture<'a, T>;
