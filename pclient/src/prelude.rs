//! Common `pclient` imports for downstream crates.

pub use crate::{
    AppointmentFilter, AppointmentRequest, AttendanceRequest, BirthdayFilter, ClientConfig,
    ClientError, ClientErrorKind, ClientOperationHooks, Envelope, PatientQuery, ProntClient,
    ProntHttpTransport, ProntTransport,
};
pub use pcommon::BoxFuture;
