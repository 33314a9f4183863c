//! Domain layer: request/response values and validation rules (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{BulkMessage, Destination, Message, SearchNumberParams};
pub use response::{
    Number, Response, ResponseMessage, ResponseStatus, SearchNumberResponse, SentSmsError,
    SentSmsPrice, SentSmsReport, SentSmsStatus, SmsReportResponse,
};
pub use validation::ValidationError;
pub use value::{Amount, KnownErrorGroup, KnownStatusGroup};
