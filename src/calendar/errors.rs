use thiserror::Error;

use crate::types::ConfirmationCode;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("Numeric overflow while pricing reservation [{confirmation_code}]")]
    Overflow {
        confirmation_code: ConfirmationCode
    }
}
