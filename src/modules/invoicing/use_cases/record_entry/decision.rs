use crate::modules::invoicing::core::entry::NewEntry;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("hours must not be negative")]
    NegativeHours,

    #[error("hours must be a multiple of 0.25")]
    HoursNotQuarter,

    #[error("hourly rate must not be negative")]
    NegativeRate,

    #[error("material cost must not be negative")]
    NegativeMaterialCost,
}

pub enum Decision {
    Accepted { entry: NewEntry },
    Rejected { reason: ValidationError },
}
