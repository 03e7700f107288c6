use crate::modules::invoicing::core::entry::NewEntry;
use crate::modules::invoicing::use_cases::record_entry::command::RecordEntry;
use crate::modules::invoicing::use_cases::record_entry::decision::{Decision, ValidationError};
use crate::shared::core::money::is_quarter_increment;
use crate::shared::core::session::Identity;
use rust_decimal::Decimal;

pub fn decide_record_entry(owner: &Identity, command: RecordEntry) -> Decision {
    let reason = if command.hours < Decimal::ZERO {
        Some(ValidationError::NegativeHours)
    } else if !is_quarter_increment(command.hours) {
        Some(ValidationError::HoursNotQuarter)
    } else if command.rate < Decimal::ZERO {
        Some(ValidationError::NegativeRate)
    } else if command.material_cost < Decimal::ZERO {
        Some(ValidationError::NegativeMaterialCost)
    } else {
        None
    };

    if let Some(reason) = reason {
        return Decision::Rejected { reason };
    }

    Decision::Accepted {
        entry: NewEntry {
            owner_id: owner.id.clone(),
            client: command.client,
            date: command.date,
            description: command.description,
            hours: command.hours,
            rate: command.rate,
            materials: command.materials,
            material_cost: command.material_cost,
        },
    }
}
