pub mod record_entry;
