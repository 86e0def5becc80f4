//! Wire-format DTOs consumed from the records backend.

mod invoice;

pub use invoice::{BankDetailsDto, InvoiceRecordDto, IssuingEntityDto, LineItemDto, PartyDto};
