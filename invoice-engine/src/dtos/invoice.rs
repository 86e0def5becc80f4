//! Wire shapes for the records backend's invoice payload.
//!
//! The backend serves camelCase JSON with `items` as an array; amounts
//! arrive as JSON numbers or strings, both of which `rust_decimal` accepts.
//! Conversion into domain models is the single validation gate: a contract
//! violation is rejected here, before any layout computation runs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use crate::error::EngineError;
use crate::models::{
    BankDetails, InvoiceRecord, IssuingEntity, LineItem, PartyDetails, DEFAULT_TAX_CODE,
};
use crate::services::metrics::VALIDATION_ERRORS_TOTAL;

/// Tolerance for `net = gross - discount`: half a minimum currency unit,
/// covering the float arithmetic the backend computed the fields with.
fn amount_slack() -> Decimal {
    Decimal::new(5, 3)
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemDto {
    pub id: i64,
    #[serde(default)]
    pub record_ref: Option<String>,
    pub description: String,
    pub gross_amount: Decimal,
    #[serde(default)]
    pub discount: Decimal,
    pub net_amount: Decimal,
    #[serde(default)]
    pub tax_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyDto {
    pub name: String,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default, alias = "gstin")]
    pub tax_registration: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetailsDto {
    pub account_name: String,
    pub account_number: String,
    pub ifsc: String,
    pub bank_name: String,
    #[serde(default)]
    pub branch: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuingEntityDto {
    pub name: String,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default, alias = "gstin")]
    pub tax_registration: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bank: Option<BankDetailsDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecordDto {
    pub invoice_number: String,
    pub issue_date: NaiveDate,
    pub billed_party: PartyDto,
    pub issuing_entity: IssuingEntityDto,
    pub tax_rate_percent: Decimal,
    #[serde(default)]
    pub items: Vec<LineItemDto>,
    #[serde(default)]
    pub amount_in_words_text: String,
}

/// Trim an optional display field, treating blank as absent.
fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn reject_item(line_item_id: i64, error_type: &str, err: anyhow::Error) -> EngineError {
    VALIDATION_ERRORS_TOTAL
        .with_label_values(&[error_type])
        .inc();
    warn!(line_item_id, error = %err, "Rejected line item");
    EngineError::InvalidLineItem(err)
}

fn reject_record(invoice_number: &str, error_type: &str, err: anyhow::Error) -> EngineError {
    VALIDATION_ERRORS_TOTAL
        .with_label_values(&[error_type])
        .inc();
    warn!(invoice_number, error = %err, "Rejected invoice record");
    EngineError::InvalidInvoice(err)
}

impl TryFrom<LineItemDto> for LineItem {
    type Error = EngineError;

    fn try_from(dto: LineItemDto) -> Result<Self, Self::Error> {
        let description = dto.description.trim().to_string();
        if description.is_empty() {
            return Err(reject_item(
                dto.id,
                "blank_description",
                anyhow::anyhow!("line item {}: description is required", dto.id),
            ));
        }

        for (field, value) in [
            ("gross amount", dto.gross_amount),
            ("discount", dto.discount),
            ("net amount", dto.net_amount),
        ] {
            if value < Decimal::ZERO {
                return Err(reject_item(
                    dto.id,
                    "negative_amount",
                    anyhow::anyhow!("line item {}: {} cannot be negative", dto.id, field),
                ));
            }
        }

        let expected = dto.gross_amount - dto.discount;
        if (dto.net_amount - expected).abs() > amount_slack() {
            return Err(reject_item(
                dto.id,
                "amount_mismatch",
                anyhow::anyhow!(
                    "line item {}: net amount {} does not reconcile with gross {} minus discount {}",
                    dto.id,
                    dto.net_amount,
                    dto.gross_amount,
                    dto.discount
                ),
            ));
        }

        Ok(LineItem {
            line_item_id: dto.id,
            record_ref: normalize(dto.record_ref),
            description,
            gross_amount: dto.gross_amount,
            discount: dto.discount,
            net_amount: dto.net_amount,
            tax_code: normalize(dto.tax_code).unwrap_or_else(|| DEFAULT_TAX_CODE.to_string()),
        })
    }
}

impl From<PartyDto> for PartyDetails {
    fn from(dto: PartyDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            address_line1: normalize(dto.address_line1),
            address_line2: normalize(dto.address_line2),
            city: normalize(dto.city),
            state: normalize(dto.state),
            postal_code: normalize(dto.postal_code),
            tax_registration: normalize(dto.tax_registration),
        }
    }
}

impl From<BankDetailsDto> for BankDetails {
    fn from(dto: BankDetailsDto) -> Self {
        Self {
            account_name: dto.account_name,
            account_number: dto.account_number,
            ifsc: dto.ifsc,
            bank_name: dto.bank_name,
            branch: normalize(dto.branch),
        }
    }
}

impl From<IssuingEntityDto> for IssuingEntity {
    fn from(dto: IssuingEntityDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            address_line1: normalize(dto.address_line1),
            address_line2: normalize(dto.address_line2),
            city: normalize(dto.city),
            state: normalize(dto.state),
            postal_code: normalize(dto.postal_code),
            tax_registration: normalize(dto.tax_registration),
            phone: normalize(dto.phone),
            email: normalize(dto.email),
            bank: dto.bank.map(BankDetails::from),
        }
    }
}

impl TryFrom<InvoiceRecordDto> for InvoiceRecord {
    type Error = EngineError;

    fn try_from(dto: InvoiceRecordDto) -> Result<Self, Self::Error> {
        let invoice_number = dto.invoice_number.trim().to_string();
        if invoice_number.is_empty() {
            return Err(reject_record(
                &dto.invoice_number,
                "blank_invoice_number",
                anyhow::anyhow!("invoice number is required"),
            ));
        }

        if dto.tax_rate_percent < Decimal::ZERO || dto.tax_rate_percent > Decimal::ONE_HUNDRED {
            return Err(reject_record(
                &invoice_number,
                "tax_rate_out_of_range",
                anyhow::anyhow!(
                    "tax rate {} is outside the 0..=100 percent range",
                    dto.tax_rate_percent
                ),
            ));
        }

        let items = dto
            .items
            .into_iter()
            .map(LineItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(InvoiceRecord {
            invoice_number,
            issue_date: dto.issue_date,
            billed_party: dto.billed_party.into(),
            issuing_entity: dto.issuing_entity.into(),
            tax_rate_percent: dto.tax_rate_percent,
            items,
            amount_in_words: dto.amount_in_words_text,
        })
    }
}
