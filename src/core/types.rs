use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The invoice record — sole input to validation and serialization.
///
/// Every field is optional on the wire so that incomplete input still
/// deserializes; [`missing_fields`](crate::core::missing_fields) decides
/// what is actually required. Numeric fields distinguish "absent" (`None`)
/// from "zero" (`Some(0)`) — zero is a present value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceRecord {
    /// Invoice number.
    pub id: String,
    /// Issue date, `YYYYMMDD` on the wire.
    #[serde(with = "compact_date")]
    pub issue_date: Option<NaiveDate>,
    /// Payment due date, `YYYYMMDD` on the wire.
    #[serde(with = "compact_date")]
    pub due_date: Option<NaiveDate>,
    /// Invoice currency (ISO 4217, e.g. "EUR").
    pub currency: String,
    /// Grand total including tax.
    pub total_amount: Option<Decimal>,
    /// Seller party.
    pub supplier: Party,
    /// Buyer party.
    pub customer: Party,
    /// Document-level tax summary.
    pub tax_total: TaxSummary,
    /// Payment instructions.
    pub payment_details: Option<PaymentInfo>,
    /// Free-text notes, rendered as repeated elements in input order.
    pub notes: Vec<String>,
    /// Invoice lines, rendered in input order. At least one is required.
    pub line_items: Vec<LineItem>,
}

/// Seller or buyer party.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Party {
    pub name: String,
    /// Country code (ISO 3166-1 alpha-2).
    pub country: String,
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    /// VAT registration number, emitted with `schemaId="VA"`.
    pub tax_number: Option<String>,
    /// Legal entity registration, emitted with `schemaId="FC"` (supplier only).
    #[serde(rename = "legalEntityID")]
    pub legal_entity_id: Option<String>,
}

/// Document-level tax totals.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxSummary {
    pub tax_amount: Option<Decimal>,
    pub tax_percentage: Option<Decimal>,
}

/// Payment instructions. Each field is independently optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentInfo {
    /// Payment means type code (UNTDID 4461, e.g. "58" for SEPA transfer).
    pub payment_means_code: Option<String>,
    /// Remittance / payment reference.
    #[serde(rename = "paymentID")]
    pub payment_id: Option<String>,
    pub bank_details: Option<BankDetails>,
}

/// Creditor bank account and institution details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BankDetails {
    pub account_name: Option<String>,
    pub iban: Option<String>,
    pub bic: Option<String>,
    pub bank_name: Option<String>,
}

/// A single invoice line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineItem {
    pub id: String,
    pub description: String,
    pub quantity: Option<Decimal>,
    pub unit_price: Option<Decimal>,
    pub line_total: Option<Decimal>,
}

/// Serde helpers for the compact `YYYYMMDD` date format used on the wire
/// and in CII `udt:DateTimeString` elements (format code 102).
pub(crate) mod compact_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub(crate) const FORMAT: &str = "%Y%m%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt = Option::<String>::deserialize(deserializer)?;
        match opt.as_deref() {
            // An empty string counts as absent, same as a missing key.
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, FORMAT)
                .map(Some)
                .map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deserializes_from_empty_object() {
        let record: InvoiceRecord = serde_json::from_str("{}").unwrap();
        assert!(record.id.is_empty());
        assert!(record.issue_date.is_none());
        assert!(record.total_amount.is_none());
        assert!(record.line_items.is_empty());
    }

    #[test]
    fn compact_date_round_trip() {
        let record: InvoiceRecord =
            serde_json::from_str(r#"{"issueDate": "20240115"}"#).unwrap();
        assert_eq!(
            record.issue_date,
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""issueDate":"20240115""#));
    }

    #[test]
    fn empty_date_string_is_absent() {
        let record: InvoiceRecord =
            serde_json::from_str(r#"{"issueDate": ""}"#).unwrap();
        assert!(record.issue_date.is_none());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = r#"{
            "paymentDetails": {
                "paymentMeansCode": "58",
                "paymentID": "REF-1",
                "bankDetails": {"iban": "DE89370400440532013000"}
            },
            "supplier": {"legalEntityID": "HRB 12345"}
        }"#;
        let record: InvoiceRecord = serde_json::from_str(json).unwrap();
        let payment = record.payment_details.unwrap();
        assert_eq!(payment.payment_means_code.as_deref(), Some("58"));
        assert_eq!(payment.payment_id.as_deref(), Some("REF-1"));
        assert!(payment.bank_details.unwrap().iban.is_some());
        assert_eq!(record.supplier.legal_entity_id.as_deref(), Some("HRB 12345"));
    }
}
