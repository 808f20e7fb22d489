use super::error::ZugferdError;
use super::types::*;

/// Walk the mandatory-field checklist and return the path of every field
/// that is absent, in checklist order. Returns all violations found, not
/// just the first.
///
/// Presence semantics: string fields count as present when non-empty;
/// numeric fields count as present when set at all, so a value of zero
/// passes. Paths use the wire spelling (`issueDate`, `lineItems[0].id`).
pub fn missing_fields(record: &InvoiceRecord) -> Vec<String> {
    let mut missing = Vec::new();

    if record.id.is_empty() {
        missing.push("id".to_string());
    }
    if record.issue_date.is_none() {
        missing.push("issueDate".to_string());
    }
    if record.currency.is_empty() {
        missing.push("currency".to_string());
    }
    if record.total_amount.is_none() {
        missing.push("totalAmount".to_string());
    }

    if record.supplier.name.is_empty() {
        missing.push("supplier.name".to_string());
    }
    if record.supplier.country.is_empty() {
        missing.push("supplier.country".to_string());
    }

    if record.customer.name.is_empty() {
        missing.push("customer.name".to_string());
    }
    if record.customer.country.is_empty() {
        missing.push("customer.country".to_string());
    }

    if record.tax_total.tax_amount.is_none() {
        missing.push("taxTotal.taxAmount".to_string());
    }
    if record.tax_total.tax_percentage.is_none() {
        missing.push("taxTotal.taxPercentage".to_string());
    }

    if record.line_items.is_empty() {
        // One violation for the whole collection; no per-item descent.
        missing.push("lineItems (at least one line item is required)".to_string());
    } else {
        for (i, item) in record.line_items.iter().enumerate() {
            if item.id.is_empty() {
                missing.push(format!("lineItems[{i}].id"));
            }
            if item.description.is_empty() {
                missing.push(format!("lineItems[{i}].description"));
            }
            if item.quantity.is_none() {
                missing.push(format!("lineItems[{i}].quantity"));
            }
            if item.unit_price.is_none() {
                missing.push(format!("lineItems[{i}].unitPrice"));
            }
            if item.line_total.is_none() {
                missing.push(format!("lineItems[{i}].lineTotal"));
            }
        }
    }

    missing
}

/// Validate that the record carries every mandatory field.
///
/// Returns `Ok(())` when the record is complete, otherwise a single
/// [`ZugferdError::Validation`] aggregating every missing path.
pub fn validate(record: &InvoiceRecord) -> Result<(), ZugferdError> {
    let missing = missing_fields(record);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ZugferdError::Validation(missing))
    }
}
