//! CII (Cross Industry Invoice) XML serialization for ZUGFeRD.
//!
//! [`to_cii_xml`] maps an [`InvoiceRecord`] onto a fixed, namespaced
//! element tree. It assumes the record already passed
//! [`validate`](crate::core::validate) and does not re-check it: an
//! unvalidated record yields well-formed but semantically incomplete XML
//! (absent fields simply produce no elements), never a panic.

pub(crate) mod xml_utils;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::*;
use xml_utils::{XmlResult, XmlWriter};

pub use xml_utils::{escape_xml, format_amount};

/// CII namespace URIs declared on the document root.
pub mod cii_ns {
    pub const RSM: &str = "urn:un:unece:uncefact:data:standard:CrossIndustryInvoice:100";
    pub const RAM: &str =
        "urn:un:unece:uncefact:data:standard:ReusableAggregateBusinessInformationEntity:100";
    pub const UDT: &str = "urn:un:unece:uncefact:data:standard:UnqualifiedDataType:100";
    /// Declared on the root for toolchain compatibility; no emitted element
    /// uses this prefix.
    pub const UBL: &str = "urn:oasis:names:specification:ubl:schema:xsd:Invoice-2";
}

/// Guideline identifier emitted in the document context block.
pub const GUIDELINE_ID: &str = "ZUGFeRD";

/// UNTDID 1001 type code 380 — commercial invoice.
pub const INVOICE_TYPE_CODE: &str = "380";

/// Generate the ZUGFeRD CII XML document for an invoice record.
pub fn to_cii_xml(record: &InvoiceRecord) -> XmlResult {
    let currency = record.currency.as_str();
    let mut w = XmlWriter::new()?;

    w.start_element_with_attrs(
        "rsm:CrossIndustryInvoice",
        &[
            ("xmlns:rsm", cii_ns::RSM),
            ("xmlns:ram", cii_ns::RAM),
            ("xmlns:udt", cii_ns::UDT),
            ("xmlns:ubl", cii_ns::UBL),
        ],
    )?;

    // --- ExchangedDocumentContext ---
    w.start_element("rsm:ExchangedDocumentContext")?;
    w.start_element("ram:GuidelineSpecifiedDocumentContextParameter")?;
    w.text_element("ram:ID", GUIDELINE_ID)?;
    w.end_element("ram:GuidelineSpecifiedDocumentContextParameter")?;
    w.end_element("rsm:ExchangedDocumentContext")?;

    // --- ExchangedDocument ---
    w.start_element("rsm:ExchangedDocument")?;
    w.text_element("ram:ID", &record.id)?;
    w.text_element("ram:TypeCode", INVOICE_TYPE_CODE)?;
    write_cii_date(&mut w, "ram:IssueDateTime", record.issue_date)?;
    for note in &record.notes {
        w.start_element("ram:IncludedNote")?;
        w.text_element("ram:Content", note)?;
        w.end_element("ram:IncludedNote")?;
    }
    w.end_element("rsm:ExchangedDocument")?;

    // --- SupplyChainTradeTransaction ---
    w.start_element("rsm:SupplyChainTradeTransaction")?;

    w.start_element("ram:ApplicableHeaderTradeAgreement")?;
    write_party(&mut w, &record.supplier, "ram:SellerTradeParty", true)?;
    write_party(&mut w, &record.customer, "ram:BuyerTradeParty", false)?;
    w.end_element("ram:ApplicableHeaderTradeAgreement")?;

    // Payment means sits between the agreement and settlement blocks.
    if let Some(payment) = &record.payment_details {
        w.start_element("ram:SpecifiedTradeSettlementPaymentMeans")?;
        if let Some(code) = &payment.payment_means_code {
            w.text_element("ram:TypeCode", code)?;
        }
        if let Some(id) = &payment.payment_id {
            w.text_element("ram:ID", id)?;
        }
        if let Some(bank) = &payment.bank_details {
            w.start_element("ram:PayeePartyCreditorFinancialAccount")?;
            if let Some(iban) = &bank.iban {
                w.text_element("ram:IBANID", iban)?;
            }
            if let Some(name) = &bank.account_name {
                w.text_element("ram:AccountName", name)?;
            }
            w.end_element("ram:PayeePartyCreditorFinancialAccount")?;

            w.start_element("ram:PayeeSpecifiedCreditorFinancialInstitution")?;
            if let Some(bic) = &bank.bic {
                w.text_element("ram:BICID", bic)?;
            }
            if let Some(name) = &bank.bank_name {
                w.text_element("ram:Name", name)?;
            }
            w.end_element("ram:PayeeSpecifiedCreditorFinancialInstitution")?;
        }
        w.end_element("ram:SpecifiedTradeSettlementPaymentMeans")?;
    }

    // --- ApplicableHeaderTradeSettlement ---
    w.start_element("ram:ApplicableHeaderTradeSettlement")?;
    w.start_element("ram:TaxTotal")?;
    w.amount_element(
        "ram:TaxAmount",
        record.tax_total.tax_amount.unwrap_or(Decimal::ZERO),
        currency,
    )?;
    w.start_element("ram:TaxSubtotal")?;
    w.text_element(
        "ram:Percent",
        &format_amount(record.tax_total.tax_percentage.unwrap_or(Decimal::ZERO)),
    )?;
    w.end_element("ram:TaxSubtotal")?;
    w.end_element("ram:TaxTotal")?;

    if record.due_date.is_some() {
        w.start_element("ram:SpecifiedTradePaymentTerms")?;
        write_cii_date(&mut w, "ram:DueDateDateTime", record.due_date)?;
        w.end_element("ram:SpecifiedTradePaymentTerms")?;
    }

    w.amount_element(
        "ram:GrandTotalAmount",
        record.total_amount.unwrap_or(Decimal::ZERO),
        currency,
    )?;
    w.end_element("ram:ApplicableHeaderTradeSettlement")?;

    // Line items follow the settlement block, in input order.
    for item in &record.line_items {
        write_line_item(&mut w, item, currency)?;
    }

    w.end_element("rsm:SupplyChainTradeTransaction")?;
    w.end_element("rsm:CrossIndustryInvoice")?;

    w.into_string()
}

fn write_cii_date(
    w: &mut XmlWriter,
    element: &str,
    date: Option<NaiveDate>,
) -> Result<(), ZugferdError> {
    let text = date
        .map(|d| d.format("%Y%m%d").to_string())
        .unwrap_or_default();
    w.start_element(element)?;
    w.text_element_with_attrs("udt:DateTimeString", &text, &[("format", "102")])?;
    w.end_element(element)?;
    Ok(())
}

fn write_party(
    w: &mut XmlWriter,
    party: &Party,
    element: &str,
    is_supplier: bool,
) -> Result<(), ZugferdError> {
    w.start_element(element)?;
    w.text_element("ram:Name", &party.name)?;

    if let Some(tax_number) = &party.tax_number {
        w.start_element("ram:SpecifiedTaxRegistration")?;
        w.text_element_with_attrs("ram:ID", tax_number, &[("schemaId", "VA")])?;
        w.end_element("ram:SpecifiedTaxRegistration")?;
    }
    // The FC registration applies to the seller only.
    if is_supplier {
        if let Some(legal_id) = &party.legal_entity_id {
            w.start_element("ram:SpecifiedTaxRegistration")?;
            w.text_element_with_attrs("ram:ID", legal_id, &[("schemaId", "FC")])?;
            w.end_element("ram:SpecifiedTaxRegistration")?;
        }
    }

    // Address block only when at least one address field is present; the
    // country code is emitted only inside that block.
    if party.street.is_some() || party.city.is_some() || party.postal_code.is_some() {
        w.start_element("ram:PostalTradeAddress")?;
        if let Some(street) = &party.street {
            w.text_element("ram:LineOne", street)?;
        }
        if let Some(postal_code) = &party.postal_code {
            w.text_element("ram:PostcodeCode", postal_code)?;
        }
        if let Some(city) = &party.city {
            w.text_element("ram:CityName", city)?;
        }
        w.text_element("ram:CountryID", &party.country)?;
        w.end_element("ram:PostalTradeAddress")?;
    }

    w.end_element(element)?;
    Ok(())
}

fn write_line_item(
    w: &mut XmlWriter,
    item: &LineItem,
    currency: &str,
) -> Result<(), ZugferdError> {
    w.start_element("ram:IncludedSupplyChainTradeLineItem")?;

    w.start_element("ram:AssociatedDocumentLineDocument")?;
    w.text_element("ram:LineID", &item.id)?;
    w.end_element("ram:AssociatedDocumentLineDocument")?;

    w.start_element("ram:SpecifiedTradeProduct")?;
    w.text_element("ram:Name", &item.description)?;
    w.end_element("ram:SpecifiedTradeProduct")?;

    w.start_element("ram:SpecifiedLineTradeAgreement")?;
    w.start_element("ram:GrossPriceProductTradePrice")?;
    w.text_element(
        "ram:ChargeAmount",
        &format_amount(item.unit_price.unwrap_or(Decimal::ZERO)),
    )?;
    w.end_element("ram:GrossPriceProductTradePrice")?;
    w.end_element("ram:SpecifiedLineTradeAgreement")?;

    // quantity is validated as mandatory but never emitted; downstream
    // readers expect the current element set.
    w.start_element("ram:SpecifiedLineSupplyChainTradeSettlement")?;
    w.amount_element(
        "ram:LineTotalAmount",
        item.line_total.unwrap_or(Decimal::ZERO),
        currency,
    )?;
    w.end_element("ram:SpecifiedLineSupplyChainTradeSettlement")?;

    w.end_element("ram:IncludedSupplyChainTradeLineItem")?;
    Ok(())
}
