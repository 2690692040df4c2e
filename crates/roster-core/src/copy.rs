//! Cross-entity address snapshot
//!
//! Copies a declared subset of address fields onto a tax invoice's
//! registered-address fields. The subset is an explicit allow-list, not
//! structural matching, so schema drift on either side cannot silently
//! widen the copy.

use roster_domain::{EntityId, Record};

use crate::mutation::{AddressField, TaxInvoiceField};

/// The declared field pairs copied by [`apply_address_to_tax`].
pub const ADDRESS_SNAPSHOT_FIELDS: &[(AddressField, TaxInvoiceField)] = &[
    (AddressField::Number, TaxInvoiceField::Number),
    (AddressField::VillageNo, TaxInvoiceField::VillageNo),
    (AddressField::Village, TaxInvoiceField::Village),
    (AddressField::Lane, TaxInvoiceField::Lane),
    (AddressField::Road, TaxInvoiceField::Road),
    (AddressField::Subdistrict, TaxInvoiceField::Subdistrict),
    (AddressField::District, TaxInvoiceField::District),
    (AddressField::Province, TaxInvoiceField::Province),
    (AddressField::Zipcode, TaxInvoiceField::Zipcode),
    (AddressField::Maps, TaxInvoiceField::Maps),
];

/// Overlay the snapshot subset of `address` onto `tax`, producing a new
/// record. Either id missing (canonical string comparison) leaves the
/// record unchanged. The copy is a one-time value snapshot: later edits to
/// the address do not reach the invoice.
pub fn apply_address_to_tax(record: &Record, tax: &EntityId, address: &EntityId) -> Record {
    let mut next = record.clone();
    let Some(source) = record.addresses.iter().find(|a| &a.id == address) else {
        return next;
    };
    if let Some(invoice) = next.tax_invoices.iter_mut().find(|t| &t.id == tax) {
        for (from, to) in ADDRESS_SNAPSHOT_FIELDS {
            to.set(invoice, from.get(source).to_string());
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_domain::{Address, RecordKind, TaxInvoice};

    fn record() -> Record {
        let mut record = Record::new(RecordKind::Customer);
        record.addresses.push(
            Address::with_id("a1".into())
                .with_number("99")
                .with_province("Bangkok"),
        );
        record
            .tax_invoices
            .push(TaxInvoice::with_id("t1".into()).with_company("Acme"));
        record
    }

    #[test]
    fn copies_declared_subset_only() {
        let next = apply_address_to_tax(&record(), &"t1".into(), &"a1".into());
        let invoice = &next.tax_invoices[0];
        assert_eq!(invoice.number, "99");
        assert_eq!(invoice.province, "Bangkok");
        assert_eq!(invoice.company, "Acme");
        assert_eq!(invoice.branch, "00000");
        assert!(invoice.tax_id.is_empty());
    }

    #[test]
    fn missing_address_is_a_no_op() {
        let original = record();
        let next = apply_address_to_tax(&original, &"t1".into(), &"missing".into());
        assert_eq!(next, original);
    }

    #[test]
    fn missing_invoice_is_a_no_op() {
        let original = record();
        let next = apply_address_to_tax(&original, &"missing".into(), &"a1".into());
        assert_eq!(next, original);
    }

    #[test]
    fn snapshot_is_disconnected_from_source() {
        let copied = apply_address_to_tax(&record(), &"t1".into(), &"a1".into());
        let mut edited = copied.clone();
        edited.addresses[0].province = "Chiang Mai".to_string();
        assert_eq!(edited.tax_invoices[0].province, "Bangkok");
    }

    #[test]
    fn empty_source_fields_overwrite_with_empty() {
        let mut original = record();
        original.tax_invoices[0].road = "Sukhumvit".to_string();
        let next = apply_address_to_tax(&original, &"t1".into(), &"a1".into());
        // Address has no road, so the stale invoice value is cleared.
        assert!(next.tax_invoices[0].road.is_empty());
    }
}
