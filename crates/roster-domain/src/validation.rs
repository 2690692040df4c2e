//! Validation for records

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Severity of a validation error
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

/// A validation error or warning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

/// Validate a record and return errors/warnings.
///
/// Advisory only: mutations never validate, and the persistence
/// collaborator decides what to do with the list at save time.
pub fn validate_record(record: &Record) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if record.name.is_empty() {
        errors.push(ValidationError {
            field: "name".to_string(),
            message: "Name is required".to_string(),
            severity: ValidationSeverity::Error,
        });
    }

    for invoice in &record.tax_invoices {
        if invoice.company.is_empty() {
            errors.push(ValidationError {
                field: format!("tax_invoices.{}.company", invoice.id),
                message: "Company name is required on a tax invoice".to_string(),
                severity: ValidationSeverity::Error,
            });
        }
        if invoice.tax_id.is_empty() {
            errors.push(ValidationError {
                field: format!("tax_invoices.{}.tax_id", invoice.id),
                message: "Tax id is required on a tax invoice".to_string(),
                severity: ValidationSeverity::Error,
            });
        }
    }

    for account in &record.bank_accounts {
        if account.account_number.is_empty() {
            errors.push(ValidationError {
                field: format!("bank_accounts.{}.account_number", account.id),
                message: "Account number is recommended".to_string(),
                severity: ValidationSeverity::Warning,
            });
        }
    }

    for document in &record.documents {
        if document.doc_type.is_empty() {
            errors.push(ValidationError {
                field: format!("documents.{}.doc_type", document.id),
                message: "Document type is recommended".to_string(),
                severity: ValidationSeverity::Warning,
            });
        }
    }

    errors
}
