/// Opening tags a claim document must contain, checked in this order.
pub const REQUIRED_ELEMENTS: [&str; 6] = [
    "<TransactionId>",
    "<MemberID>",
    "<MedicareBeneficiaryId>",
    "<ClaimNumber>",
    "<ProcedureCode>",
    "<ProviderNPI>",
];

/// Outcome of the structural check. `missing` names the first absent tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    pub missing: Option<&'static str>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.missing.is_none()
    }

    pub fn label(&self) -> &'static str {
        if self.is_valid() {
            "VALID"
        } else {
            "INVALID"
        }
    }
}

/// Checks that every required opening tag appears somewhere in `document`.
///
/// This is a substring check only. Nesting, closing tags and well-formedness
/// are not looked at.
pub fn check_required_elements(document: &str) -> ValidationReport {
    let missing = REQUIRED_ELEMENTS
        .iter()
        .copied()
        .find(|element| !document.contains(*element));

    if let Some(element) = missing {
        tracing::warn!(element, "Missing required element");
    }

    ValidationReport { missing }
}

/// Returns true when all required elements are present.
pub fn validate_claim_xml(document: &str) -> bool {
    check_required_elements(document).is_valid()
}
