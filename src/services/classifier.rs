use crate::models::{FieldMap, ProcedureBundle, NEW_PATIENT_VISIT, OFFICE_VISIT};

use super::identifiers::{ClaimIdSource, ClaimIdentifiers};

/// Case-sensitive phrase that selects the office visit procedure.
pub const OFFICE_VISIT_MARKER: &str = "Office Visit";

/// Picks the procedure bundle for a requirement document.
pub fn procedure_for(document_text: &str) -> &'static ProcedureBundle {
    if document_text.contains(OFFICE_VISIT_MARKER) {
        &OFFICE_VISIT
    } else {
        &NEW_PATIENT_VISIT
    }
}

/// Derives the procedure fields from `document_text` and draws a fresh set
/// of claim identifiers from `ids`.
pub fn classify(document_text: &str, ids: &dyn ClaimIdSource) -> FieldMap {
    let procedure = procedure_for(document_text);
    tracing::debug!(
        procedure_code = procedure.procedure_code,
        "Classified requirement document"
    );

    let mut fields = FieldMap::new();
    ClaimIdentifiers::generate(ids).fill(&mut fields);
    procedure.fill(&mut fields);
    fields
}
