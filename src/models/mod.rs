pub mod fields;
pub mod procedure;

pub use fields::{
    resolve, resolve_membership, sample_membership, with_membership_defaults, FieldMap,
    FieldSpec, CLAIM_CONSTANTS, MEMBERSHIP_FIELDS, PROVIDER_FIELDS,
};
pub use procedure::{ProcedureBundle, NEW_PATIENT_VISIT, OFFICE_VISIT};
