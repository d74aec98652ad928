pub mod classifier;
pub mod generator;
pub mod identifiers;
pub mod persistence;

pub use classifier::{classify, procedure_for, OFFICE_VISIT_MARKER};
pub use generator::{ClaimGenerator, GeneratedClaim};
pub use identifiers::{
    id_source_for, ClaimIdSource, ClaimIdentifiers, SeededIdSource, SystemIdSource,
};
pub use persistence::{read_requirement, save_claim_xml};
