mod common;

use medclaim::error::ClaimError;
use medclaim::models::{FieldMap, MEMBERSHIP_FIELDS};
use medclaim::services::{classify, ClaimGenerator, SystemIdSource};
use medclaim::template::{render, Template, MEDICARE_CLAIM_TEMPLATE};
use medclaim::validation::{check_required_elements, validate_claim_xml};
use std::sync::Arc;

#[test]
fn test_end_to_end_office_visit() {
    let ws = common::workspace("...Office Visit...");
    let generator = common::deterministic_generator(1);
    let input = common::membership(&[("memberId", "M1"), ("firstName", "Ann")]);

    let xml = generator
        .generate_from_requirement(&ws.requirement_path, &input)
        .expect("Failed to generate claim");

    assert!(xml.contains("<MemberID>M1</MemberID>"));
    assert!(xml.contains("<FirstName>Ann</FirstName>"));
    assert!(xml.contains("<ProcedureCode>99213</ProcedureCode>"));
    assert!(xml.contains("<ModifierCode>25</ModifierCode>"));
    assert!(validate_claim_xml(&xml));
}

#[test]
fn test_new_patient_without_marker() {
    let generator = common::deterministic_generator(1);
    let xml = generator.generate(common::NEW_PATIENT_REQUIREMENT, &FieldMap::new());

    assert!(xml.contains("<ProcedureCode>99201</ProcedureCode>"));
    assert!(xml.contains("<ProcedureDescription>New Patient Visit</ProcedureDescription>"));
    assert!(xml.contains("<ModifierCode></ModifierCode>"));
    assert!(xml.contains("<TotalChargedAmount>200.00</TotalChargedAmount>"));
}

#[test]
fn test_complete_field_map_renders_every_placeholder() {
    let generator = common::deterministic_generator(2);
    let fields = generator.build_fields(common::OFFICE_VISIT_REQUIREMENT, &FieldMap::new());

    let xml = render(MEDICARE_CLAIM_TEMPLATE, &fields);
    for name in Template::medicare_claim().placeholders() {
        assert!(!xml.contains(&format!("{{{}}}", name)), "{} left in output", name);
    }
}

#[test]
fn test_missing_key_stays_literal() {
    let generator = common::deterministic_generator(2);
    let mut fields = generator.build_fields(common::OFFICE_VISIT_REQUIREMENT, &FieldMap::new());
    fields.remove("CITY");

    let xml = render(MEDICARE_CLAIM_TEMPLATE, &fields);
    assert!(xml.contains("<City>{CITY}</City>"));
    assert!(xml.contains("<City>Medical City</City>"));
}

#[test]
fn test_membership_defaults_applied() {
    let generator = common::deterministic_generator(3);
    let xml = generator.generate(common::OFFICE_VISIT_REQUIREMENT, &FieldMap::new());

    for spec in MEMBERSHIP_FIELDS {
        assert!(xml.contains(spec.default), "default for {} missing", spec.key);
    }
}

#[test]
fn test_same_seed_reproduces_document() {
    let input = common::membership(&[("lastName", "Smith")]);

    let first = common::deterministic_generator(42).generate(common::OFFICE_VISIT_REQUIREMENT, &input);
    let second = common::deterministic_generator(42).generate(common::OFFICE_VISIT_REQUIREMENT, &input);

    assert_eq!(first, second);
    assert!(first.contains("<SubmissionDate>2024-01-15T10:30:00.000Z</SubmissionDate>"));
    assert!(first.contains("<ClaimNumber>CLM-2024-"));
}

#[test]
fn test_repeat_generation_differs_only_in_generated_fields() {
    let generator = ClaimGenerator::medicare(Arc::new(SystemIdSource));
    let input = common::membership(&[("memberId", "M7")]);

    let strip = |xml: &str| -> Vec<String> {
        xml.lines()
            .filter(|line| {
                !["<TransactionId>", "<SubmissionDate>", "<BatchNumber>", "<ClaimNumber>"]
                    .iter()
                    .any(|tag| line.contains(tag))
            })
            .map(str::to_string)
            .collect()
    };

    let first = generator.generate(common::OFFICE_VISIT_REQUIREMENT, &input);
    let second = generator.generate(common::OFFICE_VISIT_REQUIREMENT, &input);

    assert_eq!(strip(&first), strip(&second));
}

#[test]
fn test_classify_marker_selects_procedure() {
    let source = SystemIdSource;
    assert_eq!(classify("An Office Visit claim", &source)["PROCEDURE_CODE"], "99213");
    assert_eq!(classify("no marker here", &source)["PROCEDURE_CODE"], "99201");
}

#[test]
fn test_generate_and_save_round_trip() {
    let ws = common::workspace(common::OFFICE_VISIT_REQUIREMENT);
    let generator = common::deterministic_generator(5);

    let claim = generator
        .generate_and_save(&ws.requirement_path, &FieldMap::new(), &ws.output_path)
        .expect("Failed to generate claim");

    assert!(claim.report.is_valid());
    let saved = std::fs::read_to_string(&ws.output_path).expect("Failed to read saved claim");
    assert_eq!(saved, claim.xml);
}

#[test]
fn test_invalid_document_is_still_saved() {
    let ws = common::workspace("");
    let generator = ClaimGenerator::new(
        Template::parse("<Claim><MemberID>{MEMBER_ID}</MemberID></Claim>"),
        Arc::new(SystemIdSource),
    );

    let claim = generator
        .generate_and_save(&ws.requirement_path, &FieldMap::new(), &ws.output_path)
        .expect("Failed to generate claim");

    assert_eq!(claim.report.missing, Some("<TransactionId>"));
    assert_eq!(check_required_elements(&claim.xml), claim.report);
    assert_eq!(
        std::fs::read_to_string(&ws.output_path).unwrap(),
        "<Claim><MemberID>MBR123456789</MemberID></Claim>"
    );
}

#[test]
fn test_missing_requirement_aborts_generation() {
    let ws = common::workspace("");
    let generator = common::deterministic_generator(1);
    let missing = ws.dir.path().join("nope.txt");

    let err = generator
        .generate_and_save(&missing, &FieldMap::new(), &ws.output_path)
        .unwrap_err();

    assert!(matches!(err, ClaimError::RequirementRead { .. }));
    assert!(!ws.output_path.exists());
}
