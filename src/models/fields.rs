use std::collections::HashMap;

/// Field name to field value. Keys are either request keys (`memberId`)
/// or template placeholder names (`MEMBER_ID`), depending on the stage.
pub type FieldMap = HashMap<String, String>;

/// A membership field accepted from callers, with the placeholder it fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub placeholder: &'static str,
    pub default: &'static str,
}

pub const MEMBERSHIP_FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "memberId", placeholder: "MEMBER_ID", default: "MBR123456789" },
    FieldSpec { key: "medicareId", placeholder: "MEDICARE_ID", default: "1AB2CD3EF45" },
    FieldSpec { key: "firstName", placeholder: "FIRST_NAME", default: "John" },
    FieldSpec { key: "lastName", placeholder: "LAST_NAME", default: "Doe" },
    FieldSpec { key: "dateOfBirth", placeholder: "DATE_OF_BIRTH", default: "1945-06-15" },
    FieldSpec { key: "gender", placeholder: "GENDER", default: "M" },
    FieldSpec { key: "street", placeholder: "STREET", default: "123 Main Street" },
    FieldSpec { key: "city", placeholder: "CITY", default: "Anytown" },
    FieldSpec { key: "state", placeholder: "STATE", default: "CA" },
    FieldSpec { key: "zipCode", placeholder: "ZIP_CODE", default: "90210" },
    FieldSpec { key: "effectiveDate", placeholder: "EFFECTIVE_DATE", default: "2023-01-01" },
    FieldSpec { key: "planType", placeholder: "PLAN_TYPE", default: "Medicare Part B" },
    FieldSpec { key: "serviceDate", placeholder: "SERVICE_DATE", default: "2023-11-15" },
];

/// Claim-level values that never come from the caller.
pub const CLAIM_CONSTANTS: &[(&str, &str)] = &[
    ("PLACE_OF_SERVICE", "11"),
    ("TYPE_OF_BILL", "131"),
];

pub const PROVIDER_FIELDS: &[(&str, &str)] = &[
    ("PROVIDER_NAME", "ABC Medical Center"),
    ("PROVIDER_NPI", "1234567890"),
    ("TAX_ID", "12-3456789"),
    ("PROVIDER_STREET", "456 Healthcare Blvd"),
    ("PROVIDER_CITY", "Medical City"),
    ("PROVIDER_STATE", "CA"),
    ("PROVIDER_ZIP", "90211"),
    ("PHONE_NUMBER", "555-123-4567"),
];

/// Returns the caller's value for `field`, or `default` when the key is absent.
/// A present but empty value is kept as is.
pub fn resolve(input: &FieldMap, field: &str, default: &str) -> String {
    input
        .get(field)
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

/// Resolves every membership field, keyed by placeholder name.
/// Keys outside the membership vocabulary are dropped.
pub fn resolve_membership(input: &FieldMap) -> FieldMap {
    MEMBERSHIP_FIELDS
        .iter()
        .map(|spec| {
            (
                spec.placeholder.to_string(),
                resolve(input, spec.key, spec.default),
            )
        })
        .collect()
}

/// Fills absent membership keys with their defaults, keyed by request key.
pub fn with_membership_defaults(mut input: FieldMap) -> FieldMap {
    for spec in MEMBERSHIP_FIELDS {
        input
            .entry(spec.key.to_string())
            .or_insert_with(|| spec.default.to_string());
    }
    input
}

/// The membership record used by the demonstration run.
pub fn sample_membership() -> FieldMap {
    with_membership_defaults(FieldMap::new())
}
