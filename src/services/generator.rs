use std::path::Path;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{resolve_membership, FieldMap, CLAIM_CONSTANTS, PROVIDER_FIELDS};
use crate::template::Template;
use crate::validation::{check_required_elements, ValidationReport};

use super::classifier::classify;
use super::identifiers::ClaimIdSource;
use super::persistence::{read_requirement, save_claim_xml};

/// A rendered claim together with its structural check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedClaim {
    pub xml: String,
    pub report: ValidationReport,
}

/// Fills a claim template from a requirement document and membership input.
#[derive(Clone)]
pub struct ClaimGenerator {
    template: Template,
    ids: Arc<dyn ClaimIdSource>,
}

impl ClaimGenerator {
    pub fn new(template: Template, ids: Arc<dyn ClaimIdSource>) -> Self {
        Self { template, ids }
    }

    pub fn medicare(ids: Arc<dyn ClaimIdSource>) -> Self {
        Self::new(Template::medicare_claim(), ids)
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Every value the claim template needs, keyed by placeholder name.
    pub fn build_fields(&self, requirement_text: &str, membership: &FieldMap) -> FieldMap {
        let mut fields = classify(requirement_text, self.ids.as_ref());
        fields.extend(resolve_membership(membership));

        for (name, value) in CLAIM_CONSTANTS.iter().chain(PROVIDER_FIELDS) {
            fields.insert(name.to_string(), value.to_string());
        }

        fields
    }

    pub fn generate(&self, requirement_text: &str, membership: &FieldMap) -> String {
        let fields = self.build_fields(requirement_text, membership);

        let unresolved = self.template.unresolved(&fields);
        if !unresolved.is_empty() {
            tracing::debug!(?unresolved, "Template placeholders left unresolved");
        }

        self.template.render(&fields)
    }

    /// Reads the requirement document at `path` and renders a claim from it.
    /// A read failure aborts the whole generation.
    pub fn generate_from_requirement(&self, path: &Path, membership: &FieldMap) -> Result<String> {
        let requirement_text = read_requirement(path)?;
        tracing::debug!(path = %path.display(), "Processing requirement document");
        Ok(self.generate(&requirement_text, membership))
    }

    /// Generates, validates and saves a claim. An invalid claim is still saved.
    pub fn generate_and_save(
        &self,
        requirement_path: &Path,
        membership: &FieldMap,
        output_path: &Path,
    ) -> Result<GeneratedClaim> {
        let xml = self.generate_from_requirement(requirement_path, membership)?;
        let report = check_required_elements(&xml);
        tracing::info!(valid = report.is_valid(), "Claim XML validated");

        save_claim_xml(&xml, output_path)?;
        Ok(GeneratedClaim { xml, report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::identifiers::SeededIdSource;

    fn generator() -> ClaimGenerator {
        ClaimGenerator::medicare(Arc::new(SeededIdSource::new(11)))
    }

    #[test]
    fn test_full_field_set_leaves_no_placeholders() {
        let generator = generator();
        let fields = generator.build_fields("Office Visit", &FieldMap::new());

        assert!(generator.template().unresolved(&fields).is_empty());

        let xml = generator.template().render(&fields);
        assert!(!xml.contains("{"));
    }

    #[test]
    fn test_membership_input_overrides_defaults() {
        let mut membership = FieldMap::new();
        membership.insert("memberId".to_string(), "M1".to_string());
        membership.insert("firstName".to_string(), "Ann".to_string());

        let xml = generator().generate("...Office Visit...", &membership);

        assert!(xml.contains("<MemberID>M1</MemberID>"));
        assert!(xml.contains("<FirstName>Ann</FirstName>"));
        assert!(xml.contains("<LastName>Doe</LastName>"));
        assert!(xml.contains("<ProcedureCode>99213</ProcedureCode>"));
        assert!(xml.contains("<TotalChargedAmount>150.00</TotalChargedAmount>"));
        assert!(xml.contains("<ProviderNPI>1234567890</ProviderNPI>"));
    }

    #[test]
    fn test_template_without_placeholder_values() {
        let generator = ClaimGenerator::new(
            Template::parse("<Claim>{MEMBER_ID}{UNKNOWN}</Claim>"),
            Arc::new(SeededIdSource::new(1)),
        );

        let xml = generator.generate("", &FieldMap::new());
        assert_eq!(xml, "<Claim>MBR123456789{UNKNOWN}</Claim>");
    }
}
