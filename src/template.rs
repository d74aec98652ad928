//! Placeholder templates.
//!
//! A template is parsed once into literal runs and `{NAME}` placeholders.
//! Rendering walks that sequence a single time, so a substituted value is
//! never scanned again for placeholders.

use crate::models::FieldMap;

/// Medicare claim request layout. One service line, provider block last.
pub const MEDICARE_CLAIM_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<MedicareClaimRequest xmlns="http://medicare.gov/claims/2023">
    <Header>
        <TransactionId>{TRANSACTION_ID}</TransactionId>
        <SubmissionDate>{SUBMISSION_DATE}</SubmissionDate>
        <ProviderNPI>{PROVIDER_NPI}</ProviderNPI>
        <BatchNumber>{BATCH_NUMBER}</BatchNumber>
    </Header>
    
    <MembershipInfo>
        <MemberID>{MEMBER_ID}</MemberID>
        <MedicareBeneficiaryId>{MEDICARE_ID}</MedicareBeneficiaryId>
        <FirstName>{FIRST_NAME}</FirstName>
        <LastName>{LAST_NAME}</LastName>
        <DateOfBirth>{DATE_OF_BIRTH}</DateOfBirth>
        <Gender>{GENDER}</Gender>
        <Address>
            <Street>{STREET}</Street>
            <City>{CITY}</City>
            <State>{STATE}</State>
            <ZipCode>{ZIP_CODE}</ZipCode>
        </Address>
        <EffectiveDate>{EFFECTIVE_DATE}</EffectiveDate>
        <PlanType>{PLAN_TYPE}</PlanType>
    </MembershipInfo>
    
    <ClaimDetails>
        <ClaimNumber>{CLAIM_NUMBER}</ClaimNumber>
        <ServiceDate>{SERVICE_DATE}</ServiceDate>
        <PlaceOfService>{PLACE_OF_SERVICE}</PlaceOfService>
        <TypeOfBill>{TYPE_OF_BILL}</TypeOfBill>
        
        <ServiceLines>
            <ServiceLine>
                <LineNumber>1</LineNumber>
                <ProcedureCode>{PROCEDURE_CODE}</ProcedureCode>
                <ProcedureDescription>{PROCEDURE_DESCRIPTION}</ProcedureDescription>
                <Quantity>1</Quantity>
                <ChargedAmount>{CHARGED_AMOUNT}</ChargedAmount>
                <DiagnosisCode>{DIAGNOSIS_CODE}</DiagnosisCode>
                <ModifierCode>{MODIFIER_CODE}</ModifierCode>
            </ServiceLine>
        </ServiceLines>
        
        <TotalChargedAmount>{TOTAL_AMOUNT}</TotalChargedAmount>
    </ClaimDetails>
    
    <ProviderInfo>
        <ProviderName>{PROVIDER_NAME}</ProviderName>
        <ProviderNPI>{PROVIDER_NPI}</ProviderNPI>
        <TaxId>{TAX_ID}</TaxId>
        <Address>
            <Street>{PROVIDER_STREET}</Street>
            <City>{PROVIDER_CITY}</City>
            <State>{PROVIDER_STATE}</State>
            <ZipCode>{PROVIDER_ZIP}</ZipCode>
        </Address>
        <PhoneNumber>{PHONE_NUMBER}</PhoneNumber>
    </ProviderInfo>
</MedicareClaimRequest>"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Splits `source` into literal runs and placeholders.
    ///
    /// A placeholder is `{` + one or more characters other than braces + `}`.
    /// Every other brace is literal text. Whether a placeholder is filled
    /// is decided at render time.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(open) = rest.find('{') {
            literal.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            match after.find('}') {
                Some(close) if is_placeholder_name(&after[..close]) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(after[..close].to_string()));
                    rest = &after[close + 1..];
                }
                _ => {
                    literal.push('{');
                    rest = after;
                }
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Template { segments }
    }

    pub fn medicare_claim() -> Self {
        Self::parse(MEDICARE_CLAIM_TEMPLATE)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in document order, repeats included.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Placeholder names that `fields` has no value for.
    pub fn unresolved<'a>(&'a self, fields: &FieldMap) -> Vec<&'a str> {
        let mut missing: Vec<&str> = Vec::new();
        for name in self.placeholders() {
            if !fields.contains_key(name) && !missing.contains(&name) {
                missing.push(name);
            }
        }
        missing
    }

    /// Substitutes every placeholder that has a value in `fields`.
    /// Placeholders without a value are written back as `{NAME}`.
    pub fn render(&self, fields: &FieldMap) -> String {
        let mut out = String::with_capacity(self.estimated_len(fields));

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => match fields.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                },
            }
        }

        out
    }

    fn estimated_len(&self, fields: &FieldMap) -> usize {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.len(),
                Segment::Placeholder(name) => {
                    fields.get(name).map_or(name.len() + 2, String::len)
                }
            })
            .sum()
    }
}

/// Parses `template` and renders it against `fields` in one call.
pub fn render(template: &str, fields: &FieldMap) -> String {
    Template::parse(template).render(fields)
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('{')
}
