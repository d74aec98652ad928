use super::fields::FieldMap;

/// Procedure-related values for the single service line of a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcedureBundle {
    pub procedure_code: &'static str,
    pub description: &'static str,
    pub diagnosis_code: &'static str,
    pub charged_amount: &'static str,
    pub modifier_code: &'static str,
}

pub const OFFICE_VISIT: ProcedureBundle = ProcedureBundle {
    procedure_code: "99213",
    description: "Office Visit - Established Patient",
    diagnosis_code: "Z00.00",
    charged_amount: "150.00",
    modifier_code: "25",
};

pub const NEW_PATIENT_VISIT: ProcedureBundle = ProcedureBundle {
    procedure_code: "99201",
    description: "New Patient Visit",
    diagnosis_code: "Z00.01",
    charged_amount: "200.00",
    modifier_code: "",
};

impl ProcedureBundle {
    /// Writes the bundle into `fields` under its placeholder names.
    /// The claim total always equals the single line's charge.
    pub fn fill(&self, fields: &mut FieldMap) {
        let entries = [
            ("PROCEDURE_CODE", self.procedure_code),
            ("PROCEDURE_DESCRIPTION", self.description),
            ("DIAGNOSIS_CODE", self.diagnosis_code),
            ("CHARGED_AMOUNT", self.charged_amount),
            ("MODIFIER_CODE", self.modifier_code),
            ("TOTAL_AMOUNT", self.charged_amount),
        ];

        for (name, value) in entries {
            fields.insert(name.to_string(), value.to_string());
        }
    }
}
