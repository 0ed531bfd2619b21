//! Per-company label content, resolved once and consumed by both renderers.
//!
//! Everything a label shows is derived here from the `SealData` and the company's
//! position: numbering, the observation (with its contact-person fallback), the
//! active instructions in display order and the formatted CNPJ. Renderers only
//! decide casing, escaping and placement.

use crate::text::{address_segments, format_cnpj};
use selo_types::{CompanyLabelInfo, Instruction, SealData};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelContent {
    /// 1-based position of the company in the seal.
    pub position: usize,
    pub company_name: String,
    pub campaign_name: String,
    pub sender: String,
    /// The seal's observation, or `A/C <contact>` when it is blank.
    pub observation: Option<String>,
    pub instructions: Vec<Instruction>,
    pub address: String,
    pub address_segments: Vec<String>,
    /// CNPJ with its display mask applied.
    pub cnpj: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

impl LabelContent {
    /// Resolves the label of the company at `index` (0-based).
    pub fn derive(seal: &SealData, index: usize) -> Option<Self> {
        let company = seal.companies.get(index)?;
        Some(Self::for_company(seal, company, index + 1))
    }

    fn for_company(seal: &SealData, company: &CompanyLabelInfo, position: usize) -> Self {
        let contact_person = non_blank(company.contact_person.as_deref());
        let observation = non_blank(Some(&seal.observation))
            .or_else(|| contact_person.as_ref().map(|contact| format!("A/C {}", contact)));

        Self {
            position,
            company_name: company.name.clone(),
            campaign_name: seal.campaign_name.clone(),
            sender: seal.sender.clone(),
            observation,
            instructions: seal.instructions.active(),
            address: company.address.clone(),
            address_segments: address_segments(&company.address),
            cnpj: format_cnpj(&company.cnpj),
            contact_person,
            phone: non_blank(company.phone.as_deref()),
        }
    }

    /// Zero-padded store number, e.g. `001`.
    pub fn store_number(&self) -> String {
        format!("{:03}", self.position)
    }

    /// Banner text, e.g. `LOJA 001 | LOJA A`.
    pub fn strip_text(&self) -> String {
        format!("LOJA {} | {}", self.store_number(), self.company_name.to_uppercase())
    }

    pub fn has_instructions(&self) -> bool {
        !self.instructions.is_empty()
    }
}

/// Labels for every company, in seal order.
pub fn derive_all(seal: &SealData) -> Vec<LabelContent> {
    seal.companies
        .iter()
        .enumerate()
        .map(|(i, company)| LabelContent::for_company(seal, company, i + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use selo_types::InstructionSet;

    fn company(name: &str, contact: Option<&str>) -> CompanyLabelInfo {
        CompanyLabelInfo {
            name: name.into(),
            address: "Rua Y, 10, Bairro, Cidade, UF".into(),
            cnpj: "11222333000181".into(),
            contact_person: contact.map(Into::into),
            phone: None,
        }
    }

    fn seal(observation: &str, companies: Vec<CompanyLabelInfo>) -> SealData {
        SealData {
            campaign_name: "Dia das Mães".into(),
            sender: "ACME".into(),
            observation: observation.into(),
            instructions: InstructionSet { attention: true, fragile: true, ..Default::default() },
            companies,
            ..Default::default()
        }
    }

    #[test]
    fn numbering_follows_position() {
        let companies = (0..12).map(|i| company(&format!("Loja {i}"), None)).collect();
        let labels = derive_all(&seal("", companies));
        assert_eq!(labels[0].strip_text(), "LOJA 001 | LOJA 0");
        assert_eq!(labels[11].store_number(), "012");
    }

    #[test]
    fn observation_falls_back_to_contact_person() {
        let label = LabelContent::derive(&seal("", vec![company("A", Some("Jane"))]), 0).unwrap();
        assert_eq!(label.observation.as_deref(), Some("A/C Jane"));

        let label = LabelContent::derive(&seal("Custom", vec![company("A", Some("Jane"))]), 0).unwrap();
        assert_eq!(label.observation.as_deref(), Some("Custom"));

        let label = LabelContent::derive(&seal("  ", vec![company("A", Some(" "))]), 0).unwrap();
        assert_eq!(label.observation, None);
        assert_eq!(label.contact_person, None);
    }

    #[test]
    fn resolves_display_fields() {
        let label = LabelContent::derive(&seal("", vec![company("Loja A", None)]), 0).unwrap();
        assert_eq!(label.cnpj, "11.222.333/0001-81");
        assert_eq!(label.address_segments.len(), 5);
        assert_eq!(label.instructions, vec![Instruction::Fragile, Instruction::Attention]);
        assert!(LabelContent::derive(&seal("", vec![]), 0).is_none());
    }
}
