//! The input of a label generation request.
//!
//! A `SealData` is assembled by the host application from a campaign and the
//! companies selected for it, handed to one of the renderers and dropped. The
//! serde representation mirrors the host's camelCase wire shape.

use serde::{Deserialize, Serialize};

/// One client company that receives a label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyLabelInfo {
    pub name: String,
    /// Comma separated segments, e.g. `"Rua Y, 10, Bairro, Cidade, UF"`.
    pub address: String,
    /// Stored unformatted (digits only).
    pub cnpj: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Handling instructions printed on every label of a campaign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstructionSet {
    pub fragile: bool,
    pub attention: bool,
    pub handle_with_care: bool,
    pub this_way_up: bool,
}

/// A single handling instruction.
///
/// Variants are declared in display order, which intentionally differs from the
/// field order of [`InstructionSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Instruction {
    Fragile,
    ThisWayUp,
    HandleWithCare,
    Attention,
}

impl Instruction {
    pub const DISPLAY_ORDER: [Instruction; 4] = [
        Instruction::Fragile,
        Instruction::ThisWayUp,
        Instruction::HandleWithCare,
        Instruction::Attention,
    ];

    /// Stable identifier used in markup class names.
    pub fn key(self) -> &'static str {
        match self {
            Instruction::Fragile => "fragile",
            Instruction::ThisWayUp => "this-way-up",
            Instruction::HandleWithCare => "handle-with-care",
            Instruction::Attention => "attention",
        }
    }

    /// Human readable caption shown under the icon.
    pub fn caption(self) -> &'static str {
        match self {
            Instruction::Fragile => "Frágil",
            Instruction::ThisWayUp => "Este lado para cima",
            Instruction::HandleWithCare => "Manusear com cuidado",
            Instruction::Attention => "Atenção",
        }
    }
}

impl InstructionSet {
    pub fn is_set(&self, instruction: Instruction) -> bool {
        match instruction {
            Instruction::Fragile => self.fragile,
            Instruction::ThisWayUp => self.this_way_up,
            Instruction::HandleWithCare => self.handle_with_care,
            Instruction::Attention => self.attention,
        }
    }

    /// Active instructions in display order.
    pub fn active(&self) -> Vec<Instruction> {
        Instruction::DISPLAY_ORDER
            .into_iter()
            .filter(|i| self.is_set(*i))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        !(self.fragile || self.attention || self.handle_with_care || self.this_way_up)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SealData {
    pub campaign_name: String,
    pub sender: String,
    #[serde(default)]
    pub observation: String,
    #[serde(default)]
    pub instructions: InstructionSet,
    #[serde(default)]
    pub companies: Vec<CompanyLabelInfo>,
    #[serde(default)]
    pub organization_logo_url: Option<String>,
    #[serde(default)]
    pub organization_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_instructions_follow_display_order() {
        let set = InstructionSet {
            fragile: true,
            attention: true,
            handle_with_care: true,
            this_way_up: true,
        };
        assert_eq!(
            set.active(),
            vec![
                Instruction::Fragile,
                Instruction::ThisWayUp,
                Instruction::HandleWithCare,
                Instruction::Attention,
            ]
        );

        let set = InstructionSet { attention: true, this_way_up: true, ..Default::default() };
        assert_eq!(set.active(), vec![Instruction::ThisWayUp, Instruction::Attention]);
        assert!(!set.is_empty());
        assert!(InstructionSet::default().is_empty());
        assert!(InstructionSet::default().active().is_empty());
    }

    #[test]
    fn deserializes_host_payload() {
        let json = r#"{
            "campaignName": "Dia das Mães",
            "sender": "ACME\nRua X, 1",
            "instructions": { "fragile": true, "thisWayUp": true },
            "companies": [
                { "name": "Loja A", "address": "Rua Y, 10", "cnpj": "11222333000181", "contactPerson": "Jane" }
            ]
        }"#;
        let seal: SealData = serde_json::from_str(json).unwrap();
        assert_eq!(seal.observation, "");
        assert!(seal.instructions.fragile && seal.instructions.this_way_up);
        assert!(!seal.instructions.attention);
        assert_eq!(seal.companies[0].contact_person.as_deref(), Some("Jane"));
        assert_eq!(seal.companies[0].phone, None);
        assert_eq!(seal.organization_logo_url, None);
    }
}
