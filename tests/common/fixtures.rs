use selo::{CompanyLabelInfo, InstructionSet, SealData};

/// A company with a valid CNPJ, a multi-segment address and a contact person.
pub fn company(name: &str) -> CompanyLabelInfo {
    CompanyLabelInfo {
        name: name.to_string(),
        address: "Av. Paulista, 1000, Bela Vista, São Paulo, SP".to_string(),
        cnpj: "11222333000181".to_string(),
        contact_person: Some("Jane".to_string()),
        phone: Some("(11) 5555-0000".to_string()),
    }
}

/// A seal for `count` companies named `Loja 1`, `Loja 2`, ...
pub fn seal_with_companies(count: usize) -> SealData {
    SealData {
        campaign_name: "Campanha de Teste".to_string(),
        sender: "ACME Distribuidora\nRua das Flores, 123".to_string(),
        companies: (1..=count).map(|i| company(&format!("Loja {i}"))).collect(),
        ..Default::default()
    }
}

/// The "Dia das Mães" campaign: one store, fragile only, observation addressed to the manager.
pub fn dia_das_maes() -> SealData {
    SealData {
        campaign_name: "Dia das Mães".to_string(),
        sender: "ACME\nRua X, 1".to_string(),
        observation: "A/C Gestor".to_string(),
        instructions: InstructionSet { fragile: true, ..Default::default() },
        companies: vec![CompanyLabelInfo {
            name: "Loja A".to_string(),
            address: "Rua Y, 10, Bairro, Cidade, UF".to_string(),
            cnpj: "11222333000181".to_string(),
            contact_person: None,
            phone: None,
        }],
        ..Default::default()
    }
}

/// The same campaign as [`dia_das_maes`], in the host application's JSON shape.
pub const DIA_DAS_MAES_JSON: &str = r#"{
    "campaignName": "Dia das Mães",
    "sender": "ACME\nRua X, 1",
    "observation": "A/C Gestor",
    "instructions": { "fragile": true, "attention": false, "handleWithCare": false, "thisWayUp": false },
    "companies": [
        { "name": "Loja A", "cnpj": "11222333000181", "address": "Rua Y, 10, Bairro, Cidade, UF" }
    ]
}"#;

pub fn all_instructions() -> InstructionSet {
    InstructionSet { fragile: true, attention: true, handle_with_care: true, this_way_up: true }
}
