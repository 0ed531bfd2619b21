mod common;

use chrono::NaiveDate;
use common::fixtures::{all_instructions, dia_das_maes, seal_with_companies};
use common::pdf_assertions::{assert_page_count, count_operator, info_entry};
use common::{generate_pdf, init_logger, GeneratedPdf, TestResult};
use selo::{SeloConfig, VectorRenderer};

#[test]
fn test_one_page_per_company() -> TestResult {
    init_logger();
    for companies in [0, 1, 2, 3, 10] {
        let pdf = generate_pdf(&seal_with_companies(companies))?;
        assert_page_count(&pdf.doc, companies);
    }
    Ok(())
}

#[test]
fn test_pages_are_portrait_a4() -> TestResult {
    let pdf = generate_pdf(&seal_with_companies(1))?;
    let page_id = *pdf.doc.get_pages().get(&1).ok_or("missing page")?;
    let page = pdf.doc.get_object(page_id)?.as_dict()?;
    let media_box = page.get(b"MediaBox")?.as_array()?;
    let width = media_box[2].as_float()?;
    let height = media_box[3].as_float()?;
    assert!((width - 595.28).abs() < 0.01);
    assert!((height - 841.89).abs() < 0.01);
    Ok(())
}

#[test]
fn test_page_contents() -> TestResult {
    let pdf = generate_pdf(&seal_with_companies(2))?;
    let texts = pdf.page_texts(2);
    for expected in [
        "SELO DE ENVIO",
        "Campanha:",
        "Campanha de Teste",
        "DESTINATÁRIO",
        "Loja 2",
        "CNPJ: 11.222.333/0001-81",
        "A/C Jane",
        "Tel: (11) 5555-0000",
        "REMETENTE",
        "ACME Distribuidora",
        "Rua das Flores, 123",
    ] {
        assert!(texts.iter().any(|t| t == expected), "missing {:?} in {:?}", expected, texts);
    }
    Ok(())
}

#[test]
fn test_footer_numbers_pages_with_date() -> TestResult {
    let renderer = VectorRenderer::new(&SeloConfig::default())?;
    let date = NaiveDate::from_ymd_opt(2026, 5, 10).ok_or("invalid date")?;
    let document = renderer.render_on(&seal_with_companies(3), date);
    let pdf = GeneratedPdf::from_bytes(document.to_bytes()?)?;
    for page in 1..=3u32 {
        let footer = format!("Selo {} de 3 | 10/05/2026", page);
        assert!(pdf.page_texts(page).contains(&footer), "page {} lacks {:?}", page, footer);
    }
    Ok(())
}

#[test]
fn test_observation_block() -> TestResult {
    let mut seal = seal_with_companies(1);
    let pdf = generate_pdf(&seal)?;
    assert!(pdf.page_texts(1).contains(&"A/C Jane".to_string()));
    assert!(pdf.page_texts(1).contains(&"Observação:".to_string()));

    seal.observation = "Entregar pela manhã".to_string();
    let pdf = generate_pdf(&seal)?;
    assert!(pdf.page_texts(1).contains(&"Entregar pela manhã".to_string()));

    seal.observation = String::new();
    seal.companies[0].contact_person = None;
    let pdf = generate_pdf(&seal)?;
    assert!(!pdf.page_texts(1).contains(&"Observação:".to_string()));
    Ok(())
}

#[test]
fn test_instruction_box_and_captions() -> TestResult {
    let mut seal = seal_with_companies(1);
    let pdf = generate_pdf(&seal)?;
    assert!(!pdf.all_text().contains("INSTRUÇÕES DE MANUSEIO"));

    seal.instructions = all_instructions();
    let pdf = generate_pdf(&seal)?;
    let texts = pdf.page_texts(1);
    assert!(texts.contains(&"INSTRUÇÕES DE MANUSEIO".to_string()));
    let captions: Vec<&String> = texts
        .iter()
        .filter(|t| ["Frágil", "Este lado para cima", "Manusear com cuidado", "Atenção"].contains(&t.as_str()))
        .collect();
    assert_eq!(captions, ["Frágil", "Este lado para cima", "Manusear com cuidado", "Atenção"]);
    Ok(())
}

#[test]
fn test_instruction_stats() -> TestResult {
    let renderer = VectorRenderer::new(&SeloConfig::default())?;
    let mut seal = dia_das_maes();
    let document = renderer.render(&seal);
    assert_eq!(document.pages()[0].stats.instruction_icons, 1);

    seal.instructions = Default::default();
    let document = renderer.render(&seal);
    assert_eq!(document.pages()[0].stats.instruction_icons, 0);
    assert!(!document.pages()[0].stats.has_instruction_box);
    Ok(())
}

#[test]
fn test_long_text_wraps_within_page() -> TestResult {
    let mut seal = seal_with_companies(1);
    seal.sender = "palavra ".repeat(60);
    let pdf = generate_pdf(&seal)?;
    let sender_lines = pdf.page_texts(1).iter().filter(|t| t.starts_with("palavra")).count();
    assert!(sender_lines > 1);
    Ok(())
}

#[test]
fn test_document_info() -> TestResult {
    let pdf = generate_pdf(&dia_das_maes())?;
    assert_eq!(info_entry(&pdf.doc, "Title").as_deref(), Some("Dia das Mães"));
    assert!(info_entry(&pdf.doc, "Producer").is_some_and(|p| p.starts_with("selo ")));
    Ok(())
}

#[test]
fn test_dia_das_maes_pdf() -> TestResult {
    let pdf = generate_pdf(&dia_das_maes())?;
    assert_page_count(&pdf.doc, 1);
    let texts = pdf.page_texts(1);
    assert!(texts.contains(&"Loja A".to_string()));
    assert!(texts.contains(&"CNPJ: 11.222.333/0001-81".to_string()));
    assert!(texts.contains(&"Frágil".to_string()));
    for expected in ["ACME", "Rua X, 1", "Observação:", "A/C Gestor", "Selo 1 de 1"] {
        assert!(texts.iter().any(|t| t.starts_with(expected)), "missing {:?} in {:?}", expected, texts);
    }
    assert!(count_operator(&pdf.doc, 1, "re") > 0);
    Ok(())
}
