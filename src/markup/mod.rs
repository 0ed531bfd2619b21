//! Print view renderer.
//!
//! Produces a standalone HTML document with two labels per landscape A4 page. The
//! document opens the browser print dialog by itself once loaded.

mod icons;
mod templates;

use crate::config::SeloConfig;
use crate::error::SeloError;
use crate::label::{derive_all, LabelContent};
use crate::text::{escape_html, format_address, format_multiline};
use handlebars::Handlebars;
use selo_types::SealData;
use serde::Serialize;

/// Labels per printed page.
pub const LABELS_PER_PAGE: usize = 2;

#[derive(Serialize)]
struct DocumentView<'a> {
    title: &'a str,
    print_delay_ms: u32,
    /// Whether any label carries an instruction panel, so its styles are needed.
    has_instructions: bool,
    palette: PaletteView,
    pages: Vec<PageView>,
}

#[derive(Serialize)]
struct PaletteView {
    primary: String,
    on_primary: String,
    shade: String,
    text: String,
    rule: String,
}

#[derive(Serialize)]
struct PageView {
    labels: Vec<LabelView>,
}

#[derive(Serialize)]
struct LabelView {
    logo_src: String,
    logo_alt: String,
    sender_html: String,
    strip_text: String,
    campaign_name: String,
    observation: Option<String>,
    has_instructions: bool,
    instructions: Vec<IconView>,
    address_html: String,
    cnpj: String,
    contact_lines: Vec<String>,
}

#[derive(Serialize)]
struct IconView {
    key: &'static str,
    caption: &'static str,
    svg: &'static str,
}

pub struct MarkupRenderer {
    registry: Handlebars<'static>,
    config: SeloConfig,
}

impl MarkupRenderer {
    pub fn new(config: &SeloConfig) -> Result<Self, SeloError> {
        config.validate()?;

        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(escape_html);
        registry.register_partial("delivery", templates::DELIVERY)?;
        registry.register_partial("label", templates::LABEL)?;
        registry.register_template_string("document", templates::DOCUMENT)?;

        Ok(Self { registry, config: config.clone() })
    }

    /// Renders the print document for every company of `seal`.
    pub fn render(&self, seal: &SealData) -> Result<String, SeloError> {
        let labels = derive_all(seal);
        let pages: Vec<PageView> = labels
            .chunks(LABELS_PER_PAGE)
            .map(|chunk| PageView {
                labels: chunk.iter().map(|label| self.label_view(seal, label)).collect(),
            })
            .collect();
        log::debug!(
            "Rendering print view '{}': {} labels on {} pages",
            seal.campaign_name,
            labels.len(),
            pages.len()
        );

        let palette = &self.config.palette;
        let view = DocumentView {
            title: &seal.campaign_name,
            print_delay_ms: self.config.print_delay_ms,
            has_instructions: labels.iter().any(LabelContent::has_instructions),
            palette: PaletteView {
                primary: palette.primary.to_hex(),
                on_primary: palette.on_primary.to_hex(),
                shade: palette.shade.to_hex(),
                text: palette.text.to_hex(),
                rule: palette.rule.to_hex(),
            },
            pages,
        };
        Ok(self.registry.render("document", &view)?)
    }

    fn label_view(&self, seal: &SealData, label: &LabelContent) -> LabelView {
        let logo_src = seal
            .organization_logo_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(&self.config.default_logo)
            .to_string();

        let mut contact_lines = Vec::new();
        if let Some(contact) = &label.contact_person {
            contact_lines.push(format!("A/C {}", contact));
        }
        if let Some(phone) = &label.phone {
            contact_lines.push(format!("TEL: {}", phone));
        }

        LabelView {
            logo_src,
            logo_alt: seal.organization_name.clone().unwrap_or_else(|| "Logo".to_string()),
            sender_html: format_multiline(&label.sender),
            strip_text: label.strip_text(),
            campaign_name: label.campaign_name.clone(),
            observation: label.observation.as_deref().map(str::to_uppercase),
            has_instructions: label.has_instructions(),
            instructions: label
                .instructions
                .iter()
                .map(|&i| IconView { key: i.key(), caption: i.caption(), svg: icons::svg(i) })
                .collect(),
            address_html: format_address(&label.address),
            cnpj: label.cnpj.clone(),
            contact_lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selo_types::{CompanyLabelInfo, InstructionSet};

    fn renderer() -> MarkupRenderer {
        MarkupRenderer::new(&SeloConfig::default()).unwrap()
    }

    fn seal(companies: usize, instructions: InstructionSet) -> SealData {
        SealData {
            campaign_name: "Natal".into(),
            sender: "ACME".into(),
            instructions,
            companies: (0..companies)
                .map(|i| CompanyLabelInfo {
                    name: format!("Loja {i}"),
                    address: "Rua Y, 10".into(),
                    cnpj: "11222333000181".into(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn only_the_last_page_has_no_forced_break() {
        let html = renderer().render(&seal(3, InstructionSet::default())).unwrap();
        assert_eq!(html.matches("page-break-after: always;").count(), 1);
        assert_eq!(html.matches("page-break-after: auto;").count(), 1);
    }

    #[test]
    fn panel_is_omitted_without_instructions() {
        let html = renderer().render(&seal(1, InstructionSet::default())).unwrap();
        assert!(!html.contains("instruction-square"));
        assert!(!html.contains("instruction-icon"));
        assert!(html.contains(r#"class="bottom no-instructions""#));
        assert!(html.contains("ENDEREÇO DE ENTREGA"));
    }

    #[test]
    fn panel_styles_follow_panels() {
        let html = renderer().render(&seal(2, InstructionSet { attention: true, ..Default::default() })).unwrap();
        assert!(html.contains(".instruction-square {"));
    }

    #[test]
    fn icons_follow_display_order() {
        let all = InstructionSet { fragile: true, attention: true, handle_with_care: true, this_way_up: true };
        let html = renderer().render(&seal(1, all)).unwrap();
        let pos = |key: &str| html.find(&format!("instruction-{key}\"")).unwrap();
        assert!(pos("fragile") < pos("this-way-up"));
        assert!(pos("this-way-up") < pos("handle-with-care"));
        assert!(pos("handle-with-care") < pos("attention"));
    }

    #[test]
    fn organization_logo_replaces_default() {
        let mut data = seal(1, InstructionSet::default());
        data.organization_logo_url = Some("https://cdn.example.com/logo.png?a=1&b=2".into());
        let html = renderer().render(&data).unwrap();
        assert!(html.contains(r#"src="https://cdn.example.com/logo.png?a=1&amp;b=2""#));
        assert!(!html.contains("data:image/svg+xml"));

        let html = renderer().render(&seal(1, InstructionSet::default())).unwrap();
        assert!(html.contains("data:image/svg+xml"));
    }

    #[test]
    fn print_delay_comes_from_config() {
        let config = SeloConfig::default().with_print_delay_ms(1234);
        let html = MarkupRenderer::new(&config).unwrap().render(&seal(0, InstructionSet::default())).unwrap();
        assert!(html.contains("}, 1234);"));
        assert!(html.contains("window.print()"));
    }

    #[test]
    fn rejects_invalid_config() {
        let config = SeloConfig::default().with_print_delay_ms(0);
        assert!(MarkupRenderer::new(&config).is_err());
    }
}
