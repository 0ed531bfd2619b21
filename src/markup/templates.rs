//! Handlebars sources of the print view.
//!
//! Plain `{{value}}` expressions go through the registry's escape function;
//! triple-stash expressions only receive values that were escaped while formatting.

pub(super) const DOCUMENT: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8" />
<title>{{title}}</title>
<style>
:root {
  --primary: {{palette.primary}};
  --on-primary: {{palette.on_primary}};
  --shade: {{palette.shade}};
  --text: {{palette.text}};
  --rule: {{palette.rule}};
}
@page { size: A4 landscape; margin: 0; }
* { box-sizing: border-box; -webkit-print-color-adjust: exact; print-color-adjust: exact; }
html, body { margin: 0; padding: 0; font-family: Helvetica, Arial, sans-serif; color: var(--text); }
.page { width: 297mm; height: 210mm; display: grid; grid-template-columns: 1fr 1fr; gap: 0; overflow: hidden; }
.label { display: flex; flex-direction: column; height: 210mm; padding: 6mm; border: 2px solid var(--primary); }
.label-header { display: flex; gap: 4mm; align-items: stretch; }
.logo-box { width: 40mm; height: 24mm; border: 1px solid var(--rule); display: flex; align-items: center; justify-content: center; }
.logo-box img { max-width: 100%; max-height: 100%; }
.sender { flex: 1; font-size: 11pt; }
.section-title { display: block; font-size: 9pt; font-weight: bold; letter-spacing: 0.05em; }
.strip { margin: 4mm -6mm; padding: 3mm 6mm; background: var(--primary); color: var(--on-primary); font-size: 16pt; font-weight: bold; }
.content .campaign { margin: 1mm 0 0; font-size: 14pt; font-weight: bold; }
.observation { margin-top: 3mm; padding: 2mm 3mm; background: var(--shade); font-size: 11pt; font-weight: bold; }
.bottom { display: flex; gap: 4mm; margin-top: 4mm; }
.bottom.no-instructions { margin-top: auto; }
{{#if has_instructions}}
.instruction-square { width: 50mm; min-height: 50mm; padding: 3mm; background: var(--primary); color: var(--on-primary); display: flex; flex-direction: column; align-items: center; justify-content: space-between; }
.instruction-title, .instruction-footer { font-size: 12pt; font-weight: bold; }
.instruction-grid { display: grid; grid-template-columns: repeat(2, 16mm); gap: 2mm; }
.instruction-icon svg { width: 16mm; height: 16mm; }
{{/if}}
.delivery-card { flex: 1; padding: 3mm; border: 1px solid var(--rule); font-size: 11pt; }
.delivery-card p { margin: 1mm 0; }
.delivery-card .cnpj { font-weight: bold; }
</style>
</head>
<body>
{{#each pages}}
<section class="page" style="page-break-after: {{#if @last}}auto{{else}}always{{/if}};">
{{#each labels}}
{{> label}}
{{/each}}
</section>
{{/each}}
<script>
window.addEventListener('load', function () {
  setTimeout(function () {
    window.focus();
    window.print();
  }, {{print_delay_ms}});
});
</script>
</body>
</html>
"#;

pub(super) const LABEL: &str = r#"<article class="label">
  <header class="label-header">
    <div class="logo-box"><img src="{{logo_src}}" alt="{{logo_alt}}" /></div>
    <div class="sender">
      <span class="section-title">DE:</span>
      <p class="sender-text">{{{sender_html}}}</p>
    </div>
  </header>
  <div class="strip">{{strip_text}}</div>
  <div class="content">
    <span class="section-title">CONTEÚDO</span>
    <p class="campaign">{{campaign_name}}</p>
  </div>
  {{#if observation}}
  <div class="observation">{{observation}}</div>
  {{/if}}
  {{#if has_instructions}}
  <div class="bottom with-instructions">
    <div class="instruction-square">
      <span class="instruction-title">CUIDADO</span>
      <div class="instruction-grid">
        {{#each instructions}}
        <div class="instruction-icon instruction-{{key}}" title="{{caption}}">{{{svg}}}</div>
        {{/each}}
      </div>
      <span class="instruction-footer">FRÁGIL</span>
    </div>
    {{> delivery}}
  </div>
  {{else}}
  <div class="bottom no-instructions">
    {{> delivery}}
  </div>
  {{/if}}
</article>"#;

pub(super) const DELIVERY: &str = r#"<div class="delivery-card">
      <span class="section-title">ENDEREÇO DE ENTREGA</span>
      <p class="address">{{{address_html}}}</p>
      <p class="cnpj">CNPJ: {{cnpj}}</p>
      {{#each contact_lines}}
      <p class="contact">{{this}}</p>
      {{/each}}
    </div>"#;
