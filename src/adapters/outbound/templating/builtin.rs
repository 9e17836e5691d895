use crate::ports::outbound::{EscapeMode, TemplateSet, TemplateSource};

const REPORT_TEMPLATE: &str = include_str!("../../../../templates/report.md.hbs");
const VULN_CARD_PARTIAL: &str = include_str!("../../../../templates/vuln_card.md.hbs");
const SUMMARY_TABLE_PARTIAL: &str = include_str!("../../../../templates/summary_table.md.hbs");

/// The Markdown report compiled into the binary
pub(crate) fn markdown_templates() -> TemplateSet {
    TemplateSet {
        main: TemplateSource::new("report", REPORT_TEMPLATE),
        partials: vec![
            TemplateSource::new("vuln_card", VULN_CARD_PARTIAL),
            TemplateSource::new("summary_table", SUMMARY_TABLE_PARTIAL),
        ],
        escape: EscapeMode::None,
    }
}
