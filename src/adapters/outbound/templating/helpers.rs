use crate::report_generation::domain::lenient::{value_to_string, value_to_string_list};
use crate::report_generation::domain::Severity;
use crate::report_generation::services::RemediationResolver;
use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext as HbsRenderContext,
    RenderErrorReason,
};
use serde_json::Value;

type HelperFn = for<'reg, 'rc> fn(
    &Helper<'rc>,
    &'reg Handlebars<'reg>,
    &'rc Context,
    &mut HbsRenderContext<'reg, 'rc>,
    &mut dyn Output,
) -> HelperResult;

/// Helpers registered on every render, by template-visible name
///
/// Helpers echoing scan text write it through the registry's escape function.
pub(super) const HELPERS: &[(&str, HelperFn)] = &[
    ("remediation", remediation),
    ("overview", overview),
    ("severity_label", severity_label),
    ("count", count),
    ("join", join),
    ("plural", plural),
];

fn param<'a>(h: &'a Helper<'_>, helper: &'static str, index: usize) -> Result<&'a Value, RenderErrorReason> {
    h.param(index)
        .map(|p| p.value())
        .ok_or(RenderErrorReason::ParamNotFoundForIndex(helper, index))
}

fn optional_param<'a>(h: &'a Helper<'_>, index: usize) -> Option<&'a Value> {
    h.param(index).map(|p| p.value()).filter(|v| !v.is_null())
}

/// Length of a list or object; a scalar counts as one, null as zero
fn length_of(value: &Value) -> u64 {
    match value {
        Value::Array(items) => items.len() as u64,
        Value::Object(map) => map.len() as u64,
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::Null => 0,
        _ => 1,
    }
}

/// `{{remediation description fixedIn}}`
fn remediation<'reg, 'rc>(
    h: &Helper<'rc>,
    r: &'reg Handlebars<'reg>,
    _: &'rc Context,
    _: &mut HbsRenderContext<'reg, 'rc>,
    out: &mut dyn Output,
) -> HelperResult {
    let description = optional_param(h, 0).and_then(value_to_string);
    let fixed_in = optional_param(h, 1).and_then(value_to_string_list);

    let text = RemediationResolver::resolve(description.as_deref(), fixed_in.as_deref());
    out.write(&r.get_escape_fn()(&text))?;
    Ok(())
}

/// `{{overview description}}`: the description without its remediation section
fn overview<'reg, 'rc>(
    h: &Helper<'rc>,
    r: &'reg Handlebars<'reg>,
    _: &'rc Context,
    _: &mut HbsRenderContext<'reg, 'rc>,
    out: &mut dyn Output,
) -> HelperResult {
    let description = optional_param(h, 0).and_then(value_to_string);
    let text = RemediationResolver::overview(description.as_deref());
    out.write(&r.get_escape_fn()(&text))?;
    Ok(())
}

/// `{{severity_label severity}}` -> "High", "Medium", ...
fn severity_label<'reg, 'rc>(
    h: &Helper<'rc>,
    _: &'reg Handlebars<'reg>,
    _: &'rc Context,
    _: &mut HbsRenderContext<'reg, 'rc>,
    out: &mut dyn Output,
) -> HelperResult {
    let severity = optional_param(h, 0)
        .and_then(value_to_string)
        .map(|raw| Severity::parse(&raw))
        .unwrap_or_default();
    out.write(severity.label())?;
    Ok(())
}

/// `{{count list}}`
fn count<'reg, 'rc>(
    h: &Helper<'rc>,
    _: &'reg Handlebars<'reg>,
    _: &'rc Context,
    _: &mut HbsRenderContext<'reg, 'rc>,
    out: &mut dyn Output,
) -> HelperResult {
    let value = param(h, "count", 0)?;
    out.write(&length_of(value).to_string())?;
    Ok(())
}

/// `{{join list separator}}`, separator defaults to ", "
fn join<'reg, 'rc>(
    h: &Helper<'rc>,
    r: &'reg Handlebars<'reg>,
    _: &'rc Context,
    _: &mut HbsRenderContext<'reg, 'rc>,
    out: &mut dyn Output,
) -> HelperResult {
    let items = value_to_string_list(param(h, "join", 0)?).unwrap_or_default();
    let separator = optional_param(h, 1)
        .and_then(value_to_string)
        .unwrap_or_else(|| ", ".to_string());
    out.write(&r.get_escape_fn()(&items.join(&separator)))?;
    Ok(())
}

/// `{{plural count singular plural}}`
fn plural<'reg, 'rc>(
    h: &Helper<'rc>,
    _: &'reg Handlebars<'reg>,
    _: &'rc Context,
    _: &mut HbsRenderContext<'reg, 'rc>,
    out: &mut dyn Output,
) -> HelperResult {
    let n = length_of(param(h, "plural", 0)?);
    let singular = value_to_string(param(h, "plural", 1)?).unwrap_or_default();
    let plural = value_to_string(param(h, "plural", 2)?).unwrap_or_default();
    out.write(if n == 1 { &singular } else { &plural })?;
    Ok(())
}
