use crate::domain::models::{RecordResult, Rule, RuleAudit, RuleOptions, StoredRecord, ValidationOutcome};
use crate::domain::status::is_passing;

pub const RECORD_HEADER: &str = "construtora\tcidade\tstatus\terros";

fn status_pill(status: &str) -> String {
    if is_passing(status) {
        format!("[ok] {}", status)
    } else {
        format!("[fail] {}", status)
    }
}

fn errors_cell(errors: &[String]) -> String {
    if errors.is_empty() {
        "-".to_string()
    } else {
        format!("{} error(s): {}", errors.len(), errors.join("; "))
    }
}

pub fn record_row(r: &RecordResult) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        r.builder,
        r.city,
        status_pill(&r.status),
        errors_cell(&r.errors)
    )
}

pub fn stored_row(r: &StoredRecord) -> String {
    format!("{}\t{}", r.id, record_row(&r.record))
}

/// Render the validate response: a table for record lists, the opaque value
/// inline otherwise.
pub fn render_outcome(outcome: &ValidationOutcome) -> String {
    match outcome {
        ValidationOutcome::Records(rows) if rows.is_empty() => "no results".to_string(),
        ValidationOutcome::Records(rows) => {
            let mut out = vec![RECORD_HEADER.to_string()];
            out.extend(rows.iter().map(record_row));
            out.join("\n")
        }
        ValidationOutcome::Other(value) => format!("response: {}", value),
    }
}

/// Banner plus the three rule groups in fixed order (city, builder, merged).
/// Empty groups render nothing at all. The banner is informational only and
/// never changes which groups appear.
pub fn render_audit(audit: &RuleAudit) -> String {
    let mut out = vec![if audit.default_city_rules {
        "city not mapped - default rule set in effect".to_string()
    } else {
        "city-specific rule set".to_string()
    }];
    push_group(&mut out, "city rules", &audit.city_rules);
    push_group(&mut out, "builder rules", &audit.builder_rules);
    push_group(&mut out, "merged rules (application order)", &audit.merged_rules);
    out.join("\n")
}

fn push_group(out: &mut Vec<String>, title: &str, rules: &[Rule]) {
    if rules.is_empty() {
        return;
    }
    out.push(format!("{}:", title));
    for rule in rules {
        out.push(format!("  [{}] {}", rule.key, rule.description));
    }
}

pub fn render_options(opts: &RuleOptions) -> String {
    format!(
        "cities: {}\nbuilders: {}",
        join_or_dash(&opts.cities),
        join_or_dash(&opts.builders)
    )
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}
