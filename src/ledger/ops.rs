use super::limits::{is_too_much, LimitResolver};
use super::line::BudgetLine;

/// Records `line` as an expense at the end of `budget`.
///
/// The candidate is normalized first: owner lowercased (defaulted when
/// absent or empty) and amount coerced non-positive, so callers may
/// pass either sign. A candidate exceeding its owner's limit is
/// dropped and a copy of the input ledger comes back unchanged;
/// rejection is observable only through length or content.
pub fn add_expense<R: LimitResolver>(
    budget: &[BudgetLine],
    line: BudgetLine,
    limits: &R,
) -> Vec<BudgetLine> {
    let line = line.into_expense();
    if is_too_much(limits)(&line) {
        tracing::debug!(
            user = line.owner(),
            value = line.value,
            "expense over limit, dropped"
        );
        return budget.to_vec();
    }
    let mut next = budget.to_vec();
    next.push(line);
    next
}

/// Annotation pass over the whole ledger: lines exceeding their
/// owner's limit come back flagged, the rest come back as equal
/// copies. Length and order are preserved; re-running the pass is
/// stable.
pub fn check_big_expenses<R: LimitResolver>(budget: &[BudgetLine], limits: &R) -> Vec<BudgetLine> {
    let too_much = is_too_much(limits);
    let mut flagged = 0usize;
    let next: Vec<BudgetLine> = budget
        .iter()
        .map(|line| {
            if too_much(line) {
                flagged += 1;
                line.clone().flagged()
            } else {
                line.clone()
            }
        })
        .collect();
    if flagged > 0 {
        tracing::debug!(flagged, "lines over their owner's limit");
    }
    next
}

/// Renders the lines whose expense magnitude exceeds `limit`, owner
/// notwithstanding, as a `" / "`-joined string of description
/// shorthands. Empty when nothing qualifies; ledger order throughout.
pub fn big_expenses_string(budget: &[BudgetLine], limit: f64) -> String {
    let flat_limit = move |_: &str| limit;
    let too_much = is_too_much(&flat_limit);
    budget
        .iter()
        .filter(|line| too_much(line))
        .map(|line| description_shorthand(&line.description))
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Last two UTF-16 code units of the description, decoded lossily.
///
/// The seed data ends descriptions with an emoji whose encoding fits
/// exactly two code units; shorter descriptions come back whole, and a
/// split surrogate pair decodes to a replacement character.
fn description_shorthand(description: &str) -> String {
    let units: Vec<u16> = description.encode_utf16().collect();
    let tail = units.len().saturating_sub(2);
    String::from_utf16_lossy(&units[tail..])
}
