use crate::Utility;
use crate::game::Payoff;

/// One data row of `utility.csv`: the label columns and the payoffs,
/// with the 1-based line number for error messages.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub line: usize,
    pub labels: Vec<String>,
    pub payoff: Payoff,
}

/// Splits every row after the header into `labels` leading label
/// columns followed by `n` payoffs.
pub fn rows(text: &str, labels: usize, n: usize) -> anyhow::Result<Vec<Row>> {
    text.lines()
        .enumerate()
        .skip(1)
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| row(i + 1, l, labels, n))
        .collect()
}

fn row(line: usize, text: &str, labels: usize, n: usize) -> anyhow::Result<Row> {
    let fields = super::split(text).map_err(|e| anyhow::anyhow!("line {}: {}", line, e))?;
    if fields.len() != labels + n {
        return Err(anyhow::anyhow!(
            "line {}: expected {} fields, found {}",
            line,
            labels + n,
            fields.len()
        ));
    }
    let (labels, payoffs) = fields.split_at(labels);
    let payoff = payoffs
        .iter()
        .map(|u| {
            u.parse::<Utility>()
                .map_err(|e| anyhow::anyhow!("line {}: payoff {:?}: {}", line, u, e))
        })
        .collect::<anyhow::Result<Vec<Utility>>>()?;
    Ok(Row {
        line,
        labels: labels.to_vec(),
        payoff: Payoff::from(payoff),
    })
}
