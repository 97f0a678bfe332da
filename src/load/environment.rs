use super::*;
use crate::mechanism::*;
use std::path::Path;

/// Loads the mechanism environment described in `dir`.
pub fn environment(dir: impl AsRef<Path>) -> anyhow::Result<Environment> {
    let (meta, utility) = read(dir.as_ref())?;
    parse_environment(&meta, &utility)
}

/// Builds an environment from `meta.txt` (player count, one type list per
/// player, then the outcome list) and `utility.csv` (rows of outcome,
/// one type per player, then one payoff per player).
pub fn parse_environment(meta: &str, utility: &str) -> anyhow::Result<Environment> {
    let Meta { n, mut lists } = Meta::try_from(meta)?;
    let outcomes = lists
        .pop()
        .ok_or_else(|| anyhow::anyhow!("meta file has no outcome line"))?
        .into_iter()
        .map(Outcome::from)
        .collect::<Vec<Outcome>>();
    let types = lists
        .into_iter()
        .map(|list| list.into_iter().map(Type::from).collect())
        .collect::<Vec<Vec<Type>>>();
    let mut valuations = Valuations::default();
    for Row { line, labels, payoff } in rows(utility, n + 1, n)? {
        let (outcome, reported) = labels
            .split_first()
            .ok_or_else(|| anyhow::anyhow!("line {}: missing outcome", line))?;
        if !outcomes.iter().any(|o| o.as_str() == outcome) {
            return Err(anyhow::anyhow!("line {}: {} is not an outcome", line, outcome));
        }
        for (player, label) in reported.iter().enumerate() {
            if !types
                .get(player)
                .is_some_and(|set| set.iter().any(|t| t.as_str() == label))
            {
                return Err(anyhow::anyhow!(
                    "line {}: {} is not a type of player {}",
                    line,
                    label,
                    player + 1
                ));
            }
        }
        let theta = reported.iter().cloned().collect::<Theta>();
        let outcome = Outcome::from(outcome.clone());
        if valuations.insert(outcome.clone(), theta.clone(), payoff).is_some() {
            return Err(anyhow::anyhow!("line {}: duplicate row for {} at {}", line, outcome, theta));
        }
    }
    log::debug!("loaded {} valuation rows for {} players", valuations.len(), n);
    Ok(Environment::new(n, types, outcomes, valuations)?)
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
    use super::*;

    const META: &str = "2\nh, l\nh, l\na, b\n";

    fn utility() -> String {
        let mut csv = String::from("x,t1,t2,u1,u2\n");
        for outcome in ["a", "b"] {
            for t1 in ["h", "l"] {
                for t2 in ["h", "l"] {
                    let u = |t: &str| match (t, outcome) { ("h", "a") => 2, ("l", "b") => 1, _ => 0 };
                    csv.push_str(&format!("{},{},{},{},{}\n", outcome, t1, t2, u(t1), u(t2)));
                }
            }
        }
        csv
    }

    #[test]
    fn loads_auction() {
        let env = parse_environment(META, &utility()).unwrap();
        assert_eq!(env.n(), 2);
        assert_eq!(env.outcomes(), &[Outcome::from("a"), Outcome::from("b")]);
        assert_eq!(env.thetas().len(), 4);
        assert_eq!(env.functions().count(), 16);
        let f = env.constant(&Outcome::from("b"));
        assert_eq!(env.is_dsic(&f), Ok(true));
        assert_eq!(env.is_ex_post_efficient(&f), Ok(false));
    }

    #[test]
    fn rejects_unknown_labels() {
        assert!(parse_environment(META, "h\nz,h,h,0,0\n").unwrap_err().to_string().contains("not an outcome"));
        assert!(parse_environment(META, "h\na,h,z,0,0\n").unwrap_err().to_string().contains("not a type of player 2"));
    }

    #[test]
    fn declared_count_must_match() {
        let e = parse_environment("3\nh, l\nh, l\na, b\n", "h\n").unwrap_err();
        assert!(matches!(e.downcast_ref::<MechanismError>(), Some(MechanismError::Validation(_))));
    }
}
