use super::*;
use crate::game::*;
use std::path::Path;

/// Loads the game described in `dir`.
pub fn game(dir: impl AsRef<Path>) -> anyhow::Result<NormalForm> {
    let (meta, utility) = read(dir.as_ref())?;
    parse_game(&meta, &utility)
}

/// Builds a game from the contents of `meta.txt` and `utility.csv`.
///
/// Every row must name one declared strategy per player and appear at
/// most once. Profiles without a row stay undefined and surface as
/// lookup failures when queried.
pub fn parse_game(meta: &str, utility: &str) -> anyhow::Result<NormalForm> {
    let Meta { n, lists } = Meta::try_from(meta)?;
    let strategies = lists
        .into_iter()
        .map(|list| list.into_iter().map(Strategy::from).collect())
        .collect::<Vec<Vec<Strategy>>>();
    let mut table = Table::default();
    for Row { line, labels, payoff } in rows(utility, n, n)? {
        for (player, label) in labels.iter().enumerate() {
            if !strategies
                .get(player)
                .is_some_and(|set| set.iter().any(|s| s.as_str() == label))
            {
                return Err(anyhow::anyhow!(
                    "line {}: {} is not a strategy of player {}",
                    line,
                    label,
                    player + 1
                ));
            }
        }
        let profile = labels.into_iter().collect::<Profile>();
        if table.insert(profile.clone(), payoff).is_some() {
            return Err(anyhow::anyhow!("line {}: duplicate row for {}", line, profile));
        }
    }
    log::debug!("loaded {} payoff rows for {} players", table.len(), n);
    Ok(NormalForm::new(n, strategies, table)?)
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
    use super::*;

    const META: &str = "2\nc, d\nc, d\n";
    const UTILITY: &str = "s1,s2,u1,u2\nc,c,-1,-1\nc,d,-3,0\nd,c,0,-3\nd,d,-2,-2\n";

    #[test]
    fn loads_dilemma() {
        let game = parse_game(META, UTILITY).unwrap();
        assert_eq!(game.shape(), vec![2, 2]);
        assert_eq!(game.payoff(&Profile::from_iter(["c", "d"])), Ok(Payoff::from([-3., 0.])));
        assert_eq!(game.sdse(), Ok(Some(Profile::from_iter(["d", "d"]))));
    }

    #[test]
    fn declared_count_must_match() {
        let e = parse_game("3\nc, d\nc, d\n", "h\n").unwrap_err();
        assert!(matches!(e.downcast_ref::<GameError>(), Some(GameError::Validation(_))));
    }

    #[test]
    fn rejects_undeclared_strategy() {
        let e = parse_game(META, "h\nc,x,1,1\n").unwrap_err();
        assert!(e.to_string().contains("not a strategy of player 2"));
    }

    #[test]
    fn rejects_duplicate_rows() {
        assert!(parse_game(META, "h\nc,c,1,1\nc,c,2,2\n").is_err());
    }

    #[test]
    fn missing_rows_are_lookup_failures() {
        let game = parse_game(META, "h\nc,c,1,1\n").unwrap();
        assert!(matches!(game.psne(), Err(GameError::Lookup(_))));
    }
}
