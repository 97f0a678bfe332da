use super::*;
use crate::EQUILIBRIUM_TOLERANCE;
use crate::bimatrix::*;
use crate::game::*;
use crate::load;
use crate::mechanism::MechanismError;
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;

/// Runs one query and prints its report.
pub fn run(args: Args) -> anyhow::Result<()> {
    let json = args.json;
    match args.query {
        Query::Dominance { dir } => emit(&dominance(&load::game(dir)?)?, json),
        Query::Security { dir } => emit(&security(&load::game(dir)?)?, json),
        Query::Nash { dir } => emit(&nash(&load::game(dir)?)?, json),
        Query::Eliminate { dir } => emit(&eliminate(&load::game(dir)?)?, json),
        Query::Mixed {
            dir,
            zero_sum,
            eliminate,
            floor,
        } => emit(&mixed(&load::game(dir)?, zero_sum, eliminate, floor)?, json),
        Query::Mechanism { dir, limit } => emit(&mechanism(dir, limit)?, json),
    }
}

fn emit<R: Serialize + std::fmt::Display>(report: &R, json: bool) -> anyhow::Result<()> {
    match json {
        true => println!("{}", serde_json::to_string_pretty(report)?),
        false => println!("{}", report),
    }
    Ok(())
}

pub fn dominance(game: &NormalForm) -> anyhow::Result<DominanceReport> {
    let players = game
        .players()
        .map(|player| -> Result<Dominant, GameError> {
            Ok(Dominant {
                player: player + 1,
                strong: game.strongly_dominant(player)?,
                weak: game.weakly_dominant(player)?,
            })
        })
        .collect::<Result<Vec<Dominant>, GameError>>()?;
    Ok(DominanceReport {
        players,
        sdse: game.sdse()?,
        wdse: game.wdse()?,
    })
}

pub fn security(game: &NormalForm) -> anyhow::Result<SecurityReport> {
    let players = game
        .players()
        .map(|player| -> Result<Guarantee, GameError> {
            Ok(Guarantee {
                player: player + 1,
                maxmin: game.maxmin(player)?,
                minmax: game.minmax(player)?,
            })
        })
        .collect::<Result<Vec<Guarantee>, GameError>>()?;
    Ok(SecurityReport { players })
}

pub fn nash(game: &NormalForm) -> anyhow::Result<NashReport> {
    Ok(NashReport {
        equilibria: game.psne()?.unwrap_or_default().into_iter().collect(),
    })
}

pub fn eliminate(game: &NormalForm) -> anyhow::Result<EliminationReport> {
    let reduced = game.eliminate()?;
    let table = match reduced.n() {
        2 => Bimatrix::new(reduced.clone())?.to_string(),
        _ => reduced.to_string(),
    };
    let strategies = reduced
        .players()
        .map(|player| reduced.strategies(player).map(<[Strategy]>::to_vec))
        .collect::<Result<Vec<Vec<Strategy>>, GameError>>()?;
    Ok(EliminationReport { strategies, table })
}

pub fn mixed(game: &NormalForm, zero_sum: bool, eliminate: bool, floor: f64) -> anyhow::Result<MixedReport> {
    let game = match eliminate {
        true => game.eliminate()?,
        false => game.clone(),
    };
    match zero_sum {
        true => {
            let game = ZeroSum::new(game)?;
            let equilibrium = game.msne()?;
            check(game.bimatrix(), &equilibrium);
            Ok(MixedReport {
                equilibrium: Some(equilibrium),
                lower: Some(game.lower()?),
                upper: Some(game.upper()?),
                saddle: game.saddle_point()?,
            })
        }
        false => {
            let bounds = Bounds {
                floor,
                ..Bounds::default()
            };
            let game = Bimatrix::new(game)?;
            let equilibrium = game.msne_with(bounds)?.found();
            if let Some(ref e) = equilibrium {
                check(&game, e);
            }
            Ok(MixedReport {
                equilibrium,
                lower: None,
                upper: None,
                saddle: None,
            })
        }
    }
}

fn check(game: &Bimatrix, equilibrium: &Equilibrium) {
    if !equilibrium.verify(game, EQUILIBRIUM_TOLERANCE) {
        log::warn!("reported equilibrium fails re-verification");
    }
}

/// Checks the first `limit` candidate functions, all of them if `None`,
/// and keeps those that are both DSIC and ex-post efficient. Rejected
/// functions are dropped as soon as they are tallied.
pub fn mechanism(dir: impl AsRef<Path>, limit: Option<usize>) -> anyhow::Result<MechanismReport> {
    let env = load::environment(dir)?;
    if let Some(total) = env.functions().total() {
        log::info!("{} candidate social choice functions", total);
    }
    let mut report = env
        .functions()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .par_bridge()
        .try_fold(MechanismReport::default, |mut report, (i, f)| -> Result<MechanismReport, MechanismError> {
            let dsic = env.is_dsic(&f)?;
            let efficient = env.is_ex_post_efficient(&f)?;
            report.examined += 1;
            report.dsic += dsic as usize;
            report.efficient += efficient as usize;
            if dsic && efficient {
                report.functions.push(Candidate::from((i + 1, &f, env.dictator(&f)?)));
            }
            Ok(report)
        })
        .try_reduce(MechanismReport::default, |a, b| Ok(a.merge(b)))?;
    report.functions.sort_by_key(|c| c.index);
    Ok(report)
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::fixtures::*;

    #[test]
    fn dominance_report() {
        let report = dominance(&dilemma()).unwrap();
        assert_eq!(report.players.len(), 2);
        assert_eq!(report.players[0].player, 1);
        assert_eq!(report.sdse, Some(Profile::from_iter(["d", "d"])));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["sdse"], serde_json::json!(["d", "d"]));
    }

    #[test]
    fn nash_report_lists_profiles() {
        let report = nash(&pennies()).unwrap();
        assert!(report.equilibria.is_empty());
        let report = nash(&coordination()).unwrap();
        assert_eq!(report.equilibria.len(), 3);
    }

    #[test]
    fn mixed_zero_sum_report() {
        let report = mixed(&saddle(), true, false, crate::PROBABILITY_FLOOR).unwrap();
        assert_eq!(report.saddle.map(|s| s.value), Some(2.));
        assert!(mixed(&dilemma(), true, false, crate::PROBABILITY_FLOOR).is_err());
    }

    #[test]
    fn mechanism_tallies_every_function() {
        let dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join("auction");
        let report = mechanism(&dir, None).unwrap();
        assert_eq!((report.examined, report.dsic, report.efficient), (16, 6, 1));
        assert_eq!(report.functions.len(), 1);
        let limited = mechanism(&dir, Some(1)).unwrap();
        assert_eq!((limited.examined, limited.dsic, limited.efficient), (1, 1, 0));
        assert!(limited.functions.is_empty());
    }

    #[test]
    fn elimination_report() {
        let report = eliminate(&ladder()).unwrap();
        assert_eq!(report.strategies, vec![vec![strategy("c")], vec![strategy("r")]]);
        assert!(report.to_string().contains("22, 22"));
    }
}
