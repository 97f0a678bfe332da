use crate::Position;
use crate::bimatrix::*;
use crate::equilibrium::Security;
use crate::game::*;
use crate::mechanism::*;
use colored::Colorize;
use serde::Serialize;

fn or_none<T: std::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string().green().to_string(),
        None => "none".red().to_string(),
    }
}

/// Per-player dominant strategies and the equilibria they form.
#[derive(Debug, Serialize)]
pub struct DominanceReport {
    pub players: Vec<Dominant>,
    pub sdse: Option<Profile>,
    pub wdse: Option<Profile>,
}

#[derive(Debug, Serialize)]
pub struct Dominant {
    pub player: usize,
    pub strong: Option<Strategy>,
    pub weak: Option<Strategy>,
}

impl std::fmt::Display for DominanceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in self.players.iter() {
            writeln!(f, "P{} strongly dominant {}", d.player, or_none(&d.strong))?;
            writeln!(f, "P{} weakly dominant   {}", d.player, or_none(&d.weak))?;
        }
        writeln!(f, "SDSE {}", or_none(&self.sdse))?;
        write!(f, "WDSE {}", or_none(&self.wdse))
    }
}

/// Pure security levels of every player.
#[derive(Debug, Serialize)]
pub struct SecurityReport {
    pub players: Vec<Guarantee>,
}

#[derive(Debug, Serialize)]
pub struct Guarantee {
    pub player: usize,
    pub maxmin: Security,
    pub minmax: Security,
}

impl std::fmt::Display for SecurityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, g) in self.players.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "P{} maxmin {}", g.player, g.maxmin)?;
            write!(f, "P{} minmax {}", g.player, g.minmax)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct NashReport {
    pub equilibria: Vec<Profile>,
}

impl std::fmt::Display for NashReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.equilibria.is_empty() {
            return write!(f, "PSNE {}", "none".red());
        }
        write!(f, "PSNE")?;
        for profile in self.equilibria.iter() {
            write!(f, "\n  {}", profile.to_string().green())?;
        }
        Ok(())
    }
}

/// The strategy sets left after iterated elimination.
#[derive(Debug, Serialize)]
pub struct EliminationReport {
    pub strategies: Vec<Vec<Strategy>>,
    #[serde(skip)]
    pub table: String,
}

impl std::fmt::Display for EliminationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table.trim_end())
    }
}

/// A mixed equilibrium, plus pure security levels and the saddle
/// point when the game is zero-sum.
#[derive(Debug, Serialize)]
pub struct MixedReport {
    pub equilibrium: Option<Equilibrium>,
    pub lower: Option<Security>,
    pub upper: Option<Security>,
    pub saddle: Option<Saddle>,
}

impl std::fmt::Display for MixedReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.equilibrium {
            Some(ref e) => write!(f, "MSNE\n{}", e)?,
            None => write!(f, "MSNE {}", "no feasible support pair".yellow())?,
        }
        if let (Some(lower), Some(upper)) = (&self.lower, &self.upper) {
            write!(f, "\nlower {}\nupper {}", lower, upper)?;
            write!(f, "\nsaddle {}", or_none(&self.saddle))?;
        }
        Ok(())
    }
}

/// Candidate social choice functions that passed both checks.
#[derive(Debug, Default, Serialize)]
pub struct MechanismReport {
    pub examined: usize,
    pub dsic: usize,
    pub efficient: usize,
    pub functions: Vec<Candidate>,
}

/// `dictator` is 1-based, like every other `player` field.
#[derive(Debug, Serialize)]
pub struct Candidate {
    pub index: usize,
    pub mappings: Vec<Mapping>,
    pub dictator: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct Mapping {
    pub theta: Theta,
    pub outcome: Outcome,
}

impl From<(usize, &SocialChoice, Option<Position>)> for Candidate {
    fn from((index, f, dictator): (usize, &SocialChoice, Option<Position>)) -> Self {
        Self {
            index,
            mappings: f
                .iter()
                .map(|(theta, outcome)| Mapping {
                    theta: theta.clone(),
                    outcome: outcome.clone(),
                })
                .collect(),
            dictator: dictator.map(|p| p + 1),
        }
    }
}

impl MechanismReport {
    /// Combines the tallies of two disjoint slices of the enumeration.
    pub fn merge(mut self, other: Self) -> Self {
        self.examined += other.examined;
        self.dsic += other.dsic;
        self.efficient += other.efficient;
        self.functions.extend(other.functions);
        self
    }
}

impl std::fmt::Display for MechanismReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "examined {} functions: {} DSIC, {} ex-post efficient",
            self.examined, self.dsic, self.efficient
        )?;
        for c in self.functions.iter() {
            let dictator = match c.dictator {
                Some(p) => format!("dictatorial (P{})", p).red(),
                None => "not dictatorial".green(),
            };
            writeln!(f, "social choice function #{} {}", c.index, dictator)?;
            for m in c.mappings.iter() {
                writeln!(f, "  {} -> {}", m.theta, m.outcome)?;
            }
        }
        Ok(())
    }
}
