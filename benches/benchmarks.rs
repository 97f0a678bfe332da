criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        intersecting_best_responses,
        scanning_dominance,
        eliminating_dominated_strategies,
        enumerating_supports,
        solving_zero_sum_minimax,
        checking_social_choice_functions,
}

fn intersecting_best_responses(c: &mut criterion::Criterion) {
    let game = bimatrix(6, 6);
    c.bench_function("pure Nash equilibria of a 6x6 game", |b| {
        b.iter(|| game.psne())
    });
}

fn scanning_dominance(c: &mut criterion::Criterion) {
    let game = bimatrix(8, 8);
    c.bench_function("weakly dominant strategies of an 8x8 game", |b| {
        b.iter(|| game.wdse())
    });
}

fn eliminating_dominated_strategies(c: &mut criterion::Criterion) {
    let game = bimatrix(8, 8);
    c.bench_function("iterated elimination on an 8x8 game", |b| {
        b.iter(|| game.eliminate())
    });
}

fn enumerating_supports(c: &mut criterion::Criterion) {
    let game = Bimatrix::new(bimatrix(4, 4)).expect("two players");
    c.bench_function("support enumeration on a 4x4 game", |b| {
        b.iter(|| game.msne())
    });
}

fn solving_zero_sum_minimax(c: &mut criterion::Criterion) {
    let game = ZeroSum::new(zerosum(8, 8)).expect("zero sum");
    c.bench_function("minimax programs of an 8x8 zero-sum game", |b| {
        b.iter(|| game.msne())
    });
}

fn checking_social_choice_functions(c: &mut criterion::Criterion) {
    let types = vec![
        vec![Type::from("h"), Type::from("l")],
        vec![Type::from("h"), Type::from("l")],
    ];
    let outcomes = ["a", "b", "c"].map(Outcome::from).to_vec();
    let valuation = |outcome: &Outcome, theta: &Theta| {
        let payoff = theta
            .iter()
            .map(|t| (t.as_str().len() + outcome.as_str().as_bytes()[0] as usize % 3) as Utility)
            .collect::<Vec<Utility>>();
        Some(Payoff::from(payoff))
    };
    let env = Environment::new(2, types, outcomes, valuation).expect("valid environment");
    c.bench_function("DSIC and ex-post checks over 81 functions", |b| {
        b.iter(|| {
            env.functions()
                .filter(|f| env.is_dsic(f).unwrap_or(false))
                .filter(|f| env.is_ex_post_efficient(f).unwrap_or(false))
                .count()
        })
    });
}

fn labels(prefix: char, n: usize) -> Vec<Strategy> {
    (0..n).map(|i| Strategy::from(format!("{}{}", prefix, i))).collect()
}

fn bimatrix(rows: usize, cols: usize) -> NormalForm {
    game(rows, cols, |rng| [rng.random_range(0..10) as Utility, rng.random_range(0..10) as Utility])
}

fn zerosum(rows: usize, cols: usize) -> NormalForm {
    game(rows, cols, |rng| {
        let u = rng.random_range(-5..=5) as Utility;
        [u, -u]
    })
}

fn game(rows: usize, cols: usize, mut payoff: impl FnMut(&mut SmallRng) -> [Utility; 2]) -> NormalForm {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let strategies = vec![labels('r', rows), labels('c', cols)];
    let table = strategies[0]
        .iter()
        .flat_map(|r| strategies[1].iter().map(move |c| Profile::from(vec![r.clone(), c.clone()])))
        .map(|profile| (profile, Payoff::from(payoff(rng))))
        .collect::<Table>();
    NormalForm::new(2, strategies, table).expect("valid game")
}

use nashkit::Utility;
use nashkit::bimatrix::*;
use nashkit::game::*;
use nashkit::mechanism::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
