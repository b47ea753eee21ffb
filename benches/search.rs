use criterion::{criterion_group, criterion_main, Criterion};
use search_agents::agents::{Agent, BestFirstAgent, BfsAgent, DfsAgent};
use search_agents::games::grid::{GridGame, GridState, PelletHeuristic};
use search_agents::rules::BudgetedModel;
use std::hint::black_box;

const MAZE: &str = "\
%%%%%%%%%%%%
%P.. . ..  %
% %%% %% %.%
%.  .   G .%
%%%%%%%%%%%%";

fn setup(budget: u32) -> (BudgetedModel<GridGame>, GridState) {
    let (game, state) = GridGame::parse(MAZE).expect("bench layout parses");
    (BudgetedModel::new(game, budget), state)
}

fn decide<G: Agent<BudgetedModel<GridGame>>>(
    agent: &mut G,
    model: &mut BudgetedModel<GridGame>,
    state: &GridState,
) -> u64 {
    model.begin_decision();
    agent.get_action(model, state).map(|d| d as u64).unwrap_or(0)
}

fn bench_single_decision(c: &mut Criterion) {
    for budget in [100u32, 1000] {
        let (mut model, state) = setup(budget);

        let mut bfs = BfsAgent::new(PelletHeuristic::default());
        c.bench_function(&format!("decision/bfs/{budget}"), |b| {
            b.iter(|| black_box(decide(&mut bfs, &mut model, &state)))
        });

        let mut dfs = DfsAgent::new(PelletHeuristic::default());
        c.bench_function(&format!("decision/dfs/{budget}"), |b| {
            b.iter(|| black_box(decide(&mut dfs, &mut model, &state)))
        });

        let mut best = BestFirstAgent::new(PelletHeuristic::default());
        c.bench_function(&format!("decision/best_first/{budget}"), |b| {
            b.iter(|| black_box(decide(&mut best, &mut model, &state)))
        });
    }
}

criterion_group!(benches, bench_single_decision);
criterion_main!(benches);
