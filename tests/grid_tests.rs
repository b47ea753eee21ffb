//! Agents playing the pellet maze.

use search_agents::agents::{
    Agent, BestFirstAgent, BfsAgent, DfsAgent, OneStepLookaheadAgent, RandomAgent,
};
use search_agents::core::Direction;
use search_agents::games::grid::{
    GhostAwareHeuristic, GridGame, PelletHeuristic, PELLET_SCORE, TIME_PENALTY, WIN_SCORE,
};
use search_agents::play::{play_episode, EpisodeConfig, EpisodeOutcome};
use search_agents::rules::{BudgetedModel, Rules, WorldModel, ZeroHeuristic};
use search_agents::search::SearchOutcome;

const CORRIDOR: &str = "\
%%%%%%
%P  .%
%%%%%%";

const LINE: &str = "\
%%%%%%
%P...%
%%%%%%";

const TRAP: &str = "\
%%%%%%%
%.PG  %
%%%%%%%";

const LOOP: &str = "\
%%%%%%%%
%P.  . %
% %%%% %
%.    G%
%%%%%%%%";

// =============================================================================
// Single Decisions
// =============================================================================

#[test]
fn test_bfs_walks_toward_distant_pellet() {
    let (game, state) = GridGame::parse(CORRIDOR).unwrap();
    let mut model = BudgetedModel::new(game, 100);
    let mut agent = BfsAgent::new(PelletHeuristic::default());

    assert_eq!(agent.get_action(&mut model, &state), Ok(Direction::East));
    assert_eq!(agent.stats().outcome, SearchOutcome::Goal);
}

#[test]
fn test_best_first_walks_toward_distant_pellet() {
    let (game, state) = GridGame::parse(CORRIDOR).unwrap();
    let mut model = BudgetedModel::new(game, 100);
    let mut agent = BestFirstAgent::new(PelletHeuristic::default());

    assert_eq!(agent.get_action(&mut model, &state), Ok(Direction::East));
}

#[test]
fn test_dfs_action_is_legal() {
    let (game, state) = GridGame::parse(CORRIDOR).unwrap();
    let mut model = BudgetedModel::new(game, 100);
    let mut agent = DfsAgent::new(PelletHeuristic::default());

    let action = agent.get_action(&mut model, &state).unwrap();
    assert!(model.legal_actions(&state).contains(&action));
    assert_eq!(model.calls(), 100);
}

#[test]
fn test_agents_take_winning_pellet_next_to_ghost() {
    // East walks into the ghost, Stop lets it catch us, West eats the last pellet
    let (game, state) = GridGame::parse(TRAP).unwrap();

    let mut model = BudgetedModel::new(game, 20);
    let mut bfs = BfsAgent::new(ZeroHeuristic);
    let mut dfs = DfsAgent::new(ZeroHeuristic);
    let mut best = BestFirstAgent::new(GhostAwareHeuristic::default());
    let mut greedy = OneStepLookaheadAgent::new(PelletHeuristic::default());

    for agent in [
        &mut bfs as &mut dyn Agent<BudgetedModel<GridGame>>,
        &mut dfs,
        &mut best,
        &mut greedy,
    ] {
        model.begin_decision();
        assert_eq!(
            agent.get_action(&mut model, &state),
            Ok(Direction::West),
            "{} missed the winning move",
            agent.name()
        );
    }
}

// =============================================================================
// Episodes
// =============================================================================

#[test]
fn test_best_first_clears_line() {
    let (game, state) = GridGame::parse(LINE).unwrap();
    let mut agent = BestFirstAgent::new(PelletHeuristic::default());
    let report = play_episode(game, &mut agent, state, &EpisodeConfig::new()).unwrap();

    assert_eq!(report.outcome, EpisodeOutcome::Win);
    assert_eq!(report.actions, vec![Direction::East; 3]);
    assert_eq!(
        report.final_state.score,
        -3 * TIME_PENALTY + 3 * PELLET_SCORE + WIN_SCORE
    );
}

#[test]
fn test_zero_budget_falls_back_to_first_legal() {
    // East is always the first legal action along the line
    let (game, state) = GridGame::parse(LINE).unwrap();
    let mut agent = BfsAgent::new(PelletHeuristic::default());
    let config = EpisodeConfig::new().with_successor_budget(0);
    let report = play_episode(game, &mut agent, state, &config).unwrap();

    assert_eq!(report.outcome, EpisodeOutcome::Win);
    assert_eq!(report.turns, 3);
    assert_eq!(agent.stats().outcome, SearchOutcome::EmptyPool);
}

fn assert_replays_legally<G: Agent<BudgetedModel<GridGame>>>(mut agent: G) {
    let (game, initial) = GridGame::parse(LOOP).unwrap();
    let config = EpisodeConfig::new().with_max_turns(30).with_successor_budget(50);
    let report = play_episode(game.clone(), &mut agent, initial.clone(), &config).unwrap();

    let mut state = initial;
    for action in &report.actions {
        assert!(
            game.legal_actions(&state).contains(action),
            "{} played illegal {action} at turn {}",
            agent.name(),
            state.turn
        );
        state = game.apply(&state, action);
    }
    assert_eq!(state, report.final_state);
    assert_eq!(report.turns as usize, report.actions.len());

    match report.outcome {
        EpisodeOutcome::Win => assert!(game.is_win(&state)),
        EpisodeOutcome::Lose => assert!(game.is_lose(&state)),
        EpisodeOutcome::TurnLimit => {
            assert_eq!(report.turns, 30);
            assert!(!game.is_terminal(&state));
        }
    }
}

#[test]
fn test_every_agent_plays_legal_episode() {
    assert_replays_legally(BfsAgent::new(PelletHeuristic::default()));
    assert_replays_legally(DfsAgent::new(PelletHeuristic::default()));
    assert_replays_legally(BestFirstAgent::new(GhostAwareHeuristic::default()));
    assert_replays_legally(OneStepLookaheadAgent::new(GhostAwareHeuristic::default()));
    assert_replays_legally(RandomAgent::new(5));
}

#[test]
fn test_episode_is_deterministic() {
    let (game, state) = GridGame::parse(LOOP).unwrap();
    let config = EpisodeConfig::new().with_max_turns(20);

    let mut a = RandomAgent::new(77);
    let mut b = RandomAgent::new(77);
    let first = play_episode(game.clone(), &mut a, state.clone(), &config).unwrap();
    let second = play_episode(game, &mut b, state, &config).unwrap();

    assert_eq!(first.actions, second.actions);
    assert_eq!(first.outcome, second.outcome);
}
