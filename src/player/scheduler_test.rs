use super::*;
use crate::services::dispatch;
use crate::sort::{Algorithm, Step};

const INPUT: [i64; 10] = [55, 12, 98, 34, 71, 10, 66, 43, 27, 89];

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Clear,
    Sequence(PaneId, Vec<i64>),
    Step(PaneId, usize),
    Stats(PaneId),
    Error(PaneId, String),
}

#[derive(Default)]
struct Recording {
    events: Vec<Event>,
}

impl Renderer for Recording {
    fn clear(&mut self) {
        self.events.push(Event::Clear);
    }

    fn draw_sequence(&mut self, pane: PaneId, sequence: &[i64]) {
        self.events.push(Event::Sequence(pane, sequence.to_vec()));
    }

    fn draw_step(&mut self, pane: PaneId, _step: &Step, index: usize, _total: usize) {
        self.events.push(Event::Step(pane, index));
    }

    fn draw_stats(&mut self, pane: PaneId, _run: &Run) {
        self.events.push(Event::Stats(pane));
    }

    fn draw_error(&mut self, pane: PaneId, message: &str) {
        self.events.push(Event::Error(pane, message.to_owned()));
    }
}

fn run_for(algorithm: Algorithm) -> Arc<Run> {
    Arc::new(dispatch::run(algorithm, &INPUT).unwrap())
}

fn player() -> Player<Recording> {
    let mut player = Player::new(Duration::from_millis(1), Recording::default());
    player.generate(INPUT.to_vec());
    player
}

fn position(events: &[Event], wanted: &Event) -> Option<usize> {
    events.iter().position(|e| e == wanted)
}

// =============================================================================
// Playback
// =============================================================================

#[test]
fn generate_shows_input_on_single_pane() {
    let player = player();
    assert_eq!(
        player.renderer().events,
        vec![Event::Clear, Event::Sequence(PaneId::Single, INPUT.to_vec())]
    );
    let pane = player.pane(PaneId::Single).unwrap();
    assert_eq!(pane.sequence, INPUT);
    assert!(pane.cancelled);
}

#[test]
fn steps_render_in_order_then_stats() {
    let mut player = player();
    let run = run_for(Algorithm::Insertion);
    let total = run.steps.len();
    player.play(PaneId::Single, Arc::clone(&run));

    while player.tick() > 0 {}

    let steps: Vec<usize> = player
        .renderer()
        .events
        .iter()
        .filter_map(|e| match e {
            Event::Step(PaneId::Single, i) => Some(*i),
            _ => None,
        })
        .collect();
    assert_eq!(steps, (0..total).collect::<Vec<_>>());
    assert_eq!(player.renderer().events.last(), Some(&Event::Stats(PaneId::Single)));
    assert_eq!(player.pane(PaneId::Single).unwrap().sequence, run.steps.last().unwrap().sequence());
}

#[test]
fn two_panes_finish_independently() {
    let mut player = player();
    let bubble = PaneId::Grid(Algorithm::Bubble);
    let merge = PaneId::Grid(Algorithm::Merge);
    player.play(bubble, run_for(Algorithm::Bubble));
    player.play(merge, run_for(Algorithm::Merge));

    let mut ticks = 0;
    while player.tick() > 0 {
        ticks += 1;
        assert!(ticks < 1000, "playback never finished");
    }
    // Bubble sort on ten values records 90 steps, plus one tick for stats.
    assert_eq!(ticks + 1, 91);

    let events = &player.renderer().events;
    let merge_done = position(events, &Event::Stats(merge)).unwrap();
    let bubble_done = position(events, &Event::Stats(bubble)).unwrap();
    assert!(merge_done < bubble_done);
}

#[test]
fn zero_step_run_goes_straight_to_stats() {
    let mut player = player();
    let run = Arc::new(Run { steps: Vec::new(), execution_time: 0.0, complexity: Algorithm::Radix.complexity() });
    player.play(PaneId::Single, run);
    assert_eq!(player.tick(), 0);
    assert_eq!(player.renderer().events.last(), Some(&Event::Stats(PaneId::Single)));
}

// =============================================================================
// Cancellation
// =============================================================================

#[test]
fn superseded_playback_never_renders_after_generate() {
    let mut player = player();
    player.play(PaneId::Single, run_for(Algorithm::Bubble));
    player.tick();
    player.tick();

    player.generate(vec![3, 2, 1]);
    assert_eq!(player.active(), 0);
    for _ in 0..5 {
        player.tick();
    }

    let events = &player.renderer().events;
    let cleared = events.iter().rposition(|e| *e == Event::Clear).unwrap();
    assert_eq!(events[cleared + 1..], [Event::Sequence(PaneId::Single, vec![3, 2, 1])]);
}

#[test]
fn generate_removes_grid_panes() {
    let mut player = player();
    player.play(PaneId::Grid(Algorithm::Heap), run_for(Algorithm::Heap));
    player.generate(vec![1]);
    assert!(player.pane(PaneId::Grid(Algorithm::Heap)).is_none());
    assert!(player.pane(PaneId::Single).is_some());
}

#[test]
fn replaying_a_pane_restarts_from_first_step() {
    let mut player = player();
    player.play(PaneId::Single, run_for(Algorithm::Bubble));
    player.tick();
    player.tick();
    player.play(PaneId::Single, run_for(Algorithm::Selection));
    assert_eq!(player.active(), 1);

    player.tick();
    assert_eq!(player.renderer().events.last(), Some(&Event::Step(PaneId::Single, 0)));
}

#[test]
fn error_replaces_playback() {
    let mut player = player();
    player.play(PaneId::Grid(Algorithm::Counting), run_for(Algorithm::Counting));
    player.tick();
    player.fail(PaneId::Grid(Algorithm::Counting), "range too large");

    assert_eq!(player.tick(), 0);
    assert_eq!(
        player.renderer().events.last(),
        Some(&Event::Error(PaneId::Grid(Algorithm::Counting), "range too large".into()))
    );
}

// =============================================================================
// Command loop
// =============================================================================

#[tokio::test]
async fn run_drains_playbacks_after_channel_closes() {
    let (tx, rx) = mpsc::channel(8);
    tx.send(PlayerCommand::Generate(INPUT.to_vec())).await.unwrap();
    for algorithm in [Algorithm::Quick, Algorithm::Cycle] {
        tx.send(PlayerCommand::Play { pane: PaneId::Grid(algorithm), run: run_for(algorithm) })
            .await
            .unwrap();
    }
    drop(tx);

    let player = Player::new(Duration::from_millis(1), Recording::default());
    let renderer = tokio::time::timeout(Duration::from_secs(5), player.run(rx))
        .await
        .expect("player did not finish");

    assert!(renderer.events.contains(&Event::Stats(PaneId::Grid(Algorithm::Quick))));
    assert!(renderer.events.contains(&Event::Stats(PaneId::Grid(Algorithm::Cycle))));
}

#[tokio::test]
async fn run_stops_on_shutdown() {
    let (tx, rx) = mpsc::channel(8);
    tx.send(PlayerCommand::Generate(INPUT.to_vec())).await.unwrap();
    tx.send(PlayerCommand::Play { pane: PaneId::Single, run: run_for(Algorithm::Bubble) })
        .await
        .unwrap();
    tx.send(PlayerCommand::Shutdown).await.unwrap();

    let player = Player::new(Duration::from_secs(60), Recording::default());
    let renderer = tokio::time::timeout(Duration::from_secs(5), player.run(rx))
        .await
        .expect("player ignored shutdown");

    assert!(!renderer.events.contains(&Event::Stats(PaneId::Single)));
    drop(tx);
}
