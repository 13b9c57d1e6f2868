use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use json::JsonValue;
use summoner_lookup::model::ids::SummonerId;
use summoner_lookup::service::gameapi::riot_api_client::RiotApiRequestError;
use summoner_lookup::service::gameapi::GameApi;
use summoner_lookup::service::pipeline::{run_pipeline, PipelineEvent, PipelineMessage};
use summoner_lookup::state::{Action, Effect, QueryState};
use summoner_lookup::ui::projection::{project, ProfilePanel, RankedPanel};
use summoner_lookup::ui::{run_once, LookupRunner};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

/// Serves fixture payloads; `None` answers with a 404.
struct FakeApi {
    summoner: Option<String>,
    league: Option<String>,
    summoner_calls: AtomicUsize,
    league_calls: AtomicUsize,
}

impl FakeApi {
    fn new(summoner: Option<&str>, league: Option<&str>) -> Self {
        Self {
            summoner: summoner.map(read_fixture),
            league: league.map(read_fixture),
            summoner_calls: AtomicUsize::new(0),
            league_calls: AtomicUsize::new(0),
        }
    }

    fn faker() -> Self {
        Self::new(Some("summoner_faker.json"), Some("league_faker.json"))
    }

    fn calls(&self) -> (usize, usize) {
        (
            self.summoner_calls.load(Ordering::SeqCst),
            self.league_calls.load(Ordering::SeqCst),
        )
    }

    fn respond(body: &Option<String>) -> Result<JsonValue, RiotApiRequestError> {
        match body {
            Some(raw) => Ok(json::parse(raw)?),
            None => Err(RiotApiRequestError::InvalidResponse(404, "Data not found".to_string())),
        }
    }
}

impl GameApi for FakeApi {
    fn summoner_by_name(&self, _name: &str) -> Result<JsonValue, RiotApiRequestError> {
        self.summoner_calls.fetch_add(1, Ordering::SeqCst);
        Self::respond(&self.summoner)
    }

    fn league_entries(&self, _summoner_id: &SummonerId) -> Result<JsonValue, RiotApiRequestError> {
        self.league_calls.fetch_add(1, Ordering::SeqCst);
        Self::respond(&self.league)
    }
}

fn collect_events(api: &FakeApi, query: &str) -> Vec<PipelineEvent> {
    let (tx, rx) = mpsc::channel();
    run_pipeline(api, 7, query, &tx);
    drop(tx);
    rx.into_iter()
        .map(|message| {
            assert_eq!(message.generation, 7);
            message.event
        })
        .collect()
}

#[test]
fn pipeline_reports_profile_then_ranked_then_finished() {
    let api = FakeApi::faker();
    let events = collect_events(&api, "Faker");

    assert_eq!(events.len(), 3);
    assert!(matches!(&events[0], PipelineEvent::Profile(s) if s.name == "Faker" && s.level == 500));
    assert!(matches!(&events[1], PipelineEvent::Ranked(entries) if entries.len() == 2));
    assert_eq!(events[2], PipelineEvent::Finished);
    assert_eq!(api.calls(), (1, 1));
}

#[test]
fn failed_profile_lookup_skips_ranked_call() {
    let api = FakeApi::new(None, Some("league_faker.json"));
    let events = collect_events(&api, "Nobody");

    assert_eq!(events, vec![PipelineEvent::Finished]);
    assert_eq!(api.calls(), (1, 0));
}

#[test]
fn failed_ranked_lookup_keeps_profile() {
    let api = FakeApi::new(Some("summoner_faker.json"), None);
    let events = collect_events(&api, "Faker");

    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], PipelineEvent::Profile(_)));
    assert_eq!(events[1], PipelineEvent::Finished);
}

#[test]
fn malformed_ranked_payload_is_swallowed() {
    let api = FakeApi::new(Some("summoner_faker.json"), Some("league_missing_wins.json"));
    let output = run_once(&api, "Faker");

    assert!(output.contains("Faker"));
    assert!(output.contains("No rank data found."));
}

#[test]
fn placeholder_profile_renders_as_not_found() {
    let api = FakeApi::new(Some("summoner_undefined.json"), Some("league_faker.json"));
    let output = run_once(&api, "Nobody");

    assert!(output.starts_with("No player data found."));
    assert_eq!(api.calls(), (1, 0));
}

#[test]
fn faker_example_end_to_end() {
    let api = FakeApi::faker();
    let output = run_once(&api, "Faker");

    assert!(output.starts_with("Faker\nLevel 500\n"));
    assert!(output.contains("━━ SOLO/DUO ━━\nCHALLENGER I\n1200 LP\nTotal matches: 500"));
    assert!(output.contains("Win-loss ratio: 1.50"));
    assert!(output.contains("Win-loss rate: 60.0%"));

    // Flex queue in the fixture has no losses
    assert!(output.contains("━━ FLEX ━━"));
    assert!(output.contains("Win-loss ratio: —"));
    assert!(!output.contains("inf"));
}

#[test]
fn short_or_long_names_never_hit_the_network() {
    let api = FakeApi::faker();
    for name in ["ab", "abcdefghijklmnopq"] {
        let output = run_once(&api, name);
        assert!(output.starts_with("No player data found."));
    }
    assert_eq!(api.calls(), (0, 0));
}

#[test]
fn stale_lookup_cannot_overwrite_newer_query() {
    let mut state = QueryState::new();
    let api = FakeApi::faker();

    state.apply(Action::SetInput("Faker".to_string()));
    let first = state.apply(Action::Submit);
    state.apply(Action::SetInput("Caps".to_string()));
    let second = state.apply(Action::Submit);

    let (Some(Effect::StartLookup { generation: old, query: old_query }), Some(Effect::StartLookup { generation: new, .. })) =
        (first, second)
    else {
        panic!("both submits should start a lookup");
    };
    assert!(new > old);

    // The superseded lookup resolves late
    let (tx, rx) = mpsc::channel::<PipelineMessage>();
    run_pipeline(&api, old, &old_query, &tx);
    drop(tx);
    for message in rx {
        state.apply(Action::Pipeline(message));
    }

    let projection = project(&state);
    assert_eq!(projection.profile, ProfilePanel::Loading);
    assert_eq!(projection.ranked, RankedPanel::Loading);
    assert!(state.profile().is_none());
}

#[test]
fn runner_delivers_background_results() {
    let api = Arc::new(FakeApi::faker());
    let runner = LookupRunner::new(api.clone());
    let mut state = QueryState::new();

    state.apply(Action::SetInput("Faker".to_string()));
    let effect = state.apply(Action::Submit).expect("valid name should start a lookup");
    runner.start(effect).expect("lookup thread should spawn");

    let deadline = Instant::now() + Duration::from_secs(5);
    while state.is_loading() && Instant::now() < deadline {
        for message in runner.try_drain() {
            state.apply(Action::Pipeline(message));
        }
        std::thread::sleep(Duration::from_millis(5));
    }

    assert!(!state.is_loading());
    assert_eq!(state.entries().len(), 2);
    assert!(matches!(project(&state).profile, ProfilePanel::Found { level: 500, .. }));
    assert_eq!(api.calls(), (1, 1));
}
