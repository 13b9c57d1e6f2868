use crate::{model::summoner::RankedQueueStats, state::QueryState};

/// Shown in place of a ratio or rate that has no defined value.
pub const NO_VALUE: &str = "—";

#[derive(Debug, Clone, PartialEq)]
pub enum ProfilePanel {
    Hidden,
    Loading,
    Found { name: String, level: u32 },
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RankedPanel {
    Hidden,
    Loading,
    Entries(Vec<RankedCard>),
    NoRankData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedCard {
    pub queue_label: &'static str,
    pub tier: String,
    pub division: String,
    pub league_points: u32,
    pub total_games: u64,
    pub wins: u32,
    pub losses: u32,
    pub win_loss_ratio: String,
    pub win_rate: String,
}

impl RankedCard {
    pub fn from_stats(stats: &RankedQueueStats) -> Self {
        Self {
            queue_label: stats.queue_label(),
            tier: stats.tier.clone(),
            division: stats.division.clone(),
            league_points: stats.league_points,
            total_games: stats.total_games(),
            wins: stats.wins,
            losses: stats.losses,
            win_loss_ratio: format_ratio(stats),
            win_rate: format_rate(stats),
        }
    }

    pub fn rank(&self) -> String {
        format!("{} {}", self.tier, self.division)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub profile: ProfilePanel,
    pub ranked: RankedPanel,
}

pub fn project(state: &QueryState) -> Projection {
    Projection {
        profile: project_profile(state),
        ranked: project_ranked(state),
    }
}

fn project_profile(state: &QueryState) -> ProfilePanel {
    if state.is_loading() {
        return ProfilePanel::Loading;
    }

    match state.profile() {
        Some(summoner) if !summoner.is_placeholder() => ProfilePanel::Found {
            name: summoner.name.clone(),
            level: summoner.level,
        },
        _ if !state.committed_query().is_empty() => ProfilePanel::NotFound,
        _ => ProfilePanel::Hidden,
    }
}

fn project_ranked(state: &QueryState) -> RankedPanel {
    if state.is_loading() {
        RankedPanel::Loading
    } else if !state.entries().is_empty() {
        RankedPanel::Entries(state.entries().iter().map(RankedCard::from_stats).collect())
    } else if !state.committed_query().is_empty() {
        RankedPanel::NoRankData
    } else {
        RankedPanel::Hidden
    }
}

/// Rounds half away from zero; plain `{:.N}` formatting would round ties to even.
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

pub fn format_ratio(stats: &RankedQueueStats) -> String {
    stats
        .win_loss_ratio()
        .map_or(NO_VALUE.to_string(), |ratio| format!("{:.2}", round_to(ratio, 2)))
}

pub fn format_rate(stats: &RankedQueueStats) -> String {
    stats
        .win_rate()
        .map_or(NO_VALUE.to_string(), |rate| format!("{:.1}%", round_to(rate, 1)))
}
