use ratatui::{style::Color, text::Line};

use crate::{
    styled_line,
    ui::projection::{ProfilePanel, Projection, RankedCard, RankedPanel},
};

pub const GOLD: Color = Color::Rgb(200, 150, 0);
const QUEUE_HEADER: Color = Color::LightYellow;

pub fn projection_lines(projection: &Projection) -> Vec<Line<'static>> {
    let mut lines = profile_lines(&projection.profile);
    lines.extend(ranked_lines(&projection.ranked));
    lines
}

pub fn profile_lines(panel: &ProfilePanel) -> Vec<Line<'static>> {
    match panel {
        ProfilePanel::Hidden => vec![],
        ProfilePanel::Loading => vec![styled_line!("Loading player..."; Color::DarkGray), styled_line!()],
        ProfilePanel::Found { name, level } => vec![
            styled_line!(name; Bold GOLD),
            styled_line!("Level {}", level),
            styled_line!(),
        ],
        ProfilePanel::NotFound => vec![styled_line!("No player data found."; Color::Red), styled_line!()],
    }
}

pub fn ranked_lines(panel: &RankedPanel) -> Vec<Line<'static>> {
    match panel {
        RankedPanel::Hidden => vec![],
        RankedPanel::Loading => vec![styled_line!("Loading ranked data..."; Color::DarkGray)],
        RankedPanel::NoRankData => vec![styled_line!("No rank data found."; Color::Red)],
        RankedPanel::Entries(cards) => cards.iter().flat_map(card_lines).collect(),
    }
}

fn card_lines(card: &RankedCard) -> Vec<Line<'static>> {
    vec![
        styled_line!("━━ {} ━━", card.queue_label; Bold QUEUE_HEADER),
        styled_line!(card.rank(); Bold rank_color(&card.tier)),
        styled_line!("{} LP", card.league_points),
        styled_line!("Total matches: {}", card.total_games),
        styled_line!("Wins: {}", card.wins; Color::Green),
        styled_line!("Losses: {}", card.losses; Color::Red),
        styled_line!("Win-loss ratio: {}", card.win_loss_ratio),
        styled_line!("Win-loss rate: {}", card.win_rate),
        styled_line!(),
    ]
}

fn rank_color(tier: &str) -> Color {
    match tier {
        "IRON" => Color::Rgb(115, 115, 115),
        "BRONZE" => Color::Rgb(180, 83, 9),
        "SILVER" => Color::Rgb(156, 163, 175),
        "GOLD" => Color::Rgb(234, 179, 8),
        "PLATINUM" => Color::Rgb(20, 184, 166),
        "EMERALD" => Color::Rgb(16, 185, 129),
        "DIAMOND" => Color::Rgb(59, 130, 246),
        "MASTER" => Color::Rgb(168, 85, 247),
        "GRANDMASTER" => Color::Rgb(239, 68, 68),
        "CHALLENGER" => Color::Rgb(251, 191, 36),
        _ => Color::White,
    }
}

/// Drops all styling, one output line per rendered line.
pub fn plain_text(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
