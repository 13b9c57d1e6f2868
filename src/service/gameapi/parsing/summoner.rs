use json::JsonValue;

use crate::model::summoner::{RankedQueueStats, Summoner};

use super::ParsingError;

pub fn parse_summoner(json: &JsonValue) -> Result<Summoner, ParsingError> {
    if let JsonValue::Object(obj) = json {
        let id = obj["id"].as_str().ok_or(ParsingError::InvalidType("id".into()))?;
        let name = obj["name"].as_str().ok_or(ParsingError::InvalidType("name".into()))?;
        let level = obj["summonerLevel"]
            .as_u32()
            .ok_or(ParsingError::InvalidType("summonerLevel".into()))?;

        return Ok(Summoner {
            id: id.into(),
            name: name.to_string(),
            level,
        });
    }

    Err(ParsingError::InvalidType("root".into()))
}

pub fn parse_ranked_stats(json: &JsonValue) -> Result<Vec<RankedQueueStats>, ParsingError> {
    let JsonValue::Array(entries) = json else {
        return Err(ParsingError::InvalidType("root".into()));
    };

    let mut stats = Vec::with_capacity(entries.len());
    for entry_json in entries {
        let JsonValue::Object(entry) = entry_json else {
            return Err(ParsingError::InvalidType("entries".into()));
        };

        let queue_type = entry["queueType"]
            .as_str()
            .ok_or(ParsingError::InvalidType("queueType".into()))?
            .to_string();
        let tier = entry["tier"]
            .as_str()
            .ok_or(ParsingError::InvalidType("tier".into()))?
            .to_string();

        // The league endpoint calls the division "rank"
        let division = entry["rank"]
            .as_str()
            .ok_or(ParsingError::InvalidType("rank".into()))?
            .to_string();

        let league_points = entry["leaguePoints"]
            .as_u32()
            .ok_or(ParsingError::InvalidType("leaguePoints".into()))?;
        let wins = entry["wins"].as_u32().ok_or(ParsingError::InvalidType("wins".into()))?;
        let losses = entry["losses"]
            .as_u32()
            .ok_or(ParsingError::InvalidType("losses".into()))?;

        stats.push(RankedQueueStats {
            queue_type,
            tier,
            division,
            league_points,
            wins,
            losses,
        });
    }

    Ok(stats)
}
