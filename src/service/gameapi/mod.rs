use json::JsonValue;

use crate::model::ids::SummonerId;

pub mod parsing;
pub mod riot_api_client;

use riot_api_client::RiotApiRequestError;

/// The two Riot API endpoints a lookup touches. Implementations hand back the
/// raw JSON; turning it into records is left to [`parsing`].
pub trait GameApi: Send + Sync {
    fn summoner_by_name(&self, name: &str) -> Result<JsonValue, RiotApiRequestError>;

    fn league_entries(&self, summoner_id: &SummonerId) -> Result<JsonValue, RiotApiRequestError>;
}
