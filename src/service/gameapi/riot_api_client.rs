use std::fmt;

use json::JsonValue;
use reqwest::blocking::Client;
use tracing::debug;

use crate::{config::ApiConfig, model::ids::SummonerId};

use super::GameApi;

const SUMMONER_BY_NAME_PATH: &str = "/lol/summoner/v4/summoners/by-name";
const LEAGUE_ENTRIES_PATH: &str = "/lol/league/v4/entries/by-summoner";

pub struct RiotApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RiotApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, RiotApiClientInitError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url(),
            api_key: config.api_key.clone(),
        })
    }

    fn request(&self, path: &str) -> Result<JsonValue, RiotApiRequestError> {
        // Only the path is logged, the key travels as a query parameter
        debug!(host = %self.base_url, path, "Sending Riot API request");

        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()?;

        if !response.status().is_success() {
            return Err(RiotApiRequestError::InvalidResponse(
                response.status().as_u16(),
                response.text().unwrap_or_else(|_| "Unknown error".to_string()),
            ));
        }

        let text = response.text()?;
        let json = json::parse(&text)?;

        Ok(json)
    }
}

impl GameApi for RiotApiClient {
    fn summoner_by_name(&self, name: &str) -> Result<JsonValue, RiotApiRequestError> {
        self.request(&format!("{}/{}", SUMMONER_BY_NAME_PATH, urlencoding::encode(name)))
    }

    fn league_entries(&self, summoner_id: &SummonerId) -> Result<JsonValue, RiotApiRequestError> {
        self.request(&format!(
            "{}/{}",
            LEAGUE_ENTRIES_PATH,
            urlencoding::encode(summoner_id.as_str())
        ))
    }
}

#[derive(Debug)]
pub enum RiotApiClientInitError {
    HttpClientCreation(reqwest::Error),
}

impl fmt::Display for RiotApiClientInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RiotApiClientInitError::HttpClientCreation(e) => {
                write!(f, "Failed to create HTTP client: {}", e)
            }
        }
    }
}

impl From<reqwest::Error> for RiotApiClientInitError {
    fn from(error: reqwest::Error) -> Self {
        Self::HttpClientCreation(error)
    }
}

#[derive(Debug)]
pub enum RiotApiRequestError {
    NetworkError(reqwest::Error),
    InvalidResponse(u16, String),
    JsonParseError(json::Error),
}

impl fmt::Display for RiotApiRequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RiotApiRequestError::NetworkError(e) => {
                write!(f, "Network error: {}", e)
            }
            RiotApiRequestError::InvalidResponse(status, body) => {
                write!(f, "Server returned error {}: {}", status, body)
            }
            RiotApiRequestError::JsonParseError(e) => {
                write!(f, "Failed to parse JSON response: {}", e)
            }
        }
    }
}

impl From<reqwest::Error> for RiotApiRequestError {
    fn from(error: reqwest::Error) -> Self {
        Self::NetworkError(error)
    }
}

impl From<json::Error> for RiotApiRequestError {
    fn from(error: json::Error) -> Self {
        Self::JsonParseError(error)
    }
}
