pub mod ids;
pub mod summoner;
