pub mod gameapi;
pub mod pipeline;
