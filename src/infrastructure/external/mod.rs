pub mod nyt;
pub mod nyt_adapter;
