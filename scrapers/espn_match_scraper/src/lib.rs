pub mod competition;
pub mod config;
pub mod dates;
pub mod error;
pub mod espn_scraper;
pub mod event_feed;
pub mod fetcher;
pub mod match_detail;
pub mod match_list;
pub mod output;
pub mod teams;
pub mod types;
pub mod utils;
