pub mod config;
pub mod context;
pub mod lists;
pub mod movies;
pub mod prompts;
pub mod recommend;
pub mod session;
