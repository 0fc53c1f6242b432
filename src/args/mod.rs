use clap::Parser;
use std::env;
use std::fs;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

/// # Panics
///
/// Will panic if the arguments are invalid
#[must_use]
pub fn args_checks() -> CleanArgs {
    let args = Args::parse();
    args.validate().unwrap();
    CleanArgs::new(args)
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        let mut llm_api_key = env::var("LLM_API_KEY").ok();
        if let Some(key_file) = &args.llm_api_key_file {
            match fs::read_to_string(key_file) {
                Ok(key) => llm_api_key = Some(key.trim().to_string()),
                Err(e) => {
                    eprintln!("Warning: Failed to read API key file '{key_file}': {e}");
                    // Fall through to the env var rather than failing startup
                }
            }
        }
        CleanArgs {
            db_name: args.db_name,
            bind: args.bind,
            title: args.title,
            db_populate_json: args.db_populate_json,
            llm_base_url: args.llm_base_url,
            llm_model: args.llm_model,
            llm_api_key,
        }
    }
}
