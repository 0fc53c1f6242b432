use clap::Parser;
use serde_json::Value;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// SQLite database file. Created on first run when missing.
    #[arg(
        short = 'n',
        long,
        value_name = "DATABASE_NAME",
        default_value = "putting.db"
    )]
    pub db_name: String,
    /// Address and port to serve on.
    #[arg(long, value_name = "BIND_ADDR", default_value = "0.0.0.0:8081")]
    pub bind: String,
    /// Page title for the index page.
    #[arg(long, value_name = "TITLE", default_value = "Putting Analyzer")]
    pub title: String,
    /// If specified, this json seeds the database on program startup. Sections
    /// already populated in the database are left alone.
    #[arg(
        long,
        value_name = "SEED_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub db_populate_json: Option<Value>,
    /// Chat-completions base URL for scorecard scanning. Scan endpoints are
    /// disabled when this is not set.
    #[arg(long, value_name = "LLM_BASE_URL")]
    pub llm_base_url: Option<String>,
    #[arg(long, value_name = "LLM_MODEL", default_value = "gpt-4o")]
    pub llm_model: String,
    /// File holding the API key. The LLM_API_KEY env var works too.
    #[arg(
        long,
        value_name = "LLM_API_KEY_FILE",
        value_parser = crate::args::validation::check_readable_file
    )]
    pub llm_api_key_file: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub db_name: String,
    pub bind: String,
    pub title: String,
    pub db_populate_json: Option<Value>,
    pub llm_base_url: Option<String>,
    pub llm_model: String,
    pub llm_api_key: Option<String>,
}
