use clap::Parser;
use serde::Serialize;

fn is_none<T>(o: &Option<T>) -> bool {
    o.is_none()
}

#[derive(Debug, Parser, Serialize)]
pub struct Cli {
    /// Address to bind the API server to, e.g. 0.0.0.0:8002
    #[arg(long)]
    #[serde(skip_serializing_if = "is_none")]
    pub server_bind: Option<String>,

    /// Override the upstream feed URL
    #[arg(long)]
    #[serde(skip_serializing_if = "is_none")]
    pub feed_url: Option<String>,
}
