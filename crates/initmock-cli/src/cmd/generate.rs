use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use initmock_core::payload::{AUTH_DATE_FIELD, HASH_FIELD};
use initmock_core::prelude::*;

use crate::config;
use crate::output;

#[derive(Debug, Serialize)]
pub struct GenerateOut {
    pub init_data: String,
    pub auth_date: i64,
    pub hash: String,
}

pub fn run(env_file: &str, auth_date: Option<i64>, user_path: Option<&str>) -> Result<()> {
    let token = config::load_bot_token(Path::new(env_file))?;

    let user = user_path.map(config::load_user_record).transpose()?;
    let opts = GenerateOptions { user, auth_date };

    let data = build_init_data(&token, &opts)?;
    let wire = data.to_query_string();

    if output::is_json() {
        let auth_date: i64 = data
            .get(AUTH_DATE_FIELD)
            .unwrap_or_default()
            .parse()
            .unwrap_or_default();
        let hash = data.get(HASH_FIELD).unwrap_or_default().to_string();
        return output::print(&GenerateOut {
            init_data: wire,
            auth_date,
            hash,
        });
    }

    output::heading("Generated init data");
    output::payload_line(&wire);
    println!();
    output::heading("Parsed fields");
    output::render_fields(&data);
    Ok(())
}
