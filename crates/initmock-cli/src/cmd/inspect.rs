use anyhow::Result;
use serde::Serialize;

use initmock_core::payload::InitData;

use crate::output;

#[derive(Debug, Serialize)]
pub struct FieldOut {
    pub name: String,
    pub value: String,
}

pub fn run(raw: &str) -> Result<()> {
    let data = InitData::parse(raw)?;

    if output::is_json() {
        let fields: Vec<FieldOut> = data
            .fields()
            .iter()
            .map(|(name, value)| FieldOut {
                name: name.clone(),
                value: value.clone(),
            })
            .collect();
        return output::print(&fields);
    }

    output::heading("Parsed fields");
    output::render_fields(&data);
    Ok(())
}
