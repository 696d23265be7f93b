use std::io::{self, Write};

use serde::Serialize;
use serde_json::Value;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use initmock_core::payload::{InitData, USER_FIELD};

static mut JSON_MODE: bool = false;

pub fn init(json: bool) {
    unsafe { JSON_MODE = json; }
}

pub fn is_json() -> bool {
    unsafe { JSON_MODE }
}

pub fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

pub fn eprintln_line(msg: &str) {
    let _ = writeln!(io::stderr(), "{msg}");
}

pub fn stdout() -> StandardStream {
    StandardStream::stdout(ColorChoice::Auto)
}

/// Print a section heading.
pub fn heading(text: &str) {
    let mut out = stdout();
    let _ = out.set_color(ColorSpec::new().set_bold(true).set_fg(Some(Color::Cyan)));
    let _ = writeln!(out, "{text}");
    let _ = out.reset();
}

/// Print the raw payload line.
pub fn payload_line(raw: &str) {
    println!("{raw}");
}

/// Print the percent-decoded fields of a payload, one per line.
///
/// The `user` value is expanded attribute-per-line when it parses as a
/// JSON object. A value that does not parse is printed raw; this path
/// never fails.
pub fn render_fields(data: &InitData) {
    for (name, value) in data.fields() {
        if name == USER_FIELD {
            if let Ok(Value::Object(attrs)) = serde_json::from_str::<Value>(value) {
                println!("{name}:");
                for (attr, v) in &attrs {
                    println!("  {attr}: {}", plain(v));
                }
                continue;
            }
        }
        println!("{name}: {value}");
    }
}

/// Render a JSON scalar without quoting strings.
fn plain(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_strips_string_quotes() {
        assert_eq!(plain(&Value::String("ru".to_string())), "ru");
        assert_eq!(plain(&Value::Bool(false)), "false");
        assert_eq!(plain(&serde_json::json!(687627953)), "687627953");
    }
}
