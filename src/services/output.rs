use crate::domain::models::JsonOut;
use serde::Serialize;

/// Print one workflow result: the pretty `JsonOut` envelope in JSON mode,
/// the rendered text otherwise.
pub fn emit<T: Serialize>(
    json: bool,
    data: &T,
    text: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", text(data));
    }
    Ok(())
}

/// Print a record listing row by row; JSON mode wraps the whole list in the
/// same envelope.
pub fn emit_rows<T: Serialize>(
    json: bool,
    rows: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: rows
            })?
        );
    } else {
        for r in rows {
            println!("{}", row(r));
        }
    }
    Ok(())
}
