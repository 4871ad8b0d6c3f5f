//! Tool-call command: list the assistant's tools or execute one call.

use crate::{
    pages::PageComposer,
    tools::{execute_json, tool_definitions},
    Result,
};
use std::io::Read;
use std::path::Path;

/// Print the tool definitions, or execute `call` (`-` reads it from stdin).
pub async fn handle_tool(db_path: &Path, list: bool, call: Option<String>) -> Result<()> {
    let value = match call {
        Some(raw) if !list => {
            let raw = if raw == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                raw
            };
            execute_json(&PageComposer::new(db_path), &raw).await?
        }
        _ => tool_definitions(),
    };

    println!("{}", serde_json::to_string_pretty(&value)?); // tarpaulin::skip
    Ok(())
}
