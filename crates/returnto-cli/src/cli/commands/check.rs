//! Check command: audit a single raw `returnTo` value.

use anyhow::Result;
use returnto_core::redirect::{Rejection, ReturnToResolver};
use serde_json::json;

/// Print the verdict for `raw`. Returns whether the value was accepted.
pub fn run_check(resolver: &ReturnToResolver, raw: &str, as_json: bool) -> Result<bool> {
    let verdict = resolver.check_raw(raw);
    if as_json {
        println!("{}", serde_json::to_string(&verdict_json(raw, &verdict))?);
    } else {
        match &verdict {
            Ok(path) => println!("accepted: {}", path),
            Err(reason) => println!("rejected ({}): {}", reason.code(), reason),
        }
    }
    tracing::debug!(raw, accepted = verdict.is_ok(), "checked redirect value");
    Ok(verdict.is_ok())
}

fn verdict_json(raw: &str, verdict: &Result<String, Rejection>) -> serde_json::Value {
    match verdict {
        Ok(path) => json!({ "input": raw, "accepted": true, "path": path }),
        Err(reason) => json!({
            "input": raw,
            "accepted": false,
            "reason": reason.code(),
            "message": reason.to_string(),
        }),
    }
}
