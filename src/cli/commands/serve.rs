use crate::api::{Request, err, handle_request};
use crate::config::Config;
use crate::errors::AppResult;
use std::io::{self, BufRead, Write};

/// Answer one request line. Unparseable lines get a `bad_json` reply with a
/// null id, since the request id cannot be recovered.
pub fn respond(cfg: &Config, line: &str) -> serde_json::Value {
    match serde_json::from_str::<Request>(line) {
        Ok(req) => handle_request(cfg, &req),
        Err(e) => err(&serde_json::Value::Null, 400, "bad_json", e.to_string()),
    }
}

/// Handle the `serve` command: JSON requests on stdin, one response line
/// per request on stdout, until stdin closes.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let resp = respond(cfg, &line);
        writeln!(stdout, "{}", resp)?;
        stdout.flush()?;
    }

    Ok(())
}
