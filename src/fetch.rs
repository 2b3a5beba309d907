//! One-shot retrieval of the door-status page.

use anyhow::Result;
use std::fs;
use std::path::Path;

/// The door-status page polled once at startup.
pub const DOOR_STATUS_URL: &str = "http://www.brianmichael.org/current.php";

fn http_client() -> Result<reqwest::blocking::Client> {
    Ok(reqwest::blocking::Client::builder().build()?)
}

/// Downloads the status page, blocking until the server responds.
pub fn fetch_page(url: &str) -> Result<String> {
    let client = http_client()?;
    let response = client.get(url).send()?;
    if !response.status().is_success() {
        anyhow::bail!("Failed to download {}: {}", url, response.status());
    }
    Ok(response.text()?)
}

/// Reads a saved copy of the status page from disk.
pub fn load_page(path: &str) -> Result<String> {
    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {}", path);
    }
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_page_reads_saved_copy() {
        let path = std::env::temp_dir().join("door_tui_fixture.html");
        fs::write(&path, "<tr><td>1</td></tr>").unwrap();
        let html = load_page(path.to_str().unwrap()).unwrap();
        assert_eq!(html, "<tr><td>1</td></tr>");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_page_missing_file_names_path() {
        let err = load_page("/nonexistent/door.html").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/door.html"));
    }
}
