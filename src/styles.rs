/// A CSS file under `styles/`, embedded at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stylesheet {
    /// Path relative to `styles/`, `/`-separated.
    pub name: &'static str,
    pub source: &'static str,
}

include!(concat!(env!("OUT_DIR"), "/stylesheets.rs"));

impl Stylesheet {
    pub fn href(&self, base_path: &str) -> String {
        format!("{}/{}", base_path.trim_end_matches('/'), self.name)
    }
}

/// Link targets for every embedded stylesheet, in file-name order.
pub fn hrefs(base_path: &str) -> Vec<String> {
    STYLESHEETS.iter().map(|s| s.href(base_path)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn globals_is_embedded() {
        let globals = STYLESHEETS.iter().find(|s| s.name == "globals.css").unwrap();
        assert!(globals.source.contains("main"));
    }

    #[test]
    fn href_joins_base_path() {
        let sheet = Stylesheet { name: "globals.css", source: "" };
        assert_eq!(sheet.href("/"), "/globals.css");
        assert_eq!(sheet.href("/app/"), "/app/globals.css");
        assert_eq!(sheet.href("/app"), "/app/globals.css");
    }
}
