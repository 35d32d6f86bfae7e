//! Builder for repository listing pages

/// Builds an HTML listing in the style of a Nexus raw repository browse page
#[derive(Debug, Clone, Default)]
pub struct ListingBuilder {
    base_url: String,
    anchors: Vec<(String, String)>,
}

impl ListingBuilder {
    /// Listing whose hrefs are absolute URLs under `base_url`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anchors: Vec::new(),
        }
    }

    /// Add an artifact linked under the base URL
    pub fn artifact(mut self, filename: &str) -> Self {
        let href = format!("{}/{}", self.base_url, filename);
        self.anchors.push((href, filename.to_string()));
        self
    }

    /// Add several artifacts in order
    pub fn artifacts<S: AsRef<str>>(self, filenames: &[S]) -> Self {
        filenames
            .iter()
            .fold(self, |builder, name| builder.artifact(name.as_ref()))
    }

    /// Add an anchor with an explicit href
    pub fn anchor(mut self, href: &str, text: &str) -> Self {
        self.anchors.push((href.to_string(), text.to_string()));
        self
    }

    /// Render the page
    pub fn build(self) -> String {
        let rows: String = self
            .anchors
            .iter()
            .map(|(href, text)| {
                format!(
                    "    <tr>\n      <td><a class=\"name\" href=\"{}\">{}</a></td>\n      <td>1.2 MB</td>\n    </tr>\n",
                    href, text
                )
            })
            .collect();

        format!(
            "<html>\n<head><title>Index of /repository/raw/app/</title></head>\n<body>\n  <h1>Index of /repository/raw/app/</h1>\n  <table>\n    <tr><td><a href=\"../\">Parent Directory</a></td></tr>\n{}  </table>\n</body>\n</html>\n",
            rows
        )
    }
}
