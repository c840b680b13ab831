use crate::error::{IoContext, Result};
use crate::render::render_page;
use crate::settings::Settings;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use microservices_frontend_ui::styles::{self, STYLESHEETS};
use microservices_frontend_ui::{Metadata, Page, METADATA};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const MANIFEST_FILE: &str = "site.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestPage {
    pub route: String,
    pub file: String,
}

/// Written next to the pages when `write_manifest` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteManifest {
    pub metadata: Metadata,
    pub pages: Vec<ManifestPage>,
    pub stylesheets: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output_directory: PathBuf,
    pub pages: Vec<PathBuf>,
    pub stylesheets: Vec<PathBuf>,
    pub manifest: Option<PathBuf>,
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).at(parent)?;
    }
    fs::write(path, contents).at(path)?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

pub async fn build_site(settings: &Settings) -> Result<BuildReport> {
    settings.validate()?;

    let out_dir = PathBuf::from(&settings.output_directory);
    fs::create_dir_all(&out_dir).at(&out_dir)?;

    let mut stylesheets = Vec::with_capacity(STYLESHEETS.len());
    for sheet in STYLESHEETS {
        let path = out_dir.join(sheet.name);
        write_file(&path, sheet.source)?;
        stylesheets.push(path);
    }

    let hrefs = styles::hrefs(&settings.base_path);
    let rendered = join_all(Page::ALL.iter().map(|&page| {
        let hrefs = hrefs.clone();
        async move { (page, render_page(page, hrefs).await) }
    }))
    .await;

    let mut pages = Vec::with_capacity(rendered.len());
    for (page, document) in &rendered {
        let path = out_dir.join(page.file_name());
        write_file(&path, document)?;
        pages.push(path);
    }

    let manifest = if settings.write_manifest {
        let manifest = SiteManifest {
            metadata: METADATA,
            pages: Page::ALL
                .iter()
                .map(|p| ManifestPage { route: p.route().to_string(), file: p.file_name().to_string() })
                .collect(),
            stylesheets: hrefs,
            generated_at: Utc::now(),
        };
        let path = out_dir.join(MANIFEST_FILE);
        write_file(&path, &serde_json::to_string_pretty(&manifest)?)?;
        Some(path)
    } else {
        None
    };

    info!(
        output = %out_dir.display(),
        pages = pages.len(),
        stylesheets = stylesheets.len(),
        "site built"
    );

    Ok(BuildReport { output_directory: out_dir, pages, stylesheets, manifest })
}
