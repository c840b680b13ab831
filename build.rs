use std::env;
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo"));
    let styles_dir = manifest_dir.join("styles");
    println!("cargo:rerun-if-changed={}", styles_dir.display());

    let mut table = String::from("pub const STYLESHEETS: &[Stylesheet] = &[\n");
    if styles_dir.is_dir() {
        for entry in WalkDir::new(&styles_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
        {
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().and_then(|e| e.to_str()) != Some("css") {
                continue;
            }
            let name = path
                .strip_prefix(&styles_dir)
                .expect("walkdir yields paths under styles/")
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            table.push_str(&format!(
                "    Stylesheet {{ name: {:?}, source: include_str!({:?}) }},\n",
                name,
                path.display().to_string()
            ));
        }
    }
    table.push_str("];\n");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::write(out_dir.join("stylesheets.rs"), table).expect("failed to write stylesheets.rs to OUT_DIR");
}
