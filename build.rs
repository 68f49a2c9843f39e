use core::panic;
use std::path::{Path, PathBuf};

const SHIPPED_DATASETS: [&str; 2] = ["iris", "movie_review"];

fn copy_resources(
    dataset_name: &str,
    datasets_dir: &Path,
    resources_dir: &Path,
) {
    let dataset_dir = datasets_dir.join(dataset_name);
    if let Ok(()) = std::fs::create_dir_all(&dataset_dir) {
        std::fs::copy(
            resources_dir.join(dataset_name).join("data.csv"),
            dataset_dir.join("data.csv"),
        )
        .map_err(|err| format!("Failed to copy {dataset_name} data.csv: {err}"))
        .unwrap();
    } else {
        panic!("Failed to create {:?}", dataset_dir);
    }
}

fn main() {
    // DOCS_RS indicates that you are building for the website `https://docs.rs`
    if std::env::var("DOCS_RS").is_err() {
        // Seed the shipped datasets into the user cache so that first use
        // does not depend on the crate's source tree being present.
        let datasets_dir: PathBuf = dirs::data_dir()
            .map(|dir| dir.join("mlframes").join("datasets"))
            .expect("Could not find data dir.");

        let resources_dir = Path::new("resources").join("datasets");

        std::fs::create_dir_all(&datasets_dir)
            .expect("Could not create datasets dir.");

        for dataset_name in SHIPPED_DATASETS {
            copy_resources(
                dataset_name,
                datasets_dir.as_path(),
                resources_dir.as_path(),
            )
        }
    }
}
