#![allow(dead_code)]

use std::{
    collections::HashMap,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use walkdir::WalkDir;

pub type AnyRes<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Debug, Deserialize)]
pub struct SuccessCase {
    pub desc: String,
    pub input: String,
    #[serde(default)]
    pub env: HashMap<String, String>,
    #[serde(default)]
    pub nounset: bool,
    pub expected: String,
    /// Store contents after expansion, when the case checks assignments.
    #[serde(default)]
    pub expected_env: Option<HashMap<String, String>>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorCase {
    pub desc: String,
    pub input: String,
    #[serde(default)]
    pub env: HashMap<String, String>,
    #[serde(default)]
    pub nounset: bool,
    /// `ParseError` or `EvaluationError`.
    pub error: String,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TestCase {
    Success(SuccessCase),
    Error(ErrorCase),
}

impl TestCase {
    pub fn desc(&self) -> &str {
        match self {
            Self::Success(SuccessCase { desc, .. }) | Self::Error(ErrorCase { desc, .. }) => desc,
        }
    }
}

pub fn load_test_cases(path: impl AsRef<Path>) -> AnyRes<Vec<TestCase>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let data: Vec<TestCase> = serde_json::from_reader(reader)?;
    Ok(data)
}

/// Every `.json` case file under `tests/resources`, sorted by path.
pub fn collect_case_files() -> AnyRes<Vec<PathBuf>> {
    let root = get_resource_path("")?;
    let mut paths: Vec<_> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().ends_with(".json"))
        .map(|e| e.path().to_path_buf())
        .collect();
    paths.sort();
    Ok(paths)
}

pub fn get_resource_path(path: impl AsRef<Path>) -> AnyRes<PathBuf> {
    let project_dir = std::env::var("CARGO_MANIFEST_DIR")?;
    Ok(PathBuf::from(project_dir)
        .join("tests/resources")
        .join(path))
}
