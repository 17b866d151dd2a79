use std::path::{Path, PathBuf};

/// Copy a fixture into `dir` so a test can rewrite it in place.
pub fn stage(dir: &Path, name: &str) -> PathBuf {
    let dest = dir.join(name);
    std::fs::copy(Path::new("tests/fixtures").join(name), &dest).unwrap();
    dest
}

/// Expected output for a fixture, without the trailing newline of the file.
pub fn expected(name: &str) -> String {
    std::fs::read_to_string(Path::new("tests/fixtures/expected").join(name))
        .unwrap()
        .trim_end()
        .to_string()
}
