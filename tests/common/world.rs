use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use fake::Fake;
use fake::faker::lorem::en::{Word, Words};
use mini_git::areas::repository::Repository;
use mini_git::engine::Engine;
use std::collections::HashMap;
use std::path::Path;

/// Shared state for end-to-end command tests: a scratch working tree
/// with the engine pointed at it and a record of the files created.
#[derive(Debug)]
pub struct TestWorld {
    pub temp_dir: TempDir,
    pub file_contents: HashMap<String, String>,
}

impl TestWorld {
    pub fn new() -> Self {
        TestWorld {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
            file_contents: HashMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn engine(&self) -> Engine {
        Engine::new(self.path())
    }

    pub fn repository(&self) -> Repository {
        Repository::new(self.path()).expect("Failed to open repository")
    }

    pub fn write_file(&mut self, name: &str, content: &str) {
        let child = self.temp_dir.child(name);
        if let Some(parent) = child.path().parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        child.write_str(content).expect("Failed to write file");
        self.file_contents
            .insert(name.to_string(), content.to_string());
    }

    pub fn create_random_file(&mut self) -> String {
        let file_name = format!("{}.txt", Word().fake::<String>());
        let file_content = Words(5..10).fake::<Vec<String>>().join(" ");
        self.write_file(&file_name, &file_content);
        file_name
    }

    pub fn metadata_path(&self) -> std::path::PathBuf {
        self.path().join(".mini-git")
    }

    pub fn object_path(&self, id: &str) -> std::path::PathBuf {
        self.metadata_path().join("objects").join(id)
    }

    pub fn branch_ref(&self, name: &str) -> String {
        std::fs::read_to_string(self.metadata_path().join("refs/heads").join(name))
            .expect("Failed to read branch ref")
            .trim()
            .to_string()
    }
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}
