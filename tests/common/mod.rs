#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the drawing-audit binary.
#[macro_export]
macro_rules! drawing_audit {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("drawing-audit"))
    };
}

/// Sheet naming rules: `<Project>-<Number>` with PRJ and 001..003.
pub const NAMING_RULES: &str = "\
Naming convention,,,-
,Project,Number
,PRJ,001
,,002
,,003
";

/// Register of three sheets; the file name is in column 2.
pub const REGISTER: &str = "\
Sheet No,Sheet Name,File Name,Rev,Rev Date,Suitability
001,Ground Floor Plan,PRJ-001.pdf,A,01.03.2025,S2
002,Sections,PRJ-002.pdf,B,13/MAR/2025,S2
003,Details,PRJ-003.pdf,A,20/03/2025,S3
";

/// Title blocks matching the register exactly.
pub const TITLE_BLOCKS: &str = "\
Sheet No,Sheet Name,File Name,Rev,Rev Date,Suitability
001,Ground Floor Plan,PRJ-001.pdf,A,01/03/2025,S2
002,Sections,PRJ-002.pdf,B,13.03.2025,S2
003,Details,PRJ-003.pdf,A,20/03/2025,S3
";

/// Config pointing at the fixture tables, relative to the fixture root.
pub const PROJECT_CONFIG: &str = r#"
version = "1"

[rules]
sheets = "rules.csv"

[register]
path = "register.csv"
file_column = 2

[title_block]
export = "title_blocks.csv"

[scanner]
root = "delivery"
extensions = ["pdf"]
"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// A compliant project: rules, register, title blocks and all three sheets delivered.
    pub fn project() -> Self {
        let fixture = Self::new();
        fixture.create_file("rules.csv", NAMING_RULES);
        fixture.create_file("register.csv", REGISTER);
        fixture.create_file("title_blocks.csv", TITLE_BLOCKS);
        fixture.deliver(&["PRJ-001.pdf", "PRJ-002.pdf", "PRJ-003.pdf"]);
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates empty files under `delivery/`.
    pub fn deliver(&self, names: &[&str]) {
        for name in names {
            self.create_file(&format!("delivery/{name}"), "");
        }
    }

    /// Removes a delivered file.
    pub fn withdraw(&self, name: &str) {
        fs::remove_file(self.dir.path().join("delivery").join(name))
            .expect("Failed to remove file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Creates a `.drawing-audit.toml` config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".drawing-audit.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
