use std::path::{Path, PathBuf};

use configparser::ini::Ini;

pub struct ProgramConfig {
    pub point_count: u64,
    pub message: String,
    config: Ini,
    path: PathBuf,
}

impl ProgramConfig {
    pub fn from_file(path: &Path) -> Self {
        let mut config = Ini::new();
        if path.exists() {
            config.load(path).unwrap();
            ProgramConfig {
                point_count: config.getuint("Sample", "Points").unwrap().unwrap_or(9),
                message: config
                    .get("Sample", "Message")
                    .unwrap_or_else(|| String::from("hello")),
                config,
                path: PathBuf::from(path),
            }
        } else {
            ProgramConfig {
                point_count: 9,
                message: String::from("hello"),
                config,
                path: PathBuf::from(path),
            }
        }
    }

    pub fn write_to_disk(&mut self) {
        self.config
            .set("Sample", "Points", Some(self.point_count.to_string()));
        self.config
            .set("Sample", "Message", Some(self.message.clone()));
        self.config.write(&self.path).unwrap();
    }
}
