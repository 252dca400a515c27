use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub storage_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            storage_path: env::var("LEARNHUB_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("learnhub_data.json")),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            storage_path: PathBuf::from("learnhub_test.json"),
        }
    }
}
