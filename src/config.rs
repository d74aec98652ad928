use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_REQUIREMENT_PATH: &str = "resources/sample_requirement.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "generated_medicare_claim.xml";
pub const CUSTOM_OUTPUT_PATH: &str = "custom_medicare_claim.xml";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub requirement_path: PathBuf,
    pub output_path: PathBuf,
    /// Seed for transaction, batch and claim numbers. `None` draws fresh values per claim.
    pub claim_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let server_host = env::var("SERVER_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let server_port = match env::var("SERVER_PORT") {
            Ok(port) => port
                .parse()
                .map_err(|e| format!("Invalid SERVER_PORT: {}", e))?,
            Err(_) => DEFAULT_PORT,
        };

        let requirement_path = env::var("REQUIREMENT_PATH")
            .unwrap_or_else(|_| DEFAULT_REQUIREMENT_PATH.to_string())
            .into();

        let output_path = env::var("OUTPUT_PATH")
            .unwrap_or_else(|_| DEFAULT_OUTPUT_PATH.to_string())
            .into();

        let claim_seed = match env::var("CLAIM_SEED") {
            Ok(seed) => Some(
                seed.parse()
                    .map_err(|e| format!("Invalid CLAIM_SEED: {}", e))?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            server_host,
            server_port,
            requirement_path,
            output_path,
            claim_seed,
        })
    }

    /// Applies the port given as the first command-line argument.
    /// Anything that is not a valid port leaves the configured one in place.
    pub fn with_port_arg(mut self, arg: Option<String>) -> Self {
        if let Some(port) = arg.and_then(|a| a.trim().parse::<u16>().ok()) {
            self.server_port = port;
        }
        self
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_host: "0.0.0.0".to_string(),
            server_port: DEFAULT_PORT,
            requirement_path: DEFAULT_REQUIREMENT_PATH.into(),
            output_path: DEFAULT_OUTPUT_PATH.into(),
            claim_seed: None,
        }
    }
}
