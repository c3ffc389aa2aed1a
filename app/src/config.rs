pub struct Config {
    pub endpoint_url: String,
    pub contract_address: String,
}

impl Config {
    pub fn from_env() -> Self {
        // The Infura project id stays in the environment so the access
        // credential is never baked into the binary.
        let project_id = std::env::var("INFURA_PROJECT_ID").unwrap_or_default();
        Self {
            endpoint_url: std::env::var("ENDPOINT_URL")
                .unwrap_or_else(|_| format!("https://rinkeby.infura.io/v3/{project_id}")),
            contract_address: std::env::var("CONTRACT_ADDRESS")
                .unwrap_or_else(|_| "0x7e8eAdDb06ae8CFffDcC102F8a415D7ADD7AD19d".into()),
        }
    }
}
