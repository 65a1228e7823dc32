use dotenv::dotenv;
use std::env;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use toml::Value;

const CLIENT_ID_ENV: &str = "OFFICE_PRESENCE_CLIENT_ID";

struct AppMetadata {
    file: std::fs::File,
}

impl AppMetadata {
    pub fn new() -> io::Result<Self> {
        let out_dir = env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
        let dest_path = Path::new(&out_dir).join("app_metadata.rs");
        let file = File::create(&dest_path)?;
        Ok(Self { file })
    }

    pub fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        write!(
            self.file,
            "#[allow(unused)]\npub const APP_METADATA_{}: &str = {:?};\n",
            &key.to_uppercase(),
            value
        )
    }
}

fn main() -> io::Result<()> {
    // Load .env file if it exists
    let _ = dotenv();

    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed={}", CLIENT_ID_ENV);

    let cargo_toml = fs::read_to_string("Cargo.toml").expect("Failed to read Cargo.toml");
    let cargo_toml: Value = toml::from_str(&cargo_toml).expect("Failed to parse Cargo.toml");

    let mut app_metadata = AppMetadata::new()?;
    app_metadata.write("NAME", &env::var("CARGO_PKG_NAME").unwrap_or_default())?;
    app_metadata.write("VERSION", &env::var("CARGO_PKG_VERSION").unwrap_or_default())?;

    let mut client_id = None;
    if let Some(metadata) = cargo_toml.get("package").and_then(|pkg| pkg.get("metadata")).and_then(|meta| meta.as_table()) {
        for (key, value) in metadata {
            if let Some(value) = value.as_str() {
                if key == "client_id" {
                    client_id = Some(value.to_string());
                } else {
                    app_metadata.write(key, value)?;
                }
            }
        }
    }

    // An explicit environment value wins over the one in Cargo.toml
    let client_id = match env::var(CLIENT_ID_ENV) {
        Ok(id) if !id.trim().is_empty() => id.trim().to_string(),
        _ => client_id.unwrap_or_else(|| {
            println!("cargo:warning={} not set and no client_id in [package.metadata].", CLIENT_ID_ENV);
            String::new()
        }),
    };
    app_metadata.write("CLIENT_ID", &client_id)?;

    Ok(())
}
