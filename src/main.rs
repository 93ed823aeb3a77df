use tracing::{error, info};

use gallery::web::WebServer;
use gallery::{Config, Database, GalleryStorage};

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();

    // `gallery hash-password <password>` prints a hash for `auth.password_hash`.
    if args.get(1).map(String::as_str) == Some("hash-password") {
        let Some(password) = args.get(2) else {
            eprintln!("Usage: gallery hash-password <password>");
            std::process::exit(2);
        };
        match gallery::hash_password(password) {
            Ok(hash) => println!("{hash}"),
            Err(e) => {
                eprintln!("Failed to hash password: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let config_path = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| "config.toml".to_string());

    // Load configuration
    let config = match Config::load_with_env(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {config_path}: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = gallery::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        gallery::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = config.validate() {
        error!("{e}");
        std::process::exit(1);
    }

    info!("Gallery starting");

    let db = match Database::open(&config.database.path).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to open database: {e}");
            std::process::exit(1);
        }
    };

    let storage = match GalleryStorage::new(
        &config.storage.files_dir,
        &config.storage.thumbnails_dir,
    ) {
        Ok(storage) => storage,
        Err(e) => {
            error!("Failed to prepare storage directories: {e}");
            std::process::exit(1);
        }
    };

    let server = match WebServer::new(&config, db, storage) {
        Ok(server) => server,
        Err(e) => {
            error!("Invalid server configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run().await {
        error!("Web server error: {e}");
        std::process::exit(1);
    }
}
