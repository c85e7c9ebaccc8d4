use signup_core::config::loader::{ConfigLoader, default_config_path};
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            println!("OK   signup doctor");
            match &rc.source {
                Some(path) => println!("path: {}", path.display()),
                None => println!(
                    "path: (none, built-in defaults; looked for {})",
                    default_config_path().display()
                ),
            }
            println!("profile: {}", rc.active_profile);
            println!("initial_techs: {}", rc.initial_techs);
            println!("preview: {}", rc.preview.as_str());
            println!("schema.avatar_required:  {}", rc.schema.avatar_required);
            println!("schema.avatar_max_bytes: {}", rc.schema.avatar_max_bytes);
            if !rc.schema.avatar_accept.is_empty() {
                println!("schema.avatar_accept:    {}", rc.schema.avatar_accept.join(", "));
            }
            println!("schema.password_min_len: {}", rc.schema.password_min_len);
            println!("schema.min_techs:        {}", rc.schema.min_techs);
            println!(
                "schema.knowledge:        {}..={}",
                rc.schema.knowledge_min, rc.schema.knowledge_max
            );
            println!("logging.level: {}", rc.logging.level);
            if let Some(file) = &rc.logging.file {
                println!("logging.file:  {}", file.display());
            }
        }
        Err(e) => {
            println!("FAIL signup doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
