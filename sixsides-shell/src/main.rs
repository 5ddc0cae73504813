//! sixsides-shell CLI binary
//!
//! Usage: sixsides-shell <path-to-trace.json>

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let trace_path = args.get(1).cloned().unwrap_or_else(|| {
        eprintln!("Usage: sixsides-shell <path-to-trace.json>");
        eprintln!("Example: sixsides-shell ./drag.json");
        std::process::exit(1);
    });

    match sixsides_shell::run(&trace_path) {
        Ok(summary) => match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
