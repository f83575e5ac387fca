//! Web 服务器主程序入口

use std::sync::Arc;

use transpage::core::TranslationOptions;
use transpage::env::EnvVar;
use transpage::translation::{GatewayConfig, HttpTranslationService};
use transpage::web::{AppState, WebConfig, WebServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // 配置来自环境变量，命令行参数可以覆盖监听地址
    let mut web_config = WebConfig::from_env()?;

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" | "-b" => {
                if i + 1 < args.len() {
                    web_config.bind_addr = args[i + 1].clone();
                    i += 2;
                } else {
                    eprintln!("Error: --bind requires an address");
                    std::process::exit(1);
                }
            }
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    web_config.port = args[i + 1].parse().unwrap_or_else(|_| {
                        eprintln!("Error: Invalid port number");
                        std::process::exit(1);
                    });
                    i += 2;
                } else {
                    eprintln!("Error: --port requires a port number");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("Error: Unknown argument: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
    }

    web_config.validate()?;

    // 翻译网关客户端整个进程只创建一次
    let gateway_config = GatewayConfig::from_env()?;
    let translator = Arc::new(HttpTranslationService::new(gateway_config)?);

    let state = Arc::new(AppState {
        translator,
        options: TranslationOptions::from_env(),
        request_timeout: web_config.request_timeout,
    });

    let server = WebServer::new(web_config, state);
    server.start().await?;

    Ok(())
}

fn init_tracing() {
    let log_level =
        transpage::env::core::LogLevel::get().unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();
}

fn print_help() {
    println!("Transpage Web Server");
    println!();
    println!("USAGE:");
    println!("    transpage-web [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -b, --bind <ADDRESS>     Bind address [default: 127.0.0.1]");
    println!("    -p, --port <PORT>        Port number [default: 3001]");
    println!("    -h, --help               Print help information");
    println!();
    println!("ENVIRONMENT:");
    println!("    TRANSPAGE_TRANSLATION_URL        Translation provider endpoint");
    println!("    TRANSPAGE_TRANSLATION_API_KEY    Provider API key (optional)");
    println!("    TRANSPAGE_EXCLUDED_TAGS          Tags never translated [default: script,style]");
    println!();
    println!("EXAMPLES:");
    println!("    transpage-web");
    println!("    transpage-web --bind 0.0.0.0 --port 3001");
}
