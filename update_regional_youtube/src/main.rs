use slug_updater::{session, Config};

#[tokio::main]
async fn main() {
    slug_updater::logging::init();

    let args = match update_regional_youtube::parse_from(std::env::args_os()) {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            eprint!("{}", update_regional_youtube::usage_report(&e));
            std::process::exit(1);
        }
        Err(e) => {
            print!("{}", update_regional_youtube::usage_report(&e));
            std::process::exit(1);
        }
    };

    tracing::debug!(?args, "parsed arguments");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => exit_with_error(e),
    };

    println!("Processing language: {}", args.language);
    println!("Processing slug: {}", args.slug);
    println!("New YouTube link: {}", args.youtube_link);

    if let Err(e) = session::run(&config, &args.request()).await {
        exit_with_error(e);
    }
}

fn exit_with_error(e: slug_updater::Error) -> ! {
    eprintln!("\x1b[38;5;1mERROR:\x1b[0m {}", e);
    std::process::exit(1);
}
