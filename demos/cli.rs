use std::env;

use ibge_pnadc::{Client, FetchRequest};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!(
            "Usage:\n  cargo run --example cli -- <year> <quarter> <directory> [--unzip]\n\nExample (2014 Q3, extracted):\n  cargo run --example cli -- 2014 3 ./data --unzip\n\nNotes:\n- This contacts ftp.ibge.gov.br anonymously.\n- The directory must already exist."
        );
        std::process::exit(2);
    }

    let year: i32 = match args[1].parse() {
        Ok(y) => y,
        Err(_) => {
            eprintln!("year must be an integer, got {}", args[1]);
            std::process::exit(2);
        }
    };
    let quarter: u8 = match args[2].parse() {
        Ok(q) => q,
        Err(_) => {
            eprintln!("quarter must be an integer, got {}", args[2]);
            std::process::exit(2);
        }
    };
    let unzip = args.get(4).map(|s| s == "--unzip").unwrap_or(false);

    let client = Client::default();
    let request = FetchRequest::new(year, quarter, &args[3]).unzip(unzip);

    match client.fetch_quarter(&request) {
        Ok(result) => {
            println!(
                "Downloaded {bytes} bytes to {dir}",
                bytes = result.bytes_written,
                dir = args[3]
            );
            println!("Microdata archive: {}", result.microdata.display());
        }
        Err(e) => {
            eprintln!("fetch failed: {e}");
            std::process::exit(1);
        }
    }
}
