fn main() {
    if let Err(e) = corpus_stats::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
