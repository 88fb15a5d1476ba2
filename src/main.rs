use std::env;
use std::io;

use shoes_and_staff::run;

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut stdout = io::stdout().lock();

    if let Err(e) = run(args.get(1).map(String::as_str), &mut stdout) {
        eprintln!("❌ {}", e);
        eprintln!("   Usage: shoes-and-staff [text|json]");
        std::process::exit(1);
    }
}
