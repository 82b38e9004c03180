const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn banner() -> String {
    format!(
        "Ramadan Calendar Converter v{}\n\
         A tool for converting Ramadan prayer times to calendar format\n\
         Copyright © 2023",
        CURRENT_VERSION
    )
}

pub fn run() {
    println!("{}", banner());
}
