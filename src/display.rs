use colored::*;

/// Returns the compact sqldict banner
pub fn get_compact_logo() -> String {
    let logo = r#"
  ____ ____ _       ___  _ ____ ___
  [__  |  | |       |  \ | |     |
  ___] |_\| |___    |__/ | |___  |
    "#;

    logo.to_string()
}

/// Returns a colored version of the compact logo
pub fn get_compact_colored_logo() -> ColoredString {
    get_compact_logo().bright_cyan()
}

/// Display version information with the banner
pub fn display_version() {
    println!("{}", get_compact_colored_logo());
    println!("sqldict version {}", env!("CARGO_PKG_VERSION"));
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!("Repository: {}", env!("CARGO_PKG_REPOSITORY"));
}

/// Display a welcome banner for the scan command
pub fn display_scan_welcome() {
    println!("{}", get_compact_colored_logo());
}
