//! Platforms command implementation

use brewkit_core::Platform;

/// Print the supported platform table.
pub fn run() {
    println!("{:<8} {:<12} {:<12}", "code", "icon", "artifact");
    for &platform in Platform::all() {
        println!(
            "{:<8} {:<12} {:<12}",
            platform.as_str(),
            format!(".{}", platform.icon_extension()),
            format!(".{}", platform.binary_extension()),
        );
    }
}
