/// Entry point for the Proc Inventory discovery data source.
///
/// Reads the marker directory from `PID_FILE_PATH`, answers one item request
/// and prints the value to stdout for the monitoring agent to collect.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the item key is unknown,
/// or the discovery call fails.
///
/// # Examples
///
/// ```bash
/// PID_FILE_PATH=/run/markers RUST_LOG=debug cargo run -- custom.proc.discovery
/// ```
fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let value = proc_inventory::run(std::env::args().skip(1))?;
    println!("{value}");
    Ok(())
}
