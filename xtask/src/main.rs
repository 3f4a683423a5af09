//! Developer tasks for the thinlens workspace (`cargo xtask coverage`, `cargo xtask ci`, ...)
fn main() -> Result<(), anyhow::Error> {
    xtaskops::tasks::main()
}
