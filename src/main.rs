fn main() -> anyhow::Result<()> {
    adcrawl::cli::run()
}
