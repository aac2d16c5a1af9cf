fn main() -> anyhow::Result<()> {
  artistly_lib::run()
}
