use anyhow::Result;
use widget_embed_core::TIMEZONES;

pub(crate) fn run() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(TIMEZONES)?);
    Ok(())
}
