use crate::platform::PlatformKey;
use crate::{dist, platform};
use anyhow::Result;

pub fn run_tag(platform_override: Option<PlatformKey>) -> Result<()> {
    let platform = match platform_override {
        Some(key) => key,
        None => platform::detect()?,
    };
    println!("{}", dist::compatibility_tag(platform)?);
    Ok(())
}
