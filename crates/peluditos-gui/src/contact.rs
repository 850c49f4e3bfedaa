//! 外链交给系统浏览器

use anyhow::Context;
use log::{info, warn};
use peluditos_core::DetailModel;

/// 打开 WhatsApp 联系链接；失败只记录日志
pub fn open_contact(model: &DetailModel) {
    let link = model.contact_link();
    info!("Opening contact link for {}", model.record.name);

    if let Err(e) = open_in_system_browser(&link) {
        warn!("{e:#}");
    }
}

fn open_in_system_browser(url: &str) -> anyhow::Result<()> {
    webbrowser::open(url).with_context(|| format!("failed to open {url}"))
}
