//! CSS 样式定义
//!
//! 颜色来自 `Theme`，在启动时生成为 CSS 变量。

use peluditos_core::Theme;

/// 由主题生成完整样式表
pub fn global_css(theme: &Theme) -> String {
    format!(
        ":root {{
    --primary: {primary};
    --surface: {surface};
    --card-border: {card_border};
    --text-muted: {text_muted};
    --text-strong: {text_strong};
    --placeholder-bg: {placeholder_bg};
    --placeholder-text: {placeholder_text};
    --whatsapp: {whatsapp};
    --whatsapp-hover: {whatsapp_hover};
    --neutral: {neutral};
    --neutral-hover: {neutral_hover};
}}
{BASE_CSS}",
        primary = theme.primary,
        surface = theme.surface,
        card_border = theme.card_border,
        text_muted = theme.text_muted,
        text_strong = theme.text_strong,
        placeholder_bg = theme.placeholder_bg,
        placeholder_text = theme.placeholder_text,
        whatsapp = theme.whatsapp,
        whatsapp_hover = theme.whatsapp_hover,
        neutral = theme.neutral_button,
        neutral_hover = theme.neutral_button_hover,
    )
}

const BASE_CSS: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

html, body {
    height: 100%;
    font-family: 'Inter', 'Segoe UI', sans-serif;
    background: var(--surface);
    color: var(--text-strong);
    overflow: hidden;
}

.multiline { white-space: pre-line; }

/* Splash */
.splash {
    height: 100vh;
    display: flex;
    flex-direction: column;
    background: var(--primary);
}

.splash-top {
    position: relative;
    flex: 1;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 32px;
}

.splash-title {
    color: white;
    font-size: 34px;
    font-weight: 800;
    text-align: center;
}

.splash-decorations {
    display: flex;
    justify-content: space-around;
    width: 100%;
}

.splash-bottom {
    flex: 1;
    margin: 0 20px;
    padding: 48px 24px 24px;
    background: var(--surface);
    border-radius: 30px 30px 0 0;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 16px;
    text-align: center;
}

.splash-welcome { font-size: 16px; font-weight: 700; color: #333; }
.splash-desc { max-width: 320px; color: var(--text-muted); }
.splash-footer { margin-top: auto; font-size: 10px; color: #999; }

.progress-indeterminate {
    position: relative;
    width: 80%;
    height: 8px;
    border-radius: 4px;
    background: var(--placeholder-bg);
    overflow: hidden;
}

.progress-indeterminate::after {
    content: "";
    position: absolute;
    top: 0;
    left: -30%;
    width: 30%;
    height: 100%;
    border-radius: 4px;
    background: var(--primary);
    animation: sweep 1.2s ease-in-out infinite;
}

@keyframes sweep {
    from { left: -30%; }
    to { left: 100%; }
}

/* Main */
.app-container {
    height: 100vh;
    display: flex;
    flex-direction: column;
}

.header {
    background: var(--primary);
    padding: 14px 20px;
}

.header h1 {
    color: white;
    font-size: 22px;
    font-weight: 800;
}

.content {
    flex: 1;
    min-height: 0;
    display: flex;
    flex-direction: column;
    margin: 12px;
}

.section-title {
    color: var(--primary);
    font-size: 18px;
    font-weight: 800;
    padding: 6px 10px 2px;
}

.catalog-scroll {
    flex: 1;
    overflow-y: auto;
    margin: 6px 10px;
    border-radius: 10px;
}

.catalog-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 24px;
    padding: 12px;
}

/* Card */
.card {
    background: white;
    border: 1px solid var(--card-border);
    border-radius: 12px;
    padding: 10px 10px 8px;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 6px;
    cursor: pointer;
}

.card:hover { box-shadow: 0 2px 10px rgba(0, 0, 0, 0.08); }

.image-placeholder {
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    background: var(--placeholder-bg);
    color: var(--placeholder-text);
    white-space: pre-line;
}

.card-band {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    background: var(--primary);
    color: white;
    border-radius: 8px;
    padding: 8px;
    font-weight: 700;
}

.card-name { font-size: 13px; white-space: pre-line; }
.card-species { font-size: 12px; }

/* Detail */
/* 仅作视觉遮罩，点击穿透到目录卡片 */
.detail-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.25);
    pointer-events: none;
}

.detail-panel {
    position: fixed;
    top: 24px;
    max-height: calc(100vh - 48px);
    overflow-y: auto;
    background: var(--surface);
    border: 1px solid var(--card-border);
    border-radius: 12px;
    box-shadow: 0 8px 30px rgba(0, 0, 0, 0.2);
}

.detail-titlebar {
    padding: 8px 14px;
    font-size: 13px;
    border-bottom: 1px solid var(--card-border);
    color: var(--text-muted);
}

.detail-image {
    display: flex;
    justify-content: center;
    padding: 14px 14px 8px;
}

.detail-info { padding: 6px 24px 12px; }

.detail-title {
    color: var(--primary);
    font-size: 20px;
    font-weight: 800;
    padding-top: 6px;
}

.detail-meta { font-size: 12px; color: var(--text-strong); padding-top: 4px; }

.detail-desc {
    color: var(--text-muted);
    text-align: left;
    padding: 10px 0 12px;
    max-width: 500px;
}

.detail-actions {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 8px;
    padding: 6px 0 12px;
}

.btn {
    font-family: inherit;
    font-size: 13px;
    padding: 8px 12px;
    border: none;
    border-radius: 6px;
    cursor: pointer;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 6px;
}

.btn-whatsapp { background: var(--whatsapp); color: white; font-weight: 700; }
.btn-whatsapp:hover { background: var(--whatsapp-hover); }
.btn-neutral { background: var(--neutral); color: var(--text-strong); }
.btn-neutral:hover { background: var(--neutral-hover); }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_variables_rendered() {
        let css = global_css(&Theme::default());
        assert!(css.contains("--primary: #F05A28;"));
        assert!(css.contains("--whatsapp: #25D366;"));
        assert!(css.contains(".catalog-grid"));
    }

    #[test]
    fn test_backdrop_lets_clicks_through() {
        let css = global_css(&Theme::default());
        let start = css.find(".detail-backdrop {").unwrap();
        let end = start + css[start..].find('}').unwrap();
        let rule = &css[start..end];
        assert!(rule.contains("pointer-events: none;"), "rule: {rule}");
    }

    #[test]
    fn test_panels_stack_above_backdrop() {
        let css = global_css(&Theme::default());
        let start = css.find(".detail-panel {").unwrap();
        let end = start + css[start..].find('}').unwrap();
        assert!(css[start..end].contains("position: fixed;"));
    }
}
