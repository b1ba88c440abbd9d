use indicatif::{ProgressBar, ProgressStyle};

/// A bar over `len` items. Returns a hidden bar when `enabled` is false so
/// callers can tick it unconditionally.
pub fn progress_bar(len: u64, msg: String, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("[{elapsed_precise} / {eta_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
    {
        bar.set_style(style.progress_chars("##-"));
    }
    bar.set_message(msg);

    bar
}
