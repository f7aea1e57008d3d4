use anyhow::Context;

use crate::core::RenderResult;

/// Join the tree text with the captured file contents, if any.
pub fn compose_output(result: &RenderResult) -> String {
    let mut output = result.tree_text.clone();

    if !result.contents.is_empty() {
        output.push('\n');
        for pair in &result.contents {
            output.push_str(&format!("\n# {}\n{}\n", pair.relative_path, pair.content));
        }
    }

    output
}

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> anyhow::Result<()>;
}

/// The platform clipboard.
///
/// On X11 and Wayland the copied text is served by this process, so it only
/// survives the exit if a clipboard manager takes it over.
pub struct SystemClipboard;

const COPIED_NOTICE: &str = if cfg!(all(unix, not(target_os = "macos"))) {
    "Directory structure has been copied to clipboard (kept after exit only if a clipboard manager is running)."
} else {
    "Directory structure has been copied to clipboard."
};

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> anyhow::Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
        clipboard
            .set_text(text)
            .context("failed to write to clipboard")
    }
}

/// Copy `text`, reporting the outcome without ever failing the caller.
pub fn copy_to_clipboard<C: Clipboard>(clipboard: &mut C, text: &str) -> bool {
    match clipboard.copy(text) {
        Ok(()) => {
            eprintln!("{COPIED_NOTICE}");
            true
        }
        Err(err) => {
            log::warn!("could not copy to clipboard: {err:#}");
            false
        }
    }
}
