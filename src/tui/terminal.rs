//! Terminal setup/restore helpers

/// Install a panic hook that restores the terminal first, so a panic
/// message lands on a usable screen instead of the alternate buffer.
pub fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        hook(info);
    }));
}
