use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Put the terminal into raw mode on the alternate screen.
///
/// Inputs:
/// - `mouse`: Whether to enable mouse capture as well.
///
/// # Errors
/// - Returns `Err` when raw mode or the escape sequences cannot be applied.
pub fn setup_terminal(mouse: bool) -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    if mouse {
        execute!(std::io::stdout(), EnableMouseCapture)?;
    }
    Ok(())
}

/// What: Undo [`setup_terminal`].
///
/// # Errors
/// - Returns `Err` when raw mode cannot be disabled or the screen cannot be restored.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}
