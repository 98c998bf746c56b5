use std::io;

use arboard::Clipboard;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use roleboard_tui::action::Action;
use roleboard_tui::app::{App, CheckState};
use roleboard_tui::config::Config;
use roleboard_tui::ui::draw;

fn main() -> io::Result<()> {
    let config = Config::default();
    let mut app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(());
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableBracketedPaste)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    let tick_rate = std::time::Duration::from_millis(app.config.tick_rate_ms);

    loop {
        app.tick();
        app.poll_check();

        terminal.draw(|frame| draw(frame, app))?;

        // Poll for events with timeout (60 FPS keeps the spinner smooth)
        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) => match keymap(key.code, key.modifiers, app) {
                    Some(Action::Quit) => return Ok(()),
                    Some(action) => app.dispatch(action),
                    None => {}
                },
                Event::Paste(text) => {
                    app.dispatch(Action::Paste(text));
                }
                _ => {}
            }
        }
    }
}

/// Map a key press to an action. Returns `None` for keys the page
/// ignores.
fn keymap(code: KeyCode, modifiers: KeyModifiers, app: &App) -> Option<Action> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('r') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Retry),
        KeyCode::Char('v') if modifiers.contains(KeyModifiers::CONTROL) => {
            // Ctrl+V for terminals without bracketed paste
            let text = Clipboard::new().and_then(|mut c| c.get_text()).ok()?;
            Some(Action::Paste(text))
        }
        KeyCode::Char(c) => Some(Action::Input(c)),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Enter => Some(Action::Show),
        KeyCode::Esc => {
            // Esc clears first; on an already-clear page it quits.
            if app.input.is_empty() && app.state == CheckState::Idle {
                Some(Action::Quit)
            } else {
                Some(Action::Clear)
            }
        }
        _ => None,
    }
}
