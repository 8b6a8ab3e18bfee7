use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use futures::future;
use ratatui::backend::TestBackend;
use ratatui::prelude::*;

use super::{Event, Frame, TuiLike};

/// Terminal lifecycle calls seen by a [`TestTui`], in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Entered,
    Exited,
    Suspended,
    Resumed,
}

/// In-memory terminal for driving the app from tests.
///
/// Events are scripted up front and handed out in order; once the script is
/// drained `next()` yields `None`, which the app treats as the terminal
/// closing. Raw mode and the alternate screen are never touched.
pub struct TestTui {
    term: Terminal<TestBackend>,
    script: VecDeque<Event>,
    draws: usize,
    lifecycle: Vec<Lifecycle>,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        Ok(Self {
            term: Terminal::new(TestBackend::new(width, height))?,
            script: VecDeque::new(),
            draws: 0,
            lifecycle: Vec::new(),
        })
    }

    pub fn with_events(
        width: u16,
        height: u16,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Self> {
        let mut tui = Self::new(width, height)?;
        tui.script.extend(events);
        Ok(tui)
    }

    pub fn enqueue_event(&mut self, event: Event) {
        self.script.push_back(event);
    }

    /// Queue one unmodified key press per character.
    pub fn type_text(&mut self, text: &str) {
        self.script.extend(
            text.chars()
                .map(|c| Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))),
        );
    }

    pub fn draw_count(&self) -> usize {
        self.draws
    }

    pub fn lifecycle(&self) -> &[Lifecycle] {
        &self.lifecycle
    }

    /// Last rendered frame, one string per row.
    pub fn screen(&self) -> Vec<String> {
        let buffer = self.term.backend().buffer();
        let width = usize::from(buffer.area.width).max(1);
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }
}

impl TuiLike for TestTui {
    fn enter(&mut self) -> Result<()> {
        self.lifecycle.push(Lifecycle::Entered);
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.lifecycle.push(Lifecycle::Exited);
        Ok(())
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.term.draw(|frame| f(frame))?;
        self.draws += 1;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.term.backend_mut().resize(area.width, area.height);
        Ok(())
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        Box::pin(future::ready(self.script.pop_front()))
    }

    fn suspend(&mut self) -> Result<()> {
        self.lifecycle.push(Lifecycle::Suspended);
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        self.lifecycle.push(Lifecycle::Resumed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_script_drains_in_order() -> Result<()> {
        let mut tui = TestTui::with_events(10, 2, [Event::Init])?;
        tui.type_text("ok");
        assert!(matches!(tui.next().await, Some(Event::Init)));
        assert!(matches!(
            tui.next().await,
            Some(Event::Key(KeyEvent { code: KeyCode::Char('o'), .. }))
        ));
        assert!(matches!(
            tui.next().await,
            Some(Event::Key(KeyEvent { code: KeyCode::Char('k'), .. }))
        ));
        assert!(tui.next().await.is_none());
        Ok(())
    }

    #[test]
    fn test_draw_counts_and_captures_screen() -> Result<()> {
        let mut tui = TestTui::new(5, 1)?;
        tui.draw(&mut |f| {
            f.render_widget(Line::from("neon"), f.area());
        })?;
        assert_eq!(tui.draw_count(), 1);
        assert_eq!(tui.screen(), vec!["neon ".to_string()]);
        Ok(())
    }

    #[test]
    fn test_records_lifecycle() -> Result<()> {
        let mut tui = TestTui::new(1, 1)?;
        tui.enter()?;
        tui.suspend()?;
        tui.resume()?;
        tui.exit()?;
        assert_eq!(
            tui.lifecycle(),
            &[
                Lifecycle::Entered,
                Lifecycle::Suspended,
                Lifecycle::Resumed,
                Lifecycle::Exited
            ]
        );
        Ok(())
    }
}
