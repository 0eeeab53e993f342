use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyEventKind;
use crossterm::event::MouseEventKind;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Event;

/// Merges terminal input, loop-bound messages and timer ticks into one queue.
///
/// The terminal stream is attached with `resume` and dropped with `pause`, so
/// that a child process owning the terminal receives every keystroke.
pub struct EventsService {
    crossterm_events: Option<EventStream>,
    events: mpsc::UnboundedReceiver<Event>,
    tick_rate: time::Duration,
}

impl EventsService {
    /// Starts without terminal input; `resume` attaches it.
    pub fn new(events: mpsc::UnboundedReceiver<Event>, tick_rate: time::Duration) -> EventsService {
        return EventsService {
            crossterm_events: None,
            events,
            tick_rate,
        };
    }

    pub fn pause(&mut self) {
        self.crossterm_events = None;
    }

    pub fn resume(&mut self, stream: EventStream) {
        self.crossterm_events = Some(stream);
    }

    pub fn is_reading_terminal(&self) -> bool {
        return self.crossterm_events.is_some();
    }

    fn handle_crossterm(event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Paste(text) => {
                return Some(Event::KeyboardPaste(text));
            }
            CrosstermEvent::Resize(width, height) => {
                return Some(Event::UIResize(width, height));
            }
            CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
                MouseEventKind::ScrollUp => {
                    return Some(Event::KeyboardInput(Input {
                        key: Key::MouseScrollUp,
                        ..Default::default()
                    }));
                }
                MouseEventKind::ScrollDown => {
                    return Some(Event::KeyboardInput(Input {
                        key: Key::MouseScrollDown,
                        ..Default::default()
                    }));
                }
                _ => {
                    return None;
                }
            },
            CrosstermEvent::Key(keyevent) => {
                if keyevent.kind == KeyEventKind::Release {
                    return None;
                }

                let key = match keyevent.code {
                    crossterm::event::KeyCode::Char(c) => Key::Char(c),
                    crossterm::event::KeyCode::Enter => Key::Enter,
                    crossterm::event::KeyCode::Left => Key::Left,
                    crossterm::event::KeyCode::Right => Key::Right,
                    crossterm::event::KeyCode::Up => Key::Up,
                    crossterm::event::KeyCode::Down => Key::Down,
                    crossterm::event::KeyCode::Home => Key::Home,
                    crossterm::event::KeyCode::End => Key::End,
                    crossterm::event::KeyCode::PageUp => Key::PageUp,
                    crossterm::event::KeyCode::PageDown => Key::PageDown,
                    crossterm::event::KeyCode::Tab => Key::Tab,
                    crossterm::event::KeyCode::Delete => Key::Delete,
                    crossterm::event::KeyCode::F(n) => Key::F(n),
                    crossterm::event::KeyCode::Backspace => Key::Backspace,
                    crossterm::event::KeyCode::Esc => Key::Esc,
                    _ => return None,
                };

                return Some(Event::KeyboardInput(Input {
                    key,
                    ctrl: keyevent
                        .modifiers
                        .contains(crossterm::event::KeyModifiers::CONTROL),
                    alt: keyevent
                        .modifiers
                        .contains(crossterm::event::KeyModifiers::ALT),
                    shift: keyevent
                        .modifiers
                        .contains(crossterm::event::KeyModifiers::SHIFT),
                }));
            }
            _ => return None,
        }
    }

    /// Waits for the next message. Loop-bound messages are drained in the
    /// order they were sent.
    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let tick_rate = self.tick_rate;
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = next_crossterm(&mut self.crossterm_events) => event,
                _ = time::sleep(tick_rate) => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}

async fn next_crossterm(crossterm_events: &mut Option<EventStream>) -> Option<Event> {
    let stream = match crossterm_events.as_mut() {
        Some(stream) => stream,
        None => return std::future::pending().await,
    };

    return match stream.next().await {
        Some(Ok(input)) => EventsService::handle_crossterm(input),
        Some(Err(err)) => {
            tracing::warn!(error = ?err, "failed to read terminal event");
            None
        }
        None => None,
    };
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use crossterm::event::KeyEvent;
    use crossterm::event::KeyModifiers;

    use super::*;

    fn service() -> (mpsc::UnboundedSender<Event>, EventsService) {
        let (tx, rx) = mpsc::unbounded_channel();
        let service = EventsService::new(rx, time::Duration::from_millis(10));
        return (tx, service);
    }

    #[tokio::test]
    async fn it_delivers_channel_events_in_order() {
        let (tx, mut service) = service();
        tx.send(Event::UIResize(80, 24)).unwrap();
        tx.send(Event::KeyboardPaste("x".to_string())).unwrap();

        assert!(matches!(service.next().await.unwrap(), Event::UIResize(80, 24)));
        assert!(matches!(service.next().await.unwrap(), Event::KeyboardPaste(_)));
    }

    #[tokio::test]
    async fn it_ticks_when_idle() {
        let (_tx, mut service) = service();
        assert!(!service.is_reading_terminal());
        assert!(matches!(service.next().await.unwrap(), Event::UITick));
    }

    #[test]
    fn it_maps_control_keys() {
        let event = EventsService::handle_crossterm(CrosstermEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));

        match event {
            Some(Event::KeyboardInput(input)) => {
                assert_eq!(input.key, Key::Char('c'));
                assert!(input.ctrl);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
}
